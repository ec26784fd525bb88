//! Edge selection thresholds.

use serde::{Deserialize, Serialize};

use crate::error::{CorrError, Result};

/// Thresholds deciding which correlations become network edges.
///
/// An edge is kept when `|r| >= min_abs_correlation` and
/// `p <= max_pvalue`.
///
/// # Examples
///
/// ```
/// use corrnet::graph::EdgeFilter;
///
/// let filter = EdgeFilter::new()
///     .with_max_pvalue(0.01)
///     .with_min_abs_correlation(0.6);
/// assert!(filter.validate().is_ok());
/// assert!(filter.accepts(0.7, 0.001));
/// assert!(!filter.accepts(0.5, 0.001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeFilter {
    /// Largest p-value an edge may have (inclusive)
    pub max_pvalue: f64,
    /// Smallest absolute correlation an edge may have (inclusive)
    pub min_abs_correlation: f64,
}

impl Default for EdgeFilter {
    fn default() -> Self {
        Self {
            max_pvalue: 0.05,
            min_abs_correlation: 0.0,
        }
    }
}

impl EdgeFilter {
    /// Create a filter with defaults (p ≤ 0.05, any |r|).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the p-value cutoff.
    #[must_use]
    pub fn with_max_pvalue(mut self, max_pvalue: f64) -> Self {
        self.max_pvalue = max_pvalue;
        self
    }

    /// Set the absolute correlation cutoff.
    #[must_use]
    pub fn with_min_abs_correlation(mut self, tau: f64) -> Self {
        self.min_abs_correlation = tau;
        self
    }

    /// Check both cutoffs lie in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.max_pvalue) {
            return Err(CorrError::invalid_config(
                "max_pvalue",
                self.max_pvalue,
                "in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_abs_correlation) {
            return Err(CorrError::invalid_config(
                "min_abs_correlation",
                self.min_abs_correlation,
                "in [0, 1]",
            ));
        }
        Ok(())
    }

    /// True if a correlation `r` with p-value `p` passes both cutoffs.
    /// Missing values never pass.
    #[must_use]
    pub fn accepts(&self, r: f64, p: f64) -> bool {
        r.abs() >= self.min_abs_correlation && p <= self.max_pvalue
    }
}
