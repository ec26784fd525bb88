//! Significance of Pearson correlation coefficients.

use tracing::{debug, warn};

use super::incomplete_beta::incomplete_beta;
use crate::error::{CorrError, Result};

/// Guard subtracted from `1 - r²` so that `|r| = 1` does not divide by zero.
const TINY: f64 = 1.0e-30;

/// P-value of a single correlation coefficient with `df` degrees of freedom.
///
/// With `t² = r²·df / (1 - r² - TINY)`:
///
/// ```text
/// p = I_{df/(df+t²)}(df/2, 1/2)          if t² > df
/// p = 1 - I_{t²/(t²+df)}(1/2, df/2)      otherwise
/// ```
///
/// A missing (NaN) coefficient yields a NaN p-value.
///
/// # Examples
/// ```
/// use corrnet::stats::correlation_pvalue;
/// assert!((correlation_pvalue(0.0, 10) - 1.0).abs() < 1e-12);
/// assert!(correlation_pvalue(0.999_999, 10) < 1e-10);
/// ```
#[must_use]
pub fn correlation_pvalue(r: f64, df: u32) -> f64 {
    let d = f64::from(df);
    let r2 = r * r;
    let x = (r2 * d) / ((1.0 - r2) - TINY);

    if x > d {
        incomplete_beta(0.5 * d, 0.5, d / (d + x))
    } else {
        1.0 - incomplete_beta(0.5, 0.5 * d, x / (x + d))
    }
}

/// Fills `out[i]` with the p-value of `r[i]` under `df` degrees of freedom.
///
/// Degrees of freedom are shared across the whole vector; for correlations
/// from `n` paired samples use `df = n - 2`.
///
/// # Errors
///
/// - `DimensionMismatch` if `out.len() != r.len()`.
/// - `InvalidDimension` if `df == 0`.
///
/// `out` is not written on error.
///
/// # Examples
/// ```
/// use corrnet::stats::correlation_pvalues_into;
///
/// let r = [0.0, 0.5, -0.9];
/// let mut p = [0.0; 3];
/// correlation_pvalues_into(&r, 8, &mut p).expect("lengths match");
/// assert!(p[0] > p[1] && p[1] > p[2]);
/// ```
pub fn correlation_pvalues_into(r: &[f64], df: u32, out: &mut [f64]) -> Result<()> {
    if out.len() != r.len() {
        warn!(expected = r.len(), actual = out.len(), "pvalue rejected: output length");
        return Err(CorrError::dimension_mismatch("pvalue output length", r.len(), out.len()));
    }
    if df == 0 {
        warn!("pvalue rejected: zero degrees of freedom");
        return Err(CorrError::invalid_dimension("degrees of freedom", df, ">0"));
    }

    debug!(len = r.len(), df, "computing correlation p-values");
    for (p, &ri) in out.iter_mut().zip(r) {
        *p = correlation_pvalue(ri, df);
    }
    Ok(())
}

/// Allocating form of [`correlation_pvalues_into`].
///
/// # Errors
///
/// Returns `InvalidDimension` if `df == 0`.
pub fn correlation_pvalues_vec(r: &[f64], df: u32) -> Result<Vec<f64>> {
    let mut out = vec![0.0; r.len()];
    correlation_pvalues_into(r, df, &mut out)?;
    Ok(out)
}

#[cfg(test)]
#[path = "pvalue_tests.rs"]
mod tests;
