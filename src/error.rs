//! Error types for corrnet operations.
//!
//! Every failure in this crate is a precondition violation: a buffer whose
//! length does not match the size the operation requires, or a dimension
//! parameter outside its valid range. Checks run before any output is
//! written, so an `Err` always leaves caller buffers untouched.

use thiserror::Error;

/// Main error type for corrnet operations.
///
/// # Examples
///
/// ```
/// use corrnet::error::CorrError;
///
/// let err = CorrError::DimensionMismatch {
///     expected: "output length=3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrError {
    /// A buffer length does not match the length the operation requires.
    #[error("Buffer dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length description
        expected: String,
        /// Actual length found
        actual: String,
    },

    /// A dimension or scalar parameter is outside its valid range.
    #[error("Invalid dimension: {param} = {value}, expected {constraint}")]
    InvalidDimension {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A configuration value is outside its valid range.
    #[error("Invalid configuration: {field} = {value}, expected {constraint}")]
    InvalidConfig {
        /// Field name
        field: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl CorrError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid dimension error
    #[must_use]
    pub fn invalid_dimension(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidDimension {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(field: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CorrError>;
