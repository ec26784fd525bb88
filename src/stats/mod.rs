//! Significance testing for correlation coefficients.
//!
//! The p-value chain runs leaf to root:
//!
//! - [`ln_gamma`]: log-gamma by a fixed six-term series
//! - [`beta_continued_fraction`]: modified Lentz evaluation
//! - [`incomplete_beta`]: regularized I_x(a, b) with the symmetry switch
//! - [`correlation_pvalues_into`]: two-sided p-values for Pearson r
//!
//! [`pearson_packed`] produces the coefficients in packed triangle order,
//! ready for the p-value chain and for [`crate::triangular`].
//!
//! # Examples
//!
//! ```
//! use corrnet::primitives::Matrix;
//! use corrnet::stats::{correlation_pvalues_vec, pearson_packed};
//!
//! let data = Matrix::from_vec(5, 2, vec![
//!     1.0, 2.0,
//!     2.0, 4.0,
//!     3.0, 5.0,
//!     4.0, 4.0,
//!     5.0, 5.0,
//! ]).expect("5x2 data");
//!
//! let r = pearson_packed(&data).expect("enough samples");
//! let p = correlation_pvalues_vec(&r, 5 - 2).expect("df > 0");
//! assert!(p[0] > 0.1 && p[0] < 0.15);
//! ```

mod beta_continued_fraction;
mod correlation;
mod gamma;
mod incomplete_beta;
mod pvalue;

pub use beta_continued_fraction::{beta_continued_fraction, EPSILON, FP_MIN, MAX_ITERATIONS};
pub use correlation::pearson_packed;
pub use gamma::ln_gamma;
pub use incomplete_beta::incomplete_beta;
pub use pvalue::{correlation_pvalue, correlation_pvalues_into, correlation_pvalues_vec};
