//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use corrnet::prelude::*;
//! ```

pub use crate::error::{CorrError, Result};
pub use crate::graph::{rank_by_strength, Edge, EdgeFilter, EdgeList};
pub use crate::primitives::Matrix;
pub use crate::stats::{
    correlation_pvalue, correlation_pvalues_into, correlation_pvalues_vec, incomplete_beta,
    ln_gamma, pearson_packed,
};
pub use crate::triangular::{
    is_missing, pack_triangle_into, packed_len, remap_triangle_indices_into,
    remap_triangle_indices_vec, sum_triangle_columns_abs_into, sum_triangle_columns_abs_vec,
    unpack_triangle, MISSING,
};
