//! Per-node absolute strength from a packed triangle.

use tracing::{debug, warn};

use super::{is_missing, packed_len, TrianglePairs};
use crate::error::{CorrError, Result};

/// Accumulates, for each of the `n` columns, the sum of absolute values of
/// all off-diagonal entries in that column.
///
/// Pair `(i, j)` adds `|v_k|` to both `sums[i]` and `sums[j]`. Missing
/// entries contribute to neither. `sums` is accumulated into, not reset,
/// so callers start from zeros for a plain sum.
///
/// # Errors
///
/// - `InvalidDimension` if `n == 0`.
/// - `DimensionMismatch` if `packed.len() != n(n-1)/2` or
///   `sums.len() != n`.
///
/// `sums` is not written on error.
///
/// # Examples
///
/// ```
/// use corrnet::triangular::{sum_triangle_columns_abs_into, MISSING};
///
/// let mut sums = [0.0; 3];
/// sum_triangle_columns_abs_into(&[MISSING, 2.0, -3.0], 3, &mut sums).expect("n = 3");
/// assert_eq!(sums, [2.0, 3.0, 5.0]);
/// ```
pub fn sum_triangle_columns_abs_into(packed: &[f64], n: usize, sums: &mut [f64]) -> Result<()> {
    if n == 0 {
        warn!("column sums rejected: n = 0");
        return Err(CorrError::invalid_dimension("n", n, ">0"));
    }
    let expected = packed_len(n);
    if packed.len() != expected {
        warn!(n, expected, actual = packed.len(), "column sums rejected: packed length");
        return Err(CorrError::dimension_mismatch("packed length", expected, packed.len()));
    }
    if sums.len() != n {
        warn!(n, actual = sums.len(), "column sums rejected: output length");
        return Err(CorrError::dimension_mismatch("sums length", n, sums.len()));
    }

    debug!(n, "summing absolute column strengths");
    for (i, j, k) in TrianglePairs::new(n) {
        let v = packed[k];
        if !is_missing(v) {
            sums[i] += v.abs();
            sums[j] += v.abs();
        }
    }
    Ok(())
}

/// Allocating form of [`sum_triangle_columns_abs_into`], starting from zeros.
///
/// # Errors
///
/// Same conditions as [`sum_triangle_columns_abs_into`].
pub fn sum_triangle_columns_abs_vec(packed: &[f64], n: usize) -> Result<Vec<f64>> {
    let mut sums = vec![0.0; n];
    sum_triangle_columns_abs_into(packed, n, &mut sums)?;
    Ok(sums)
}
