//! Conversion between dense symmetric matrices and packed triangles.

use tracing::{debug, warn};

use super::{packed_len, TrianglePairs};
use crate::error::{CorrError, Result};
use crate::primitives::Matrix;

/// Copies the strict upper triangle of a row-major `n × n` matrix into
/// `out` in packing order.
///
/// Only entries with `row < col` are read. The source index of pair
/// `(i, j)` is `i·n + j`.
///
/// An empty matrix (`n == 0`) packs into an empty vector.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `matrix.len() != n²` or
/// `out.len() != n(n-1)/2`.
///
/// `out` is not written on error.
pub fn pack_triangle_into(matrix: &[f64], n: usize, out: &mut [f64]) -> Result<()> {
    if matrix.len() != n * n {
        warn!(n, matrix_len = matrix.len(), "pack rejected: matrix is not n x n");
        return Err(CorrError::dimension_mismatch("matrix length", n * n, matrix.len()));
    }
    let expected = packed_len(n);
    if out.len() != expected {
        warn!(n, expected, actual = out.len(), "pack rejected: output length");
        return Err(CorrError::dimension_mismatch("packed length", expected, out.len()));
    }

    debug!(n, packed = expected, "packing upper triangle");
    for (i, j, k) in TrianglePairs::new(n) {
        out[k] = matrix[i * n + j];
    }
    Ok(())
}

/// Rebuilds the symmetric `n × n` matrix described by a packed triangle.
///
/// Both `(i, j)` and `(j, i)` receive the packed value; the diagonal is
/// set to `diagonal` (1.0 for a correlation matrix). Missing entries are
/// copied through unchanged. `n == 0` yields an empty `0 × 0` matrix.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `packed.len() != n(n-1)/2`.
///
/// # Examples
///
/// ```
/// use corrnet::triangular::unpack_triangle;
///
/// let m = unpack_triangle(&[0.5, 0.2, 0.9], 3, 1.0).expect("valid packing");
/// assert_eq!(m.get(2, 1), 0.9);
/// assert_eq!(m.get(1, 2), 0.9);
/// assert_eq!(m.get(0, 0), 1.0);
/// ```
pub fn unpack_triangle(packed: &[f64], n: usize, diagonal: f64) -> Result<Matrix<f64>> {
    let expected = packed_len(n);
    if packed.len() != expected {
        warn!(n, expected, actual = packed.len(), "unpack rejected: packed length");
        return Err(CorrError::dimension_mismatch("packed length", expected, packed.len()));
    }

    let mut m = Matrix::filled(n, n, 0.0);
    for d in 0..n {
        m.set(d, d, diagonal);
    }
    for (i, j, k) in TrianglePairs::new(n) {
        m.set(i, j, packed[k]);
        m.set(j, i, packed[k]);
    }
    Ok(m)
}
