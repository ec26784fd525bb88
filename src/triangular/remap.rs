//! Selecting a sub-triangle out of an existing packed triangle.

use tracing::{debug, warn};

use super::packed_len;
use crate::error::{CorrError, Result};

/// For every pair of positions `p < q` in `subset`, writes the ONE-BASED
/// offset of pair `(subset[p], subset[q])` within the packed triangle of
/// the original `n × n` matrix.
///
/// `subset` holds one-based row/column indices into the original matrix,
/// in any order. With `a = subset[p] - 1`, `b = subset[q] - 1`,
/// `lo = min(a, b)` and `hi = max(a, b)`, the value written is
///
/// ```text
/// lo·(n-1) - lo·(lo-1)/2 + hi - lo
/// ```
///
/// which is one more than [`super::pair_offset`]. Output slots follow the
/// subset's own packing order (`p` ascending, then `q`).
///
/// # Errors
///
/// - `DimensionMismatch` if `out.len() != L(L-1)/2` for `L = subset.len()`.
/// - `InvalidDimension` if any index lies outside `[1, n]`.
/// - `InvalidDimension` if an index repeats. This check goes beyond the
///   length and range preconditions: a repeated index names a diagonal
///   cell, which has no packed slot, so no offset could be meaningful.
///
/// `out` is not written on error.
///
/// # Examples
///
/// ```
/// use corrnet::triangular::remap_triangle_indices_into;
///
/// // Rows 4 and 2 of a 4x4 matrix: pair (1, 3) sits at one-based slot 5.
/// let mut out = [0usize; 1];
/// remap_triangle_indices_into(&[4, 2], 4, &mut out).expect("valid subset");
/// assert_eq!(out, [5]);
/// ```
pub fn remap_triangle_indices_into(subset: &[usize], n: usize, out: &mut [usize]) -> Result<()> {
    let len = subset.len();
    let expected = packed_len(len);
    if out.len() != expected {
        warn!(subset_len = len, expected, actual = out.len(), "remap rejected: output length");
        return Err(CorrError::dimension_mismatch("remap output length", expected, out.len()));
    }
    validate_subset(subset, n)?;

    debug!(subset_len = len, n, "remapping sub-triangle offsets");
    let mut k = 0;
    for p in 0..len.saturating_sub(1) {
        for q in (p + 1)..len {
            let a = subset[p] - 1;
            let b = subset[q] - 1;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            out[k] = lo * (2 * n - lo - 1) / 2 + hi - lo;
            k += 1;
        }
    }
    Ok(())
}

/// Allocating form of [`remap_triangle_indices_into`].
///
/// # Errors
///
/// Same conditions as [`remap_triangle_indices_into`].
pub fn remap_triangle_indices_vec(subset: &[usize], n: usize) -> Result<Vec<usize>> {
    let mut out = vec![0; packed_len(subset.len())];
    remap_triangle_indices_into(subset, n, &mut out)?;
    Ok(out)
}

fn validate_subset(subset: &[usize], n: usize) -> Result<()> {
    let mut seen = vec![false; n];
    for &idx in subset {
        if idx == 0 || idx > n {
            warn!(index = idx, n, "remap rejected: index out of range");
            return Err(CorrError::invalid_dimension(
                "subset index",
                idx,
                &format!("in [1, {n}]"),
            ));
        }
        if seen[idx - 1] {
            warn!(index = idx, "remap rejected: repeated index");
            return Err(CorrError::invalid_dimension("subset index", idx, "unique"));
        }
        seen[idx - 1] = true;
    }
    Ok(())
}
