//! Packed triangular storage for symmetric matrices.
//!
//! A symmetric `n × n` matrix carries its independent information in the
//! strict upper triangle. This module stores that triangle as a flat
//! vector of length `n(n-1)/2` and provides the addressing needed to move
//! between the two forms.
//!
//! # Ordering
//!
//! Pairs `(i, j)` with `i < j` are laid out row-major: `i` ascending,
//! then `j` ascending.
//!
//! ```text
//! n = 4
//!       j=1  j=2  j=3
//! i=0 [  0    1    2 ]
//! i=1 [       3    4 ]
//! i=2 [            5 ]
//! ```
//!
//! Every function here shares that ordering. The zero-based offset of
//! pair `(lo, hi)` is
//!
//! ```text
//! k(lo, hi) = lo·(n-1) - lo·(lo-1)/2 + hi - lo - 1
//!           = lo·(2n - lo - 1)/2 + hi - lo - 1
//! ```
//!
//! # Examples
//!
//! ```
//! use corrnet::triangular::{pack_triangle_into, sum_triangle_columns_abs_into};
//!
//! let m = [
//!     1.0, -0.5, 0.2,
//!     -0.5, 1.0, 0.9,
//!     0.2, 0.9, 1.0,
//! ];
//! let mut packed = [0.0; 3];
//! pack_triangle_into(&m, 3, &mut packed).expect("3x3 packs into 3 slots");
//!
//! let mut sums = [0.0; 3];
//! sum_triangle_columns_abs_into(&packed, 3, &mut sums).expect("n > 0");
//! assert!((sums[0] - 0.7).abs() < 1e-12);
//! ```

mod column_sums;
mod packing;
mod remap;

pub use column_sums::{sum_triangle_columns_abs_into, sum_triangle_columns_abs_vec};
pub use packing::{pack_triangle_into, unpack_triangle};
pub use remap::{remap_triangle_indices_into, remap_triangle_indices_vec};

/// Sentinel for a datum that is not available.
///
/// Any NaN is treated as missing by [`is_missing`]; this constant is the
/// canonical value written by producers in this crate.
pub const MISSING: f64 = f64::NAN;

/// Returns true if `x` is the missing-value marker.
#[inline]
#[must_use]
pub fn is_missing(x: f64) -> bool {
    x.is_nan()
}

/// Length of the packed vector for an `n × n` matrix: `n(n-1)/2`.
///
/// # Examples
///
/// ```
/// use corrnet::triangular::packed_len;
/// assert_eq!(packed_len(0), 0);
/// assert_eq!(packed_len(1), 0);
/// assert_eq!(packed_len(5), 10);
/// ```
#[inline]
#[must_use]
pub fn packed_len(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Zero-based packed offset of pair `(lo, hi)`, `lo < hi < n`.
///
/// # Panics
///
/// Debug builds assert `lo < hi < n`.
///
/// # Examples
///
/// ```
/// use corrnet::triangular::pair_offset;
/// assert_eq!(pair_offset(0, 1, 4), 0);
/// assert_eq!(pair_offset(1, 2, 4), 3);
/// assert_eq!(pair_offset(2, 3, 4), 5);
/// ```
#[inline]
#[must_use]
pub fn pair_offset(lo: usize, hi: usize, n: usize) -> usize {
    debug_assert!(lo < hi && hi < n, "pair ({lo}, {hi}) outside n={n}");
    lo * (2 * n - lo - 1) / 2 + hi - lo - 1
}

/// Inverse of [`pair_offset`]: the pair `(i, j)` stored at offset `k`.
///
/// Returns `None` if `k >= packed_len(n)`.
///
/// # Examples
///
/// ```
/// use corrnet::triangular::pair_at;
/// assert_eq!(pair_at(0, 4), Some((0, 1)));
/// assert_eq!(pair_at(3, 4), Some((1, 2)));
/// assert_eq!(pair_at(6, 4), None);
/// ```
#[must_use]
pub fn pair_at(k: usize, n: usize) -> Option<(usize, usize)> {
    if k >= packed_len(n) {
        return None;
    }
    let mut rest = k;
    for i in 0..n {
        let row_len = n - i - 1;
        if rest < row_len {
            return Some((i, i + 1 + rest));
        }
        rest -= row_len;
    }
    None
}

/// Iterator over `(i, j, k)` for every pair `i < j < n` in packing order,
/// where `k` is the packed offset.
///
/// # Examples
///
/// ```
/// use corrnet::triangular::TrianglePairs;
///
/// let pairs: Vec<_> = TrianglePairs::new(3).collect();
/// assert_eq!(pairs, vec![(0, 1, 0), (0, 2, 1), (1, 2, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct TrianglePairs {
    n: usize,
    i: usize,
    j: usize,
    k: usize,
}

impl TrianglePairs {
    /// Creates the iterator for an `n × n` matrix.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n, i: 0, j: 1, k: 0 }
    }
}

impl Iterator for TrianglePairs {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.n {
                return None;
            }
        }
        let item = (self.i, self.j, self.k);
        self.j += 1;
        self.k += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = packed_len(self.n).saturating_sub(self.k);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrianglePairs {}
