//! Pearson correlation of every variable pair, in packed form.
//!
//! # Mathematical Background
//!
//! ```text
//! ρ(X, Y) = Σ (x_i - x̄)(y_i - ȳ) / √(Σ (x_i - x̄)² · Σ (y_i - ȳ)²)
//! ```

use tracing::{debug, warn};

use crate::error::{CorrError, Result};
use crate::primitives::Matrix;
use crate::triangular::{packed_len, TrianglePairs, MISSING};

/// Computes the Pearson correlation of every pair of columns of `data`
/// (samples × variables) and returns them packed in triangle order.
///
/// A pair involving a zero-variance column has no defined correlation and
/// is stored as [`MISSING`]. Missing samples in the input propagate to
/// every pair touching that column.
///
/// # Errors
///
/// Returns `InvalidDimension` if there are fewer than 2 samples or fewer
/// than 2 variables.
///
/// # Examples
///
/// ```
/// use corrnet::primitives::Matrix;
/// use corrnet::stats::pearson_packed;
///
/// let data = Matrix::from_vec(4, 3, vec![
///     1.0, 2.0, 4.0,
///     2.0, 4.0, 3.0,
///     3.0, 6.0, 2.0,
///     4.0, 8.0, 1.0,
/// ]).expect("4x3 data");
///
/// let r = pearson_packed(&data).expect("enough samples");
/// assert!((r[0] - 1.0).abs() < 1e-12);  // (0, 1)
/// assert!((r[1] + 1.0).abs() < 1e-12);  // (0, 2)
/// ```
pub fn pearson_packed(data: &Matrix<f64>) -> Result<Vec<f64>> {
    let (samples, vars) = data.shape();
    if samples < 2 {
        warn!(samples, "correlation rejected: too few samples");
        return Err(CorrError::invalid_dimension("samples", samples, ">=2"));
    }
    if vars < 2 {
        warn!(vars, "correlation rejected: too few variables");
        return Err(CorrError::invalid_dimension("variables", vars, ">=2"));
    }

    debug!(samples, vars, "computing packed pearson correlations");

    // Center each column once; keep its sum of squares.
    let centered: Vec<(Vec<f64>, f64)> = (0..vars)
        .map(|j| {
            let col = data.column(j);
            let mean = col.iter().sum::<f64>() / samples as f64;
            let dev: Vec<f64> = col.iter().map(|&v| v - mean).collect();
            let ss = dev.iter().map(|d| d * d).sum::<f64>();
            (dev, ss)
        })
        .collect();

    let mut out = vec![0.0; packed_len(vars)];
    for (i, j, k) in TrianglePairs::new(vars) {
        let (xi, ssi) = &centered[i];
        let (xj, ssj) = &centered[j];
        let denom = (ssi * ssj).sqrt();
        #[allow(clippy::float_cmp)]
        let undefined = denom == 0.0;
        out[k] = if undefined {
            MISSING
        } else {
            let cross: f64 = xi.iter().zip(xj).map(|(a, b)| a * b).sum();
            (cross / denom).clamp(-1.0, 1.0)
        };
    }
    Ok(out)
}
