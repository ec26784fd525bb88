//! Log-gamma evaluation.

/// Series coefficients for the `γ = 5`, `N = 6` Lanczos-style fit.
#[allow(clippy::excessive_precision)]
const COEFFICIENTS: [f64; 6] = [
    76.180_091_729_471_46,
    -86.505_320_329_416_77,
    24.014_098_240_830_91,
    -1.231_739_572_450_155,
    0.120_865_097_386_617_9e-2,
    -0.539_523_938_495_3e-5,
];

/// Leading term of the series.
#[allow(clippy::excessive_precision)]
const SERIES_BASE: f64 = 1.000_000_000_190_015;

/// √(2π).
#[allow(clippy::excessive_precision)]
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Returns ln Γ(x) for `x > 0`.
///
/// # Algorithm
/// Six-term rational series with a Stirling-style correction.
///
/// Reference: Press et al., *Numerical Recipes in C*, 2nd ed., §6.1
/// (`gammln`).
///
/// # Accuracy
/// Absolute error below 2 × 10⁻¹⁰ for `x ≥ 0.5`. Arguments `x ≤ 0` are
/// outside the supported domain and give meaningless results.
///
/// # Examples
/// ```
/// use corrnet::stats::ln_gamma;
/// // Γ(5) = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-9);
/// // Γ(1/2) = √π
/// assert!((ln_gamma(0.5) - std::f64::consts::PI.sqrt().ln()).abs() < 1e-9);
/// ```
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    let tmp = x + 5.5;
    let tmp = tmp - (x + 0.5) * tmp.ln();
    let mut ser = SERIES_BASE;
    let mut y = x;
    for c in COEFFICIENTS {
        y += 1.0;
        ser += c / y;
    }
    -tmp + (SQRT_2PI * ser / x).ln()
}
