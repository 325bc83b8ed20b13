//! Normal-distribution functions, delegating to `statrs` for the error
//! function.

use dfd_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::{PI, SQRT_2};

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// `Φ(x) = erfc(-x/√2) / 2`
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x / SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_at_zero() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.0, 1.96, 3.0] {
            let s = normal_cdf(x) + normal_cdf(-x);
            assert!((s - 1.0).abs() < 1e-12, "x = {x}, sum = {s}");
        }
    }

    #[test]
    fn cdf_reference_values() {
        use approx::assert_abs_diff_eq;
        // N(1.96) ≈ 0.9750021, N(-1.0) ≈ 0.1586553
        assert_abs_diff_eq!(normal_cdf(1.96), 0.975_002_1, epsilon = 1e-6);
        assert_abs_diff_eq!(normal_cdf(-1.0), 0.158_655_3, epsilon = 1e-6);
    }

    #[test]
    fn pdf_reference_values() {
        // φ(0) = 1/√(2π) ≈ 0.3989423
        assert!((normal_pdf(0.0) - 0.398_942_3).abs() < 1e-6);
        assert!((normal_pdf(1.0) - 0.241_970_7).abs() < 1e-6);
    }
}
