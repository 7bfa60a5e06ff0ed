//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_inv_cdf`: Inverse cumulative distribution function Φ⁻¹
//!
//! Both are generic over `T: Float` and work for `f32` and `f64`.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Acklam rational approximation, central region numerator.
const ACKLAM_A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];

/// Acklam rational approximation, central region denominator.
const ACKLAM_B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

/// Acklam rational approximation, tail numerator.
const ACKLAM_C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];

/// Acklam rational approximation, tail denominator.
const ACKLAM_D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Breakpoint between the central and tail regions.
const P_LOW: f64 = 0.024_25;

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which provides
/// maximum error of 1.5e-7 for all x.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = constant::<T>(0.254829592);
    let a2 = constant::<T>(-0.284496736);
    let a3 = constant::<T>(1.421413741);
    let a4 = constant::<T>(-1.453152027);
    let a5 = constant::<T>(1.061405429);
    let p = constant::<T>(0.3275911);

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        constant::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Accurate to at least 1e-7 for all finite x values.
///
/// # Examples
/// ```
/// use fakelab_core::math::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let arg = -x / constant::<T>(SQRT_2);
    constant::<T>(0.5) * erfc_approx(arg)
}

/// Standard normal inverse cumulative distribution function (quantile).
///
/// Returns z such that Φ(z) = p, using Acklam's rational approximation
/// (relative error below 1.15e-9 over the open unit interval).
///
/// # Edge Cases
/// - `p == 0` returns negative infinity, `p == 1` positive infinity
/// - `p` outside [0, 1] or NaN returns NaN
///
/// # Examples
/// ```
/// use fakelab_core::math::norm_inv_cdf;
///
/// assert!(norm_inv_cdf(0.5_f64).abs() < 1e-9);
/// assert!((norm_inv_cdf(0.975_f64) - 1.959963985).abs() < 1e-8);
/// ```
pub fn norm_inv_cdf<T: Float>(p: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if p.is_nan() || p < zero || p > one {
        return T::nan();
    }
    if p == zero {
        return T::neg_infinity();
    }
    if p == one {
        return T::infinity();
    }

    let p_low = constant::<T>(P_LOW);
    let p_high = one - p_low;
    let half = constant::<T>(0.5);
    let minus_two = constant::<T>(-2.0);

    let a = ACKLAM_A.map(constant::<T>);
    let b = ACKLAM_B.map(constant::<T>);
    let c = ACKLAM_C.map(constant::<T>);
    let d = ACKLAM_D.map(constant::<T>);

    let tail = |q: T| {
        (((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
            / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + one)
    };

    if p < p_low {
        let q = (minus_two * p.ln()).sqrt();
        tail(q)
    } else if p <= p_high {
        let q = p - half;
        let r = q * q;
        (((((a[0] * r + a[1]) * r + a[2]) * r + a[3]) * r + a[4]) * r + a[5]) * q
            / (((((b[0] * r + b[1]) * r + b[2]) * r + b[3]) * r + b[4]) * r + one)
    } else {
        let q = (minus_two * (one - p).ln()).sqrt();
        -tail(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for i in -100..=100 {
            let result = norm_cdf(i as f64 * 0.1);
            assert!((0.0..=1.0).contains(&result), "CDF out of [0, 1] at {}", i);
        }
    }

    // ==========================================================
    // norm_inv_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_inv_cdf_median() {
        assert_relative_eq!(norm_inv_cdf(0.5_f64), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_inv_cdf_reference_values() {
        // Two-sided 80%, 90%, 95%, 99% quantiles
        assert_relative_eq!(norm_inv_cdf(0.9_f64), 1.2815515655446004, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.95_f64), 1.6448536269514722, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.975_f64), 1.959963984540054, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.995_f64), 2.5758293035489004, epsilon = 1e-8);
    }

    #[test]
    fn test_norm_inv_cdf_tail_regions() {
        assert_relative_eq!(norm_inv_cdf(0.001_f64), -3.090232306167813, epsilon = 1e-7);
        assert_relative_eq!(norm_inv_cdf(0.999_f64), 3.090232306167813, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_inv_cdf_antisymmetry() {
        for p in [0.01, 0.1, 0.2, 0.3, 0.4, 0.45] {
            assert_relative_eq!(norm_inv_cdf(p), -norm_inv_cdf(1.0 - p), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_norm_inv_cdf_edges() {
        assert_eq!(norm_inv_cdf(0.0_f64), f64::NEG_INFINITY);
        assert_eq!(norm_inv_cdf(1.0_f64), f64::INFINITY);
        assert!(norm_inv_cdf(-0.1_f64).is_nan());
        assert!(norm_inv_cdf(1.1_f64).is_nan());
        assert!(norm_inv_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_norm_inv_cdf_monotonic() {
        let values: Vec<f64> = (1..1000).map(|i| norm_inv_cdf(i as f64 / 1000.0)).collect();
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0], "quantile not increasing: {:?}", pair);
        }
    }

    #[test]
    fn test_cdf_inverts_quantile() {
        // Limited by the 1.5e-7 error of the erfc approximation
        for i in 1..100 {
            let p = i as f64 / 100.0;
            assert_relative_eq!(norm_cdf(norm_inv_cdf(p)), p, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_inv_cdf_f32_compatibility() {
        assert!((norm_inv_cdf(0.975_f32) - 1.959964).abs() < 1e-4);
    }
}
