//! Validated conformance probability.

use super::error::{LabError, Result};
use crate::math::norm_inv_cdf;

/// Target probability that a sampled value lands inside its two-sided range.
///
/// Holds a probability strictly inside (0, 1) together with the matching
/// two-sided z-score `z_top = Φ⁻¹((1 + p) / 2)`, so a standard normal variate
/// falls in `[-z_top, z_top]` with probability `p`.
///
/// # Examples
///
/// ```rust
/// use fakelab_core::types::ConformanceProbability;
///
/// let p = ConformanceProbability::new(0.95).unwrap();
/// assert!((p.z_top() - 1.959964).abs() < 1e-6);
///
/// assert!(ConformanceProbability::new(1.0).is_err());
/// assert!(ConformanceProbability::new(0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConformanceProbability {
    value: f64,
    z_top: f64,
}

impl ConformanceProbability {
    /// Validates `probability` and precomputes its two-sided z-score.
    ///
    /// # Errors
    ///
    /// Returns `LabError::InvalidProbability` unless `0 < probability < 1`.
    /// NaN is rejected.
    pub fn new(probability: f64) -> Result<Self> {
        if !(probability > 0.0 && probability < 1.0) {
            return Err(LabError::InvalidProbability { probability });
        }
        Ok(Self {
            value: probability,
            z_top: z_top(probability),
        })
    }

    /// Returns the raw probability.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `Φ⁻¹((1 + p) / 2)`.
    #[inline]
    pub fn z_top(&self) -> f64 {
        self.z_top
    }
}

/// Below this, `(1 + p) / 2` loses the digits of `p`.
const SMALL_PROBABILITY: f64 = 1e-8;

/// `Φ⁻¹((1 + p) / 2)`, using the first-order expansion `p·√(π/2)` for tiny `p`.
fn z_top(probability: f64) -> f64 {
    if probability < SMALL_PROBABILITY {
        probability * std::f64::consts::FRAC_PI_2.sqrt()
    } else {
        norm_inv_cdf((1.0 + probability) / 2.0)
    }
}

impl TryFrom<f64> for ConformanceProbability {
    type Error = LabError;

    fn try_from(probability: f64) -> Result<Self> {
        Self::new(probability)
    }
}
