//! Inverse-distribution sampling against a reference range.
//!
//! A standard normal draw `z` is mapped onto the range as
//!
//! ```text
//! value = mean + z * half_width / z_top
//! ```
//!
//! where `mean` is the midpoint, `half_width = |mean - high|` and
//! `z_top = Φ⁻¹((1 + p) / 2)`. Since `P(|z| < z_top) = p`, the value lands in
//! `[low, high]` with probability `p`. The mapping ignores the range kind: a
//! one-sided range checks only one tail and is normal with probability
//! `(1 + p) / 2` instead.

use fakelab_core::range::{RangeSpec, Sample};
use fakelab_core::types::{ConformanceProbability, Result};

use crate::rng::LabRng;

/// Samples values at a fixed conformance probability.
///
/// # Examples
///
/// ```rust
/// use fakelab_core::range::RangeSpec;
/// use fakelab_engine::sampler::Sampler;
///
/// let sampler = Sampler::new(0.9).unwrap();
/// let range = RangeSpec::two_sided(132.0, 146.0).unwrap();
///
/// let a = sampler.sample(&range, 42);
/// let b = sampler.sample(&range, 42);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sampler {
    probability: ConformanceProbability,
}

impl Sampler {
    /// Creates a sampler for `conformance_probability`.
    ///
    /// # Errors
    ///
    /// Returns `LabError::InvalidProbability` unless the probability lies
    /// strictly between 0 and 1.
    pub fn new(conformance_probability: f64) -> Result<Self> {
        Ok(Self::with_probability(ConformanceProbability::new(
            conformance_probability,
        )?))
    }

    /// Creates a sampler from an already validated probability.
    #[inline]
    pub fn with_probability(probability: ConformanceProbability) -> Self {
        Self { probability }
    }

    /// Returns the conformance probability.
    #[inline]
    pub fn probability(&self) -> ConformanceProbability {
        self.probability
    }

    /// Maps a standard normal variate onto `range`.
    #[inline]
    pub fn value_for(&self, range: &RangeSpec, z_sample: f64) -> f64 {
        let actual_deviation = z_sample * range.half_width() / self.probability.z_top();
        range.mean() + actual_deviation
    }

    /// Draws the raw value for `range` from `seed`.
    #[inline]
    pub fn draw(&self, range: &RangeSpec, seed: u64) -> f64 {
        let z_sample = LabRng::from_seed(seed).gen_normal();
        self.value_for(range, z_sample)
    }

    /// Draws one sample for `range` from `seed`.
    pub fn sample(&self, range: &RangeSpec, seed: u64) -> Sample {
        Sample::new(range.clone(), self.draw(range, seed))
    }
}

/// Draws one value for `range` at `conformance_probability` from `seed`.
///
/// # Errors
///
/// Returns `LabError::InvalidProbability` unless the probability lies
/// strictly between 0 and 1.
pub fn sample(range: &RangeSpec, conformance_probability: f64, seed: u64) -> Result<Sample> {
    Ok(Sampler::new(conformance_probability)?.sample(range, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fakelab_core::range::Classification;
    use fakelab_core::LabError;

    fn zero_to_hundred() -> RangeSpec {
        RangeSpec::two_sided(0.0, 100.0).unwrap()
    }

    #[test]
    fn test_invalid_probability() {
        for bad in [0.0, 1.0, -0.2, 1.2] {
            assert_eq!(
                sample(&zero_to_hundred(), bad, 1),
                Err(LabError::InvalidProbability { probability: bad })
            );
        }
    }

    #[test]
    fn test_value_for_maps_quantiles_onto_bounds() {
        let sampler = Sampler::new(0.8).unwrap();
        let range = zero_to_hundred();
        let z_top = sampler.probability().z_top();

        assert_relative_eq!(sampler.value_for(&range, 0.0), 50.0, epsilon = 1e-12);
        assert_relative_eq!(sampler.value_for(&range, z_top), 100.0, epsilon = 1e-9);
        assert_relative_eq!(sampler.value_for(&range, -z_top), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_is_deterministic_per_seed() {
        let sampler = Sampler::new(0.9).unwrap();
        let range = zero_to_hundred();
        assert_eq!(
            sampler.sample(&range, 7).value.to_bits(),
            sampler.sample(&range, 7).value.to_bits()
        );
        assert_ne!(sampler.sample(&range, 7).value, sampler.sample(&range, 8).value);
    }

    #[test]
    fn test_sample_keeps_its_range() {
        let range = RangeSpec::upper_bounded(100.0, 240.0).unwrap();
        let drawn = sample(&range, 0.9, 3).unwrap();
        assert_eq!(drawn.range, range);
    }

    #[test]
    fn test_two_sided_conformance_frequency() {
        let sampler = Sampler::new(0.8).unwrap();
        let range = zero_to_hundred();
        let n = 20_000;
        let within = (0..n)
            .filter(|&seed| sampler.sample(&range, seed).classification() == Classification::Within)
            .count();
        let fraction = within as f64 / n as f64;
        assert!((0.78..0.82).contains(&fraction), "within fraction {}", fraction);
    }

    #[test]
    fn test_one_sided_conformance_frequency_is_higher() {
        // Only one tail is checked, so roughly (1 + p) / 2 are normal
        let sampler = Sampler::new(0.8).unwrap();
        let range = RangeSpec::upper_bounded(0.0, 100.0).unwrap();
        let n = 20_000;
        let within = (0..n)
            .filter(|&seed| sampler.sample(&range, seed).classification() == Classification::Within)
            .count();
        let fraction = within as f64 / n as f64;
        assert!((0.88..0.92).contains(&fraction), "within fraction {}", fraction);
    }

    #[test]
    fn test_lower_bounded_conformance_frequency_matches_upper() {
        let sampler = Sampler::new(0.8).unwrap();
        let range = RangeSpec::lower_bounded(0.0, 100.0).unwrap();
        let n = 20_000;
        let within = (0..n)
            .filter(|&seed| sampler.sample(&range, seed).classification() == Classification::Within)
            .count();
        let fraction = within as f64 / n as f64;
        assert!((0.88..0.92).contains(&fraction), "within fraction {}", fraction);
    }

    #[test]
    fn test_tiny_probability_gives_finite_values() {
        let sampler = Sampler::new(1e-17).unwrap();
        let range = zero_to_hundred();
        for seed in 0..100 {
            assert!(sampler.draw(&range, seed).is_finite());
        }
    }
}
