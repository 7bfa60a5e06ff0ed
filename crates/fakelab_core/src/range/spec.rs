//! Reference range specification.
//!
//! A [`RangeSpec`] is a closed tagged variant: every range carries both
//! bounds (the sampler needs them to build its deviation envelope) but each
//! [`RangeKind`] decides which bounds participate in classification.

use std::fmt;

use super::classification::Classification;
use super::format::render_number;
use crate::types::{ConformanceProbability, LabError, Result};

/// Placeholder replaced by the rendered value in a result format.
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// Placeholder replaced by the rendered lower bound in a range format.
pub const LOW_PLACEHOLDER: &str = "{low}";

/// Placeholder replaced by the rendered upper bound in a range format.
pub const HIGH_PLACEHOLDER: &str = "{high}";

/// Decimal places used when none are specified.
pub const DEFAULT_PRECISION: usize = 1;

/// Which bounds of a range are checked during classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RangeKind {
    /// Both bounds are checked; the open interval `(low, high)` is normal.
    TwoSided,
    /// Only `high` is checked; anything up to and including `high` is normal.
    UpperBounded,
    /// Only `low` is checked; anything from `low` upwards is normal.
    LowerBounded,
}

impl RangeKind {
    /// Default range display template for this kind.
    pub fn default_range_format(&self) -> &'static str {
        match self {
            RangeKind::TwoSided => "{low} - {high}",
            RangeKind::UpperBounded => "<{high}",
            RangeKind::LowerBounded => ">{low}",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeKind::TwoSided => write!(f, "two_sided"),
            RangeKind::UpperBounded => write!(f, "upper_bounded"),
            RangeKind::LowerBounded => write!(f, "lower_bounded"),
        }
    }
}

/// Reference interval with its classification rule and display formatting.
///
/// Immutable once constructed. `low < high` holds for every variant, both
/// bounds finite.
///
/// # Examples
///
/// ```rust
/// use fakelab_core::range::{Classification, RangeSpec};
///
/// let cholesterol = RangeSpec::upper_bounded(100.0, 240.0).unwrap().with_precision(0);
/// assert_eq!(cholesterol.to_string(), "<240");
/// assert_eq!(cholesterol.classify(50.0), Classification::Within);
/// assert_eq!(cholesterol.classify(300.0), Classification::Above);
///
/// let glucose = RangeSpec::two_sided(70.0, 99.0)
///     .unwrap()
///     .with_precision(0)
///     .with_result_format("{value}*")
///     .unwrap();
/// assert_eq!(glucose.result_format(), "{value}*");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RangeSpecRecord", into = "RangeSpecRecord")
)]
pub struct RangeSpec {
    kind: RangeKind,
    low: f64,
    high: f64,
    precision: usize,
    result_format: String,
    range_format: String,
}

impl RangeSpec {
    /// Creates a range of the given kind with default formatting.
    ///
    /// # Errors
    ///
    /// Returns `LabError::InvalidRange` if `low >= high` or either bound is
    /// not finite.
    pub fn new(kind: RangeKind, low: f64, high: f64) -> Result<Self> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(LabError::InvalidRange { low, high });
        }
        Ok(Self {
            kind,
            low,
            high,
            precision: DEFAULT_PRECISION,
            result_format: VALUE_PLACEHOLDER.to_string(),
            range_format: kind.default_range_format().to_string(),
        })
    }

    /// Two-sided range: values at or beyond either bound are abnormal.
    pub fn two_sided(low: f64, high: f64) -> Result<Self> {
        Self::new(RangeKind::TwoSided, low, high)
    }

    /// Upper-bounded range: only values above `high` are abnormal.
    ///
    /// `low` still shapes the sampling envelope.
    pub fn upper_bounded(low: f64, high: f64) -> Result<Self> {
        Self::new(RangeKind::UpperBounded, low, high)
    }

    /// Lower-bounded range: only values below `low` are abnormal.
    ///
    /// `high` still shapes the sampling envelope.
    pub fn lower_bounded(low: f64, high: f64) -> Result<Self> {
        Self::new(RangeKind::LowerBounded, low, high)
    }

    /// Sets the number of decimal places used for values and bounds.
    #[inline]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the result decoration template, e.g. `"{value}*"`.
    ///
    /// # Errors
    ///
    /// Returns `LabError::InvalidFormat` if the template lacks `{value}`.
    pub fn with_result_format(mut self, template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(VALUE_PLACEHOLDER) {
            return Err(LabError::InvalidFormat {
                template,
                reason: format!("missing {} placeholder", VALUE_PLACEHOLDER),
            });
        }
        self.result_format = template;
        Ok(self)
    }

    /// Sets the range display template, e.g. `"{low} to {high}"`.
    ///
    /// # Errors
    ///
    /// Returns `LabError::InvalidFormat` if the template contains neither
    /// `{low}` nor `{high}`.
    pub fn with_range_format(mut self, template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(LOW_PLACEHOLDER) && !template.contains(HIGH_PLACEHOLDER) {
            return Err(LabError::InvalidFormat {
                template,
                reason: format!(
                    "needs at least one of {} or {}",
                    LOW_PLACEHOLDER, HIGH_PLACEHOLDER
                ),
            });
        }
        self.range_format = template;
        Ok(self)
    }

    /// Returns the range variant.
    #[inline]
    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    /// Returns the lower bound.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the number of decimal places used for display.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Returns the result decoration template.
    #[inline]
    pub fn result_format(&self) -> &str {
        &self.result_format
    }

    /// Returns the range display template.
    #[inline]
    pub fn range_format(&self) -> &str {
        &self.range_format
    }

    /// Midpoint of the interval, the centre of the sampling distribution.
    #[inline]
    pub fn mean(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Half the interval width, the deviation allowed at `z_top`.
    #[inline]
    pub fn half_width(&self) -> f64 {
        (self.mean() - self.high).abs()
    }

    /// Classifies `value` against this range.
    ///
    /// Two-sided ranges use strict open-interval membership, so a value equal
    /// to a bound lands on the out-of-range side of that bound.
    pub fn classify(&self, value: f64) -> Classification {
        match self.kind {
            RangeKind::TwoSided => {
                if value <= self.low {
                    Classification::Below
                } else if value >= self.high {
                    Classification::Above
                } else {
                    Classification::Within
                }
            }
            RangeKind::UpperBounded => {
                if value > self.high {
                    Classification::Above
                } else {
                    Classification::Within
                }
            }
            RangeKind::LowerBounded => {
                if value < self.low {
                    Classification::Below
                } else {
                    Classification::Within
                }
            }
        }
    }

    /// Probability that a value drawn at `probability` is classified `Within`.
    ///
    /// The sampler is symmetric about the midpoint, so a two-sided range is
    /// normal with probability `p`, while a one-sided range only loses its
    /// checked tail and is normal with probability `(1 + p) / 2`.
    pub fn expected_within_probability(&self, probability: &ConformanceProbability) -> f64 {
        match self.kind {
            RangeKind::TwoSided => probability.value(),
            RangeKind::UpperBounded | RangeKind::LowerBounded => (1.0 + probability.value()) / 2.0,
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .range_format
            .replace(LOW_PLACEHOLDER, &render_number(self.low, self.precision))
            .replace(HIGH_PLACEHOLDER, &render_number(self.high, self.precision));
        f.write_str(&rendered)
    }
}

/// Wire form of a [`RangeSpec`]; deserialisation goes through the
/// validating constructors.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RangeSpecRecord {
    kind: RangeKind,
    low: f64,
    high: f64,
    #[serde(default = "default_precision")]
    precision: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range_format: Option<String>,
}

#[cfg(feature = "serde")]
fn default_precision() -> usize {
    DEFAULT_PRECISION
}

#[cfg(feature = "serde")]
impl TryFrom<RangeSpecRecord> for RangeSpec {
    type Error = LabError;

    fn try_from(record: RangeSpecRecord) -> Result<Self> {
        let mut spec = RangeSpec::new(record.kind, record.low, record.high)?
            .with_precision(record.precision);
        if let Some(template) = record.result_format {
            spec = spec.with_result_format(template)?;
        }
        if let Some(template) = record.range_format {
            spec = spec.with_range_format(template)?;
        }
        Ok(spec)
    }
}

#[cfg(feature = "serde")]
impl From<RangeSpec> for RangeSpecRecord {
    fn from(spec: RangeSpec) -> Self {
        Self {
            kind: spec.kind,
            low: spec.low,
            high: spec.high,
            precision: spec.precision,
            result_format: Some(spec.result_format),
            range_format: Some(spec.range_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sodium() -> RangeSpec {
        RangeSpec::two_sided(132.0, 146.0).unwrap().with_precision(0)
    }

    // ==========================================================
    // Construction
    // ==========================================================

    #[test]
    fn test_invalid_range_rejected_for_every_kind() {
        for kind in [
            RangeKind::TwoSided,
            RangeKind::UpperBounded,
            RangeKind::LowerBounded,
        ] {
            assert_eq!(
                RangeSpec::new(kind, 150.0, 100.0),
                Err(LabError::InvalidRange {
                    low: 150.0,
                    high: 100.0
                })
            );
            assert!(RangeSpec::new(kind, 5.0, 5.0).is_err());
        }
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        assert!(RangeSpec::two_sided(f64::NAN, 1.0).is_err());
        assert!(RangeSpec::two_sided(0.0, f64::INFINITY).is_err());
        assert!(RangeSpec::lower_bounded(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_defaults() {
        let spec = RangeSpec::two_sided(3.5, 5.1).unwrap();
        assert_eq!(spec.precision(), DEFAULT_PRECISION);
        assert_eq!(spec.result_format(), "{value}");
        assert_eq!(spec.range_format(), "{low} - {high}");
        assert_relative_eq!(spec.mean(), 4.3, epsilon = 1e-12);
        assert_relative_eq!(spec.half_width(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_result_format_requires_placeholder() {
        let err = sodium().with_result_format("fasting").unwrap_err();
        assert!(matches!(err, LabError::InvalidFormat { .. }));
    }

    #[test]
    fn test_range_format_requires_a_bound() {
        assert!(sodium().with_range_format("normal").is_err());
        assert!(sodium().with_range_format("up to {high}").is_ok());
    }

    // ==========================================================
    // Classification
    // ==========================================================

    #[test]
    fn test_two_sided_boundaries() {
        let spec = sodium();
        assert_eq!(spec.classify(140.0), Classification::Within);
        assert_eq!(spec.classify(132.0), Classification::Below);
        assert_eq!(spec.classify(146.0), Classification::Above);
        assert_eq!(spec.classify(150.0), Classification::Above);
        assert_eq!(spec.classify(120.0), Classification::Below);
    }

    #[test]
    fn test_upper_bounded_ignores_low() {
        let spec = RangeSpec::upper_bounded(100.0, 240.0).unwrap();
        assert_eq!(spec.classify(50.0), Classification::Within);
        assert_eq!(spec.classify(240.0), Classification::Within);
        assert_eq!(spec.classify(300.0), Classification::Above);
    }

    #[test]
    fn test_lower_bounded_ignores_high() {
        let spec = RangeSpec::lower_bounded(40.0, 100.0).unwrap();
        assert_eq!(spec.classify(500.0), Classification::Within);
        assert_eq!(spec.classify(40.0), Classification::Within);
        assert_eq!(spec.classify(39.9), Classification::Below);
    }

    #[test]
    fn test_expected_within_probability() {
        let p = ConformanceProbability::new(0.8).unwrap();
        assert_relative_eq!(sodium().expected_within_probability(&p), 0.8, epsilon = 1e-12);
        let upper = RangeSpec::upper_bounded(100.0, 240.0).unwrap();
        assert_relative_eq!(upper.expected_within_probability(&p), 0.9, epsilon = 1e-12);
    }

    // ==========================================================
    // Display
    // ==========================================================

    #[test]
    fn test_range_display_per_kind() {
        assert_eq!(sodium().to_string(), "132 - 146");
        let upper = RangeSpec::upper_bounded(100.0, 240.0)
            .unwrap()
            .with_precision(0);
        assert_eq!(upper.to_string(), "<240");
        let lower = RangeSpec::lower_bounded(40.0, 100.0)
            .unwrap()
            .with_precision(0);
        assert_eq!(lower.to_string(), ">40");
    }

    #[test]
    fn test_range_display_custom_template() {
        let spec = RangeSpec::two_sided(3.5, 5.1)
            .unwrap()
            .with_range_format("{low} to {high}")
            .unwrap();
        assert_eq!(spec.to_string(), "3.5 to 5.1");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_deserialise_with_defaults() {
            let json = r#"{"kind":"upper_bounded","low":100,"high":240}"#;
            let spec: RangeSpec = serde_json::from_str(json).unwrap();
            assert_eq!(spec.kind(), RangeKind::UpperBounded);
            assert_eq!(spec.range_format(), "<{high}");
            assert_eq!(spec.precision(), DEFAULT_PRECISION);
        }

        #[test]
        fn test_deserialise_rejects_inverted_range() {
            let json = r#"{"kind":"two_sided","low":150,"high":100}"#;
            let err = serde_json::from_str::<RangeSpec>(json).unwrap_err();
            assert!(err.to_string().contains("Invalid range"));
        }

        #[test]
        fn test_serde_roundtrip() {
            let spec = sodium().with_result_format("{value}*").unwrap();
            let json = serde_json::to_string(&spec).unwrap();
            let parsed: RangeSpec = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, spec);
        }
    }
}
