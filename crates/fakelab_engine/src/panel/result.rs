//! One classified row of generated output.

use fakelab_core::range::{format, format_value, Classification, Sample};

use super::measurement::Measurement;

/// A measurement, its drawn sample and the sample's classification.
///
/// Fields are read-only so the classification can never drift from the
/// value it was computed for; replacing the value goes through
/// [`apply_overrides`](super::apply_overrides), which reclassifies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanelResult {
    measurement: Measurement,
    sample: Sample,
    classification: Classification,
}

impl PanelResult {
    /// Builds a result for `measurement` at `value`, classifying it against
    /// the measurement's range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fakelab_core::range::{Classification, RangeSpec};
    /// use fakelab_engine::panel::{Measurement, PanelResult};
    ///
    /// let sodium = Measurement::new(
    ///     "Sodium",
    ///     RangeSpec::two_sided(132.0, 146.0).unwrap().with_precision(0),
    ///     "mmol/L",
    /// );
    /// let result = PanelResult::new(sodium, 140.0);
    /// assert_eq!(result.classification(), Classification::Within);
    /// assert_eq!(result.formatted(), "140");
    /// ```
    pub fn new(measurement: Measurement, value: f64) -> Self {
        let sample = Sample::new(measurement.range.clone(), value);
        let classification = sample.classification();
        Self {
            measurement,
            sample,
            classification,
        }
    }

    /// Returns a copy of this result at a different value, reclassified.
    pub(crate) fn with_value(&self, value: f64) -> Self {
        Self::new(self.measurement.clone(), value)
    }

    /// Returns the measurement declaration.
    #[inline]
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Returns the measurement name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.measurement.name
    }

    /// Returns the sample.
    #[inline]
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Returns the numeric value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.sample.value
    }

    /// Returns the classification of the current value.
    #[inline]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Annotated display string, e.g. `"H 162"`.
    pub fn formatted(&self) -> String {
        format(&self.sample)
    }

    /// Bare display string without the flag letter.
    pub fn formatted_value(&self) -> String {
        format_value(&self.sample)
    }

    /// Reference range display string, e.g. `"132 - 146"`.
    pub fn reference_range(&self) -> String {
        self.measurement.range.to_string()
    }
}
