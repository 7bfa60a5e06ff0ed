//! Measurement and panel declarations.
//!
//! Panels are pure configuration: declared once, shared read-only across
//! every generation call. Names are kept exactly as declared; duplicates are
//! not merged or corrected.

use fakelab_core::range::RangeSpec;

/// A named quantity with its reference range and units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Display name, e.g. `"Sodium"`.
    pub name: String,
    /// Reference range with classification and formatting rules.
    pub range: RangeSpec,
    /// Display units, e.g. `"mmol/L"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: String,
}

impl Measurement {
    /// Creates a measurement.
    pub fn new(name: impl Into<String>, range: RangeSpec, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range,
            units: units.into(),
        }
    }
}

/// Ordered, named collection of measurements.
///
/// # Examples
///
/// ```rust
/// use fakelab_core::range::RangeSpec;
/// use fakelab_engine::panel::{Measurement, MeasurementPanel};
///
/// let panel = MeasurementPanel::new("electrolytes")
///     .with_measurement(Measurement::new(
///         "Sodium",
///         RangeSpec::two_sided(132.0, 146.0).unwrap(),
///         "mmol/L",
///     ))
///     .with_measurement(Measurement::new(
///         "Potassium",
///         RangeSpec::two_sided(3.5, 5.1).unwrap(),
///         "mmol/L",
///     ));
///
/// assert_eq!(panel.len(), 2);
/// assert_eq!(panel.names().collect::<Vec<_>>(), ["Sodium", "Potassium"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementPanel {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    measurements: Vec<Measurement>,
}

impl MeasurementPanel {
    /// Creates an empty panel.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measurements: Vec::new(),
        }
    }

    /// Appends a measurement, builder style.
    pub fn with_measurement(mut self, measurement: Measurement) -> Self {
        self.measurements.push(measurement);
        self
    }

    /// Appends a measurement.
    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Returns the panel name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the measurements in declaration order.
    #[inline]
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Number of measurements.
    #[inline]
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// True if the panel declares no measurements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Iterates measurements in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    /// Iterates measurement names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.measurements.iter().map(|m| m.name.as_str())
    }

    /// Returns the first measurement named `name`.
    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.name == name)
    }
}

impl<'a> IntoIterator for &'a MeasurementPanel {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
