//! A generated panel bundled with its report number.

use fakelab_core::types::Result;

use crate::panel::{apply_overrides, generate, MeasurementPanel, OverrideMap, PanelResult};
use crate::rng::Identifier;

/// Synthetic lab report: one panel generated for one report number.
///
/// # Examples
///
/// ```rust
/// use fakelab_engine::panel::OverrideMap;
/// use fakelab_engine::presets;
/// use fakelab_engine::report::LabReport;
///
/// let panel = presets::basic_metabolic().unwrap();
/// let report = LabReport::generate(12345, &panel, 0.9)
///     .unwrap()
///     .with_overrides(OverrideMap::from([("Sodium".into(), 162.0)]))
///     .unwrap();
///
/// assert_eq!(report.report_number(), 12345);
/// assert!(report.flagged().any(|r| r.name() == "Sodium"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabReport {
    report_number: Identifier,
    panel: String,
    conformance_probability: f64,
    results: Vec<PanelResult>,
}

impl LabReport {
    /// Generates `panel` for `report_number`.
    ///
    /// # Errors
    ///
    /// Returns `LabError::InvalidProbability` unless the probability lies
    /// strictly between 0 and 1.
    pub fn generate(
        report_number: Identifier,
        panel: &MeasurementPanel,
        conformance_probability: f64,
    ) -> Result<Self> {
        let results = generate(report_number, panel, conformance_probability)?;
        Ok(Self::from_results(
            report_number,
            panel,
            conformance_probability,
            results,
        ))
    }

    /// Bundles results that were already generated for `report_number`,
    /// such as one entry of a [`generate_batch`](crate::batch::generate_batch)
    /// run.
    pub fn from_results(
        report_number: Identifier,
        panel: &MeasurementPanel,
        conformance_probability: f64,
        results: Vec<PanelResult>,
    ) -> Self {
        Self {
            report_number,
            panel: panel.name().to_string(),
            conformance_probability,
            results,
        }
    }

    /// Applies `overrides` to the report's results.
    ///
    /// # Errors
    ///
    /// Same as [`apply_overrides`].
    pub fn with_overrides(mut self, overrides: OverrideMap) -> Result<Self> {
        if !overrides.is_empty() {
            self.results = apply_overrides(&self.results, overrides)?;
        }
        Ok(self)
    }

    /// Returns the report number the values were generated for.
    #[inline]
    pub fn report_number(&self) -> Identifier {
        self.report_number
    }

    /// Returns the panel name.
    #[inline]
    pub fn panel_name(&self) -> &str {
        &self.panel
    }

    /// Returns the conformance probability used for generation.
    #[inline]
    pub fn conformance_probability(&self) -> f64 {
        self.conformance_probability
    }

    /// Returns the results in panel order.
    #[inline]
    pub fn results(&self) -> &[PanelResult] {
        &self.results
    }

    /// Iterates results classified outside their range.
    pub fn flagged(&self) -> impl Iterator<Item = &PanelResult> {
        self.results
            .iter()
            .filter(|r| r.classification().is_abnormal())
    }

    /// Consumes the report, returning its results.
    pub fn into_results(self) -> Vec<PanelResult> {
        self.results
    }
}
