//! Panel generation for a single identifier.

use fakelab_core::types::Result;
use tracing::{debug, trace};

use super::measurement::MeasurementPanel;
use super::result::PanelResult;
use crate::rng::{seed_stream, Identifier};
use crate::sampler::Sampler;

/// Generates one classified result per measurement, in declaration order.
///
/// The output is a pure function of `(identifier, panel,
/// conformance_probability)`: repeated calls return bit-identical values.
///
/// # Errors
///
/// Returns `LabError::InvalidProbability` unless the probability lies
/// strictly between 0 and 1.
///
/// # Examples
///
/// ```rust
/// use fakelab_engine::panel::generate;
/// use fakelab_engine::presets;
///
/// let panel = presets::lipid().unwrap();
/// let results = generate(12345, &panel, 0.9).unwrap();
/// assert_eq!(
///     results.iter().map(|r| r.name()).collect::<Vec<_>>(),
///     panel.names().collect::<Vec<_>>()
/// );
///
/// assert!(generate(12345, &panel, 1.0).is_err());
/// ```
pub fn generate(
    identifier: Identifier,
    panel: &MeasurementPanel,
    conformance_probability: f64,
) -> Result<Vec<PanelResult>> {
    let sampler = Sampler::new(conformance_probability)?;
    Ok(generate_with(identifier, panel, &sampler))
}

/// Generates a panel with an already validated sampler.
pub fn generate_with(
    identifier: Identifier,
    panel: &MeasurementPanel,
    sampler: &Sampler,
) -> Vec<PanelResult> {
    debug!(
        identifier,
        panel = panel.name(),
        measurements = panel.len(),
        probability = sampler.probability().value(),
        "generating panel"
    );

    panel
        .iter()
        .zip(seed_stream(identifier))
        .map(|(measurement, seed)| {
            let value = sampler.draw(&measurement.range, seed);
            let result = PanelResult::new(measurement.clone(), value);
            trace!(
                identifier,
                measurement = %measurement.name,
                value = result.value(),
                classification = %result.classification(),
                "sampled measurement"
            );
            result
        })
        .collect()
}
