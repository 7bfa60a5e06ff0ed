//! Parallel generation across many identifiers.
//!
//! Each identifier is an independent [`generate_with`] call, so the batch
//! fans out with `rayon` and needs no synchronisation.

use fakelab_core::range::Classification;
use fakelab_core::types::Result;
use rayon::prelude::*;
use tracing::debug;

use crate::panel::{generate_with, MeasurementPanel, PanelResult};
use crate::rng::Identifier;
use crate::sampler::Sampler;

/// Results of one batch, in the order the identifiers were given.
pub type BatchResults = Vec<(Identifier, Vec<PanelResult>)>;

/// Generates `panel` for every identifier in parallel.
///
/// The output equals running [`generate`](crate::panel::generate) once per
/// identifier in order.
///
/// # Errors
///
/// Returns `LabError::InvalidProbability` unless the probability lies
/// strictly between 0 and 1.
///
/// # Examples
///
/// ```rust
/// use fakelab_engine::batch::generate_batch;
/// use fakelab_engine::panel::generate;
/// use fakelab_engine::presets;
///
/// let panel = presets::lipid().unwrap();
/// let batch = generate_batch(&[10, 11, 12], &panel, 0.9).unwrap();
/// assert_eq!(batch[1].0, 11);
/// assert_eq!(batch[1].1, generate(11, &panel, 0.9).unwrap());
/// ```
pub fn generate_batch(
    identifiers: &[Identifier],
    panel: &MeasurementPanel,
    conformance_probability: f64,
) -> Result<BatchResults> {
    let sampler = Sampler::new(conformance_probability)?;
    debug!(
        reports = identifiers.len(),
        panel = panel.name(),
        "generating batch"
    );
    Ok(identifiers
        .par_iter()
        .map(|&identifier| (identifier, generate_with(identifier, panel, &sampler)))
        .collect())
}

/// Classification counts for one measurement across a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MeasurementTally {
    /// Measurement name.
    pub name: String,
    /// Results classified `Below`.
    pub below: usize,
    /// Results classified `Within`.
    pub within: usize,
    /// Results classified `Above`.
    pub above: usize,
}

impl MeasurementTally {
    fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Below => self.below += 1,
            Classification::Within => self.within += 1,
            Classification::Above => self.above += 1,
        }
    }

    /// Total results counted.
    #[inline]
    pub fn total(&self) -> usize {
        self.below + self.within + self.above
    }

    /// Share of results classified `Within`; zero for an empty tally.
    pub fn within_fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.within as f64 / total as f64,
        }
    }
}

/// Per-measurement classification counts over a batch.
///
/// Tallies are positional, one per panel entry, so duplicated names are
/// counted separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    /// Number of reports counted.
    pub reports: usize,
    /// One tally per panel entry, in declaration order.
    pub tallies: Vec<MeasurementTally>,
}

impl BatchSummary {
    /// Counts classifications in `batch`, which must come from `panel`.
    pub fn from_results(panel: &MeasurementPanel, batch: &[(Identifier, Vec<PanelResult>)]) -> Self {
        let mut tallies: Vec<MeasurementTally> = panel
            .names()
            .map(|name| MeasurementTally {
                name: name.to_string(),
                ..MeasurementTally::default()
            })
            .collect();

        for (_, results) in batch {
            for (tally, result) in tallies.iter_mut().zip(results) {
                tally.record(result.classification());
            }
        }

        Self {
            reports: batch.len(),
            tallies,
        }
    }
}
