//! Batch command implementation
//!
//! Generates a consecutive run of report numbers in parallel and prints
//! either per-measurement classification counts or every row.

use std::io::Write;

use fakelab_engine::batch::{generate_batch, BatchSummary};
use fakelab_engine::report::LabReport;
use tracing::info;

use super::{resolve_panel, OutputFormat};
use crate::config::FakelabConfig;
use crate::render;
use crate::{CliError, Result};

/// Run the batch command
pub fn run(
    config: &FakelabConfig,
    start: u64,
    count: u64,
    panel: Option<&str>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "Batch count must be at least 1".to_string(),
        ));
    }
    let end = start.checked_add(count).ok_or_else(|| {
        CliError::InvalidArgument(format!("Report numbers overflow past {}", start))
    })?;

    let panel = resolve_panel(config, panel)?;
    let identifiers: Vec<u64> = (start..end).collect();

    info!(start, count, panel = panel.name(), "Generating batch");

    let batch = generate_batch(&identifiers, &panel, config.conformance_probability)?;

    match format {
        OutputFormat::Table => {
            render::render_summary(&BatchSummary::from_results(&panel, &batch), out)
        }
        OutputFormat::Json => {
            render::render_summary_json(&BatchSummary::from_results(&panel, &batch), out)
        }
        OutputFormat::Csv => {
            let reports: Vec<LabReport> = batch
                .into_iter()
                .map(|(id, results)| {
                    LabReport::from_results(id, &panel, config.conformance_probability, results)
                })
                .collect();
            render::render_csv(&reports, out)
        }
    }
}
