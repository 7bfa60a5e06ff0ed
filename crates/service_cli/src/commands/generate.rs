//! Generate command implementation
//!
//! Produces one report for one report number, with optional overrides.

use std::io::Write;

use fakelab_engine::report::LabReport;
use tracing::info;

use super::{parse_overrides, resolve_panel, OutputFormat};
use crate::config::FakelabConfig;
use crate::render;
use crate::Result;

/// Run the generate command
pub fn run(
    config: &FakelabConfig,
    report_number: u64,
    panel: Option<&str>,
    overrides: &[String],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let panel = resolve_panel(config, panel)?;
    let overrides = parse_overrides(overrides)?;

    info!(
        report_number,
        panel = panel.name(),
        overrides = overrides.len(),
        "Generating report"
    );

    let report = LabReport::generate(report_number, &panel, config.conformance_probability)?
        .with_overrides(overrides)?;

    match format {
        OutputFormat::Table => render::render_table(&report, out),
        OutputFormat::Json => render::render_json(&report, out),
        OutputFormat::Csv => render::render_csv([&report], out),
    }
}
