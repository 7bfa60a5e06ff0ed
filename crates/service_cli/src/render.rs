//! Output rendering for reports, batch summaries and panel listings.
//!
//! Every renderer writes to an `impl Write` so commands can target stdout
//! and tests can target a buffer.

use std::io::Write;

use fakelab_core::range::Classification;
use fakelab_engine::batch::BatchSummary;
use fakelab_engine::panel::{MeasurementPanel, PanelResult};
use fakelab_engine::report::LabReport;
use serde::Serialize;

use crate::Result;

/// Flat view of one result, shared by the JSON and CSV outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub report_number: u64,
    pub name: String,
    pub value: f64,
    pub display: String,
    pub classification: Classification,
    pub units: String,
    pub reference_range: String,
}

impl ResultRow {
    /// Flatten a result belonging to `report_number`.
    pub fn new(report_number: u64, result: &PanelResult) -> Self {
        Self {
            report_number,
            name: result.name().to_string(),
            value: result.value(),
            display: result.formatted(),
            classification: result.classification(),
            units: result.measurement().units.clone(),
            reference_range: result.reference_range(),
        }
    }
}

#[derive(Serialize)]
struct ReportView<'a> {
    report_number: u64,
    panel: &'a str,
    conformance_probability: f64,
    results: Vec<ResultRow>,
}

fn rows(report: &LabReport) -> Vec<ResultRow> {
    report
        .results()
        .iter()
        .map(|r| ResultRow::new(report.report_number(), r))
        .collect()
}

/// Render a report as an aligned text table.
pub fn render_table(report: &LabReport, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Report {} ({}, p = {})",
        report.report_number(),
        report.panel_name(),
        report.conformance_probability()
    )?;

    let name_width = report
        .results()
        .iter()
        .map(|r| r.name().chars().count())
        .chain(std::iter::once("Measurement".len()))
        .max()
        .unwrap_or_default();
    let value_width = report
        .results()
        .iter()
        .map(|r| r.formatted().chars().count())
        .chain(std::iter::once("Result".len()))
        .max()
        .unwrap_or_default();

    writeln!(
        out,
        "{:<name_width$}  {:>value_width$}  {:<10}  Reference",
        "Measurement", "Result", "Units"
    )?;
    for result in report.results() {
        writeln!(
            out,
            "{:<name_width$}  {:>value_width$}  {:<10}  {}",
            result.name(),
            result.formatted(),
            result.measurement().units,
            result.reference_range()
        )?;
    }
    Ok(())
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &LabReport, out: &mut impl Write) -> Result<()> {
    let view = ReportView {
        report_number: report.report_number(),
        panel: report.panel_name(),
        conformance_probability: report.conformance_probability(),
        results: rows(report),
    };
    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)?;
    Ok(())
}

/// Render one or more reports as CSV, one row per result.
pub fn render_csv<'a>(
    reports: impl IntoIterator<Item = &'a LabReport>,
    out: &mut impl Write,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for report in reports {
        for row in rows(report) {
            writer.serialize(row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Render classification counts for a batch.
pub fn render_summary(summary: &BatchSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} reports", summary.reports)?;
    let name_width = summary
        .tallies
        .iter()
        .map(|t| t.name.chars().count())
        .chain(std::iter::once("Measurement".len()))
        .max()
        .unwrap_or_default();

    writeln!(
        out,
        "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:>8}",
        "Measurement", "Low", "Normal", "High", "Normal%"
    )?;
    for tally in &summary.tallies {
        writeln!(
            out,
            "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:>7.1}%",
            tally.name,
            tally.below,
            tally.within,
            tally.above,
            tally.within_fraction() * 100.0
        )?;
    }
    Ok(())
}

/// Render a batch summary as JSON.
pub fn render_summary_json(summary: &BatchSummary, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

/// List panels and their measurements.
pub fn render_panels(panels: &[MeasurementPanel], out: &mut impl Write) -> Result<()> {
    for panel in panels {
        writeln!(out, "{} ({} measurements)", panel.name(), panel.len())?;
        for measurement in panel {
            writeln!(
                out,
                "  {:<24} {:<14} {}",
                measurement.name,
                measurement.range.to_string(),
                measurement.units
            )?;
        }
    }
    Ok(())
}
