//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod batch;
pub mod generate;
pub mod panels;

use clap::ValueEnum;
use fakelab_engine::panel::{MeasurementPanel, OverrideMap};

use crate::config::FakelabConfig;
use crate::{CliError, Result};

/// Output format shared by the generating commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Parse one `Name=Value` override argument.
///
/// The value follows the last `=`, so names may contain `=`.
pub fn parse_override(arg: &str) -> Result<(String, f64)> {
    let (name, value) = arg.rsplit_once('=').ok_or_else(|| {
        CliError::InvalidArgument(format!("Override '{}' must look like Name=Value", arg))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "Override '{}' has an empty measurement name",
            arg
        )));
    }

    let value: f64 = value.trim().parse().map_err(|_| {
        CliError::InvalidArgument(format!("Override '{}' has a non-numeric value", arg))
    })?;

    Ok((name.to_string(), value))
}

/// Collect override arguments, rejecting a name given twice.
pub fn parse_overrides(args: &[String]) -> Result<OverrideMap> {
    let mut overrides = OverrideMap::new();
    for arg in args {
        let (name, value) = parse_override(arg)?;
        if overrides.insert(name.clone(), value).is_some() {
            return Err(CliError::InvalidArgument(format!(
                "Override for '{}' given more than once",
                name
            )));
        }
    }
    Ok(overrides)
}

/// Look up `name`, or the configured default panel when `None`.
pub fn resolve_panel(config: &FakelabConfig, name: Option<&str>) -> Result<MeasurementPanel> {
    let name = name.unwrap_or(&config.default_panel);
    config
        .resolve_panel(name)?
        .ok_or_else(|| CliError::UnknownPanel {
            name: name.to_string(),
            available: config.panel_names().join(", "),
        })
}
