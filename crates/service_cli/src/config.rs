//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! CLI arguments.

use fakelab_core::types::ConformanceProbability;
use fakelab_engine::panel::MeasurementPanel;
use fakelab_engine::presets;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "fakelab.toml";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "FAKELAB_LOG_LEVEL";

/// Environment variable overriding the conformance probability.
pub const ENV_PROBABILITY: &str = "FAKELAB_PROBABILITY";

/// Environment variable overriding the default panel.
pub const ENV_PANEL: &str = "FAKELAB_PANEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid conformance probability: {0}. Must lie strictly between 0 and 1")]
    InvalidProbability(String),

    #[error("Panel '{0}' is declared more than once")]
    DuplicatePanel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FakelabConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Probability that a two-sided measurement lands inside its range
    pub conformance_probability: f64,
    /// Panel used when none is named on the command line
    pub default_panel: String,
    /// Custom panels, checked before the built-in presets
    pub panels: Vec<MeasurementPanel>,
}

impl Default for FakelabConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            conformance_probability: 0.9,
            default_panel: "basic-metabolic".to_string(),
            panels: Vec::new(),
        }
    }
}

impl FakelabConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FakelabConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables
    pub fn merge_env(&mut self) -> Result<(), ConfigError> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable lookup
    pub fn merge_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(probability) = lookup(ENV_PROBABILITY) {
            self.conformance_probability = probability.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not a number: {}", ENV_PROBABILITY, probability))
            })?;
        }

        if let Some(panel) = lookup(ENV_PANEL) {
            self.default_panel = panel;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(probability) = cli.probability {
            self.conformance_probability = probability;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConformanceProbability::new(self.conformance_probability)
            .map_err(|_| ConfigError::InvalidProbability(self.conformance_probability.to_string()))?;

        let mut seen = HashSet::new();
        for panel in &self.panels {
            if !seen.insert(panel.name()) {
                return Err(ConfigError::DuplicatePanel(panel.name().to_string()));
            }
        }

        Ok(())
    }

    /// Names of every panel this configuration can resolve, custom panels first
    pub fn panel_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.panels.iter().map(|p| p.name().to_string()).collect();
        for preset in presets::PRESET_NAMES {
            if !names.iter().any(|n| n == preset) {
                names.push(preset.to_string());
            }
        }
        names
    }

    /// Resolve a panel by name, custom panels shadowing presets
    pub fn resolve_panel(&self, name: &str) -> fakelab_core::types::Result<Option<MeasurementPanel>> {
        if let Some(panel) = self.panels.iter().find(|p| p.name() == name) {
            return Ok(Some(panel.clone()));
        }
        presets::by_name(name)
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose flag (debug logging unless a level is given)
    pub verbose: bool,
    /// Conformance probability override
    pub probability: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<FakelabConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => FakelabConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            FakelabConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => FakelabConfig::default(),
    };

    config.merge_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
