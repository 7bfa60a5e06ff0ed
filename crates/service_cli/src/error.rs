//! CLI error types.

use fakelab_core::LabError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Lab(#[from] LabError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unknown panel: {name}. Available: {available}")]
    UnknownPanel { name: String, available: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_error_is_transparent() {
        let err: CliError = LabError::InvalidProbability { probability: 1.0 }.into();
        assert_eq!(
            err.to_string(),
            LabError::InvalidProbability { probability: 1.0 }.to_string()
        );
    }

    #[test]
    fn test_unknown_panel_display() {
        let err = CliError::UnknownPanel {
            name: "urinalysis".to_string(),
            available: "lipid".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown panel: urinalysis. Available: lipid");
    }
}
