//! Error types for range construction, sampling and overrides.
//!
//! This module provides:
//! - `LabError`: every failure the library layers can report
//! - `Result`: convenience alias over `LabError`

use thiserror::Error;

/// Convenience result alias for fakelab operations.
pub type Result<T> = std::result::Result<T, LabError>;

/// Errors raised while building ranges, sampling panels or applying overrides.
///
/// Every failure is local to a single construction or generation call and
/// leaves no partial state behind. None of them are retried or clamped.
///
/// # Variants
/// - `InvalidRange`: `low >= high`, or a non-finite bound
/// - `InvalidProbability`: conformance probability outside (0, 1)
/// - `MeasurementNotFound`: override names with no matching measurement
/// - `AmbiguousMeasurement`: override name matching several measurements
/// - `InvalidFormat`: display template missing its placeholder
/// - `InvalidOverride`: non-finite forced value
///
/// # Examples
/// ```
/// use fakelab_core::LabError;
///
/// let err = LabError::InvalidRange { low: 150.0, high: 100.0 };
/// assert_eq!(err.to_string(), "Invalid range: low 150 must be below high 100");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LabError {
    /// Range bounds are not ordered or not finite.
    #[error("Invalid range: low {low} must be below high {high}")]
    InvalidRange {
        /// Lower bound as supplied
        low: f64,
        /// Upper bound as supplied
        high: f64,
    },

    /// Conformance probability outside the open interval (0, 1).
    #[error("Invalid conformance probability {probability}: must lie strictly between 0 and 1")]
    InvalidProbability {
        /// The rejected probability
        probability: f64,
    },

    /// One or more override names matched no measurement.
    #[error("Measurement not found: {}", names.join(", "))]
    MeasurementNotFound {
        /// Unmatched names, sorted
        names: Vec<String>,
    },

    /// An override name matched more than one measurement.
    #[error("Ambiguous measurement name '{name}': matches {count} entries")]
    AmbiguousMeasurement {
        /// The duplicated name
        name: String,
        /// Number of entries carrying that name
        count: usize,
    },

    /// A display template is missing a required placeholder.
    #[error("Invalid format template '{template}': {reason}")]
    InvalidFormat {
        /// The rejected template
        template: String,
        /// What is wrong with it
        reason: String,
    },

    /// A forced override value is NaN or infinite.
    #[error("Invalid override for '{name}': {value} is not a finite number")]
    InvalidOverride {
        /// Measurement name
        name: String,
        /// The rejected value
        value: f64,
    },
}
