//! Core value types and errors.
//!
//! This module provides:
//! - `error`: the [`LabError`] type shared by every layer
//! - `probability`: [`ConformanceProbability`], a validated probability in (0, 1)

pub mod error;
pub mod probability;

pub use error::{LabError, Result};
pub use probability::ConformanceProbability;
