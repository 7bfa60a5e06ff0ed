//! Measurement panels and their generation.
//!
//! - `measurement`: [`Measurement`] and [`MeasurementPanel`] configuration
//! - `result`: [`PanelResult`], one classified row of output
//! - `generator`: [`generate`], the primary entry point
//! - `overrides`: [`apply_overrides`], forcing named values after generation

pub mod generator;
pub mod measurement;
pub mod overrides;
pub mod result;

pub use generator::{generate, generate_with};
pub use measurement::{Measurement, MeasurementPanel};
pub use overrides::{apply_overrides, OverrideMap};
pub use result::PanelResult;
