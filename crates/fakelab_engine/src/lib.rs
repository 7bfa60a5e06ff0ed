//! # fakelab_engine: Deterministic Panel Generation
//!
//! ## Layer 2 Role
//!
//! fakelab_engine turns an identifier and a measurement panel into an
//! ordered list of classified, formatted results:
//!
//! ```text
//! identifier ─► seed stream ─► sampler ─► classify ─► PanelResult[]
//!                                                        │
//!                                          overrides ◄───┘ (optional)
//! ```
//!
//! - `rng`: seeded PRNG wrapper and per-measurement seed derivation
//! - `sampler`: inverse-distribution sampling against a reference range
//! - `panel`: measurements, panels, generation and overrides
//! - `batch`: parallel generation across many identifiers
//! - `report`: a generated panel bundled with its report number
//! - `presets`: built-in panels
//!
//! ## Determinism
//!
//! Every generator is a local value seeded from the identifier. Nothing
//! reads or writes process-wide random state, so concurrent calls for
//! different identifiers never interfere.
//!
//! ## Usage Example
//!
//! ```rust
//! use fakelab_engine::panel::{apply_overrides, generate, OverrideMap};
//! use fakelab_engine::presets;
//!
//! let panel = presets::basic_metabolic().unwrap();
//! let results = generate(12345, &panel, 0.9).unwrap();
//! assert_eq!(results.len(), panel.len());
//! assert_eq!(results, generate(12345, &panel, 0.9).unwrap());
//!
//! let overrides = OverrideMap::from([("Sodium".to_string(), 162.0)]);
//! let forced = apply_overrides(&results, overrides).unwrap();
//! assert_eq!(forced[0].formatted(), "H 162");
//! ```

#![deny(missing_docs)]

pub mod batch;
pub mod panel;
pub mod presets;
pub mod report;
pub mod rng;
pub mod sampler;

pub use fakelab_core::{LabError, types::Result};
pub use panel::{apply_overrides, generate, Measurement, MeasurementPanel, OverrideMap, PanelResult};
pub use rng::Identifier;
