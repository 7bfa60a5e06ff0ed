//! # fakelab_core: Foundation for Synthetic Lab Measurements
//!
//! ## Layer 1 (Foundation) Role
//!
//! fakelab_core is the bottom layer of the workspace, providing:
//! - Reference ranges and their display rules (`range::RangeSpec`)
//! - Boundary classification (`range::Classification`)
//! - Sample formatting with out-of-range flags (`range::format`)
//! - Standard normal CDF and inverse CDF (`math::distributions`)
//! - Validated conformance probabilities (`types::ConformanceProbability`)
//! - Error type: `LabError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other fakelab_* crates and no source of
//! randomness. Sampling lives in `fakelab_engine`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use fakelab_core::range::{format, Classification, RangeSpec, Sample};
//!
//! let sodium = RangeSpec::two_sided(132.0, 146.0).unwrap().with_precision(0);
//! assert_eq!(sodium.to_string(), "132 - 146");
//! assert_eq!(sodium.classify(150.0), Classification::Above);
//!
//! let sample = Sample::new(sodium, 150.0);
//! assert_eq!(format(&sample), "H 150");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `RangeSpec`, `Sample` and `Classification`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod range;
pub mod types;

pub use types::LabError;
