//! Reference ranges, classification and display formatting.
//!
//! This module provides:
//! - `spec`: [`RangeSpec`] and its three variants ([`RangeKind`])
//! - `classification`: [`Classification`] verdicts and their flag letters
//! - `sample`: [`Sample`], a drawn value paired with its range
//! - `format`: rendering samples and ranges for display
//!
//! # Variants
//!
//! | kind | Below | Above | default range display |
//! |---|---|---|---|
//! | `TwoSided` | `value <= low` | `value >= high` | `132 - 146` |
//! | `UpperBounded` | never | `value > high` | `<240` |
//! | `LowerBounded` | `value < low` | never | `>40` |

pub mod classification;
pub mod format;
pub mod sample;
pub mod spec;

pub use classification::Classification;
pub use format::{format, format_value};
pub use sample::Sample;
pub use spec::{RangeKind, RangeSpec};
