//! A drawn value paired with the range it was drawn against.

use std::fmt;

use super::classification::Classification;
use super::format;
use super::spec::RangeSpec;

/// Raw numeric draw, before classification.
///
/// `Display` renders the annotated line (flag letter plus formatted value).
///
/// # Examples
///
/// ```rust
/// use fakelab_core::range::{RangeSpec, Sample};
///
/// let range = RangeSpec::two_sided(132.0, 146.0).unwrap().with_precision(0);
/// let sample = Sample::new(range, 128.4);
/// assert_eq!(sample.to_string(), "L 128");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Range the value was drawn against.
    pub range: RangeSpec,
    /// The drawn (or forced) value.
    pub value: f64,
}

impl Sample {
    /// Pairs `value` with `range`.
    pub fn new(range: RangeSpec, value: f64) -> Self {
        Self { range, value }
    }

    /// Classifies the value against its own range.
    #[inline]
    pub fn classification(&self) -> Classification {
        self.range.classify(self.value)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format(self))
    }
}
