//! Classification of a value against a reference range.

use std::fmt;

/// Qualitative verdict for a value against a [`RangeSpec`](super::RangeSpec).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Classification {
    /// Below the reference range.
    Below,
    /// Inside the reference range.
    Within,
    /// Above the reference range.
    Above,
}

impl Classification {
    /// One-letter out-of-range marker: `L` for Below, `H` for Above.
    ///
    /// # Examples
    /// ```
    /// use fakelab_core::range::Classification;
    ///
    /// assert_eq!(Classification::Above.flag(), Some("H"));
    /// assert_eq!(Classification::Within.flag(), None);
    /// ```
    #[inline]
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Classification::Below => Some("L"),
            Classification::Within => None,
            Classification::Above => Some("H"),
        }
    }

    /// True for `Below` and `Above`.
    #[inline]
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Classification::Within)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Below => write!(f, "below"),
            Classification::Within => write!(f, "within"),
            Classification::Above => write!(f, "above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert_eq!(Classification::Below.flag(), Some("L"));
        assert_eq!(Classification::Within.flag(), None);
        assert_eq!(Classification::Above.flag(), Some("H"));
    }

    #[test]
    fn test_is_abnormal() {
        assert!(Classification::Below.is_abnormal());
        assert!(!Classification::Within.is_abnormal());
        assert!(Classification::Above.is_abnormal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Classification::Within.to_string(), "within");
    }
}
