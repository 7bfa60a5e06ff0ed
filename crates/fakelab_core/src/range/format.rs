//! Display formatting for samples.
//!
//! A sample renders in two steps: the value is limited to the range's
//! precision, then substituted into its result template. The annotated form
//! adds the `L `/`H ` out-of-range marker in front.

use super::sample::Sample;
use super::spec::VALUE_PLACEHOLDER;

/// Renders `value` with `precision` decimal places.
///
/// Values that round to zero never carry a minus sign.
pub(crate) fn render_number(value: f64, precision: usize) -> String {
    let rendered = format!("{:.*}", precision, value);
    match rendered.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_string(),
        _ => rendered,
    }
}

/// Formats the bare value: precision first, then the result template.
///
/// # Examples
/// ```
/// use fakelab_core::range::{format_value, RangeSpec, Sample};
///
/// let glucose = RangeSpec::two_sided(70.0, 99.0)
///     .unwrap()
///     .with_precision(0)
///     .with_result_format("{value}*")
///     .unwrap();
/// assert_eq!(format_value(&Sample::new(glucose, 104.6)), "105*");
/// ```
pub fn format_value(sample: &Sample) -> String {
    let numeral = render_number(sample.value, sample.range.precision());
    sample.range.result_format().replace(VALUE_PLACEHOLDER, &numeral)
}

/// Formats the annotated line: `"L "` or `"H "` for out-of-range values,
/// followed by [`format_value`].
///
/// # Examples
/// ```
/// use fakelab_core::range::{format, RangeSpec, Sample};
///
/// let sodium = RangeSpec::two_sided(132.0, 146.0).unwrap().with_precision(0);
/// assert_eq!(format(&Sample::new(sodium.clone(), 150.0)), "H 150");
/// assert_eq!(format(&Sample::new(sodium, 140.0)), "140");
/// ```
pub fn format(sample: &Sample) -> String {
    let value = format_value(sample);
    match sample.classification().flag() {
        Some(flag) => format!("{} {}", flag, value),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeSpec;

    fn sodium() -> RangeSpec {
        RangeSpec::two_sided(132.0, 146.0).unwrap().with_precision(0)
    }

    #[test]
    fn test_format_flags() {
        assert_eq!(format(&Sample::new(sodium(), 150.0)), "H 150");
        assert_eq!(format(&Sample::new(sodium(), 140.0)), "140");
        assert_eq!(format(&Sample::new(sodium(), 131.2)), "L 131");
    }

    #[test]
    fn test_format_boundary_value_is_flagged() {
        assert_eq!(format(&Sample::new(sodium(), 146.0)), "H 146");
        assert_eq!(format(&Sample::new(sodium(), 132.0)), "L 132");
    }

    #[test]
    fn test_flag_uses_raw_value_not_rounded() {
        // 145.6 renders as 146 but is still inside the range
        assert_eq!(format(&Sample::new(sodium(), 145.6)), "146");
    }

    #[test]
    fn test_precision() {
        let potassium = RangeSpec::two_sided(3.5, 5.1).unwrap().with_precision(1);
        assert_eq!(format_value(&Sample::new(potassium.clone(), 4.26)), "4.3");
        assert_eq!(format(&Sample::new(potassium, 5.34)), "H 5.3");
    }

    #[test]
    fn test_result_decoration_follows_flag() {
        let glucose = RangeSpec::two_sided(70.0, 99.0)
            .unwrap()
            .with_precision(0)
            .with_result_format("{value}*")
            .unwrap();
        assert_eq!(format(&Sample::new(glucose, 120.0)), "H 120*");
    }

    #[test]
    fn test_one_sided_formatting() {
        let hdl = RangeSpec::lower_bounded(40.0, 80.0)
            .unwrap()
            .with_precision(0);
        assert_eq!(format(&Sample::new(hdl.clone(), 35.0)), "L 35");
        assert_eq!(format(&Sample::new(hdl, 95.0)), "95");
    }

    #[test]
    fn test_render_number_drops_negative_zero() {
        assert_eq!(render_number(-0.3, 0), "0");
        assert_eq!(render_number(-0.0, 2), "0.00");
        assert_eq!(render_number(-1.5, 1), "-1.5");
    }

    #[test]
    fn test_sample_display_matches_format() {
        let sample = Sample::new(sodium(), 162.0);
        assert_eq!(sample.to_string(), format(&sample));
    }
}
