//! Forcing named measurements to fixed values after generation.

use std::collections::BTreeMap;

use fakelab_core::types::{LabError, Result};
use tracing::debug;

use super::result::PanelResult;

/// Measurement name to forced value, supplied per call.
///
/// Ordered so that unmatched names are always reported in the same order.
pub type OverrideMap = BTreeMap<String, f64>;

/// Replaces the value of every result named in `overrides` and reclassifies
/// it against that measurement's own range.
///
/// Results whose names are not overridden pass through unchanged, and the
/// input slice is never modified. All keys are validated before any result
/// is produced.
///
/// # Errors
///
/// - `LabError::InvalidOverride` if a forced value is NaN or infinite
/// - `LabError::AmbiguousMeasurement` if a key names more than one result
/// - `LabError::MeasurementNotFound` listing every key that names no result
///
/// # Examples
///
/// ```rust
/// use fakelab_core::range::{Classification, RangeSpec};
/// use fakelab_engine::panel::{apply_overrides, Measurement, OverrideMap, PanelResult};
///
/// let sodium = Measurement::new(
///     "Sodium",
///     RangeSpec::two_sided(132.0, 146.0).unwrap().with_precision(0),
///     "mmol/L",
/// );
/// let results = vec![PanelResult::new(sodium, 140.0)];
///
/// let forced = apply_overrides(&results, OverrideMap::from([("Sodium".into(), 162.0)])).unwrap();
/// assert_eq!(forced[0].classification(), Classification::Above);
/// assert_eq!(forced[0].formatted(), "H 162");
///
/// let missing = apply_overrides(&results, OverrideMap::from([("Glucose".into(), 999.0)]));
/// assert!(missing.is_err());
/// ```
pub fn apply_overrides(results: &[PanelResult], overrides: OverrideMap) -> Result<Vec<PanelResult>> {
    let mut missing = Vec::new();
    for (name, &value) in &overrides {
        if !value.is_finite() {
            return Err(LabError::InvalidOverride {
                name: name.clone(),
                value,
            });
        }
        match results.iter().filter(|r| r.name() == name).count() {
            0 => missing.push(name.clone()),
            1 => {}
            count => {
                return Err(LabError::AmbiguousMeasurement {
                    name: name.clone(),
                    count,
                })
            }
        }
    }
    if !missing.is_empty() {
        return Err(LabError::MeasurementNotFound { names: missing });
    }

    Ok(results
        .iter()
        .map(|result| match overrides.get(result.name()) {
            Some(&value) => {
                let forced = result.with_value(value);
                debug!(
                    measurement = result.name(),
                    sampled = result.value(),
                    forced = value,
                    classification = %forced.classification(),
                    "applied override"
                );
                forced
            }
            None => result.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Measurement;
    use fakelab_core::range::{Classification, RangeSpec};

    fn sodium_result(value: f64) -> PanelResult {
        PanelResult::new(
            Measurement::new(
                "Sodium",
                RangeSpec::two_sided(132.0, 146.0).unwrap().with_precision(0),
                "mmol/L",
            ),
            value,
        )
    }

    fn potassium_result(value: f64) -> PanelResult {
        PanelResult::new(
            Measurement::new(
                "Potassium",
                RangeSpec::two_sided(3.5, 5.1).unwrap(),
                "mmol/L",
            ),
            value,
        )
    }

    fn overrides(entries: &[(&str, f64)]) -> OverrideMap {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_override_reclassifies() {
        let results = vec![sodium_result(140.0)];
        assert_eq!(results[0].classification(), Classification::Within);

        let forced = apply_overrides(&results, overrides(&[("Sodium", 162.0)])).unwrap();
        assert_eq!(forced[0].value(), 162.0);
        assert_eq!(forced[0].classification(), Classification::Above);
        assert_eq!(forced[0].formatted(), "H 162");
        assert_eq!(forced[0].sample().range, results[0].sample().range);
    }

    #[test]
    fn test_override_can_clear_a_flag() {
        let results = vec![sodium_result(120.0)];
        assert_eq!(results[0].formatted(), "L 120");
        let forced = apply_overrides(&results, overrides(&[("Sodium", 139.0)])).unwrap();
        assert_eq!(forced[0].formatted(), "139");
    }

    #[test]
    fn test_unmatched_results_pass_through() {
        let results = vec![sodium_result(140.0), potassium_result(4.2)];
        let forced = apply_overrides(&results, overrides(&[("Sodium", 130.0)])).unwrap();
        assert_eq!(forced[1], results[1]);
        assert_eq!(forced[0].classification(), Classification::Below);
    }

    #[test]
    fn test_input_is_not_modified() {
        let results = vec![sodium_result(140.0)];
        let snapshot = results.clone();
        let _ = apply_overrides(&results, overrides(&[("Sodium", 162.0)])).unwrap();
        assert_eq!(results, snapshot);
    }

    #[test]
    fn test_empty_overrides_is_identity() {
        let results = vec![sodium_result(140.0), potassium_result(4.2)];
        assert_eq!(apply_overrides(&results, OverrideMap::new()).unwrap(), results);
    }

    #[test]
    fn test_unknown_names_are_all_reported() {
        let results = vec![sodium_result(140.0)];
        let err = apply_overrides(
            &results,
            overrides(&[("Zinc", 1.0), ("Sodium", 150.0), ("Glucose", 999.0)]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LabError::MeasurementNotFound {
                names: vec!["Glucose".to_string(), "Zinc".to_string()]
            }
        );
    }

    #[test]
    fn test_duplicate_names_are_ambiguous() {
        let results = vec![sodium_result(140.0), sodium_result(141.0)];
        let err = apply_overrides(&results, overrides(&[("Sodium", 150.0)])).unwrap_err();
        assert_eq!(
            err,
            LabError::AmbiguousMeasurement {
                name: "Sodium".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn test_duplicates_untouched_by_overrides_are_fine() {
        let results = vec![sodium_result(140.0), sodium_result(141.0), potassium_result(4.0)];
        let forced = apply_overrides(&results, overrides(&[("Potassium", 6.0)])).unwrap();
        assert_eq!(forced[2].formatted(), "H 6.0");
    }

    #[test]
    fn test_non_finite_override_rejected() {
        let results = vec![sodium_result(140.0)];
        let err = apply_overrides(&results, overrides(&[("Sodium", f64::INFINITY)])).unwrap_err();
        assert!(matches!(err, LabError::InvalidOverride { .. }));
    }
}
