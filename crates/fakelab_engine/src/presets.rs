//! Built-in measurement panels.
//!
//! Reference ranges follow common adult values. Glucose carries a `*`
//! marker because its range assumes a fasting sample.

use fakelab_core::range::{RangeKind, RangeSpec};
use fakelab_core::types::Result;

use crate::panel::{Measurement, MeasurementPanel};

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: [&str; 3] = ["basic-metabolic", "lipid", "complete-blood-count"];

fn measurement(
    name: &str,
    kind: RangeKind,
    (low, high): (f64, f64),
    precision: usize,
    units: &str,
) -> Result<Measurement> {
    let range = RangeSpec::new(kind, low, high)?.with_precision(precision);
    Ok(Measurement::new(name, range, units))
}

fn panel(name: &str, measurements: Vec<Result<Measurement>>) -> Result<MeasurementPanel> {
    measurements
        .into_iter()
        .try_fold(MeasurementPanel::new(name), |panel, m| Ok(panel.with_measurement(m?)))
}

/// Basic metabolic panel: electrolytes, kidney function and glucose.
pub fn basic_metabolic() -> Result<MeasurementPanel> {
    use RangeKind::TwoSided;

    let glucose = RangeSpec::two_sided(70.0, 99.0)?
        .with_precision(0)
        .with_result_format("{value}*")?;

    panel(
        "basic-metabolic",
        vec![
            measurement("Sodium", TwoSided, (132.0, 146.0), 0, "mmol/L"),
            measurement("Potassium", TwoSided, (3.5, 5.1), 1, "mmol/L"),
            measurement("Chloride", TwoSided, (98.0, 107.0), 0, "mmol/L"),
            measurement("Carbon Dioxide", TwoSided, (22.0, 29.0), 0, "mmol/L"),
            measurement("Blood Urea Nitrogen", TwoSided, (7.0, 20.0), 0, "mg/dL"),
            measurement("Creatinine", TwoSided, (0.6, 1.3), 2, "mg/dL"),
            Ok(Measurement::new("Glucose", glucose, "mg/dL")),
            measurement("Calcium", TwoSided, (8.6, 10.3), 1, "mg/dL"),
        ],
    )
}

/// Lipid panel: one-sided cholesterol and triglyceride limits.
pub fn lipid() -> Result<MeasurementPanel> {
    use RangeKind::{LowerBounded, UpperBounded};

    panel(
        "lipid",
        vec![
            measurement("Total Cholesterol", UpperBounded, (100.0, 240.0), 0, "mg/dL"),
            measurement("HDL Cholesterol", LowerBounded, (40.0, 100.0), 0, "mg/dL"),
            measurement("LDL Cholesterol", UpperBounded, (50.0, 130.0), 0, "mg/dL"),
            measurement("Triglycerides", UpperBounded, (50.0, 150.0), 0, "mg/dL"),
        ],
    )
}

/// Complete blood count.
pub fn complete_blood_count() -> Result<MeasurementPanel> {
    use RangeKind::TwoSided;

    panel(
        "complete-blood-count",
        vec![
            measurement("White Blood Cells", TwoSided, (4.5, 11.0), 1, "x10^3/uL"),
            measurement("Red Blood Cells", TwoSided, (4.2, 5.9), 2, "x10^6/uL"),
            measurement("Hemoglobin", TwoSided, (12.0, 17.5), 1, "g/dL"),
            measurement("Hematocrit", TwoSided, (36.0, 52.0), 0, "%"),
            measurement("Platelets", TwoSided, (150.0, 400.0), 0, "x10^3/uL"),
        ],
    )
}

/// Every built-in panel, in [`PRESET_NAMES`] order.
pub fn all() -> Result<Vec<MeasurementPanel>> {
    Ok(vec![basic_metabolic()?, lipid()?, complete_blood_count()?])
}

/// Looks up a built-in panel by name.
pub fn by_name(name: &str) -> Result<Option<MeasurementPanel>> {
    Ok(all()?.into_iter().find(|panel| panel.name() == name))
}
