//! Panels command implementation
//!
//! Lists every panel the configuration can resolve.

use std::io::Write;

use fakelab_engine::panel::MeasurementPanel;

use crate::config::FakelabConfig;
use crate::render;
use crate::Result;

/// Run the panels command
pub fn run(config: &FakelabConfig, out: &mut impl Write) -> Result<()> {
    let panels = config
        .panel_names()
        .iter()
        .filter_map(|name| config.resolve_panel(name).transpose())
        .collect::<fakelab_core::types::Result<Vec<MeasurementPanel>>>()?;

    render::render_panels(&panels, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_presets() {
        let mut out = Vec::new();
        run(&FakelabConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("basic-metabolic (8 measurements)"));
        assert!(text.contains("lipid (4 measurements)"));
        assert!(text.contains("complete-blood-count (5 measurements)"));
    }

    #[test]
    fn test_lists_custom_panels_first() {
        let mut config = FakelabConfig::default();
        config.panels.push(MeasurementPanel::new("custom"));
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("custom (0 measurements)"));
    }
}
