//! Centralized rig options with TOML preset support.
//!
//! Sensitivities, projection, input scaling and frame pacing are
//! consolidated here. Options serialize to/from TOML so hosts can ship
//! navigation presets alongside their assets.

mod camera;
mod input;
mod timing;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Rig sensitivities and projection parameters.
    pub camera: CameraOptions,
    /// Raw event to axis-unit conversion.
    pub input: InputOptions,
    /// Frame pacing.
    pub timing: TimingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
zoom_sensitivity = 250.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.zoom_sensitivity, 250.0);
        // Everything else should be default
        assert_eq!(opts.camera.rotation_sensitivity, 50.0);
        assert_eq!(opts.camera.distance, 10.0);
        assert_eq!(opts.input, InputOptions::default());
    }

    #[test]
    fn defaults_match_documented_sensitivities() {
        let camera = CameraOptions::default();
        assert_eq!(camera.rotation_sensitivity, 50.0);
        assert_eq!(camera.move_sensitivity, 5.0);
        assert_eq!(camera.zoom_sensitivity, 1000.0);
        assert_eq!(camera.distance, 10.0);
    }

    #[test]
    fn save_then_load_through_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("close.toml");

        let mut opts = Options::default();
        opts.camera.distance = 2.5;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[camera\ndistance = ").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = Options::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, RigError::Io(_)));
    }

    #[test]
    fn list_presets_sorts_toml_stems() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["orbit.toml", "close.toml", "notes.txt"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(Options::list_presets(dir.path()), vec!["close", "orbit"]);
        assert!(Options::list_presets(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("input"));
        assert!(props.contains_key("timing"));

        // Camera should have exposed fields but not skipped ones
        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotation_sensitivity").is_some());
        assert!(camera.get("distance").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("zfar").is_none());
    }
}
