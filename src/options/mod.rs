//! Controller settings with TOML preset support.
//!
//! Orbit geometry, zoom limits, pointer mapping and key bindings are
//! consolidated here. Options serialize to/from TOML so hosts can keep
//! named presets on disk.

mod camera;
mod input;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArcballError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit geometry and zoom limits.
    pub camera: CameraOptions,
    /// Pointer and wheel mapping.
    pub input: InputOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ArcballError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))?;
        options.camera.validate()?;
        log::info!("loaded arcball options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ArcballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("saved arcball options to {}", path.display());
        Ok(())
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
    use glam::Vec3;

    use super::*;
    use crate::input::{KeyAction, MouseButton};

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("arcball-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
target = [1.0, 2.0, 3.0]
radius = 25.0

[input]
rotate_button = "right"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.target, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(opts.camera.radius, 25.0);
        assert_eq!(opts.input.rotate_button, MouseButton::Right);
        // Everything else should be default
        assert_eq!(opts.camera.zoom, 1.0);
        assert_eq!(opts.input.scroll_zoom_speed, 0.1);
        assert_eq!(opts.keybindings, KeybindingOptions::default());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::ResetView));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.camera.radius = 42.0;
        opts.input.invert_scroll = true;

        opts.save(&dir.join("close_up.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        let loaded = Options::load(&dir.join("close_up.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["close_up".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_rejects_invalid_camera() {
        let dir = scratch_dir("invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera]\nradius = -1.0\n").unwrap();

        assert!(matches!(
            Options::load(&path),
            Err(ArcballError::InvalidOptions(_))
        ));
        std::fs::write(&path, "[camera\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(ArcballError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(ArcballError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("input"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("radius").is_some());
        assert!(camera.get("max_zoom").is_some());
        assert!(camera.get("target").is_none());

        let input = &props["input"]["properties"];
        assert!(input.get("scroll_zoom_speed").is_some());
        assert!(input.get("rotate_button").is_none());
    }
}
