//! Centralized tuning options with TOML preset support.
//!
//! Every numeric constant the motion feel depends on (damping, snap radii,
//! sensitivities, spacing) lives here rather than at its use site, so the
//! feel can be tuned from presets without touching code. Options serialize
//! to/from TOML; the JSON schema drives tuning-panel UIs.

mod input;
mod keybindings;
mod layout;
mod motion;

use std::path::Path;

pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ShowreelError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Motion integrator tuning.
    pub motion: MotionOptions,
    /// Wheel input scaling.
    pub input: InputOptions,
    /// Path geometry and depth attenuation.
    pub layout: LayoutOptions,
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
    pub fn load(path: &Path) -> Result<Self, ShowreelError> {
        let content =
            std::fs::read_to_string(path).map_err(ShowreelError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ShowreelError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShowreelError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShowreelError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ShowreelError::Io)?;
        }
        std::fs::write(path, content).map_err(ShowreelError::Io)
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
