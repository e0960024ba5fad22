use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::NavAction;

/// Keyboard binding options: physical key string → navigation action.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"ArrowDown"`, `"KeyW"`, `"Space"`, `"Escape"`. Serde serializes actions
/// as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// ArrowDown = "next_card"
/// Space = "flip_active"
/// ```
///
/// Digit keys are intentionally not bindable: `Digit1`..`Digit9` always
/// jump to the matching card index and are handled structurally by the
/// input translator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Forward map: key string → action.
    bindings: HashMap<String, NavAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowDown".into(), NavAction::NextCard),
            ("KeyS".into(), NavAction::NextCard),
            ("ArrowUp".into(), NavAction::PrevCard),
            ("KeyW".into(), NavAction::PrevCard),
            ("Space".into(), NavAction::FlipActive),
            ("Escape".into(), NavAction::ClosePlayer),
            ("KeyM".into(), NavAction::ToggleSound),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavAction> {
        self.bindings.get(key).copied()
    }

    /// Bind (or rebind) a key to an action.
    pub fn bind(&mut self, key: &str, action: NavAction) {
        let _ = self.bindings.insert(key.to_owned(), action);
    }
}
