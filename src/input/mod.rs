//! Input translation: raw wheel/keyboard events → navigation commands.

mod event;
mod translator;

pub use event::InputEvent;
use serde::{Deserialize, Serialize};
pub use translator::{InputTranslator, Translated};

/// Discrete navigation actions bindable to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable.
/// Parameterized commands (scroll deltas, digit jumps) are produced
/// structurally by the translator, not by key lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Step focus to the next card.
    NextCard,
    /// Step focus to the previous card.
    PrevCard,
    /// Flip the active card to its details face.
    FlipActive,
    /// Close the video player overlay.
    ClosePlayer,
    /// Toggle ambient/UI sound.
    ToggleSound,
}
