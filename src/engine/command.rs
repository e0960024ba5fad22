//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a wheel
//! event, an overlay button, or a programmatic call, is represented as a
//! `NavCommand`. Consumers construct commands and pass them to
//! [`ShowreelEngine::execute`](super::ShowreelEngine::execute).

use crate::deck::CardId;

/// A discrete or parameterized navigation operation.
///
/// The engine never cares *how* a command was triggered: keyboard, wheel,
/// overlay, or API all look identical:
///
/// ```ignore
/// engine.execute(NavCommand::JumpToCard { index: 2 });
/// engine.execute(NavCommand::ToggleSound);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    /// Raw wheel delta in device units; scaled, capped, and accumulated
    /// according to the input options.
    Scroll {
        /// Signed raw delta.
        delta: f32,
    },

    /// Step focus to the next card.
    NextCard,

    /// Step focus to the previous card.
    PrevCard,

    /// Jump directly to an absolute card index. Out-of-range indices are
    /// silently ignored.
    JumpToCard {
        /// Zero-based card index.
        index: usize,
    },

    /// Toggle a card's details face.
    ToggleFlip {
        /// Card to flip.
        card: CardId,
    },

    /// Toggle the active card's details face.
    FlipActive,

    /// Open the video player overlay for a card.
    OpenPlayer {
        /// Card whose media to load.
        card: CardId,
    },

    /// Close the video player overlay.
    ClosePlayer,

    /// Mark the intro sequence finished. One-way; repeated calls are
    /// no-ops.
    CompleteIntro,

    /// Toggle ambient/UI sound.
    ToggleSound,
}
