//! Navigation state record and published snapshots.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::deck::CardId;

/// Video player overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PlayerState {
    /// Whether the player overlay is open.
    pub open: bool,
    /// Card whose media is loaded, when open.
    pub card: Option<CardId>,
}

/// Per-concern monotonic version counters.
///
/// A subscriber caches the counter for the concern it renders and skips
/// work while it is unchanged: the fine-grained alternative to diffing a
/// snapshot that is republished at 60 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FieldVersions {
    /// Progress values and active index (batched; always change together).
    pub motion: u64,
    /// Flipped-card set membership.
    pub flipped: u64,
    /// Player overlay state.
    pub player: u64,
    /// Intro-complete latch.
    pub intro: u64,
    /// Sound preference.
    pub sound: u64,
}

/// Immutable per-frame snapshot published to the presentation layer.
///
/// Serializable so web overlays can consume it as JSON verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NavSnapshot {
    /// Publication counter; increments every frame.
    pub frame: u64,
    /// Smoothed, rendered progress.
    pub current_progress: f32,
    /// Input-driven desired progress.
    pub target_progress: f32,
    /// Index of the focused card. Consistent with `current_progress`
    /// within the same snapshot, by construction.
    pub active_index: usize,
    /// Progress through the current inter-card segment, 0–100.
    pub segment_percent: f32,
    /// Whether the intro sequence has finished.
    pub intro_complete: bool,
    /// Sound preference.
    pub sound_enabled: bool,
    /// Cards currently showing their details face.
    pub flipped: Arc<FxHashSet<CardId>>,
    /// Player overlay state.
    pub player: PlayerState,
    /// Per-concern change counters.
    pub versions: FieldVersions,
}

/// The single shared mutable navigation record. Only the store mutates it.
#[derive(Debug, Clone)]
pub(crate) struct NavigationState {
    pub(crate) target_progress: f32,
    pub(crate) current_progress: f32,
    pub(crate) active_index: usize,
    pub(crate) intro_complete: bool,
    pub(crate) flipped: Arc<FxHashSet<CardId>>,
    pub(crate) player: PlayerState,
    pub(crate) sound_enabled: bool,
}

impl NavigationState {
    /// Initial state focused on the first card.
    pub(crate) fn at_progress(progress: f32) -> Self {
        Self {
            target_progress: progress,
            current_progress: progress,
            active_index: 0,
            intro_complete: false,
            flipped: Arc::default(),
            player: PlayerState::default(),
            sound_enabled: true,
        }
    }
}
