//! Single source of truth for navigation state.
//!
//! All mutation goes through atomic single-concern setters; each setter is
//! idempotent and touches exactly one field. Consumers never observe the
//! mutable record directly; once per frame the engine calls
//! [`publish`](NavigationStore::publish), which pushes a consolidated
//! [`NavSnapshot`] through a lock-free triple buffer. Progress and active
//! index always land in the same snapshot, so the presentation layer can
//! never read a progress value paired with a stale index.

mod state;

use std::sync::Arc;

use rustc_hash::FxHashSet;
pub use state::{FieldVersions, NavSnapshot, PlayerState};
use state::NavigationState;

use crate::deck::{CardId, Deck};
use crate::motion::MotionDelta;

/// Tracks which concerns changed since the last publication.
#[derive(Debug, Clone, Copy, Default)]
struct DirtyFlags {
    motion: bool,
    flipped: bool,
    player: bool,
    intro: bool,
    sound: bool,
}

/// Lock-free reading end of the snapshot channel.
///
/// Handed to the presentation layer once; `latest` never blocks and never
/// observes a half-written frame.
pub struct SnapshotReader {
    output: triple_buffer::Output<NavSnapshot>,
}

impl SnapshotReader {
    /// The most recently published snapshot.
    pub fn latest(&mut self) -> &NavSnapshot {
        self.output.read()
    }
}

/// Owns the deck and the navigation state.
pub struct NavigationStore {
    deck: Deck,
    state: NavigationState,
    versions: FieldVersions,
    dirty: DirtyFlags,
    frame: u64,
    writer: triple_buffer::Input<NavSnapshot>,
    reader: Option<SnapshotReader>,
}

impl NavigationStore {
    /// Store focused on the deck's first card.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let initial = deck.min_progress();
        let (writer, output) =
            triple_buffer::triple_buffer(&NavSnapshot::default());
        Self {
            deck,
            state: NavigationState::at_progress(initial),
            versions: FieldVersions::default(),
            dirty: DirtyFlags::default(),
            frame: 0,
            writer,
            reader: Some(SnapshotReader { output }),
        }
    }

    /// The immutable card catalog.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Take the snapshot reader. Returns `None` after the first call.
    pub fn take_reader(&mut self) -> Option<SnapshotReader> {
        self.reader.take()
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// Input-driven desired progress.
    #[must_use]
    pub fn target_progress(&self) -> f32 {
        self.state.target_progress
    }

    /// Smoothed, rendered progress.
    #[must_use]
    pub fn current_progress(&self) -> f32 {
        self.state.current_progress
    }

    /// Index of the focused card.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    /// Whether the intro sequence has finished.
    #[must_use]
    pub fn intro_complete(&self) -> bool {
        self.state.intro_complete
    }

    /// Whether a card is showing its details face.
    #[must_use]
    pub fn is_flipped(&self, id: &CardId) -> bool {
        self.state.flipped.contains(id)
    }

    /// Player overlay state.
    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    /// Sound preference.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.state.sound_enabled
    }

    // ── Setters: one concern each ───────────────────────────────────

    /// Set the desired progress, clamped to the deck's anchor range.
    pub fn set_target_progress(&mut self, progress: f32) {
        let clamped = self.deck.clamp_progress(progress);
        if clamped != self.state.target_progress {
            self.state.target_progress = clamped;
            self.dirty.motion = true;
        }
    }

    /// Apply one integrator tick's result: current and target together.
    pub fn apply_motion(&mut self, delta: MotionDelta) {
        if delta.current != self.state.current_progress
            || delta.target != self.state.target_progress
        {
            self.state.current_progress = delta.current;
            self.state.target_progress = delta.target;
            self.dirty.motion = true;
        }
    }

    /// Record the focused card index. Ignores out-of-range values.
    pub fn set_active_index(&mut self, index: usize) {
        if index < self.deck.len() && index != self.state.active_index {
            self.state.active_index = index;
            self.dirty.motion = true;
        }
    }

    /// Retarget to a card's anchor. Out-of-range indices are silently
    /// ignored. No error path, no state change.
    pub fn jump_to_card(&mut self, index: usize) {
        if let Some(anchor) = self.deck.anchor(index) {
            self.set_target_progress(anchor);
        }
    }

    /// Toggle a card's details face. Unknown ids are silently ignored.
    pub fn toggle_flip(&mut self, id: &CardId) {
        if self.deck.index_of(id).is_none() {
            return;
        }
        let mut flipped: FxHashSet<CardId> =
            self.state.flipped.as_ref().clone();
        if !flipped.remove(id) {
            let _ = flipped.insert(id.clone());
        }
        self.state.flipped = Arc::new(flipped);
        self.dirty.flipped = true;
    }

    /// Open the player overlay for a card. Unknown ids are ignored;
    /// reopening the same card is a no-op.
    pub fn open_player(&mut self, id: CardId) {
        if self.deck.index_of(&id).is_none() {
            return;
        }
        let next = PlayerState {
            open: true,
            card: Some(id),
        };
        if next != self.state.player {
            self.state.player = next;
            self.dirty.player = true;
        }
    }

    /// Close the player overlay. Idempotent.
    pub fn close_player(&mut self) {
        if self.state.player.open || self.state.player.card.is_some() {
            self.state.player = PlayerState::default();
            self.dirty.player = true;
        }
    }

    /// One-way latch: mark the intro sequence finished.
    pub fn complete_intro(&mut self) {
        if !self.state.intro_complete {
            self.state.intro_complete = true;
            self.dirty.intro = true;
        }
    }

    /// Toggle the sound preference.
    pub fn toggle_sound(&mut self) {
        self.state.sound_enabled = !self.state.sound_enabled;
        self.dirty.sound = true;
    }

    // ── Publication ─────────────────────────────────────────────────

    /// Publish one consistent snapshot of the full state.
    ///
    /// Bumps the version counter of every concern dirtied since the last
    /// publication, then clears the dirty flags. Call exactly once per
    /// frame, after all of the frame's mutations.
    pub fn publish(&mut self) {
        self.frame += 1;
        if self.dirty.motion {
            self.versions.motion += 1;
        }
        if self.dirty.flipped {
            self.versions.flipped += 1;
        }
        if self.dirty.player {
            self.versions.player += 1;
        }
        if self.dirty.intro {
            self.versions.intro += 1;
        }
        if self.dirty.sound {
            self.versions.sound += 1;
        }
        self.dirty = DirtyFlags::default();

        let snapshot = NavSnapshot {
            frame: self.frame,
            current_progress: self.state.current_progress,
            target_progress: self.state.target_progress,
            active_index: self.state.active_index,
            segment_percent: self
                .deck
                .segment_percent(self.state.current_progress),
            intro_complete: self.state.intro_complete,
            sound_enabled: self.state.sound_enabled,
            flipped: Arc::clone(&self.state.flipped),
            player: self.state.player.clone(),
            versions: self.versions,
        };
        self.writer.write(snapshot);
    }
}
