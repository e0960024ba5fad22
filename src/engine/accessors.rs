//! Read-only query methods for [`ShowreelEngine`].

use super::ShowreelEngine;
use crate::deck::{CardDescriptor, Deck};
use crate::rig::RigFrame;
use crate::store::{NavigationStore, SnapshotReader};

impl ShowreelEngine {
    /// The immutable card catalog.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.store.deck()
    }

    /// Read-only access to the navigation store.
    #[must_use]
    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    /// Index of the focused card.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.store.active_index()
    }

    /// The focused card's descriptor.
    #[must_use]
    pub fn active_card(&self) -> Option<&CardDescriptor> {
        self.store.deck().card(self.store.active_index())
    }

    /// Smoothed, rendered progress.
    #[must_use]
    pub fn current_progress(&self) -> f32 {
        self.store.current_progress()
    }

    /// Input-driven desired progress.
    #[must_use]
    pub fn target_progress(&self) -> f32 {
        self.store.target_progress()
    }

    /// Transforms produced by the most recent tick, if any.
    #[must_use]
    pub fn rig_frame(&self) -> Option<&RigFrame> {
        self.last_frame.as_ref()
    }

    /// Take the lock-free snapshot reader for the presentation layer.
    /// Returns `None` after the first call.
    pub fn snapshot_reader(&mut self) -> Option<SnapshotReader> {
        self.store.take_reader()
    }

    /// Smoothed frames-per-second estimate from the internal timer.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}
