//! Input dispatch and command execution for [`ShowreelEngine`].

use super::{NavCommand, ShowreelEngine};
use crate::input::InputEvent;

impl ShowreelEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point: hosts forward raw wheel and
    /// key events and use the returned flag to decide whether to suppress
    /// the event's default handling (e.g. page scroll).
    ///
    /// Wheel events only accumulate; nothing heavy happens here, so the
    /// host listener can stay passive. All input is ignored until the
    /// intro completes.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let handled = self
            .translator
            .handle_event(event, self.store.intro_complete());
        if let Some(command) = handled.command {
            self.execute(command);
        }
        handled.consumed
    }

    /// Execute a navigation command.
    ///
    /// Out-of-range indices and unknown card ids are silently ignored;
    /// there is no error path out of navigation.
    pub fn execute(&mut self, command: NavCommand) {
        match command {
            NavCommand::Scroll { delta } => {
                // Programmatic scrolls honor the same intro gate as raw
                // wheel events.
                if self.store.intro_complete() {
                    self.translator.accumulate_wheel(delta);
                }
            }
            NavCommand::NextCard => self.step(1),
            NavCommand::PrevCard => self.step(-1),
            NavCommand::JumpToCard { index } => {
                self.store.jump_to_card(index);
            }
            NavCommand::ToggleFlip { card } => {
                self.store.toggle_flip(&card);
            }
            NavCommand::FlipActive => {
                let active = self
                    .store
                    .deck()
                    .card(self.store.active_index())
                    .map(|card| card.id.clone());
                if let Some(id) = active {
                    self.store.toggle_flip(&id);
                }
            }
            NavCommand::OpenPlayer { card } => {
                self.store.open_player(card);
            }
            NavCommand::ClosePlayer => self.store.close_player(),
            NavCommand::CompleteIntro => self.store.complete_intro(),
            NavCommand::ToggleSound => self.store.toggle_sound(),
        }
    }

    /// Step relative to the focused card. Steps retarget from the active
    /// index, overriding any in-flight motion; walking off either end of
    /// the deck is a no-op.
    fn step(&mut self, direction: isize) {
        let next = self
            .store
            .active_index()
            .saturating_add_signed(direction);
        self.store.jump_to_card(next);
    }
}
