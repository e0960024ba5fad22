//! Wheel accumulation and key dispatch.
//!
//! The translator is deliberately passive on the wheel path: a raw event
//! only scales, caps, and accumulates its delta. The engine drains the
//! accumulator once per frame, so the event handler never does heavy work
//! and the host can keep its listener passive/non-blocking.

use super::{InputEvent, NavAction};
use crate::engine::NavCommand;
use crate::options::{InputOptions, KeybindingOptions};

/// Outcome of translating one raw event.
#[derive(Debug, Clone, PartialEq)]
pub struct Translated {
    /// Command to execute, if the event produced one.
    pub command: Option<NavCommand>,
    /// Whether the event was consumed. The host should suppress default
    /// handling (page scroll) for consumed events.
    pub consumed: bool,
}

impl Translated {
    const IGNORED: Self = Self {
        command: None,
        consumed: false,
    };
}

/// Converts raw input events into navigation commands.
pub struct InputTranslator {
    options: InputOptions,
    bindings: KeybindingOptions,
    pending_wheel: f32,
}

impl InputTranslator {
    /// Translator with the given scaling options and key bindings.
    #[must_use]
    pub fn new(options: InputOptions, bindings: KeybindingOptions) -> Self {
        Self {
            options,
            bindings,
            pending_wheel: 0.0,
        }
    }

    /// Replace options and bindings (preset load).
    pub fn set_options(
        &mut self,
        options: InputOptions,
        bindings: KeybindingOptions,
    ) {
        self.options = options;
        self.bindings = bindings;
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.bindings
    }

    /// Process one raw event.
    ///
    /// While the intro sequence is still running every event is ignored
    /// outright. Wheel events only accumulate; they are drained by the
    /// frame tick via [`drain_wheel`](Self::drain_wheel).
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        intro_complete: bool,
    ) -> Translated {
        if !intro_complete {
            return Translated::IGNORED;
        }

        match event {
            InputEvent::Wheel { delta } => {
                self.accumulate_wheel(*delta);
                Translated {
                    command: None,
                    consumed: true,
                }
            }
            InputEvent::Key { code } => self.translate_key(code),
        }
    }

    /// Scale, cap, and accumulate a raw wheel delta.
    pub fn accumulate_wheel(&mut self, raw_delta: f32) {
        let cap = self.options.max_event_delta;
        let scaled =
            (raw_delta * self.options.wheel_sensitivity).clamp(-cap, cap);
        self.pending_wheel += scaled;
    }

    /// Take the accumulated wheel delta, resetting it to zero.
    #[must_use]
    pub fn drain_wheel(&mut self) -> f32 {
        std::mem::take(&mut self.pending_wheel)
    }

    fn translate_key(&self, code: &str) -> Translated {
        if let Some(action) = self.bindings.lookup(code) {
            return Translated {
                command: Some(action_command(action)),
                consumed: true,
            };
        }
        if let Some(index) = digit_index(code) {
            // Out-of-range jumps are ignored downstream, but the key is
            // still ours.
            return Translated {
                command: Some(NavCommand::JumpToCard { index }),
                consumed: true,
            };
        }
        Translated::IGNORED
    }
}

/// Map a bindable action onto its command.
fn action_command(action: NavAction) -> NavCommand {
    match action {
        NavAction::NextCard => NavCommand::NextCard,
        NavAction::PrevCard => NavCommand::PrevCard,
        NavAction::FlipActive => NavCommand::FlipActive,
        NavAction::ClosePlayer => NavCommand::ClosePlayer,
        NavAction::ToggleSound => NavCommand::ToggleSound,
    }
}

/// `"Digit1"`..`"Digit9"` → card index 0..8.
fn digit_index(code: &str) -> Option<usize> {
    code.strip_prefix("Digit")
        .and_then(|d| d.parse::<usize>().ok())
        .filter(|d| (1..=9).contains(d))
        .map(|d| d - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> InputTranslator {
        InputTranslator::new(
            InputOptions::default(),
            KeybindingOptions::default(),
        )
    }

    fn wheel(delta: f32) -> InputEvent {
        InputEvent::Wheel { delta }
    }

    fn key(code: &str) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
        }
    }

    #[test]
    fn input_is_ignored_before_intro_completes() {
        let mut t = translator();
        let handled = t.handle_event(&wheel(500.0), false);
        assert_eq!(handled, Translated::IGNORED);
        assert_eq!(t.drain_wheel(), 0.0);

        let handled = t.handle_event(&key("ArrowDown"), false);
        assert_eq!(handled.command, None);
        assert!(!handled.consumed);
    }

    #[test]
    fn wheel_accumulates_without_emitting_commands() {
        let mut t = translator();
        let sensitivity = InputOptions::default().wheel_sensitivity;

        let handled = t.handle_event(&wheel(100.0), true);
        assert!(handled.consumed);
        assert_eq!(handled.command, None);
        let handled = t.handle_event(&wheel(50.0), true);
        assert!(handled.consumed);

        let drained = t.drain_wheel();
        assert!((drained - 150.0 * sensitivity).abs() < 1e-6);
        // Draining resets the accumulator.
        assert_eq!(t.drain_wheel(), 0.0);
    }

    #[test]
    fn per_event_delta_is_capped() {
        let mut t = translator();
        let cap = InputOptions::default().max_event_delta;

        let _ = t.handle_event(&wheel(1.0e6), true);
        assert!((t.drain_wheel() - cap).abs() < 1e-6);

        let _ = t.handle_event(&wheel(-1.0e6), true);
        assert!((t.drain_wheel() + cap).abs() < 1e-6);
    }

    #[test]
    fn cap_applies_per_event_not_to_the_accumulator() {
        let mut t = translator();
        let cap = InputOptions::default().max_event_delta;
        for _ in 0..5 {
            let _ = t.handle_event(&wheel(1.0e6), true);
        }
        assert!((t.drain_wheel() - 5.0 * cap).abs() < 1e-5);
    }

    #[test]
    fn bound_keys_emit_their_commands() {
        let mut t = translator();
        let handled = t.handle_event(&key("ArrowDown"), true);
        assert_eq!(handled.command, Some(NavCommand::NextCard));
        assert!(handled.consumed);

        let handled = t.handle_event(&key("KeyW"), true);
        assert_eq!(handled.command, Some(NavCommand::PrevCard));

        let handled = t.handle_event(&key("Space"), true);
        assert_eq!(handled.command, Some(NavCommand::FlipActive));
    }

    #[test]
    fn digit_keys_jump_to_absolute_indices() {
        let mut t = translator();
        let handled = t.handle_event(&key("Digit1"), true);
        assert_eq!(handled.command, Some(NavCommand::JumpToCard { index: 0 }));

        let handled = t.handle_event(&key("Digit9"), true);
        assert_eq!(handled.command, Some(NavCommand::JumpToCard { index: 8 }));

        // Digit0 has no card; not a navigation key.
        let handled = t.handle_event(&key("Digit0"), true);
        assert_eq!(handled, Translated::IGNORED);
    }

    #[test]
    fn unbound_keys_are_not_consumed() {
        let mut t = translator();
        let handled = t.handle_event(&key("KeyQ"), true);
        assert_eq!(handled, Translated::IGNORED);
    }
}
