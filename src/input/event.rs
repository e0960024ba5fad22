//! Platform-agnostic input events.
//!
//! These are fed into an [`InputTranslator`](super::InputTranslator) which
//! converts them into [`NavCommand`](crate::engine::NavCommand) values.

/// A raw navigation input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Wheel scroll delta in device units (browser/device dependent;
    /// positive advances toward later cards). Normalized by
    /// [`InputOptions::wheel_sensitivity`](crate::options::InputOptions).
    Wheel {
        /// Signed raw delta.
        delta: f32,
    },
    /// Physical key press in the `winit::keyboard::KeyCode` debug format:
    /// `"ArrowDown"`, `"KeyW"`, `"Digit3"`, `"Space"`.
    Key {
        /// Physical key string.
        code: String,
    },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it maps to a navigation input.
    ///
    /// Line deltas are scaled to roughly match pixel deltas, and the sign
    /// is flipped so that scrolling down advances the reel.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * 100.0,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                Some(Self::Wheel { delta })
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed =>
            {
                match event.physical_key {
                    PhysicalKey::Code(code) => Some(Self::Key {
                        code: format!("{code:?}"),
                    }),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        }
    }
}
