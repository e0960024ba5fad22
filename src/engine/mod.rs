//! Engine composition: store, input translator, motion integrator, rig.
//!
//! Single-threaded by design. All shared state is mutated from the
//! caller's thread; "waiting" for motion to finish is expressed as state
//! (the integrator's settle flag), never as blocking. Per-frame work stays
//! O(cards), which preserves 60 Hz framing at realistic deck sizes.

mod accessors;
mod command;
mod input;

pub use command::NavCommand;

use std::path::Path;

use crate::deck::Deck;
use crate::error::ShowreelError;
use crate::input::InputTranslator;
use crate::motion::{MotionIntegrator, MotionSnapshot};
use crate::options::Options;
use crate::rig::{PoseRig, RigFrame};
use crate::store::NavigationStore;
use crate::util::FrameTiming;

/// Scroll-driven card navigation engine.
///
/// Owns the navigation state and drives it from two inputs: raw events
/// (forwarded by the host via [`handle_input`](Self::handle_input)) and a
/// per-frame clock ([`frame`](Self::frame), or [`tick`](Self::tick) with
/// an explicit delta for deterministic stepping).
///
/// ```ignore
/// let mut engine = ShowreelEngine::new(Deck::demo());
/// let mut reader = engine.snapshot_reader().unwrap();
/// engine.execute(NavCommand::CompleteIntro);
/// loop {
///     for event in host_events() {
///         let _ = engine.handle_input(&event);
///     }
///     engine.frame();
///     render(reader.latest(), engine.rig_frame());
/// }
/// ```
pub struct ShowreelEngine {
    store: NavigationStore,
    translator: InputTranslator,
    integrator: MotionIntegrator,
    rig: PoseRig,
    timing: FrameTiming,
    last_frame: Option<RigFrame>,
}

impl ShowreelEngine {
    /// Engine with default options.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self::with_options(deck, Options::default())
    }

    /// Engine with explicit options.
    #[must_use]
    pub fn with_options(deck: Deck, options: Options) -> Self {
        let store = NavigationStore::new(deck);
        let initial = store.current_progress();
        Self {
            translator: InputTranslator::new(
                options.input.clone(),
                options.keybindings.clone(),
            ),
            integrator: MotionIntegrator::new(options.motion.clone()),
            rig: PoseRig::new(
                &options.layout,
                options.motion.rig_damping,
                initial,
            ),
            timing: FrameTiming::new(),
            store,
            last_frame: None,
        }
    }

    /// Deterministic frame step with an explicit `dt` in seconds.
    pub fn tick(&mut self, dt: f32) {
        // 1. Drain accumulated wheel input into the target.
        let wheel = self.translator.drain_wheel();
        if wheel != 0.0 {
            self.store
                .set_target_progress(self.store.target_progress() + wheel);
        }

        // 2. Advance current toward target; magnetic snap near rest.
        let snapshot = MotionSnapshot {
            current: self.store.current_progress(),
            target: self.store.target_progress(),
        };
        let (_, anchor) = self.store.deck().nearest_anchor(snapshot.current);
        let delta = self.integrator.tick(snapshot, anchor, dt);
        self.store.apply_motion(delta);

        // 3. Apply poses; derive the focused card.
        let (frame, changed) = self.rig.frame(
            self.store.deck(),
            self.store.current_progress(),
            dt,
        );
        if let Some(index) = changed {
            self.store.set_active_index(index);
        }
        self.last_frame = Some(frame);

        // 4. Publish one consistent snapshot (progress + active index
        //    together).
        self.store.publish();
    }

    /// Frame step measuring `dt` from the internal frame timer.
    pub fn frame(&mut self) {
        let dt = self.timing.tick();
        self.tick(dt);
    }

    /// Swap in a full options set (translator, integrator, and rig).
    ///
    /// The rig is rebuilt with the new layout but keeps its rendered
    /// progress, so a preset change never makes the view jump.
    pub fn apply_options(&mut self, options: &Options) {
        self.translator.set_options(
            options.input.clone(),
            options.keybindings.clone(),
        );
        self.integrator.set_options(options.motion.clone());
        self.rig = PoseRig::new(
            &options.layout,
            options.motion.rig_damping,
            self.rig.rendered_progress(),
        );
    }

    /// Load an options preset from TOML and apply it.
    pub fn load_options_preset(
        &mut self,
        path: &Path,
    ) -> Result<(), ShowreelError> {
        match Options::load(path) {
            Ok(options) => {
                self.apply_options(&options);
                log::info!(
                    "loaded options preset '{}'",
                    path.display()
                );
                Ok(())
            }
            Err(e) => {
                log::error!(
                    "failed to load options preset '{}': {e}",
                    path.display()
                );
                Err(e)
            }
        }
    }
}
