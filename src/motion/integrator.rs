//! Per-frame progress integration.
//!
//! The integrator is a pure tick: it receives a read-only motion snapshot
//! plus the nearest anchor and returns a delta record for the store to
//! apply. It never touches shared state itself, which keeps it trivially
//! testable at any frame rate.

use crate::options::MotionOptions;

/// Read-only motion inputs for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSnapshot {
    /// Smoothed, rendered progress.
    pub current: f32,
    /// Input-driven desired progress.
    pub target: f32,
}

/// Result of one tick; the store applies it atomically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionDelta {
    /// New rendered progress.
    pub current: f32,
    /// New target progress (the magnetic snap may have moved it).
    pub target: f32,
    /// `|target - current|` measured before this tick's advance.
    pub velocity: f32,
    /// Rest reached: current equals target within the lock window.
    pub settled: bool,
}

/// Advances rendered progress toward the input-driven target.
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    options: MotionOptions,
}

impl MotionIntegrator {
    /// Integrator with the given tuning.
    #[must_use]
    pub fn new(options: MotionOptions) -> Self {
        Self { options }
    }

    /// Current tuning.
    #[must_use]
    pub fn options(&self) -> &MotionOptions {
        &self.options
    }

    /// Replace the tuning (preset load).
    pub fn set_options(&mut self, options: MotionOptions) {
        self.options = options;
    }

    /// One frame step. `anchor` is the canonical position nearest to the
    /// rendered progress; `dt` is the frame delta in seconds.
    ///
    /// Exponential damping makes the advance frame-rate independent and
    /// monotonic: the current value approaches the target without ever
    /// overshooting it. The magnetic snap only engages near rest, so it
    /// never fights active scrolling, and it pulls the *target* onto the
    /// anchor; once locked there is nothing left to oscillate around.
    #[must_use]
    pub fn tick(
        &self,
        snapshot: MotionSnapshot,
        anchor: f32,
        dt: f32,
    ) -> MotionDelta {
        let MotionSnapshot {
            mut current,
            mut target,
        } = snapshot;
        let opts = &self.options;
        let velocity = (target - current).abs();

        let alpha = 1.0 - (-opts.damping * dt.max(0.0)).exp();
        current += (target - current) * alpha;

        if velocity < opts.velocity_epsilon
            && (current - anchor).abs() < opts.snap_radius
        {
            target += (anchor - target) * opts.snap_strength;
            if (target - anchor).abs() < opts.lock_epsilon {
                target = anchor;
            }
        }

        // Kill micro-oscillation once inside the lock window.
        let mut settled = false;
        if (target - current).abs() < opts.lock_epsilon {
            current = target;
            settled = true;
        }

        MotionDelta {
            current,
            target,
            velocity,
            settled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn integrator() -> MotionIntegrator {
        MotionIntegrator::new(MotionOptions::default())
    }

    /// Run ticks until settled or the frame limit runs out.
    fn run(
        integrator: &MotionIntegrator,
        mut snapshot: MotionSnapshot,
        anchor: f32,
        max_frames: usize,
    ) -> (MotionSnapshot, usize) {
        for frame in 0..max_frames {
            let delta = integrator.tick(snapshot, anchor, DT);
            snapshot =
                MotionSnapshot { current: delta.current, target: delta.target };
            if delta.settled {
                return (snapshot, frame + 1);
            }
        }
        (snapshot, max_frames)
    }

    #[test]
    fn converges_in_bounded_frames() {
        let integrator = integrator();
        let start = MotionSnapshot { current: 0.0, target: 1.0 };
        let (end, frames) = run(&integrator, start, 1.0, 600);
        assert!(frames < 600, "did not settle within the frame limit");
        assert_eq!(end.current, end.target);
        assert_eq!(end.target, 1.0);
    }

    #[test]
    fn never_overshoots_the_target() {
        let integrator = integrator();
        let mut snapshot = MotionSnapshot { current: 0.0, target: 1.0 };
        for _ in 0..600 {
            let delta = integrator.tick(snapshot, 1.0, DT);
            assert!(delta.current <= 1.0 + 1e-5);
            assert!(delta.current >= snapshot.current - 1e-6);
            snapshot =
                MotionSnapshot { current: delta.current, target: delta.target };
        }
    }

    #[test]
    fn snap_pulls_target_onto_nearby_anchor() {
        let integrator = integrator();
        // Resting just off the anchor, inside the snap radius.
        let start = MotionSnapshot { current: 0.97, target: 0.97 };
        let (end, _) = run(&integrator, start, 1.0, 600);
        assert_eq!(end.target, 1.0);
        assert_eq!(end.current, 1.0);
    }

    #[test]
    fn snap_never_fights_active_scrolling() {
        let integrator = integrator();
        // Large gap means high velocity: the snap must leave the target
        // alone even though current sits right on an anchor.
        let snapshot = MotionSnapshot { current: 1.0, target: 3.0 };
        let delta = integrator.tick(snapshot, 1.0, DT);
        assert_eq!(delta.target, 3.0);
        assert!(delta.velocity > 1.0);
    }

    #[test]
    fn snap_ignores_anchors_outside_the_radius() {
        let integrator = integrator();
        // Near rest but half a card away from the anchor: no pull.
        let snapshot = MotionSnapshot { current: 0.5, target: 0.5 };
        let delta = integrator.tick(snapshot, 1.0, DT);
        assert_eq!(delta.target, 0.5);
    }

    #[test]
    fn zero_dt_does_not_advance() {
        let integrator = integrator();
        let snapshot = MotionSnapshot { current: 0.0, target: 1.0 };
        let delta = integrator.tick(snapshot, 1.0, 0.0);
        assert_eq!(delta.current, 0.0);
    }

    #[test]
    fn advance_is_frame_rate_independent() {
        let integrator = integrator();
        let start = MotionSnapshot { current: 0.0, target: 1.0 };

        // One 32 ms frame vs. two 16 ms frames with a fixed target.
        let one = integrator.tick(start, 1.0, 0.032);
        let half = integrator.tick(start, 1.0, 0.016);
        let two = integrator.tick(
            MotionSnapshot { current: half.current, target: 1.0 },
            1.0,
            0.016,
        );
        assert!((one.current - two.current).abs() < 1e-4);
    }

    #[test]
    fn settled_reports_exact_equality() {
        let integrator = integrator();
        let snapshot = MotionSnapshot { current: 2.0, target: 2.0 };
        let delta = integrator.tick(snapshot, 2.0, DT);
        assert!(delta.settled);
        assert_eq!(delta.current, delta.target);
    }
}
