//! Frame delta measurement with smoothed FPS.

use web_time::Instant;

/// Longest delta handed to the integrator. A backgrounded tab resuming
/// after seconds away gets one calm 100 ms step, not a teleport.
const MAX_DT: f32 = 0.1;

/// Measures per-frame deltas and keeps an EMA-smoothed FPS estimate.
pub struct FrameTiming {
    last_frame: Option<Instant>,
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother display).
    smoothing: f32,
}

impl FrameTiming {
    /// Fresh timer; the first [`tick`](Self::tick) returns zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Seconds since the previous call, clamped to [`MAX_DT`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_frame = Some(now);

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt.min(MAX_DT)
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.tick(), 0.0);
    }

    #[test]
    fn later_ticks_are_positive_and_clamped() {
        let mut timing = FrameTiming::new();
        let _ = timing.tick();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let dt = timing.tick();
        assert!(dt > 0.0);
        assert!(dt <= MAX_DT);
    }
}
