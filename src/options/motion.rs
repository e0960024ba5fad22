use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Motion integrator tuning.
pub struct MotionOptions {
    /// Exponential damping constant for progress, per second. Higher is
    /// snappier.
    #[schemars(title = "Damping", range(min = 1.0, max = 12.0), extend("step" = 0.5))]
    pub damping: f32,
    /// Secondary damping for the rendered rig transform, per second.
    /// Decouples visual easing from progress integration.
    #[schemars(title = "Rig Damping", range(min = 2.0, max = 30.0), extend("step" = 0.5))]
    pub rig_damping: f32,
    /// Distance from the nearest anchor (in progress units) within which
    /// the magnetic snap engages.
    #[schemars(title = "Snap Radius", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub snap_radius: f32,
    /// Fraction of the remaining gap the snap closes per frame.
    #[schemars(title = "Snap Strength", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub snap_strength: f32,
    /// Below this |target - current| the motion counts as near-rest and
    /// snapping may engage.
    #[schemars(skip)]
    pub velocity_epsilon: f32,
    /// Within this distance the target hard-locks onto the anchor and the
    /// integrator settles.
    #[schemars(skip)]
    pub lock_epsilon: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            damping: 4.0,
            rig_damping: 10.0,
            snap_radius: 0.05,
            snap_strength: 0.12,
            velocity_epsilon: 0.02,
            lock_epsilon: 1e-3,
        }
    }
}
