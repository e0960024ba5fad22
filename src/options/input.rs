use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Wheel input scaling.
pub struct InputOptions {
    /// Multiplier applied to raw wheel deltas (device units vary wildly
    /// between mice, trackpads, and browsers).
    #[schemars(title = "Wheel Sensitivity", range(min = 0.0001, max = 0.005), extend("step" = 0.0001))]
    pub wheel_sensitivity: f32,
    /// Cap on a single event's scaled contribution, in progress units.
    /// Bounds runaway accumulation from high-resolution wheels.
    #[schemars(title = "Max Event Delta", range(min = 0.005, max = 0.1), extend("step" = 0.001))]
    pub max_event_delta: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            wheel_sensitivity: 0.0006,
            max_event_delta: 0.018,
        }
    }
}
