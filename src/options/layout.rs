use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Path model geometry and depth attenuation.
pub struct LayoutOptions {
    /// Z-axis distance between adjacent cards, in world units.
    #[schemars(title = "Card Spacing", range(min = 5.0, max = 40.0), extend("step" = 1.0))]
    pub card_spacing: f32,
    /// Static camera position on the +Z axis.
    #[schemars(skip)]
    pub camera_z: f32,
    /// Distance at which card scale would reach zero (floored by
    /// `min_scale`).
    #[schemars(title = "Scale Falloff", range(min = 20.0, max = 120.0), extend("step" = 5.0))]
    pub scale_falloff: f32,
    /// Distance at which card opacity reaches zero.
    #[schemars(title = "Opacity Falloff", range(min = 10.0, max = 100.0), extend("step" = 5.0))]
    pub opacity_falloff: f32,
    /// Minimum card scale regardless of distance.
    #[schemars(skip)]
    pub min_scale: f32,
    /// Banking roll scale on the ribbon path. Kept small; aggressive
    /// banking is disorienting.
    #[schemars(title = "Roll Damping", range(min = 0.0, max = 0.5), extend("step" = 0.05))]
    pub roll_damping: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            card_spacing: 15.0,
            camera_z: 10.0,
            scale_falloff: 60.0,
            opacity_falloff: 40.0,
            min_scale: 0.3,
            roll_damping: 0.1,
        }
    }
}
