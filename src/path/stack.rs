//! Z-axis stack layout: position-only depth navigation.
//!
//! Cards sit on the Z axis at fixed spacing; scrolling slides the whole
//! stack past a static camera. Rotation is never applied; cards always
//! face the camera, which keeps fast scrubbing comfortable.

use glam::Vec3;

use super::{PathModel, Pose};
use crate::options::LayoutOptions;

/// Linear Z-axis stack path.
#[derive(Debug, Clone, Copy)]
pub struct ZStack {
    spacing: f32,
    camera_z: f32,
    scale_falloff: f32,
    opacity_falloff: f32,
    min_scale: f32,
}

/// A card's rendered transform in the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    /// Position and (constant) orientation.
    pub pose: Pose,
    /// Uniform scale, attenuated with camera distance.
    pub scale: f32,
    /// Opacity, fading distant cards out entirely.
    pub opacity: f32,
}

impl ZStack {
    /// Build from layout options.
    #[must_use]
    pub fn new(layout: &LayoutOptions) -> Self {
        Self {
            spacing: layout.card_spacing,
            camera_z: layout.camera_z,
            scale_falloff: layout.scale_falloff,
            opacity_falloff: layout.opacity_falloff,
            min_scale: layout.min_scale,
        }
    }

    /// Inter-card spacing in world units.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// The static camera pose: fixed on the -Z side of the stack, looking
    /// up +Z. The camera never moves or rotates; cards move to it.
    #[must_use]
    pub fn camera_pose(&self) -> Pose {
        Pose {
            position: Vec3::new(0.0, 0.0, -self.camera_z),
            forward: Vec3::Z,
            up: Vec3::Y,
        }
    }

    /// Layout for a card at `offset` progress units from the rendered
    /// position (offset = anchor - progress; the focused card is at 0).
    #[must_use]
    pub fn card_layout(&self, offset: f32) -> CardLayout {
        let z = offset * self.spacing;
        let distance = (z + self.camera_z).abs();

        // Depth cues without any rotation: distant cards shrink and fade.
        let scale = (1.0 - distance / self.scale_falloff).max(self.min_scale);
        let opacity = (1.0 - distance / self.opacity_falloff).clamp(0.0, 1.0);

        CardLayout {
            pose: Pose {
                position: Vec3::new(0.0, 0.0, z),
                forward: Vec3::Z,
                up: Vec3::Y,
            },
            scale,
            opacity,
        }
    }
}

impl PathModel for ZStack {
    fn pose(&self, t: f32) -> Pose {
        Pose {
            position: Vec3::new(0.0, 0.0, t * self.spacing),
            forward: Vec3::Z,
            up: Vec3::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> ZStack {
        ZStack::new(&LayoutOptions::default())
    }

    #[test]
    fn focused_card_sits_at_origin() {
        let layout = stack().card_layout(0.0);
        assert_eq!(layout.pose.position, Vec3::ZERO);
        assert_eq!(layout.pose.forward, Vec3::Z);
        assert_eq!(layout.pose.up, Vec3::Y);
    }

    #[test]
    fn orientation_is_constant_across_offsets() {
        let s = stack();
        for offset in [-3.0, -0.5, 0.0, 0.25, 2.0, 10.0] {
            let layout = s.card_layout(offset);
            assert_eq!(layout.pose.forward, Vec3::Z);
            assert_eq!(layout.pose.up, Vec3::Y);
        }
    }

    #[test]
    fn spacing_scales_depth() {
        let s = stack();
        let near = s.card_layout(1.0);
        let far = s.card_layout(2.0);
        assert!((near.pose.position.z - s.spacing()).abs() < 1e-6);
        assert!((far.pose.position.z - 2.0 * s.spacing()).abs() < 1e-6);
    }

    #[test]
    fn distant_cards_shrink_and_fade() {
        let s = stack();
        let focused = s.card_layout(0.0);
        let behind = s.card_layout(3.0);
        assert!(behind.scale < focused.scale);
        assert!(behind.opacity < focused.opacity);
        // Far enough away, opacity bottoms out at zero but scale is floored.
        let distant = s.card_layout(20.0);
        assert_eq!(distant.opacity, 0.0);
        assert!(distant.scale >= LayoutOptions::default().min_scale);
    }

    #[test]
    fn path_pose_is_linear_in_progress() {
        let s = stack();
        let a = s.pose(1.0);
        let b = s.pose(-2.5);
        assert!((a.position.z - s.spacing()).abs() < 1e-6);
        assert!((b.position.z + 2.5 * s.spacing()).abs() < 1e-5);
        assert_eq!(a.forward, b.forward);
    }
}
