//! Path models: parametric maps from scroll progress to 3D pose.
//!
//! Two interchangeable implementations exist. [`ZStack`] is the wired
//! default: position-only depth navigation with zero rotation.
//! [`RibbonSpline`] is the cinematic alternative, a closed Catmull-Rom
//! camera path with damped banking, selected at build time via the
//! `ribbon` feature.

mod spline;
mod stack;

use glam::Vec3;
pub use spline::RibbonSpline;
pub use stack::{CardLayout, ZStack};

/// Position and orientation basis at a progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// Facing direction (unit length).
    pub forward: Vec3,
    /// Up direction (unit length, orthogonal to `forward`).
    pub up: Vec3,
}

impl Pose {
    /// Pose at the origin, facing -Z with +Y up.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        forward: Vec3::NEG_Z,
        up: Vec3::Y,
    };
}

/// Parametric map from a scalar progress value to a 3D pose.
///
/// Implementations must be defined and continuous for all real `t`,
/// wrapping or extending internally, so callers never pre-condition the
/// parameter.
pub trait PathModel {
    /// Pose at progress `t`.
    fn pose(&self, t: f32) -> Pose;
}
