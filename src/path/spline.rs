//! Closed Catmull-Rom ribbon path with arc-length parameterization.
//!
//! The camera follows a fixed, non-planar loop through space. Lookups go
//! through a precomputed arc-length table so equal progress steps cover
//! equal distance along the curve; raw segment indexing would make the
//! camera speed up and slow down with control-point density.

use std::cell::Cell;

use glam::{Quat, Vec3};

use super::{PathModel, Pose};
use crate::error::ShowreelError;

/// Number of procedurally authored control points on the loop.
const CONTROL_POINTS: usize = 128;
/// Arc-length table resolution.
const ARC_SAMPLES: usize = 512;
/// Parameter look-ahead for the banking direction.
const LOOKAHEAD: f32 = 0.01;
/// Below this squared length a direction is treated as degenerate.
const DEGENERATE_EPS: f32 = 1e-12;

/// Closed interpolating spline path with damped banking.
#[derive(Debug)]
pub struct RibbonSpline {
    points: Vec<Vec3>,
    /// Cumulative normalized arc length at `ARC_SAMPLES + 1` uniform
    /// parameter values.
    arc_table: Vec<f32>,
    length: f32,
    roll_damping: f32,
    /// Last well-defined orientation, reused when the tangent degenerates.
    last_frame: Cell<(Vec3, Vec3)>,
}

impl RibbonSpline {
    /// The standard ribbon: a twisted trefoil loop.
    #[must_use]
    pub fn new(roll_damping: f32) -> Self {
        Self::build(ribbon_control_points(), roll_damping)
    }

    /// Closed spline through caller-supplied control points.
    ///
    /// At least four points are required for Catmull-Rom interpolation.
    pub fn from_points(
        points: Vec<Vec3>,
        roll_damping: f32,
    ) -> Result<Self, ShowreelError> {
        if points.len() < 4 {
            return Err(ShowreelError::Path(format!(
                "closed spline needs at least 4 control points, got {}",
                points.len()
            )));
        }
        Ok(Self::build(points, roll_damping))
    }

    fn build(points: Vec<Vec3>, roll_damping: f32) -> Self {
        let (arc_table, length) = build_arc_table(&points);
        Self {
            points,
            arc_table,
            length,
            roll_damping,
            last_frame: Cell::new((Vec3::NEG_Z, Vec3::Y)),
        }
    }

    /// Total arc length of the loop in world units.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Curve point at raw parameter `u` in `[0, 1)`.
    fn sample(&self, u: f32) -> Vec3 {
        let (i, s) = self.segment_at(u);
        let [p0, p1, p2, p3] = self.segment_points(i);
        // Uniform Catmull-Rom basis.
        0.5 * ((2.0 * p1)
            + (p2 - p0) * s
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * (s * s)
            + (3.0 * p1 - p0 - 3.0 * p2 + p3) * (s * s * s))
    }

    /// Curve derivative at raw parameter `u` in `[0, 1)`.
    fn derivative(&self, u: f32) -> Vec3 {
        let (i, s) = self.segment_at(u);
        let [p0, p1, p2, p3] = self.segment_points(i);
        0.5 * ((p2 - p0)
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * (2.0 * s)
            + (3.0 * p1 - p0 - 3.0 * p2 + p3) * (3.0 * s * s))
    }

    fn segment_at(&self, u: f32) -> (usize, f32) {
        let n = self.points.len();
        let x = u.clamp(0.0, 1.0) * n as f32;
        let i = (x.floor() as usize).min(n - 1);
        (i, x - i as f32)
    }

    fn segment_points(&self, i: usize) -> [Vec3; 4] {
        let n = self.points.len();
        [
            self.points[(i + n - 1) % n],
            self.points[i],
            self.points[(i + 1) % n],
            self.points[(i + 2) % n],
        ]
    }

    /// Map normalized arc length `t` in `[0, 1)` to the raw parameter.
    fn arc_to_param(&self, t: f32) -> f32 {
        let idx = self.arc_table.partition_point(|&v| v < t);
        if idx == 0 {
            return 0.0;
        }
        if idx >= self.arc_table.len() {
            return 1.0 - f32::EPSILON;
        }
        let lo = self.arc_table[idx - 1];
        let hi = self.arc_table[idx];
        let span = hi - lo;
        let frac = if span > 0.0 { (t - lo) / span } else { 0.0 };
        ((idx - 1) as f32 + frac) / ARC_SAMPLES as f32
    }
}

impl PathModel for RibbonSpline {
    fn pose(&self, t: f32) -> Pose {
        let t = t.rem_euclid(1.0);
        let u = self.arc_to_param(t);
        let position = self.sample(u);

        let (fallback_forward, fallback_up) = self.last_frame.get();
        let raw_tangent = self.derivative(u);
        if raw_tangent.length_squared() < DEGENERATE_EPS {
            // Coincident control points: keep the previous orientation
            // instead of emitting a NaN basis.
            return Pose {
                position,
                forward: fallback_forward,
                up: fallback_up,
            };
        }
        let tangent = raw_tangent.normalize();

        let normal = Vec3::Y.cross(tangent);
        if normal.length_squared() < DEGENERATE_EPS {
            // Tangent (anti)parallel to world up: no stable banking frame.
            return Pose {
                position,
                forward: tangent,
                up: fallback_up,
            };
        }
        let normal = normal.normalize();
        let level_up = tangent.cross(normal).normalize();

        // Bank into the turn, heavily damped to stay comfortable.
        let ahead =
            self.sample(self.arc_to_param((t + LOOKAHEAD).rem_euclid(1.0)));
        let heading = ahead - position;
        let roll = if heading.length_squared() < DEGENERATE_EPS {
            0.0
        } else {
            let dir = heading.normalize();
            dir.x.atan2(dir.z) * self.roll_damping
        };
        let up = Quat::from_axis_angle(tangent, roll) * level_up;

        self.last_frame.set((tangent, up));
        Pose {
            position,
            forward: tangent,
            up,
        }
    }
}

/// Cumulative normalized arc-length table over uniform raw parameters,
/// plus the total length.
fn build_arc_table(points: &[Vec3]) -> (Vec<f32>, f32) {
    let probe = RibbonSpline {
        points: points.to_vec(),
        arc_table: Vec::new(),
        length: 0.0,
        roll_damping: 0.0,
        last_frame: Cell::new((Vec3::NEG_Z, Vec3::Y)),
    };

    let mut table = Vec::with_capacity(ARC_SAMPLES + 1);
    table.push(0.0);
    let mut total = 0.0;
    let mut prev = probe.sample(0.0);
    for j in 1..=ARC_SAMPLES {
        let u = j as f32 / ARC_SAMPLES as f32;
        // The final sample wraps back onto the start of the closed loop.
        let point = probe.sample(if j == ARC_SAMPLES {
            1.0 - f32::EPSILON
        } else {
            u
        });
        total += point.distance(prev);
        prev = point;
        table.push(total);
    }

    if total > 0.0 {
        for v in &mut table {
            *v /= total;
        }
    } else {
        // Fully degenerate curve: identity mapping keeps pose() defined.
        for (j, v) in table.iter_mut().enumerate() {
            *v = j as f32 / ARC_SAMPLES as f32;
        }
    }
    (table, total)
}

/// Procedurally authored control points: a twisted trefoil loop with
/// vertical variation, sized to hold a full deck of cards.
fn ribbon_control_points() -> Vec<Vec3> {
    const RADIUS: f32 = 30.0;
    const SWELL: f32 = 5.0;
    const HEIGHT: f32 = 12.0;
    (0..CONTROL_POINTS)
        .map(|i| {
            let t = i as f32 / CONTROL_POINTS as f32
                * std::f32::consts::TAU;
            let ring = RADIUS + (t * 3.0).cos() * SWELL;
            Vec3::new(
                ring * t.sin(),
                HEIGHT * (t * 2.0).sin() + (t * 5.0).sin() * 2.0,
                ring * t.cos(),
            )
        })
        .collect()
}
