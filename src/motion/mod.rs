//! Motion integration: damped progress advance, magnetic snap, settle
//! detection.

mod integrator;

pub use integrator::{MotionDelta, MotionIntegrator, MotionSnapshot};
