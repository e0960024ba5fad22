// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float tolerance comparisons are the norm in motion math
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::suboptimal_flops)]

//! Scroll-driven 3D card navigation engine.
//!
//! Showreel turns raw wheel/keyboard input into a stable, bounded,
//! perceptually smooth navigation state (a focused card index plus
//! fractional scroll progress) and maps that state onto 3D transforms
//! every frame. It is the motion core of an immersive portfolio reel; the
//! presentation layer (DOM overlay, WebGL scene, audio) consumes published
//! snapshots and renders them.
//!
//! # Key entry points
//!
//! - [`engine::ShowreelEngine`] - input handling, per-frame integration,
//!   pose application
//! - [`deck::Deck`] - the immutable card catalog
//! - [`store::SnapshotReader`] - lock-free state reads for the
//!   presentation layer
//! - [`options::Options`] - motion/input/layout tuning with TOML presets
//!
//! # Architecture
//!
//! A single-threaded pipeline runs once per frame: the input translator
//! drains its wheel accumulator into the target progress, the motion
//! integrator advances the rendered progress with exponential damping and
//! a magnetic snap toward the nearest card anchor, and the pose rig maps
//! progress through the active path model (Z-axis stack by default, the
//! closed ribbon spline with the `ribbon` feature). The store then
//! publishes one consistent snapshot through a lock-free triple buffer.

pub mod deck;
pub mod engine;
pub mod error;
pub mod input;
pub mod motion;
pub mod options;
pub mod path;
pub mod rig;
pub mod store;
pub mod util;

pub use engine::{NavCommand, ShowreelEngine};
