//! Pose application: rendered progress → camera pose and card layouts.
//!
//! The rig keeps its own smoothed copy of progress, eased with a damping
//! constant separate from (and stiffer than) the progress integrator's.
//! That decouples "where the focus point is" from "how the view visually
//! eases into it": retuning one never changes the other.

use crate::deck::Deck;
use crate::options::LayoutOptions;
#[cfg(feature = "ribbon")]
use crate::path::{PathModel, RibbonSpline};
use crate::path::{CardLayout, Pose};
#[cfg(not(feature = "ribbon"))]
use crate::path::ZStack;

/// One frame of rendered transforms.
#[derive(Debug, Clone)]
pub struct RigFrame {
    /// Camera pose for this frame.
    pub camera: Pose,
    /// Per-card transforms, in deck order.
    pub cards: Vec<CardLayout>,
}

/// Applies the path model to the current progress each frame.
pub struct PoseRig {
    #[cfg(not(feature = "ribbon"))]
    path: ZStack,
    #[cfg(feature = "ribbon")]
    path: RibbonSpline,
    rig_damping: f32,
    rendered_progress: f32,
    active_index: usize,
}

impl PoseRig {
    /// Rig starting at `initial_progress`.
    #[must_use]
    pub fn new(
        layout: &LayoutOptions,
        rig_damping: f32,
        initial_progress: f32,
    ) -> Self {
        Self {
            #[cfg(not(feature = "ribbon"))]
            path: ZStack::new(layout),
            #[cfg(feature = "ribbon")]
            path: RibbonSpline::new(layout.roll_damping),
            rig_damping,
            rendered_progress: initial_progress,
            active_index: 0,
        }
    }

    /// The rig's smoothed progress (lags the integrator's slightly).
    #[must_use]
    pub fn rendered_progress(&self) -> f32 {
        self.rendered_progress
    }

    /// Currently focused card index, as last derived.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Advance the visual easing and produce this frame's transforms.
    ///
    /// Returns the frame plus `Some(index)` when the focused card changed.
    /// The active card follows the *logical* progress, not the eased
    /// visual one, so HUD focus never lags behind input.
    pub fn frame(
        &mut self,
        deck: &Deck,
        current_progress: f32,
        dt: f32,
    ) -> (RigFrame, Option<usize>) {
        let alpha = 1.0 - (-self.rig_damping * dt.max(0.0)).exp();
        self.rendered_progress +=
            (current_progress - self.rendered_progress) * alpha;

        let frame = self.layout_frame(deck);

        // Nearest-anchor scan; cheap at realistic deck sizes.
        let nearest = deck.nearest_index(current_progress);
        let changed = if nearest == self.active_index {
            None
        } else {
            log::debug!(
                "active card {} -> {}",
                self.active_index,
                nearest
            );
            self.active_index = nearest;
            Some(nearest)
        };

        (frame, changed)
    }

    /// Stack build: static camera, cards slide past it on the Z axis.
    #[cfg(not(feature = "ribbon"))]
    fn layout_frame(&self, deck: &Deck) -> RigFrame {
        let cards = deck
            .cards()
            .iter()
            .map(|card| {
                self.path.card_layout(
                    card.canonical_position - self.rendered_progress,
                )
            })
            .collect();
        RigFrame {
            camera: self.path.camera_pose(),
            cards,
        }
    }

    /// Ribbon build: the camera follows the spline; cards sit fixed at
    /// their anchors' curve poses.
    #[cfg(feature = "ribbon")]
    fn layout_frame(&self, deck: &Deck) -> RigFrame {
        let span = (deck.max_progress() - deck.min_progress()).max(1.0);
        let normalize =
            |p: f32| (p - deck.min_progress()) / (span + 1.0);

        let cards = deck
            .cards()
            .iter()
            .map(|card| CardLayout {
                pose: self.path.pose(normalize(card.canonical_position)),
                scale: 1.0,
                opacity: 1.0,
            })
            .collect();
        RigFrame {
            camera: self.path.pose(normalize(self.rendered_progress)),
            cards,
        }
    }
}
