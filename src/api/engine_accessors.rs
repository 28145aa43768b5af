use crate::animation::{PathDrawPhase, PathReveal};
use crate::core::{ProjectedPoint, Projection};
use crate::render::{ChartScene, Renderer};

use super::ChartEngine;
use super::scene_builder::build_scene;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn projection(&self) -> Option<&Projection> {
        self.core.projector.projection()
    }

    #[must_use]
    pub fn projected_points(&self) -> &[ProjectedPoint] {
        self.core
            .projector
            .projection()
            .map(|projection| projection.points.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn path_phase(&self) -> PathDrawPhase {
        self.core.path_draw.phase()
    }

    #[must_use]
    pub fn path_reveal(&self) -> PathReveal {
        self.core.path_draw.reveal()
    }

    /// Number of draw-ins started since construction.
    #[must_use]
    pub fn path_cycles(&self) -> u64 {
        self.core.path_draw.cycles()
    }

    #[must_use]
    pub fn marker_radius(&self, index: usize) -> Option<f64> {
        self.core.point_enter.radius(index)
    }

    #[must_use]
    pub fn marker_radii(&self) -> &[f64] {
        self.core.point_enter.radii()
    }

    #[must_use]
    pub fn tooltip_opacity(&self) -> f64 {
        self.core.tooltip.opacity()
    }

    #[must_use]
    pub fn active_tween_count(&self) -> usize {
        self.core.scheduler.active_count()
    }

    /// The scene `render` would hand to the renderer right now.
    #[must_use]
    pub fn scene(&self) -> ChartScene {
        build_scene(&self.core)
    }
}
