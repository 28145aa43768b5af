use std::sync::Arc;

use crate::animation::{AnimationScheduler, ChartTween, PathDrawAnimation, PointEnterAnimation};
use crate::core::{CoordinateProjector, Sample};
use crate::interaction::TooltipController;

use super::ChartEngineConfig;

/// Internal engine state used by the public facade (`ChartEngine`).
pub(super) struct EngineCore {
    pub(super) config: ChartEngineConfig,
    pub(super) samples: Arc<[Sample]>,
    pub(super) projector: CoordinateProjector,
    pub(super) scheduler: AnimationScheduler<ChartTween>,
    pub(super) path_draw: PathDrawAnimation,
    pub(super) point_enter: PointEnterAnimation,
    pub(super) tooltip: TooltipController,
    /// Timestamp of the latest tick.
    pub(super) clock: f64,
    /// Marker currently under the pointer, as seen by `pointer_move`.
    pub(super) pointer_target: Option<usize>,
    pub(super) disposed: bool,
}

impl EngineCore {
    pub(super) fn point_count(&self) -> usize {
        self.projector
            .projection()
            .map_or(0, |projection| projection.points.len())
    }

    pub(super) fn path_length(&self) -> f64 {
        self.projector
            .projection()
            .map_or(0.0, |projection| projection.path_length())
    }

    /// Markers are drawn, and hoverable, only once the path reveal has begun.
    pub(super) fn markers_visible(&self) -> bool {
        self.config.features.show_points && self.path_draw.is_revealing()
    }

    pub(super) fn tooltip_enabled(&self) -> bool {
        self.config.features.show_tooltip && self.config.features.show_points
    }
}
