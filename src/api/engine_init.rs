use std::sync::Arc;

use tracing::debug;

use crate::animation::{AnimationScheduler, PathDrawAnimation, PointEnterAnimation};
use crate::core::{CoordinateProjector, Sample};
use crate::error::ChartResult;
use crate::interaction::TooltipController;
use crate::render::Renderer;

use super::validation::validate_engine_config;
use super::{ChartEngine, ChartEngineConfig, engine_core::EngineCore};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty sample sequence.
    ///
    /// The empty sequence is projected right away, so the path draw loop is
    /// already pending when this returns (unless animation is disabled).
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::with_samples(renderer, config, Vec::new())
    }

    /// Creates an engine and projects `samples` as the initial data.
    pub fn with_samples(
        renderer: R,
        config: ChartEngineConfig,
        samples: impl Into<Arc<[Sample]>>,
    ) -> ChartResult<Self> {
        let config = validate_engine_config(config)?;

        let mut engine = Self {
            renderer,
            core: EngineCore {
                config,
                samples: samples.into(),
                projector: CoordinateProjector::new(config.projection_options()),
                scheduler: AnimationScheduler::new(),
                path_draw: PathDrawAnimation::new(config.timings.path),
                point_enter: PointEnterAnimation::new(
                    config.timings.points,
                    config.style.point_radius,
                ),
                tooltip: TooltipController::new(config.tooltip),
                clock: 0.0,
                pointer_target: None,
                disposed: false,
            },
        };
        engine.refresh_projection()?;
        debug!(
            samples = engine.core.samples.len(),
            width = config.viewport.width,
            height = config.viewport.height,
            animate = config.features.animate,
            "chart engine initialized"
        );
        Ok(engine)
    }
}
