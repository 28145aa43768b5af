use crate::error::ChartResult;
use crate::render::Renderer;

use super::engine_core::EngineCore;
use super::scene_builder::build_scene;
use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the sample sequence, the coordinate projector, the
/// animation scheduler with its path/point/tooltip clients, and the renderer.
/// Hosts feed it data, viewport changes, pointer events and frame ticks.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.core.config
    }

    /// Builds the current scene and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let scene = build_scene(&self.core);
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
