mod frame;
mod null_renderer;
mod primitives;

pub use frame::ChartScene;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisLabel, Color, MarkerPrimitive, PathPrimitive, TextHAlign, TooltipOverlay,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `ChartScene` so
/// drawing code stays isolated from projection, animation and hover logic.
pub trait Renderer {
    fn render(&mut self, scene: &ChartScene) -> ChartResult<()>;
}
