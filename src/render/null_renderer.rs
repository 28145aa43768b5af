use crate::error::ChartResult;
use crate::render::{ChartScene, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates the scene so tests catch invalid geometry, and records
/// what the last pass contained.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_marker_count: usize,
    pub last_label_count: usize,
    pub last_path_offset: Option<f64>,
    pub last_tooltip_opacity: Option<f64>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &ChartScene) -> ChartResult<()> {
        scene.validate()?;
        self.frames_rendered += 1;
        self.last_marker_count = scene.markers.len();
        self.last_label_count = scene.x_axis.len() + scene.y_axis.len();
        self.last_path_offset = scene.path.as_ref().map(|path| path.dash_offset);
        self.last_tooltip_opacity = scene.tooltip.as_ref().map(|tooltip| tooltip.opacity);
        Ok(())
    }
}
