use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{AxisLabel, MarkerPrimitive, PathPrimitive, TooltipOverlay};

/// Backend-agnostic scene for one chart draw pass.
///
/// Everything except `viewport` is in plot-area coordinates; renderers
/// translate by `plot_origin` before drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub viewport: Viewport,
    pub plot_origin: (f64, f64),
    pub path: Option<PathPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub x_axis: Vec<AxisLabel>,
    pub y_axis: Vec<AxisLabel>,
    pub tooltip: Option<TooltipOverlay>,
}

impl ChartScene {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            plot_origin: viewport.plot_origin(),
            path: None,
            markers: Vec::new(),
            x_axis: Vec::new(),
            y_axis: Vec::new(),
            tooltip: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        if let Some(path) = &self.path {
            path.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for label in self.x_axis.iter().chain(&self.y_axis) {
            label.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
            && self.markers.is_empty()
            && self.x_axis.is_empty()
            && self.y_axis.is_empty()
            && self.tooltip.is_none()
    }
}
