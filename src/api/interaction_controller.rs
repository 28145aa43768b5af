use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{TooltipState, hit_test_points};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Pointer entered the marker at `index`.
    ///
    /// Ignored while tooltips or markers are disabled or markers are not yet
    /// drawn. Indices outside the projected points are rejected.
    pub fn pointer_enter_point(&mut self, index: usize) -> ChartResult<()> {
        self.ensure_point_index(index)?;
        if !self.core.tooltip_enabled() || !self.core.markers_visible() || self.core.disposed {
            return Ok(());
        }
        let now = self.core.clock;
        let core = &mut self.core;
        core.tooltip.pointer_enter(&mut core.scheduler.next_tick(), now, index);
        Ok(())
    }

    /// Pointer left the marker at `index`.
    pub fn pointer_leave_point(&mut self, index: usize) -> ChartResult<()> {
        self.ensure_point_index(index)?;
        if self.core.disposed {
            return Ok(());
        }
        let now = self.core.clock;
        let core = &mut self.core;
        core.tooltip.pointer_leave(&mut core.scheduler.next_tick(), now, index);
        Ok(())
    }

    /// Hit-tests a pointer position in viewport pixels against the markers
    /// and turns marker changes into enter/leave events.
    ///
    /// Returns the marker under the pointer, if any.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }
        let hit = self.hit_test(x, y);
        let previous = self.core.pointer_target;
        if hit == previous {
            return Ok(hit);
        }

        self.core.pointer_target = hit;
        if let Some(index) = previous {
            self.pointer_leave_point(index)?;
        }
        if let Some(index) = hit {
            self.pointer_enter_point(index)?;
        }
        trace!(x, y, ?previous, ?hit, "pointer target changed");
        Ok(hit)
    }

    /// Pointer left the chart entirely.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        match self.core.pointer_target.take() {
            Some(index) => self.pointer_leave_point(index),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.core.tooltip.state()
    }

    #[must_use]
    pub fn hovered_point(&self) -> Option<usize> {
        self.core.tooltip.hovered()
    }

    fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        if !self.core.markers_visible() {
            return None;
        }
        let projection = self.core.projector.projection()?;
        let (origin_x, origin_y) = projection.viewport.plot_origin();
        let style = self.core.config.style;
        hit_test_points(
            &projection.points,
            x - origin_x,
            y - origin_y,
            style.point_radius,
            style.hit_slop_px,
        )
    }

    fn ensure_point_index(&self, index: usize) -> ChartResult<()> {
        let count = self.core.point_count();
        if index >= count {
            return Err(ChartError::InvalidData(format!(
                "point index {index} out of range for {count} points"
            )));
        }
        Ok(())
    }
}
