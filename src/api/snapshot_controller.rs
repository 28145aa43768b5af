use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let core = &self.core;
        let (x_domain, y_domain) = core.projector.projection().map_or(
            ((0.0, 0.0), (0.0, 0.0)),
            |projection| {
                let (x, y) = (projection.x_domain(), projection.y_domain());
                ((x.min(), x.max()), (y.min(), y.max()))
            },
        );

        EngineSnapshot {
            viewport: core.config.viewport,
            features: core.config.features,
            x_domain,
            y_domain,
            points: self.projected_points().to_vec(),
            path_length: core.path_length(),
            path_phase: core.path_draw.phase(),
            path_reveal: core.path_draw.reveal(),
            path_cycles: core.path_draw.cycles(),
            marker_radii: core.point_enter.radii().to_vec(),
            tooltip_state: core.tooltip.state(),
            hovered_point: core.tooltip.hovered(),
            tooltip_opacity: core.tooltip.opacity(),
            active_tweens: core.scheduler.active_count(),
            clock: core.clock,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
