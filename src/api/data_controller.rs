use std::sync::Arc;

use tracing::{debug, trace};

use crate::animation::{PathDrawPhase, PointEnterAnimation};
use crate::core::{ProjectionChange, Sample, Viewport, YDomainMode};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::animation_controller::start_point_entrance;
use super::validation::validate_series_style;
use super::{ChartEngine, FeatureFlags, SeriesStyle};

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the sample sequence.
    ///
    /// Change detection is by identity: passing a clone of the current `Arc`
    /// is a no-op, any other sequence re-projects and restarts geometry-bound
    /// animations.
    pub fn set_data(&mut self, samples: Arc<[Sample]>) -> ChartResult<ProjectionChange> {
        self.core.samples = samples;
        self.refresh_projection()
    }

    pub fn set_samples(&mut self, samples: Vec<Sample>) -> ChartResult<ProjectionChange> {
        self.set_data(samples.into())
    }

    #[must_use]
    pub fn samples(&self) -> &Arc<[Sample]> {
        &self.core.samples
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<ProjectionChange> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.core.config.viewport = viewport;
        self.refresh_projection()
    }

    pub fn set_y_domain_mode(&mut self, mode: YDomainMode) -> ChartResult<ProjectionChange> {
        self.core.config.y_domain_mode = mode;
        self.core
            .projector
            .set_options(self.core.config.projection_options());
        self.refresh_projection()
    }

    pub fn set_round_to_pixels(&mut self, round: bool) -> ChartResult<ProjectionChange> {
        self.core.config.round_to_pixels = round;
        self.core
            .projector
            .set_options(self.core.config.projection_options());
        self.refresh_projection()
    }

    /// Replaces pass-through styling. Only the resting marker radius affects
    /// animation state, and it applies from the next entrance on.
    pub fn set_style(&mut self, style: SeriesStyle) -> ChartResult<()> {
        let style = validate_series_style(style)?;
        if style.point_radius != self.core.config.style.point_radius {
            let now = self.core.clock;
            let count = self.core.point_count();
            let core = &mut self.core;
            core.point_enter.cancel_all(&mut core.scheduler);
            core.point_enter =
                PointEnterAnimation::new(core.config.timings.points, style.point_radius);
            if core.path_draw.phase() == PathDrawPhase::Static {
                core.point_enter.settle(&mut core.scheduler, count);
            } else if core.path_draw.is_revealing() && !core.disposed {
                start_point_entrance(
                    &mut core.point_enter,
                    &mut core.scheduler.next_tick(),
                    now,
                    count,
                    core.config.features.show_points,
                );
            }
        }
        self.core.config.style = style;
        Ok(())
    }

    /// Toggles subsystems at runtime.
    pub fn set_features(&mut self, features: FeatureFlags) {
        let previous = self.core.config.features;
        if previous == features {
            return;
        }
        self.core.config.features = features;
        if self.core.disposed {
            debug!(?features, "feature flags updated on disposed engine");
            return;
        }

        let now = self.core.clock;
        let count = self.core.point_count();
        let length = self.core.path_length();
        let core = &mut self.core;

        if !features.show_tooltip || !features.show_points {
            core.tooltip.reset(&mut core.scheduler);
            core.pointer_target = None;
        }

        if previous.animate != features.animate {
            if features.animate {
                core.path_draw.reset(&mut core.scheduler);
                core.path_draw.activate(&mut core.scheduler.next_tick(), now);
                core.point_enter.reset(&mut core.scheduler, count);
            } else {
                core.path_draw.show_static(&mut core.scheduler, length);
                core.point_enter.settle(&mut core.scheduler, count);
            }
        } else if previous.show_points != features.show_points {
            if features.animate {
                if core.path_draw.is_revealing() {
                    start_point_entrance(
                        &mut core.point_enter,
                        &mut core.scheduler.next_tick(),
                        now,
                        count,
                        features.show_points,
                    );
                }
            } else if features.show_points {
                core.point_enter.settle(&mut core.scheduler, count);
            }
        }
        debug!(?features, "feature flags updated");
    }

    /// Re-projects if inputs changed and re-targets animations on new geometry.
    pub(super) fn refresh_projection(&mut self) -> ChartResult<ProjectionChange> {
        let change = self
            .core
            .projector
            .update(&self.core.samples, self.core.config.viewport)?;
        if change == ProjectionChange::Recomputed {
            self.on_reprojected();
        } else {
            trace!("projection unchanged");
        }
        Ok(change)
    }

    fn on_reprojected(&mut self) {
        let now = self.core.clock;
        let count = self.core.point_count();
        let length = self.core.path_length();
        let core = &mut self.core;

        core.pointer_target = None;
        core.tooltip.reset(&mut core.scheduler);
        let cancelled = core
            .scheduler
            .cancel_where(|target| target.is_geometry_bound());
        if core.disposed {
            core.point_enter.settle(&mut core.scheduler, count);
            return;
        }

        if !core.config.features.animate {
            core.path_draw.show_static(&mut core.scheduler, length);
            core.point_enter.settle(&mut core.scheduler, count);
            return;
        }

        match core.path_draw.phase() {
            PathDrawPhase::Idle => {
                core.path_draw.activate(&mut core.scheduler.next_tick(), now);
                core.point_enter.reset(&mut core.scheduler, count);
            }
            PathDrawPhase::Pending => core.point_enter.reset(&mut core.scheduler, count),
            PathDrawPhase::Drawing | PathDrawPhase::Holding => {
                core.path_draw.restart_for_geometry(&mut core.scheduler.next_tick(), now, length);
                start_point_entrance(
                    &mut core.point_enter,
                    &mut core.scheduler.next_tick(),
                    now,
                    count,
                    core.config.features.show_points,
                );
            }
            PathDrawPhase::Static => {
                core.path_draw.show_static(&mut core.scheduler, length);
                core.point_enter.settle(&mut core.scheduler, count);
            }
            PathDrawPhase::Disposed => {}
        }
        debug!(
            count,
            path_length = length,
            cancelled,
            phase = ?core.path_draw.phase(),
            "animations re-targeted after projection"
        );
    }
}
