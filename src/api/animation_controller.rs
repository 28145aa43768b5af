use tracing::{debug, trace};

use crate::animation::{
    ChartTween, PathDrawAnimation, PointEnterAnimation, TickReport, TweenControl, TweenHandle,
    TweenRegistry, TweenSink,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipController;
use crate::render::Renderer;

use super::ChartEngine;

/// Starts the staggered marker entrance, or collapses markers when hidden.
pub(super) fn start_point_entrance(
    point_enter: &mut PointEnterAnimation,
    registry: &mut impl TweenRegistry<ChartTween>,
    now: f64,
    point_count: usize,
    show_points: bool,
) {
    if show_points {
        point_enter.start(registry, now, point_count);
    } else {
        point_enter.reset(registry, point_count);
    }
}

/// Routes scheduler callbacks to the client that owns each tween.
struct TweenDispatch<'a> {
    path_draw: &'a mut PathDrawAnimation,
    point_enter: &'a mut PointEnterAnimation,
    tooltip: &'a mut TooltipController,
    path_length: f64,
    point_count: usize,
    show_points: bool,
}

impl TweenSink<ChartTween> for TweenDispatch<'_> {
    fn on_update(
        &mut self,
        handle: TweenHandle,
        target: ChartTween,
        progress: f64,
        _control: &mut TweenControl<ChartTween>,
    ) {
        match target {
            ChartTween::PathDraw => self.path_draw.on_draw_update(progress),
            ChartTween::PointEnter(index) => self.point_enter.on_update(index, progress),
            ChartTween::TooltipFade => self.tooltip.on_fade_update(handle, progress),
            ChartTween::PathPause | ChartTween::PathRestart => {}
        }
    }

    fn on_complete(
        &mut self,
        handle: TweenHandle,
        target: ChartTween,
        control: &mut TweenControl<ChartTween>,
    ) {
        let now = control.now();
        match target {
            ChartTween::PathPause => {
                self.path_draw.on_pause_elapsed(control, now, self.path_length);
                self.enter_points(control, now);
            }
            ChartTween::PathDraw => self.path_draw.on_draw_complete(control, now),
            ChartTween::PathRestart => {
                self.path_draw.on_restart_elapsed(control, now, self.path_length);
                self.enter_points(control, now);
            }
            ChartTween::PointEnter(index) => self.point_enter.on_complete(index),
            ChartTween::TooltipFade => self.tooltip.on_fade_complete(handle),
        }
    }
}

impl TweenDispatch<'_> {
    fn enter_points(&mut self, control: &mut TweenControl<ChartTween>, now: f64) {
        if !self.path_draw.is_revealing() {
            return;
        }
        start_point_entrance(
            self.point_enter,
            control,
            now,
            self.point_count,
            self.show_points,
        );
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Advances all animations to the frame time `now` (milliseconds).
    ///
    /// Hosts call this once per display frame while [`needs_frame`] is true.
    /// Times earlier than the previous tick are accepted; tweens simply
    /// report the progress for that time.
    ///
    /// [`needs_frame`]: Self::needs_frame
    pub fn tick(&mut self, now: f64) -> ChartResult<TickReport> {
        if !now.is_finite() {
            return Err(ChartError::InvalidData(
                "tick time must be finite".to_owned(),
            ));
        }
        self.core.clock = now;
        if self.core.disposed {
            return Ok(TickReport::default());
        }

        let path_length = self.core.path_length();
        let point_count = self.core.point_count();
        let core = &mut self.core;
        let mut dispatch = TweenDispatch {
            path_draw: &mut core.path_draw,
            point_enter: &mut core.point_enter,
            tooltip: &mut core.tooltip,
            path_length,
            point_count,
            show_points: core.config.features.show_points,
        };
        let report = core.scheduler.tick(now, &mut dispatch);
        trace!(
            now,
            updated = report.updated,
            completed = report.completed,
            running = report.running,
            "engine tick"
        );
        Ok(report)
    }

    /// Whether any tween is active and another frame should be requested.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        !self.core.disposed && self.core.scheduler.is_running()
    }

    /// Time of the latest tick. Tweens started by events between frames are
    /// anchored to the next tick instead.
    #[must_use]
    pub fn clock(&self) -> f64 {
        self.core.clock
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.core.disposed
    }

    /// Tears the chart down: cancels every pending timer and tween.
    ///
    /// No callback fires afterwards; data can still be set and rendered,
    /// but nothing animates again.
    pub fn dispose(&mut self) {
        if self.core.disposed {
            return;
        }
        let core = &mut self.core;
        core.path_draw.dispose(&mut core.scheduler);
        core.point_enter.cancel_all(&mut core.scheduler);
        core.tooltip.reset(&mut core.scheduler);
        let dropped = core.scheduler.clear();
        core.pointer_target = None;
        core.disposed = true;
        debug!(dropped, "chart engine disposed");
    }
}
