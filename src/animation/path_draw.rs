use serde::{Deserialize, Serialize};
use tracing::debug;

use super::easing::{Easing, interpolate_number};
use super::scheduler::{Tween, TweenHandle, TweenRegistry};
use super::ChartTween;

/// Fixed timings of the draw-in loop, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathDrawTimings {
    pub initial_pause_ms: f64,
    pub draw_duration_ms: f64,
    pub restart_pause_ms: f64,
}

impl Default for PathDrawTimings {
    fn default() -> Self {
        Self {
            initial_pause_ms: 1_500.0,
            draw_duration_ms: 1_500.0,
            restart_pause_ms: 2_000.0,
        }
    }
}

/// Stroke-reveal state read by the renderer.
///
/// The path is stroked with a dash pattern of `total_length` and offset by
/// `dash_offset`; an offset of `total_length` hides the whole line and zero
/// shows all of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathReveal {
    pub visible: bool,
    pub total_length: f64,
    pub dash_offset: f64,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
}

impl PathReveal {
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            visible: false,
            total_length: 0.0,
            dash_offset: 0.0,
            progress: 0.0,
        }
    }

    #[must_use]
    pub const fn fully_drawn(total_length: f64) -> Self {
        Self {
            visible: true,
            total_length,
            dash_offset: 0.0,
            progress: 1.0,
        }
    }

    /// Fraction of the path length currently shown.
    #[must_use]
    pub fn revealed_fraction(self) -> f64 {
        if !self.visible {
            return 0.0;
        }
        if self.total_length <= 0.0 {
            return self.progress;
        }
        1.0 - self.dash_offset / self.total_length
    }
}

impl Default for PathReveal {
    fn default() -> Self {
        Self::hidden()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathDrawPhase {
    /// Nothing projected yet.
    Idle,
    /// Waiting out the initial pause.
    Pending,
    Drawing,
    /// Fully drawn, waiting for the loop restart.
    Holding,
    /// Torn down; ignores further activation.
    Disposed,
    /// Animation disabled; the path is shown fully drawn.
    Static,
}

/// Looping stroke draw-in of the connecting line.
#[derive(Debug, Clone)]
pub struct PathDrawAnimation {
    timings: PathDrawTimings,
    phase: PathDrawPhase,
    reveal: PathReveal,
    pending: Option<TweenHandle>,
    cycles: u64,
}

impl PathDrawAnimation {
    #[must_use]
    pub fn new(timings: PathDrawTimings) -> Self {
        Self {
            timings,
            phase: PathDrawPhase::Idle,
            reveal: PathReveal::hidden(),
            pending: None,
            cycles: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> PathDrawPhase {
        self.phase
    }

    #[must_use]
    pub fn reveal(&self) -> PathReveal {
        self.reveal
    }

    #[must_use]
    pub fn timings(&self) -> PathDrawTimings {
        self.timings
    }

    /// Number of draw-ins started so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Handle of the tween currently owned by this animation, if any.
    #[must_use]
    pub fn pending_handle(&self) -> Option<TweenHandle> {
        self.pending
    }

    /// Whether the reveal has started, which gates the point entrance.
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal.visible
    }

    /// Schedules the initial pause after the first successful projection.
    ///
    /// Only acts from `Idle`; later calls are ignored.
    pub fn activate(&mut self, registry: &mut impl TweenRegistry<ChartTween>, now: f64) {
        if self.phase != PathDrawPhase::Idle {
            return;
        }
        let tween = Tween::timer(ChartTween::PathPause, now, self.timings.initial_pause_ms);
        self.pending = Some(registry.register(tween));
        self.phase = PathDrawPhase::Pending;
        debug!(pause_ms = self.timings.initial_pause_ms, "path draw pending");
    }

    /// Initial pause elapsed: the first draw-in starts.
    pub fn on_pause_elapsed(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        now: f64,
        total_length: f64,
    ) {
        if self.phase != PathDrawPhase::Pending {
            return;
        }
        self.pending = None;
        self.begin_draw(registry, now, total_length);
    }

    /// Starts a draw-in against a path of `total_length` pixels.
    pub fn begin_draw(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        now: f64,
        total_length: f64,
    ) {
        if self.phase == PathDrawPhase::Disposed {
            return;
        }
        self.cancel_pending(registry);
        self.reveal = PathReveal {
            visible: true,
            total_length,
            dash_offset: total_length,
            progress: 0.0,
        };
        let tween = Tween::new(ChartTween::PathDraw, now, self.timings.draw_duration_ms)
            .with_easing(Easing::CubicOut);
        self.pending = Some(registry.register(tween));
        self.phase = PathDrawPhase::Drawing;
        self.cycles += 1;
        debug!(total_length, cycle = self.cycles, "path draw started");
    }

    /// Applies eased draw progress.
    pub fn on_draw_update(&mut self, progress: f64) {
        if self.phase != PathDrawPhase::Drawing {
            return;
        }
        self.reveal.progress = progress;
        self.reveal.dash_offset = interpolate_number(self.reveal.total_length, 0.0, progress);
    }

    /// Draw-in finished: wait out the restart pause.
    pub fn on_draw_complete(&mut self, registry: &mut impl TweenRegistry<ChartTween>, now: f64) {
        if self.phase != PathDrawPhase::Drawing {
            return;
        }
        self.reveal = PathReveal::fully_drawn(self.reveal.total_length);
        let tween = Tween::timer(ChartTween::PathRestart, now, self.timings.restart_pause_ms);
        self.pending = Some(registry.register(tween));
        self.phase = PathDrawPhase::Holding;
    }

    /// Restart pause elapsed: reset reveal state to zero and draw again.
    pub fn on_restart_elapsed(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        now: f64,
        total_length: f64,
    ) {
        if self.phase != PathDrawPhase::Holding {
            return;
        }
        self.pending = None;
        self.reveal = PathReveal::hidden();
        self.begin_draw(registry, now, total_length);
    }

    /// Re-targets the loop at new geometry after re-projection.
    ///
    /// A pending initial pause is kept since it does not depend on coordinates;
    /// an in-flight draw or hold restarts drawing from zero.
    pub fn restart_for_geometry(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        now: f64,
        total_length: f64,
    ) {
        match self.phase {
            PathDrawPhase::Drawing | PathDrawPhase::Holding => {
                self.reveal = PathReveal::hidden();
                self.begin_draw(registry, now, total_length);
            }
            PathDrawPhase::Static => self.reveal = PathReveal::fully_drawn(total_length),
            PathDrawPhase::Idle | PathDrawPhase::Pending | PathDrawPhase::Disposed => {}
        }
    }

    /// Shows the path fully drawn without scheduling anything.
    pub fn show_static(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        total_length: f64,
    ) {
        if self.phase == PathDrawPhase::Disposed {
            return;
        }
        self.cancel_pending(registry);
        self.reveal = PathReveal::fully_drawn(total_length);
        self.phase = PathDrawPhase::Static;
    }

    /// Stops the loop for good.
    pub fn dispose(&mut self, registry: &mut impl TweenRegistry<ChartTween>) {
        self.cancel_pending(registry);
        self.phase = PathDrawPhase::Disposed;
    }

    /// Returns to `Idle` so a later `activate` starts over.
    pub fn reset(&mut self, registry: &mut impl TweenRegistry<ChartTween>) {
        if self.phase == PathDrawPhase::Disposed {
            return;
        }
        self.cancel_pending(registry);
        self.reveal = PathReveal::hidden();
        self.phase = PathDrawPhase::Idle;
    }

    fn cancel_pending(&mut self, registry: &mut impl TweenRegistry<ChartTween>) {
        if let Some(handle) = self.pending.take() {
            registry.cancel(handle);
        }
    }
}

impl Default for PathDrawAnimation {
    fn default() -> Self {
        Self::new(PathDrawTimings::default())
    }
}
