use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{ChartTween, Easing, Tween, TweenHandle, TweenRegistry, interpolate_number};
use crate::core::ProjectedPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipState {
    Hidden,
    Entering,
    Visible,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub fade_duration_ms: f64,
    /// Upward shift so the tooltip does not cover the hovered marker.
    pub offset_px: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            fade_duration_ms: 250.0,
            offset_px: 35.0,
        }
    }
}

/// Where and how opaque the tooltip should be drawn, in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub state: TooltipState,
}

/// Hover-driven tooltip visibility with fade transitions.
///
/// Exactly one fade timer is in flight at a time; hovering a different point
/// cancels it before the new fade-in is registered.
#[derive(Debug, Clone)]
pub struct TooltipController {
    config: TooltipConfig,
    state: TooltipState,
    hovered: Option<usize>,
    opacity: f64,
    fade_from: f64,
    fade: Option<TweenHandle>,
}

impl TooltipController {
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            state: TooltipState::Hidden,
            hovered: None,
            opacity: 0.0,
            fade_from: 0.0,
            fade: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> TooltipConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> TooltipState {
        self.state
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn fade_handle(&self) -> Option<TweenHandle> {
        self.fade
    }

    /// Pointer entered the marker at `index`.
    pub fn pointer_enter(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        now: f64,
        index: usize,
    ) {
        let already_shown = self.hovered == Some(index)
            && matches!(self.state, TooltipState::Entering | TooltipState::Visible);
        if already_shown {
            return;
        }

        self.hovered = Some(index);
        self.transition(registry, now, TooltipState::Entering);
    }

    /// Pointer left the marker at `index`. Leaving a point that is not the
    /// hovered one is ignored.
    pub fn pointer_leave(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        now: f64,
        index: usize,
    ) {
        if self.hovered != Some(index) {
            return;
        }
        if matches!(self.state, TooltipState::Entering | TooltipState::Visible) {
            self.transition(registry, now, TooltipState::Exiting);
        }
    }

    pub fn on_fade_update(&mut self, handle: TweenHandle, progress: f64) {
        if self.fade != Some(handle) {
            return;
        }
        let target = match self.state {
            TooltipState::Entering => 1.0,
            TooltipState::Exiting => 0.0,
            TooltipState::Hidden | TooltipState::Visible => return,
        };
        self.opacity = interpolate_number(self.fade_from, target, progress);
    }

    pub fn on_fade_complete(&mut self, handle: TweenHandle) {
        if self.fade != Some(handle) {
            return;
        }
        self.fade = None;
        match self.state {
            TooltipState::Entering => {
                self.state = TooltipState::Visible;
                self.opacity = 1.0;
            }
            TooltipState::Exiting => {
                self.state = TooltipState::Hidden;
                self.opacity = 0.0;
                self.hovered = None;
            }
            TooltipState::Hidden | TooltipState::Visible => {}
        }
        debug!(state = ?self.state, hovered = ?self.hovered, "tooltip fade finished");
    }

    /// Hides immediately, cancelling any fade.
    pub fn reset(&mut self, registry: &mut impl TweenRegistry<ChartTween>) {
        if let Some(handle) = self.fade.take() {
            registry.cancel(handle);
        }
        self.state = TooltipState::Hidden;
        self.hovered = None;
        self.opacity = 0.0;
        self.fade_from = 0.0;
    }

    /// Tooltip placement above the hovered point, or `None` while hidden.
    #[must_use]
    pub fn anchor(&self, points: &[ProjectedPoint]) -> Option<TooltipAnchor> {
        if self.state == TooltipState::Hidden {
            return None;
        }
        let point = points.get(self.hovered?)?;
        Some(TooltipAnchor {
            point_index: point.index,
            x: point.x,
            y: point.y - self.config.offset_px,
            opacity: self.opacity,
            state: self.state,
        })
    }

    fn transition(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        now: f64,
        next: TooltipState,
    ) {
        if let Some(handle) = self.fade.take() {
            registry.cancel(handle);
        }
        self.state = next;
        self.fade_from = self.opacity;
        let tween = Tween::new(ChartTween::TooltipFade, now, self.config.fade_duration_ms)
            .with_easing(Easing::CubicInOut);
        self.fade = Some(registry.register(tween));
        debug!(state = ?next, hovered = ?self.hovered, "tooltip transition");
    }
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}
