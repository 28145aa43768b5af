//! Frame-driven animation: easing curves, the tween scheduler, and the
//! path draw-in / point entrance clients built on top of it.

pub mod easing;
pub mod path_draw;
pub mod point_enter;
pub mod scheduler;

use serde::{Deserialize, Serialize};

pub use easing::{Easing, interpolate_number};
pub use path_draw::{PathDrawAnimation, PathDrawPhase, PathDrawTimings, PathReveal};
pub use point_enter::{PointEnterAnimation, PointEnterTimings};
pub use scheduler::{
    AnimationScheduler, NextTick, TickReport, Tween, TweenControl, TweenHandle, TweenRegistry,
    TweenSink,
};

/// What a chart tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartTween {
    /// Pause between first projection and the first draw-in.
    PathPause,
    /// Stroke reveal of the connecting line.
    PathDraw,
    /// Pause between a finished draw-in and the next loop.
    PathRestart,
    /// Radius growth of the marker at this index.
    PointEnter(usize),
    /// Tooltip fade in or out.
    TooltipFade,
}

impl ChartTween {
    /// Tweens computed from projected geometry, restarted on re-projection.
    #[must_use]
    pub fn is_geometry_bound(self) -> bool {
        matches!(self, Self::PathDraw | Self::PathRestart | Self::PointEnter(_))
    }
}
