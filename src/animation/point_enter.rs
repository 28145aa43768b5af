use serde::{Deserialize, Serialize};
use tracing::trace;

use super::easing::{Easing, interpolate_number};
use super::scheduler::{Tween, TweenHandle, TweenRegistry};
use super::ChartTween;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEnterTimings {
    /// Delay added per point index.
    pub stagger_ms: f64,
    pub duration_ms: f64,
}

impl Default for PointEnterTimings {
    fn default() -> Self {
        Self {
            stagger_ms: 80.0,
            duration_ms: 600.0,
        }
    }
}

/// Staggered elastic radius growth of the point markers.
///
/// Point `i` starts `i * stagger_ms` after the group and overshoots its
/// resting radius before settling.
#[derive(Debug, Clone)]
pub struct PointEnterAnimation {
    timings: PointEnterTimings,
    resting_radius: f64,
    easing: Easing,
    radii: Vec<f64>,
    handles: Vec<Option<TweenHandle>>,
}

impl PointEnterAnimation {
    #[must_use]
    pub fn new(timings: PointEnterTimings, resting_radius: f64) -> Self {
        Self {
            timings,
            resting_radius,
            easing: Easing::elastic_out(),
            radii: Vec::new(),
            handles: Vec::new(),
        }
    }

    #[must_use]
    pub fn timings(&self) -> PointEnterTimings {
        self.timings
    }

    #[must_use]
    pub fn resting_radius(&self) -> f64 {
        self.resting_radius
    }

    #[must_use]
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    #[must_use]
    pub fn radius(&self, index: usize) -> Option<f64> {
        self.radii.get(index).copied()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.handles.iter().flatten().count()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.active_count() == 0
    }

    /// Registers one tween per point, replacing any in flight.
    pub fn start(
        &mut self,
        registry: &mut impl TweenRegistry<ChartTween>,
        now: f64,
        point_count: usize,
    ) {
        self.cancel_all(registry);
        self.radii = vec![0.0; point_count];
        self.handles = (0..point_count)
            .map(|index| {
                let tween = Tween::new(ChartTween::PointEnter(index), now, self.timings.duration_ms)
                    .with_delay(index as f64 * self.timings.stagger_ms)
                    .with_easing(self.easing);
                Some(registry.register(tween))
            })
            .collect();
        trace!(point_count, stagger_ms = self.timings.stagger_ms, "point entrance started");
    }

    pub fn on_update(&mut self, index: usize, progress: f64) {
        if let Some(radius) = self.radii.get_mut(index) {
            *radius = interpolate_number(0.0, self.resting_radius, progress);
        }
    }

    pub fn on_complete(&mut self, index: usize) {
        if let Some(radius) = self.radii.get_mut(index) {
            *radius = self.resting_radius;
        }
        if let Some(handle) = self.handles.get_mut(index) {
            *handle = None;
        }
    }

    /// Cancels all tweens and collapses every marker to zero radius.
    pub fn reset(&mut self, registry: &mut impl TweenRegistry<ChartTween>, point_count: usize) {
        self.cancel_all(registry);
        self.radii = vec![0.0; point_count];
    }

    /// Shows every marker at rest without animating.
    pub fn settle(&mut self, registry: &mut impl TweenRegistry<ChartTween>, point_count: usize) {
        self.cancel_all(registry);
        self.radii = vec![self.resting_radius; point_count];
    }

    pub fn cancel_all(&mut self, registry: &mut impl TweenRegistry<ChartTween>) {
        for handle in self.handles.drain(..).flatten() {
            registry.cancel(handle);
        }
    }
}
