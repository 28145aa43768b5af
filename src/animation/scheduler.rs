use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::easing::Easing;

/// Opaque identifier of a registered tween. Never reused within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TweenHandle(u64);

impl TweenHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One timed interpolation task.
///
/// `target` identifies what the tween drives; it is handed back to the
/// [`TweenSink`] on every callback. Times are in milliseconds on the caller's clock.
/// A `start_time` of `None` is resolved to the `now` of the first tick that sees it.
#[derive(Debug, Clone, Copy)]
pub struct Tween<K> {
    pub target: K,
    pub start_time: Option<f64>,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl<K> Tween<K> {
    #[must_use]
    pub fn new(target: K, start_time: f64, duration: f64) -> Self {
        Self {
            target,
            start_time: Some(start_time),
            duration,
            delay: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Zero-length tween that completes once `delay` has elapsed; used as a timer.
    #[must_use]
    pub fn timer(target: K, start_time: f64, delay: f64) -> Self {
        Self::new(target, start_time, 0.0).with_delay(delay)
    }

    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Drops the start time so the tween starts on the next tick.
    #[must_use]
    pub fn starting_next_tick(mut self) -> Self {
        self.start_time = None;
        self
    }

    fn phase(&self, now: f64) -> TweenPhase {
        let start_time = self.start_time.unwrap_or(now);
        let malformed = !start_time.is_finite()
            || !self.delay.is_finite()
            || !self.duration.is_finite();
        if malformed || self.delay < 0.0 {
            return TweenPhase::Finished;
        }

        let elapsed = now - start_time;
        if elapsed < self.delay {
            return TweenPhase::Waiting;
        }
        let active = elapsed - self.delay;
        if self.duration <= 0.0 || active >= self.duration {
            return TweenPhase::Finished;
        }
        TweenPhase::Running((active / self.duration).clamp(0.0, 1.0))
    }
}

enum TweenPhase {
    Waiting,
    Running(f64),
    Finished,
}

/// Registration surface shared by the scheduler and in-callback control.
pub trait TweenRegistry<K> {
    fn register(&mut self, tween: Tween<K>) -> TweenHandle;

    /// Cancels a tween. Unknown or already finished handles are ignored.
    fn cancel(&mut self, handle: TweenHandle);
}

/// Receives tween callbacks during [`AnimationScheduler::tick`].
pub trait TweenSink<K> {
    fn on_update(
        &mut self,
        handle: TweenHandle,
        target: K,
        progress: f64,
        control: &mut TweenControl<K>,
    );

    fn on_complete(&mut self, handle: TweenHandle, target: K, control: &mut TweenControl<K>);
}

enum ControlOp<K> {
    Register(TweenHandle, Tween<K>),
    Cancel(TweenHandle),
}

/// Scheduler access from inside a callback.
///
/// Operations are applied right after the callback returns, before any other
/// tween is dispatched, so a cancelled tween never receives another callback.
/// Tweens registered here are first ticked on the next frame.
pub struct TweenControl<K> {
    now: f64,
    next_id: u64,
    ops: SmallVec<[ControlOp<K>; 4]>,
}

impl<K> TweenControl<K> {
    /// The frame time captured for the current tick.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now
    }
}

impl<K> TweenRegistry<K> for TweenControl<K> {
    fn register(&mut self, tween: Tween<K>) -> TweenHandle {
        let handle = TweenHandle(self.next_id);
        self.next_id += 1;
        self.ops.push(ControlOp::Register(handle, tween));
        handle
    }

    fn cancel(&mut self, handle: TweenHandle) {
        self.ops.push(ControlOp::Cancel(handle));
    }
}

/// Counters describing one [`AnimationScheduler::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub updated: usize,
    pub completed: usize,
    /// Whether tweens remain active and the host should request another frame.
    pub running: bool,
}

/// Frame-driven tween scheduler with a single shared clock.
///
/// The host calls [`tick`](Self::tick) once per animation frame for as long as
/// [`is_running`](Self::is_running) reports active tweens. All tweens advanced
/// in one tick observe the same `now`, in registration order.
#[derive(Debug)]
pub struct AnimationScheduler<K> {
    active: IndexMap<TweenHandle, Tween<K>>,
    next_id: u64,
    last_tick: Option<f64>,
}

impl<K> Default for AnimationScheduler<K> {
    fn default() -> Self {
        Self {
            active: IndexMap::new(),
            next_id: 0,
            last_tick: None,
        }
    }
}

impl<K: Copy> AnimationScheduler<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_active(&self, handle: TweenHandle) -> bool {
        self.active.contains_key(&handle)
    }

    #[must_use]
    pub fn tween(&self, handle: TweenHandle) -> Option<&Tween<K>> {
        self.active.get(&handle)
    }

    /// Time passed to the most recent tick.
    #[must_use]
    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }

    /// Cancels every tween whose target matches `predicate`. Returns the count.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&K) -> bool) -> usize {
        let before = self.active.len();
        self.active.retain(|_, tween| !predicate(&tween.target));
        let cancelled = before - self.active.len();
        if cancelled > 0 {
            trace!(cancelled, remaining = self.active.len(), "cancelled tweens");
        }
        cancelled
    }

    /// Drops all tweens; the scheduler stops until the next registration.
    pub fn clear(&mut self) -> usize {
        let cancelled = self.active.len();
        self.active.clear();
        if cancelled > 0 {
            debug!(cancelled, "scheduler cleared");
        }
        cancelled
    }

    /// Advances every active tween to `now`.
    pub fn tick(&mut self, now: f64, sink: &mut impl TweenSink<K>) -> TickReport {
        let handles: SmallVec<[TweenHandle; 16]> = self.active.keys().copied().collect();
        let mut control = TweenControl {
            now,
            next_id: self.next_id,
            ops: SmallVec::new(),
        };
        let mut report = TickReport::default();

        for handle in handles {
            let Some(tween) = self.active.get_mut(&handle) else {
                continue;
            };
            tween.start_time.get_or_insert(now);
            let tween = *tween;

            match tween.phase(now) {
                TweenPhase::Waiting => {}
                TweenPhase::Running(linear) => {
                    sink.on_update(handle, tween.target, tween.easing.apply(linear), &mut control);
                    report.updated += 1;
                    self.apply(&mut control);
                }
                TweenPhase::Finished => {
                    sink.on_update(handle, tween.target, 1.0, &mut control);
                    report.updated += 1;
                    self.apply(&mut control);
                    if self.active.shift_remove(&handle).is_none() {
                        continue;
                    }
                    sink.on_complete(handle, tween.target, &mut control);
                    report.completed += 1;
                    self.apply(&mut control);
                }
            }
        }

        self.last_tick = Some(now);
        report.running = self.is_running();
        if !report.running {
            debug!(now, "scheduler idle");
        }
        report
    }

    fn apply(&mut self, control: &mut TweenControl<K>) {
        self.next_id = control.next_id;
        for op in control.ops.drain(..) {
            match op {
                ControlOp::Register(handle, tween) => {
                    self.active.insert(handle, tween);
                }
                ControlOp::Cancel(handle) => {
                    self.active.shift_remove(&handle);
                }
            }
        }
    }
}

/// Registry view that starts every tween on the scheduler's next tick.
///
/// Used for events that arrive between frames, when the caller has no
/// trustworthy frame time of its own.
pub struct NextTick<'a, K> {
    scheduler: &'a mut AnimationScheduler<K>,
}

impl<K: Copy> AnimationScheduler<K> {
    #[must_use]
    pub fn next_tick(&mut self) -> NextTick<'_, K> {
        NextTick { scheduler: self }
    }
}

impl<K: Copy> TweenRegistry<K> for NextTick<'_, K> {
    fn register(&mut self, tween: Tween<K>) -> TweenHandle {
        self.scheduler.register(tween.starting_next_tick())
    }

    fn cancel(&mut self, handle: TweenHandle) {
        self.scheduler.cancel(handle);
    }
}

impl<K: Copy> TweenRegistry<K> for AnimationScheduler<K> {
    fn register(&mut self, tween: Tween<K>) -> TweenHandle {
        let handle = TweenHandle(self.next_id);
        self.next_id += 1;
        if self.active.is_empty() {
            debug!(start_time = ?tween.start_time, "scheduler started");
        }
        self.active.insert(handle, tween);
        handle
    }

    fn cancel(&mut self, handle: TweenHandle) {
        if self.active.shift_remove(&handle).is_some() {
            trace!(handle = handle.0, "tween cancelled");
        }
    }
}
