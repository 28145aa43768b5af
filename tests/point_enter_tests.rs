use approx::assert_abs_diff_eq;
use linechart::animation::{
    AnimationScheduler, ChartTween, PointEnterAnimation, PointEnterTimings, TweenControl,
    TweenHandle, TweenSink,
};

struct PointsHost {
    points: PointEnterAnimation,
}

impl TweenSink<ChartTween> for PointsHost {
    fn on_update(
        &mut self,
        _handle: TweenHandle,
        target: ChartTween,
        progress: f64,
        _control: &mut TweenControl<ChartTween>,
    ) {
        if let ChartTween::PointEnter(index) = target {
            self.points.on_update(index, progress);
        }
    }

    fn on_complete(
        &mut self,
        _handle: TweenHandle,
        target: ChartTween,
        _control: &mut TweenControl<ChartTween>,
    ) {
        if let ChartTween::PointEnter(index) = target {
            self.points.on_complete(index);
        }
    }
}

fn started(count: usize) -> (AnimationScheduler<ChartTween>, PointsHost) {
    let mut scheduler = AnimationScheduler::new();
    let mut host = PointsHost {
        points: PointEnterAnimation::new(PointEnterTimings::default(), 4.0),
    };
    host.points.start(&mut scheduler, 0.0, count);
    (scheduler, host)
}

#[test]
fn points_start_collapsed() {
    let (_, host) = started(5);
    assert_eq!(host.points.radii(), &[0.0; 5]);
    assert_eq!(host.points.active_count(), 5);
}

#[test]
fn entrance_is_staggered_by_index() {
    let (mut scheduler, mut host) = started(5);

    scheduler.tick(100.0, &mut host);
    assert!(host.points.radius(0).is_some_and(|r| r != 0.0));
    assert!(host.points.radius(1).is_some_and(|r| r != 0.0));
    assert_eq!(host.points.radius(2), Some(0.0));
    assert_eq!(host.points.radius(4), Some(0.0));
}

#[test]
fn elastic_entrance_overshoots_then_settles() {
    let (mut scheduler, mut host) = started(1);

    let mut peak: f64 = 0.0;
    let mut now = 0.0;
    while now < 600.0 {
        scheduler.tick(now, &mut host);
        peak = peak.max(host.points.radius(0).unwrap_or(0.0));
        now += 8.0;
    }
    assert!(peak > 4.0, "peak radius {peak} should overshoot");

    scheduler.tick(600.0, &mut host);
    assert_eq!(host.points.radius(0), Some(4.0));
    assert!(host.points.is_settled());
}

#[test]
fn all_points_settle_after_last_delay() {
    let (mut scheduler, mut host) = started(5);
    scheduler.tick(4.0 * 80.0 + 600.0, &mut host);

    for radius in host.points.radii() {
        assert_abs_diff_eq!(*radius, 4.0);
    }
    assert!(!scheduler.is_running());
}

#[test]
fn restart_replaces_in_flight_tweens() {
    let (mut scheduler, mut host) = started(3);
    scheduler.tick(200.0, &mut host);

    host.points.start(&mut scheduler, 200.0, 3);
    assert_eq!(scheduler.active_count(), 3);
    assert_eq!(host.points.radii(), &[0.0; 3]);
}

#[test]
fn settle_and_reset_cancel_everything() {
    let (mut scheduler, mut host) = started(3);
    host.points.settle(&mut scheduler, 3);
    assert_eq!(host.points.radii(), &[4.0; 3]);
    assert!(!scheduler.is_running());

    host.points.start(&mut scheduler, 0.0, 3);
    host.points.reset(&mut scheduler, 2);
    assert_eq!(host.points.radii(), &[0.0; 2]);
    assert!(!scheduler.is_running());
}
