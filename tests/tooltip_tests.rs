use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use linechart::animation::{AnimationScheduler, ChartTween, TweenControl, TweenHandle, TweenSink};
use linechart::core::ProjectedPoint;
use linechart::interaction::{TooltipConfig, TooltipController, TooltipState, hit_test_points};

struct TooltipHost {
    tooltip: TooltipController,
}

impl TweenSink<ChartTween> for TooltipHost {
    fn on_update(
        &mut self,
        handle: TweenHandle,
        _target: ChartTween,
        progress: f64,
        _control: &mut TweenControl<ChartTween>,
    ) {
        self.tooltip.on_fade_update(handle, progress);
    }

    fn on_complete(
        &mut self,
        handle: TweenHandle,
        _target: ChartTween,
        _control: &mut TweenControl<ChartTween>,
    ) {
        self.tooltip.on_fade_complete(handle);
    }
}

fn host() -> (AnimationScheduler<ChartTween>, TooltipHost) {
    (
        AnimationScheduler::new(),
        TooltipHost {
            tooltip: TooltipController::new(TooltipConfig::default()),
        },
    )
}

fn points() -> Vec<ProjectedPoint> {
    (0..3)
        .map(|index| ProjectedPoint {
            index,
            date: Utc.with_ymd_and_hms(2007, 4, 24 + index as u32, 0, 0, 0).unwrap(),
            value: 10.0 + index as f64,
            x: index as f64 * 100.0,
            y: 200.0,
        })
        .collect()
}

#[test]
fn enter_fades_in_to_visible() {
    let (mut scheduler, mut host) = host();
    host.tooltip.pointer_enter(&mut scheduler, 0.0, 1);
    assert_eq!(host.tooltip.state(), TooltipState::Entering);
    assert_eq!(host.tooltip.hovered(), Some(1));

    scheduler.tick(125.0, &mut host);
    assert_abs_diff_eq!(host.tooltip.opacity(), 0.5, epsilon = 1e-12);

    scheduler.tick(250.0, &mut host);
    assert_eq!(host.tooltip.state(), TooltipState::Visible);
    assert_eq!(host.tooltip.opacity(), 1.0);
    assert!(host.tooltip.fade_handle().is_none());
}

#[test]
fn leave_fades_out_and_clears_hover() {
    let (mut scheduler, mut host) = host();
    host.tooltip.pointer_enter(&mut scheduler, 0.0, 1);
    scheduler.tick(250.0, &mut host);

    host.tooltip.pointer_leave(&mut scheduler, 300.0, 1);
    assert_eq!(host.tooltip.state(), TooltipState::Exiting);

    scheduler.tick(550.0, &mut host);
    assert_eq!(host.tooltip.state(), TooltipState::Hidden);
    assert_eq!(host.tooltip.hovered(), None);
    assert_eq!(host.tooltip.opacity(), 0.0);
}

#[test]
fn switching_points_mid_fade_leaves_no_stale_timer() {
    let (mut scheduler, mut host) = host();
    host.tooltip.pointer_enter(&mut scheduler, 0.0, 0);
    let first_fade = host.tooltip.fade_handle();
    scheduler.tick(100.0, &mut host);

    host.tooltip.pointer_enter(&mut scheduler, 100.0, 2);
    assert_eq!(host.tooltip.state(), TooltipState::Entering);
    assert_eq!(host.tooltip.hovered(), Some(2));
    assert_eq!(scheduler.active_count(), 1);
    assert!(first_fade.is_some_and(|handle| !scheduler.is_active(handle)));

    scheduler.tick(350.0, &mut host);
    assert_eq!(host.tooltip.state(), TooltipState::Visible);
    assert_eq!(host.tooltip.hovered(), Some(2));
}

#[test]
fn leave_during_fade_in_fades_out_from_current_opacity() {
    let (mut scheduler, mut host) = host();
    host.tooltip.pointer_enter(&mut scheduler, 0.0, 1);
    scheduler.tick(125.0, &mut host);
    let reached = host.tooltip.opacity();

    host.tooltip.pointer_leave(&mut scheduler, 125.0, 1);
    assert_eq!(host.tooltip.state(), TooltipState::Exiting);
    scheduler.tick(125.0, &mut host);
    assert_abs_diff_eq!(host.tooltip.opacity(), reached, epsilon = 1e-12);

    scheduler.tick(375.0, &mut host);
    assert_eq!(host.tooltip.state(), TooltipState::Hidden);
}

#[test]
fn reentering_while_exiting_fades_back_in() {
    let (mut scheduler, mut host) = host();
    host.tooltip.pointer_enter(&mut scheduler, 0.0, 1);
    scheduler.tick(250.0, &mut host);
    host.tooltip.pointer_leave(&mut scheduler, 250.0, 1);
    scheduler.tick(300.0, &mut host);

    host.tooltip.pointer_enter(&mut scheduler, 300.0, 1);
    assert_eq!(host.tooltip.state(), TooltipState::Entering);
    scheduler.tick(550.0, &mut host);
    assert_eq!(host.tooltip.state(), TooltipState::Visible);
}

#[test]
fn leaving_another_point_is_ignored() {
    let (mut scheduler, mut host) = host();
    host.tooltip.pointer_enter(&mut scheduler, 0.0, 1);
    host.tooltip.pointer_leave(&mut scheduler, 10.0, 0);
    assert_eq!(host.tooltip.state(), TooltipState::Entering);
    assert_eq!(host.tooltip.hovered(), Some(1));
}

#[test]
fn anchor_sits_above_hovered_point() {
    let (mut scheduler, mut host) = host();
    let points = points();
    assert!(host.tooltip.anchor(&points).is_none());

    host.tooltip.pointer_enter(&mut scheduler, 0.0, 2);
    let anchor = host.tooltip.anchor(&points).expect("anchor while entering");
    assert_eq!(anchor.point_index, 2);
    assert_eq!((anchor.x, anchor.y), (200.0, 165.0));
}

#[test]
fn reset_hides_and_cancels_fade() {
    let (mut scheduler, mut host) = host();
    host.tooltip.pointer_enter(&mut scheduler, 0.0, 1);
    host.tooltip.reset(&mut scheduler);

    assert_eq!(host.tooltip.state(), TooltipState::Hidden);
    assert!(!scheduler.is_running());
}

#[test]
fn hit_test_picks_nearest_marker_within_reach() {
    let points = points();
    assert_eq!(hit_test_points(&points, 102.0, 201.0, 4.0, 2.0), Some(1));
    assert_eq!(hit_test_points(&points, 150.0, 200.0, 4.0, 2.0), None);
    assert_eq!(hit_test_points(&points, f64::NAN, 200.0, 4.0, 2.0), None);
}
