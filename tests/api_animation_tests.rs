use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use linechart::animation::PathDrawPhase;
use linechart::api::{ChartEngine, ChartEngineConfig};
use linechart::core::{Margins, ProjectionChange, Sample, Viewport};
use linechart::interaction::TooltipState;
use linechart::render::NullRenderer;

fn config() -> ChartEngineConfig {
    ChartEngineConfig::new(Viewport::new(
        960.0,
        500.0,
        Margins::new(20.0, 20.0, 20.0, 35.0),
    ))
}

fn series(values: &[f64]) -> Vec<Sample> {
    let start = Utc.with_ymd_and_hms(2007, 4, 24, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(day, value)| Sample::new(start + Duration::days(day as i64), *value))
        .collect()
}

fn engine_with(values: &[f64]) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::with_samples(NullRenderer::default(), config(), series(values))
        .expect("engine init");
    engine.tick(0.0).expect("first frame");
    engine
}

#[test]
fn full_loop_pause_draw_hold_restart() {
    let mut engine = engine_with(&[10.0, 20.0, 15.0]);
    assert!(engine.needs_frame());

    engine.tick(1_499.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Pending);
    assert!(engine.scene().markers.is_empty());

    engine.tick(1_500.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Drawing);
    assert_eq!(engine.path_cycles(), 1);

    engine.tick(3_000.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Holding);
    assert_eq!(engine.path_reveal().dash_offset, 0.0);
    assert_eq!(engine.marker_radii(), &[4.0, 4.0, 4.0]);

    engine.tick(5_000.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Drawing);
    assert_eq!(engine.path_cycles(), 2);
    assert_eq!(engine.marker_radii(), &[0.0, 0.0, 0.0]);
    assert!(engine.needs_frame());
}

#[test]
fn points_enter_only_after_reveal_starts() {
    let mut engine = engine_with(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    engine.tick(1_000.0).expect("tick");
    assert!(engine.marker_radii().iter().all(|radius| *radius == 0.0));

    engine.tick(1_500.0).expect("tick");
    engine.tick(1_600.0).expect("tick");
    let radii = engine.marker_radii();
    assert!(radii[0] > 0.0);
    assert!(radii[1] > 0.0);
    assert_eq!(radii[2], 0.0);
}

#[test]
fn new_data_restarts_geometry_bound_animations() {
    let mut engine = engine_with(&[10.0, 20.0, 15.0]);
    engine.tick(1_500.0).expect("tick");
    engine.tick(2_000.0).expect("tick");
    let old_length = engine.path_reveal().total_length;

    let change = engine
        .set_samples(series(&[10.0, 20.0, 15.0, 30.0]))
        .expect("set data");
    assert_eq!(change, ProjectionChange::Recomputed);

    let reveal = engine.path_reveal();
    assert_eq!(engine.path_phase(), PathDrawPhase::Drawing);
    assert_ne!(reveal.total_length, old_length);
    assert_eq!(reveal.total_length, engine.projection().expect("projection").path_length());
    assert_eq!(reveal.dash_offset, reveal.total_length);
    assert_eq!(engine.marker_radii().len(), 4);
    // One draw tween plus one entrance tween per point.
    assert_eq!(engine.active_tween_count(), 1 + 4);
}

#[test]
fn same_sequence_identity_is_not_reprojected() {
    let data: Arc<[Sample]> = series(&[10.0, 20.0, 15.0]).into();
    let mut engine = ChartEngine::with_samples(NullRenderer::default(), config(), Arc::clone(&data))
        .expect("engine init");
    engine.tick(0.0).expect("first frame");
    engine.tick(1_500.0).expect("tick");
    engine.tick(2_000.0).expect("tick");
    let before = engine.path_reveal();

    assert_eq!(
        engine.set_data(Arc::clone(&data)).expect("set data"),
        ProjectionChange::Unchanged
    );
    assert_eq!(engine.path_reveal(), before);
}

#[test]
fn data_change_during_initial_pause_keeps_the_pause() {
    let mut engine = engine_with(&[10.0, 20.0]);
    engine.tick(1_000.0).expect("tick");
    engine.set_samples(series(&[5.0, 6.0, 7.0])).expect("set data");

    assert_eq!(engine.path_phase(), PathDrawPhase::Pending);
    engine.tick(1_499.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Pending);
    engine.tick(1_500.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Drawing);
}

#[test]
fn resize_reprojects_and_resets_tooltip() {
    let mut engine = engine_with(&[10.0, 20.0, 15.0]);
    engine.tick(1_500.0).expect("tick");
    engine.pointer_enter_point(1).expect("enter");
    assert_eq!(engine.tooltip_state(), TooltipState::Entering);

    let change = engine
        .set_viewport(Viewport::new(480.0, 300.0, Margins::zero()))
        .expect("resize");
    assert_eq!(change, ProjectionChange::Recomputed);
    assert_eq!(engine.tooltip_state(), TooltipState::Hidden);
    assert_eq!(engine.projected_points()[2].x, 480.0);
}

#[test]
fn dispose_stops_every_callback() {
    let mut engine = engine_with(&[10.0, 20.0, 15.0]);
    engine.tick(1_500.0).expect("tick");
    engine.pointer_enter_point(0).expect("enter");
    engine.dispose();

    assert!(engine.is_disposed());
    assert!(!engine.needs_frame());
    assert_eq!(engine.active_tween_count(), 0);

    let reveal = engine.path_reveal();
    let report = engine.tick(10_000.0).expect("tick");
    assert_eq!(report.updated, 0);
    assert_eq!(engine.path_reveal(), reveal);
    assert_eq!(engine.path_phase(), PathDrawPhase::Disposed);

    engine.set_samples(series(&[1.0, 2.0])).expect("set data");
    assert_eq!(engine.active_tween_count(), 0);

    let mut features = engine.config().features;
    features.show_points = false;
    engine.set_features(features);
    features.show_points = true;
    engine.set_features(features);
    assert_eq!(engine.active_tween_count(), 0);

    let mut style = engine.config().style;
    style.point_radius = 6.0;
    engine.set_style(style).expect("set style");
    assert_eq!(engine.active_tween_count(), 0);
    assert!(!engine.needs_frame());
}

#[test]
fn toggling_animation_at_runtime() {
    let mut engine = engine_with(&[10.0, 20.0, 15.0]);
    engine.tick(1_600.0).expect("tick");

    let mut features = engine.config().features;
    features.animate = false;
    engine.set_features(features);
    assert_eq!(engine.path_phase(), PathDrawPhase::Static);
    assert_eq!(engine.active_tween_count(), 0);

    features.animate = true;
    engine.set_features(features);
    assert_eq!(engine.path_phase(), PathDrawPhase::Pending);
    // The pause starts on the first frame after the toggle.
    engine.tick(1_700.0).expect("tick");
    engine.tick(1_700.0 + 1_499.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Pending);
    engine.tick(1_700.0 + 1_500.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Drawing);
}

#[test]
fn initial_pause_is_measured_from_the_first_frame() {
    let mut engine = ChartEngine::with_samples(
        NullRenderer::default(),
        config(),
        series(&[10.0, 20.0, 15.0]),
    )
    .expect("engine init");

    engine.tick(100_000.0).expect("first frame");
    assert_eq!(engine.path_phase(), PathDrawPhase::Pending);
    engine.tick(101_499.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Pending);
    engine.tick(101_500.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Drawing);
    assert_eq!(engine.path_cycles(), 1);
}

#[test]
fn redraw_after_new_data_starts_on_the_next_frame() {
    let mut engine = engine_with(&[10.0, 20.0, 15.0]);
    engine.tick(1_500.0).expect("tick");
    engine.tick(2_000.0).expect("tick");

    engine
        .set_samples(series(&[10.0, 20.0, 15.0, 30.0]))
        .expect("set data");
    let total = engine.path_reveal().total_length;

    // The host resumes ticking well after the data arrived.
    engine.tick(60_000.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Drawing);
    assert_eq!(engine.path_reveal().dash_offset, total);
    engine.tick(61_500.0).expect("tick");
    assert_eq!(engine.path_phase(), PathDrawPhase::Holding);
}

#[test]
fn non_finite_tick_time_is_rejected() {
    let mut engine = engine_with(&[10.0]);
    assert!(engine.tick(f64::NAN).is_err());
}
