use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use linechart::core::{Domain, Scale, ScaleKind};

#[test]
fn linear_scale_maps_endpoints_exactly() {
    let scale = Scale::linear(Domain::new(10.0, 20.0), (460.0, 0.0)).expect("valid scale");
    assert_eq!(scale.map(10.0), 460.0);
    assert_eq!(scale.map(20.0), 0.0);
    assert_eq!(scale.map(15.0), 230.0);
}

#[test]
fn linear_scale_extrapolates_outside_domain() {
    let scale = Scale::linear(Domain::new(0.0, 10.0), (0.0, 100.0)).expect("valid scale");
    assert_eq!(scale.map(-5.0), -50.0);
    assert_eq!(scale.map(20.0), 200.0);

    let clamped = scale.with_clamp(true);
    assert_eq!(clamped.map(-5.0), 0.0);
    assert_eq!(clamped.map(20.0), 100.0);
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let scale = Scale::linear(Domain::point(42.0), (460.0, 0.0)).expect("valid scale");
    assert_eq!(scale.map(42.0), 460.0);
    assert_eq!(scale.map(-1.0), 460.0);
    assert_eq!(scale.invert(100.0), 42.0);
}

#[test]
fn invert_recovers_domain_values() {
    let scale = Scale::linear(Domain::new(-3.0, 7.5), (0.0, 905.0)).expect("valid scale");
    for value in [-3.0, 0.0, 1.25, 7.5] {
        assert_abs_diff_eq!(scale.invert(scale.map(value)), value, epsilon = 1e-9);
    }
}

#[test]
fn rounding_applies_to_mapped_output() {
    let scale = Scale::linear(Domain::new(0.0, 2.0), (0.0, 905.0))
        .expect("valid scale")
        .with_round(true);
    assert_eq!(scale.map(1.0), 453.0);
    assert!(scale.rounds());
}

#[test]
fn time_scale_maps_dates_through_epoch_millis() {
    let start = Utc.with_ymd_and_hms(2007, 4, 24, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2007, 4, 26, 0, 0, 0).unwrap();
    let middle = Utc.with_ymd_and_hms(2007, 4, 25, 0, 0, 0).unwrap();
    let scale = Scale::time(Domain::new(start, end), (0.0, 900.0)).expect("valid scale");

    assert_eq!(scale.kind(), ScaleKind::Time);
    assert_eq!(scale.map_time(start), 0.0);
    assert_eq!(scale.map_time(middle), 450.0);
    assert_eq!(scale.map_time(end), 900.0);
    assert_eq!(scale.invert_time(450.0), Some(middle));
}

#[test]
fn non_finite_inputs_are_rejected() {
    assert!(Scale::linear(Domain::new(0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    assert!(Scale::linear(Domain::new(0.0, 1.0), (0.0, f64::NAN)).is_err());
}

#[test]
fn scale_ticks_follow_kind() {
    let linear = Scale::linear(Domain::new(0.0, 100.0), (0.0, 500.0)).expect("valid scale");
    assert_eq!(linear.ticks(10).len(), 11);

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let time = Scale::time(Domain::new(start, end), (0.0, 500.0)).expect("valid scale");
    let ticks = time.ticks(5);
    let first = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap();
    assert_eq!(ticks.first().copied(), Some(first.timestamp_millis() as f64));
    assert_eq!(ticks.len(), 4);
}
