use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use linechart::core::Sample;
use linechart::error::{ChartError, InputError};
use linechart::input::{
    DateFormat, parse_sample_date, samples_from_json_str, samples_from_text_records,
};
use rust_decimal::Decimal;

#[test]
fn parses_day_month_year_dates_at_utc_midnight() {
    let date = parse_sample_date("24-Apr-07", DateFormat::DayMonthYear).expect("date");
    assert_eq!(date, Utc.with_ymd_and_hms(2007, 4, 24, 0, 0, 0).unwrap());
}

#[test]
fn parses_iso_and_rfc3339_dates() {
    let iso = parse_sample_date("2007-04-24", DateFormat::IsoDate).expect("iso");
    assert_eq!(iso, Utc.with_ymd_and_hms(2007, 4, 24, 0, 0, 0).unwrap());

    let rfc = parse_sample_date("2007-04-24T12:00:00+02:00", DateFormat::Rfc3339).expect("rfc");
    assert_eq!(rfc, Utc.with_ymd_and_hms(2007, 4, 24, 10, 0, 0).unwrap());
}

#[test]
fn malformed_dates_are_reported_with_their_input() {
    let err = parse_sample_date("2007/04/24", DateFormat::DayMonthYear).expect_err("malformed");
    assert_eq!(
        err,
        InputError::MalformedDate {
            raw: "2007/04/24".to_owned(),
            format: "%d-%b-%y",
        }
    );

    let wrapped: ChartError = err.into();
    assert!(matches!(wrapped, ChartError::Input(_)));
}

#[test]
fn json_records_accept_value_aliases() {
    let json = r#"[
        { "date": "24-Apr-07", "close": 93.24 },
        { "date": "25-Apr-07", "stress": 95.35 },
        { "date": "26-Apr-07", "value": 98.84 }
    ]"#;
    let samples = samples_from_json_str(json, DateFormat::DayMonthYear).expect("samples");

    let values: Vec<_> = samples.iter().map(|sample| sample.value).collect();
    assert_eq!(values, vec![93.24, 95.35, 98.84]);
    assert_eq!(samples[2].date, Utc.with_ymd_and_hms(2007, 4, 26, 0, 0, 0).unwrap());
}

#[test]
fn json_errors_surface_synchronously() {
    assert!(matches!(
        samples_from_json_str("not json", DateFormat::DayMonthYear),
        Err(InputError::Json(_))
    ));
    assert!(matches!(
        samples_from_json_str(r#"[{ "date": "bogus", "value": 1.0 }]"#, DateFormat::DayMonthYear),
        Err(InputError::MalformedDate { .. })
    ));
}

#[test]
fn text_records_parse_values_and_reject_garbage() {
    let samples = samples_from_text_records(
        [("24-Apr-07", "93.24"), ("25-Apr-07", " 95.35 ")],
        DateFormat::DayMonthYear,
    )
    .expect("samples");
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[1].value, 95.35);

    let err = samples_from_text_records(
        [("24-Apr-07", "93.24"), ("25-Apr-07", "n/a")],
        DateFormat::DayMonthYear,
    )
    .expect_err("bad value");
    assert!(matches!(err, InputError::MalformedValue { index: 1, .. }));

    let err = samples_from_text_records([("24-Apr-07", "inf")], DateFormat::DayMonthYear)
        .expect_err("non-finite");
    assert!(matches!(err, InputError::MalformedValue { index: 0, .. }));
}

#[test]
fn decimal_values_convert_to_samples() {
    let date = parse_sample_date("24-Apr-07", DateFormat::DayMonthYear).expect("date");
    let close: Decimal = "93.24".parse().expect("decimal");

    let sample = Sample::from_decimal(date, close).expect("sample");
    assert_eq!(sample.date, date);
    assert_relative_eq!(sample.value, 93.24, max_relative = 1e-12);

    let negative = Sample::from_decimal(date, Decimal::new(-1_505, 1)).expect("sample");
    assert_relative_eq!(negative.value, -150.5, max_relative = 1e-12);
}
