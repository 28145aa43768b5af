use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Time scales operate on epoch milliseconds.
#[must_use]
pub fn datetime_to_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Inverse of [`datetime_to_millis`]; `None` when out of chrono's range.
#[must_use]
pub fn millis_to_datetime(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
}
