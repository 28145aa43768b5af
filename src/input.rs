//! Conversion of raw loader records into typed [`Sample`]s.
//!
//! The chart core never parses external formats; loaders call into this
//! module and get an [`InputError`] back synchronously on malformed input.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Sample;
use crate::error::InputError;

/// Accepted textual date encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `24-Apr-07`: day, abbreviated month, two-digit year.
    #[default]
    DayMonthYear,
    /// `2007-04-24`.
    IsoDate,
    /// `2007-04-24T00:00:00Z` or with an explicit offset.
    Rfc3339,
}

impl DateFormat {
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "%d-%b-%y",
            Self::IsoDate => "%Y-%m-%d",
            Self::Rfc3339 => "rfc3339",
        }
    }
}

/// Parses one date; calendar dates resolve to midnight UTC.
pub fn parse_sample_date(raw: &str, format: DateFormat) -> Result<DateTime<Utc>, InputError> {
    let raw = raw.trim();
    let malformed = || InputError::MalformedDate {
        raw: raw.to_owned(),
        format: format.pattern(),
    };

    match format {
        DateFormat::DayMonthYear | DateFormat::IsoDate => {
            NaiveDate::parse_from_str(raw, format.pattern())
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
                .map_err(|_| malformed())
        }
        DateFormat::Rfc3339 => DateTime::parse_from_rfc3339(raw)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|_| malformed()),
    }
}

/// JSON record shape. `close` and `stress` are accepted as value aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub date: String,
    #[serde(alias = "close", alias = "stress")]
    pub value: f64,
}

/// Parses a JSON array of `{ "date": ..., "value": ... }` records.
pub fn samples_from_json_str(input: &str, format: DateFormat) -> Result<Vec<Sample>, InputError> {
    let records: Vec<RawSample> =
        serde_json::from_str(input).map_err(|e| InputError::Json(e.to_string()))?;
    let samples = records
        .iter()
        .map(|record| Ok(Sample::new(parse_sample_date(&record.date, format)?, record.value)))
        .collect::<Result<Vec<_>, InputError>>()?;
    debug!(count = samples.len(), "parsed json samples");
    Ok(samples)
}

/// Parses `(date, value)` text pairs, e.g. rows of a CSV file.
pub fn samples_from_text_records<'a, I>(
    records: I,
    format: DateFormat,
) -> Result<Vec<Sample>, InputError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, (date, value))| {
            let date = parse_sample_date(date, format)?;
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|e| InputError::MalformedValue {
                    index,
                    reason: e.to_string(),
                })?;
            if !value.is_finite() {
                return Err(InputError::MalformedValue {
                    index,
                    reason: "value must be finite".to_owned(),
                });
            }
            Ok(Sample::new(date, value))
        })
        .collect()
}
