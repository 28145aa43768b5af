//! Calendar-aware tick generation for temporal axes.
//!
//! Tick spacing prefers human units (seconds through years) over raw
//! millisecond steps. All alignment happens in UTC so the output is a pure
//! function of the domain and the requested count.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::domain::Domain;
use crate::core::primitives::{datetime_to_millis, millis_to_datetime};
use crate::core::ticks::nice_tick_step;

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const WEEK_MS: f64 = 7.0 * DAY_MS;
const MONTH_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;

const MAX_STEPS: usize = 10_000;

/// Spacing unit chosen for a temporal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeTickInterval {
    Millisecond(u64),
    Second(u32),
    Minute(u32),
    Hour(u32),
    Day(u32),
    /// Sunday-aligned weeks.
    Week,
    Month(u32),
    Year(u32),
}

const CANDIDATES: [TimeTickInterval; 17] = [
    TimeTickInterval::Second(1),
    TimeTickInterval::Second(5),
    TimeTickInterval::Second(15),
    TimeTickInterval::Second(30),
    TimeTickInterval::Minute(1),
    TimeTickInterval::Minute(5),
    TimeTickInterval::Minute(15),
    TimeTickInterval::Minute(30),
    TimeTickInterval::Hour(1),
    TimeTickInterval::Hour(3),
    TimeTickInterval::Hour(6),
    TimeTickInterval::Hour(12),
    TimeTickInterval::Day(1),
    TimeTickInterval::Day(2),
    TimeTickInterval::Week,
    TimeTickInterval::Month(1),
    TimeTickInterval::Month(3),
];

impl TimeTickInterval {
    /// Nominal length in milliseconds (months count as 30 days, years as 365).
    #[must_use]
    pub fn nominal_millis(self) -> f64 {
        match self {
            Self::Millisecond(step) => step as f64,
            Self::Second(n) => f64::from(n) * SECOND_MS,
            Self::Minute(n) => f64::from(n) * MINUTE_MS,
            Self::Hour(n) => f64::from(n) * HOUR_MS,
            Self::Day(n) => f64::from(n) * DAY_MS,
            Self::Week => WEEK_MS,
            Self::Month(n) => f64::from(n) * MONTH_MS,
            Self::Year(n) => f64::from(n) * YEAR_MS,
        }
    }

    /// Picks the interval whose nominal length is closest to `span / count`.
    #[must_use]
    pub fn select(domain: Domain<DateTime<Utc>>, count: usize) -> Option<Self> {
        if count == 0 || domain.is_degenerate() {
            return None;
        }
        let millis = domain.to_millis();
        let target = millis.span() / count as f64;

        let index = CANDIDATES.partition_point(|interval| interval.nominal_millis() <= target);
        if index == CANDIDATES.len() {
            let years = Domain::new(millis.min() / YEAR_MS, millis.max() / YEAR_MS);
            let step = nice_tick_step(years, count).round().max(1.0);
            return Some(Self::Year(step.min(f64::from(u32::MAX)) as u32));
        }
        if index == 0 {
            let step = nice_tick_step(millis, count).round().max(1.0);
            return Some(Self::Millisecond(step as u64));
        }

        let below = CANDIDATES[index - 1];
        let above = CANDIDATES[index];
        if target / below.nominal_millis() < above.nominal_millis() / target {
            Some(below)
        } else {
            Some(above)
        }
    }

    fn fixed_step_millis(self) -> Option<f64> {
        match self {
            Self::Millisecond(_) | Self::Second(_) | Self::Minute(_) | Self::Hour(_) => {
                Some(self.nominal_millis())
            }
            Self::Day(_) | Self::Week | Self::Month(_) | Self::Year(_) => None,
        }
    }

    /// Formats a tick label at a granularity matching this interval.
    #[must_use]
    pub fn format(self, time: DateTime<Utc>) -> String {
        let pattern = match self {
            Self::Millisecond(_) => "%H:%M:%S%.3f",
            Self::Second(_) => "%H:%M:%S",
            Self::Minute(_) | Self::Hour(_) => "%H:%M",
            Self::Day(_) | Self::Week => "%b %-d",
            Self::Month(_) => "%b %Y",
            Self::Year(_) => "%Y",
        };
        time.format(pattern).to_string()
    }
}

/// Ticks plus the interval that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTicks {
    pub interval: Option<TimeTickInterval>,
    pub ticks: Vec<DateTime<Utc>>,
}

/// Calendar-aligned ticks inside `domain`, roughly `count` of them.
#[must_use]
pub fn time_ticks(domain: Domain<DateTime<Utc>>, count: usize) -> Vec<DateTime<Utc>> {
    time_ticks_with_interval(domain, count).ticks
}

#[must_use]
pub fn time_ticks_with_interval(domain: Domain<DateTime<Utc>>, count: usize) -> TimeTicks {
    if count == 0 {
        return TimeTicks {
            interval: None,
            ticks: Vec::new(),
        };
    }
    if domain.is_degenerate() {
        return TimeTicks {
            interval: None,
            ticks: vec![domain.min()],
        };
    }

    let Some(interval) = TimeTickInterval::select(domain, count) else {
        return TimeTicks {
            interval: None,
            ticks: Vec::new(),
        };
    };

    let ticks = match interval.fixed_step_millis() {
        Some(step) => fixed_step_ticks(domain, step),
        None => calendar_ticks(domain, interval),
    };
    TimeTicks {
        interval: Some(interval),
        ticks,
    }
}

fn fixed_step_ticks(domain: Domain<DateTime<Utc>>, step: f64) -> Vec<DateTime<Utc>> {
    let millis = domain.to_millis();
    let first = (millis.min() / step).ceil() as i64;
    let last = (millis.max() / step).floor() as i64;
    if last < first {
        return Vec::new();
    }

    (first..=last)
        .take(MAX_STEPS)
        .filter_map(|index| millis_to_datetime(index as f64 * step))
        .collect()
}

fn calendar_ticks(
    domain: Domain<DateTime<Utc>>,
    interval: TimeTickInterval,
) -> Vec<DateTime<Utc>> {
    let Some(mut cursor) = first_calendar_candidate(domain.min(), interval) else {
        return Vec::new();
    };

    let mut ticks = Vec::new();
    for _ in 0..MAX_STEPS {
        if cursor > domain.max() {
            break;
        }
        if accepts(cursor, interval) {
            ticks.push(cursor);
        }
        match advance(cursor, interval) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    ticks
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// First unit boundary at or after `min`.
fn first_calendar_candidate(
    min: DateTime<Utc>,
    interval: TimeTickInterval,
) -> Option<DateTime<Utc>> {
    let date = min.date_naive();
    match interval {
        TimeTickInterval::Day(_) => ceil_boundary(min, start_of_day(date), |t| {
            t.checked_add_days(Days::new(1))
        }),
        TimeTickInterval::Week => {
            let day = ceil_boundary(min, start_of_day(date), |t| {
                t.checked_add_days(Days::new(1))
            })?;
            let to_sunday = (7 - day.weekday().num_days_from_sunday()) % 7;
            day.checked_add_days(Days::new(u64::from(to_sunday)))
        }
        TimeTickInterval::Month(_) => {
            let month_start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?;
            ceil_boundary(min, start_of_day(month_start), |t| {
                t.checked_add_months(Months::new(1))
            })
        }
        TimeTickInterval::Year(_) => {
            let year_start = NaiveDate::from_ymd_opt(date.year(), 1, 1)?;
            ceil_boundary(min, start_of_day(year_start), |t| {
                t.checked_add_months(Months::new(12))
            })
        }
        TimeTickInterval::Millisecond(_)
        | TimeTickInterval::Second(_)
        | TimeTickInterval::Minute(_)
        | TimeTickInterval::Hour(_) => None,
    }
}

fn ceil_boundary(
    min: DateTime<Utc>,
    floor: DateTime<Utc>,
    next: impl Fn(DateTime<Utc>) -> Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    if floor < min { next(floor) } else { Some(floor) }
}

fn accepts(time: DateTime<Utc>, interval: TimeTickInterval) -> bool {
    match interval {
        TimeTickInterval::Day(n) => (time.day() - 1) % n.max(1) == 0,
        TimeTickInterval::Week => time.weekday() == Weekday::Sun,
        TimeTickInterval::Month(n) => time.month0() % n.max(1) == 0,
        TimeTickInterval::Year(n) => {
            time.year().rem_euclid(i32::try_from(n.max(1)).unwrap_or(i32::MAX)) == 0
        }
        TimeTickInterval::Millisecond(_)
        | TimeTickInterval::Second(_)
        | TimeTickInterval::Minute(_)
        | TimeTickInterval::Hour(_) => true,
    }
}

fn advance(time: DateTime<Utc>, interval: TimeTickInterval) -> Option<DateTime<Utc>> {
    match interval {
        TimeTickInterval::Day(_) => time.checked_add_days(Days::new(1)),
        TimeTickInterval::Week => time.checked_add_days(Days::new(7)),
        TimeTickInterval::Month(_) => time.checked_add_months(Months::new(1)),
        TimeTickInterval::Year(_) => time.checked_add_months(Months::new(12)),
        TimeTickInterval::Millisecond(_)
        | TimeTickInterval::Second(_)
        | TimeTickInterval::Minute(_)
        | TimeTickInterval::Hour(_) => {
            millis_to_datetime(datetime_to_millis(time) + interval.nominal_millis())
        }
    }
}
