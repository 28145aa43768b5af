//! "Nice number" tick placement for numeric axes.
//!
//! Steps are 1, 2 or 5 times a power of ten. Tick values are produced from
//! integer multiples of the step (or integer divisions for sub-unit steps) so
//! `[0, 100]` with ten ticks yields exactly `0, 10, ..., 100` with no float drift.

use crate::core::domain::Domain;

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MAX_TICKS: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: i64,
    last: i64,
    /// Multiplier when `inverse` is false, divisor otherwise.
    increment: f64,
    inverse: bool,
}

impl TickSpec {
    fn value(self, index: i64) -> f64 {
        if self.inverse {
            index as f64 / self.increment
        } else {
            index as f64 * self.increment
        }
    }

    fn step(self) -> f64 {
        if self.inverse {
            1.0 / self.increment
        } else {
            self.increment
        }
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment, inverse) = if power < 0.0 {
        let increment = 10_f64.powf(-power) / factor;
        (
            (start * increment).round(),
            (stop * increment).round(),
            increment,
            true,
        )
    } else {
        let increment = 10_f64.powf(power) * factor;
        (
            (start / increment).round(),
            (stop / increment).round(),
            increment,
            false,
        )
    };

    let to_value = |index: f64| {
        if inverse {
            index / increment
        } else {
            index * increment
        }
    };
    if to_value(first) < start {
        first += 1.0;
    }
    if to_value(last) > stop {
        last -= 1.0;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !first.is_finite() || !last.is_finite() {
        return None;
    }

    Some(TickSpec {
        first: first as i64,
        last: last as i64,
        increment,
        inverse,
    })
}

/// Returns evenly spaced nice values inside `domain`, roughly `count` of them.
///
/// The result is empty for `count == 0` or a non-finite domain and is
/// `[min]` for a degenerate domain.
#[must_use]
pub fn nice_ticks(domain: Domain<f64>, count: usize) -> Vec<f64> {
    let (min, max) = (domain.min(), domain.max());
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }

    let Some(spec) = tick_spec(min, max, count as f64) else {
        return Vec::new();
    };
    if spec.last < spec.first {
        return Vec::new();
    }

    let last = spec.last.min(spec.first.saturating_add(MAX_TICKS - 1));
    (spec.first..=last).map(|index| spec.value(index)).collect()
}

/// Spacing between the ticks [`nice_ticks`] would produce, or `0.0` when undefined.
#[must_use]
pub fn nice_tick_step(domain: Domain<f64>, count: usize) -> f64 {
    if count == 0 || domain.is_degenerate() {
        return 0.0;
    }
    tick_spec(domain.min(), domain.max(), count as f64).map_or(0.0, TickSpec::step)
}
