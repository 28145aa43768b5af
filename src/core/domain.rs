use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_millis;
use crate::error::{ChartError, ChartResult};

/// Closed interval `[min, max]` over a totally ordered field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy> Domain<T> {
    /// Builds a domain, swapping the bounds when given in descending order.
    #[must_use]
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// Single-value domain used when there is nothing to scan.
    #[must_use]
    pub fn point(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Scans `values` for their min/max. Returns `None` for an empty iterator.
    ///
    /// Unordered values (NaN) never replace a bound.
    pub fn extent<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let mut extent = Self::point(first);
        for value in iter {
            if value < extent.min {
                extent.min = value;
            }
            if value > extent.max {
                extent.max = value;
            }
        }
        Some(extent)
    }

    #[must_use]
    pub fn min(self) -> T {
        self.min
    }

    #[must_use]
    pub fn max(self) -> T {
        self.max
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Domain<f64> {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ChartError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

impl Domain<DateTime<Utc>> {
    /// Numeric view in epoch milliseconds, as consumed by time scales.
    #[must_use]
    pub fn to_millis(self) -> Domain<f64> {
        Domain {
            min: datetime_to_millis(self.min),
            max: datetime_to_millis(self.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Domain;

    #[test]
    fn extent_tracks_min_and_max_regardless_of_order() {
        let domain = Domain::extent([15.0, 10.0, 20.0]).expect("non-empty");
        assert_eq!(domain.min(), 10.0);
        assert_eq!(domain.max(), 20.0);
    }

    #[test]
    fn extent_of_empty_input_is_none() {
        assert!(Domain::<f64>::extent(Vec::new()).is_none());
    }

    #[test]
    fn new_swaps_descending_bounds() {
        let domain = Domain::new(5, 1);
        assert_eq!((domain.min(), domain.max()), (1, 5));
    }
}
