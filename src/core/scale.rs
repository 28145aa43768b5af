use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::domain::Domain;
use crate::core::primitives::{datetime_to_millis, millis_to_datetime};
use crate::core::ticks::nice_ticks;
use crate::core::time_ticks::time_ticks;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    /// Plain numeric domain.
    Linear,
    /// Domain in epoch milliseconds; ticks prefer calendar units.
    Time,
}

/// Affine mapping from a data domain to a pixel range.
///
/// Values outside the domain extrapolate linearly unless clamping is enabled.
/// A degenerate domain (`min == max`) maps every input to the range start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    kind: ScaleKind,
    domain: Domain<f64>,
    range: (f64, f64),
    round: bool,
    clamp: bool,
}

impl Scale {
    pub fn new(kind: ScaleKind, domain: Domain<f64>, range: (f64, f64)) -> ChartResult<Self> {
        let domain = domain.validate()?;
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            kind,
            domain,
            range,
            round: false,
            clamp: false,
        })
    }

    pub fn linear(domain: Domain<f64>, range: (f64, f64)) -> ChartResult<Self> {
        Self::new(ScaleKind::Linear, domain, range)
    }

    pub fn time(domain: Domain<DateTime<Utc>>, range: (f64, f64)) -> ChartResult<Self> {
        Self::new(ScaleKind::Time, domain.to_millis(), range)
    }

    /// Rounds mapped output to whole pixels.
    #[must_use]
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Clamps inputs to the domain before mapping (and inverted outputs after).
    #[must_use]
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn domain(self) -> Domain<f64> {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn rounds(self) -> bool {
        self.round
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        let span = self.domain.span();
        let mapped = if span == 0.0 {
            r0
        } else {
            let value = if self.clamp {
                value.clamp(self.domain.min(), self.domain.max())
            } else {
                value
            };
            let t = (value - self.domain.min()) / span;
            // Endpoint-exact form: t == 0 gives r0 and t == 1 gives r1 bit for bit.
            r0 * (1.0 - t) + r1 * t
        };

        if self.round { mapped.round() } else { mapped }
    }

    #[must_use]
    pub fn map_time(self, time: DateTime<Utc>) -> f64 {
        self.map(datetime_to_millis(time))
    }

    /// Maps a pixel back into the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let (r0, r1) = self.range;
        let range_span = r1 - r0;
        if range_span == 0.0 || self.domain.is_degenerate() {
            return self.domain.min();
        }

        let t = (pixel - r0) / range_span;
        let value = self.domain.min() * (1.0 - t) + self.domain.max() * t;
        if self.clamp {
            value.clamp(self.domain.min(), self.domain.max())
        } else {
            value
        }
    }

    #[must_use]
    pub fn invert_time(self, pixel: f64) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.invert(pixel))
    }

    /// Representative domain values for axis labels.
    ///
    /// Time scales return epoch milliseconds aligned to calendar units.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        match self.kind {
            ScaleKind::Linear => nice_ticks(self.domain, count),
            ScaleKind::Time => {
                let (Some(min), Some(max)) = (
                    millis_to_datetime(self.domain.min()),
                    millis_to_datetime(self.domain.max()),
                ) else {
                    return Vec::new();
                };
                time_ticks(Domain::new(min, max), count)
                    .into_iter()
                    .map(datetime_to_millis)
                    .collect()
            }
        }
    }
}
