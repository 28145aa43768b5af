use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Pixel insets between the outer viewport and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .all(|value| value.is_finite() && value >= 0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::zero()
    }
}

/// Outer chart size plus margins. Every field is required; nothing is inferred.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64, margin: Margins) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Width available for the plot once left/right margins are removed.
    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height available for the plot once top/bottom margins are removed.
    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Top-left corner of the plot area in viewport pixels.
    #[must_use]
    pub fn plot_origin(self) -> (f64, f64) {
        (self.margin.left, self.margin.top)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.margin.is_valid()
            && self.plot_width() > 0.0
            && self.plot_height() > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// One raw `(date, value)` observation handed over by the data supplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }

    pub fn from_decimal(date: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            date,
            value: decimal_to_f64(value, "value")?,
        })
    }
}
