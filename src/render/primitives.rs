use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values. Passed through to renderers untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const STEEL_BLUE: Self = Self::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Connecting line with its stroke-dash reveal state.
///
/// Renderers stroke `vertices` with dash pattern `[dash_array, dash_array]`
/// shifted by `dash_offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub vertices: Vec<(f64, f64)>,
    pub total_length: f64,
    pub dash_array: f64,
    pub dash_offset: f64,
    pub opacity: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl PathPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self
            .vertices
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "path vertices must be finite".to_owned(),
            ));
        }
        if !self.dash_offset.is_finite() || !self.dash_array.is_finite() {
            return Err(ChartError::InvalidData(
                "path dash values must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Circle marker for one data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub fill: Color,
    pub stroke: Color,
}

impl MarkerPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "marker coordinates must be finite".to_owned(),
            ));
        }
        // The elastic entrance overshoots, so only negative radii are invalid.
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.stroke.validate()
    }
}

/// Horizontal text alignment relative to `AxisLabel::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// One axis tick label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    /// Domain value behind the label (epoch milliseconds for time axes).
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub h_align: TextHAlign,
}

impl AxisLabel {
    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "axis label must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "axis label coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Tooltip content and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOverlay {
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub date_text: String,
    pub value_text: String,
}

impl TooltipOverlay {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip coordinates must be finite".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "tooltip opacity must be in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}
