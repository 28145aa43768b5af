use serde::{Deserialize, Serialize};

use crate::animation::{PathDrawTimings, PointEnterTimings};
use crate::core::{ProjectionOptions, Viewport, YDomainMode};
use crate::interaction::TooltipConfig;
use crate::render::Color;

/// Independent toggles for the rendering and animation subsystems.
///
/// None of them affects projection math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub show_points: bool,
    #[serde(default = "default_true")]
    pub show_tooltip: bool,
    #[serde(default = "default_true")]
    pub show_axes: bool,
    #[serde(default = "default_true")]
    pub animate: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            show_points: true,
            show_tooltip: true,
            show_axes: true,
            animate: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationTimings {
    #[serde(default)]
    pub path: PathDrawTimings,
    #[serde(default)]
    pub points: PointEnterTimings,
}

/// How x-axis labels are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XAxisLabelMode {
    /// Calendar-aligned ticks over the date domain.
    #[default]
    TimeTicks,
    /// A label under every second sample (odd indices), formatted `Apr 24`.
    AlternateSamples,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub x_label_mode: XAxisLabelMode,
    /// Desired pixel distance between x ticks; the tick count follows the plot width.
    #[serde(default = "default_x_tick_spacing_px")]
    pub x_tick_spacing_px: f64,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    /// Distance between the plot edge and the labels.
    #[serde(default = "default_label_gap_px")]
    pub label_gap_px: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_label_mode: XAxisLabelMode::default(),
            x_tick_spacing_px: default_x_tick_spacing_px(),
            y_tick_count: default_y_tick_count(),
            font_size_px: default_font_size_px(),
            label_gap_px: default_label_gap_px(),
        }
    }
}

/// Pass-through styling constants plus the marker sizes layout depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub point_radius: f64,
    pub point_stroke_width: f64,
    pub point_fill: Color,
    pub point_stroke: Color,
    /// Extra hover reach around each marker.
    pub hit_slop_px: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_color: Color::STEEL_BLUE,
            line_width: 2.5,
            point_radius: 4.0,
            point_stroke_width: 2.5,
            point_fill: Color::WHITE,
            point_stroke: Color::STEEL_BLUE,
            hit_slop_px: 2.0,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist chart setup; every field
/// but the viewport has a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub y_domain_mode: YDomainMode,
    #[serde(default = "default_true")]
    pub round_to_pixels: bool,
    #[serde(default)]
    pub timings: AnimationTimings,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub axis: AxisConfig,
    #[serde(default)]
    pub style: SeriesStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            features: FeatureFlags::default(),
            y_domain_mode: YDomainMode::default(),
            round_to_pixels: true,
            timings: AnimationTimings::default(),
            tooltip: TooltipConfig::default(),
            axis: AxisConfig::default(),
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn with_features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_y_domain_mode(mut self, mode: YDomainMode) -> Self {
        self.y_domain_mode = mode;
        self
    }

    #[must_use]
    pub fn with_round_to_pixels(mut self, round: bool) -> Self {
        self.round_to_pixels = round;
        self
    }

    #[must_use]
    pub fn with_path_timings(mut self, timings: PathDrawTimings) -> Self {
        self.timings.path = timings;
        self
    }

    #[must_use]
    pub fn with_point_timings(mut self, timings: PointEnterTimings) -> Self {
        self.timings.points = timings;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            y_domain_mode: self.y_domain_mode,
            round_to_pixels: self.round_to_pixels,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_x_tick_spacing_px() -> f64 {
    80.0
}

fn default_y_tick_count() -> usize {
    10
}

fn default_font_size_px() -> f64 {
    12.0
}

fn default_label_gap_px() -> f64 {
    6.0
}
