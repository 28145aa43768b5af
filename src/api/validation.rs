use crate::animation::{PathDrawTimings, PointEnterTimings};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipConfig;

use super::{AxisConfig, ChartEngineConfig, SeriesStyle};

pub(super) fn validate_engine_config(config: ChartEngineConfig) -> ChartResult<ChartEngineConfig> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    validate_path_timings(config.timings.path)?;
    validate_point_timings(config.timings.points)?;
    validate_tooltip_config(config.tooltip)?;
    validate_axis_config(config.axis)?;
    validate_series_style(config.style)?;
    Ok(config)
}

fn validate_path_timings(timings: PathDrawTimings) -> ChartResult<PathDrawTimings> {
    for (name, value) in [
        ("initial_pause_ms", timings.initial_pause_ms),
        ("draw_duration_ms", timings.draw_duration_ms),
        ("restart_pause_ms", timings.restart_pause_ms),
    ] {
        ensure_non_negative(name, value)?;
    }
    Ok(timings)
}

fn validate_point_timings(timings: PointEnterTimings) -> ChartResult<PointEnterTimings> {
    ensure_non_negative("stagger_ms", timings.stagger_ms)?;
    ensure_non_negative("duration_ms", timings.duration_ms)?;
    Ok(timings)
}

fn validate_tooltip_config(config: TooltipConfig) -> ChartResult<TooltipConfig> {
    ensure_non_negative("fade_duration_ms", config.fade_duration_ms)?;
    if !config.offset_px.is_finite() {
        return Err(ChartError::InvalidData(
            "tooltip offset must be finite".to_owned(),
        ));
    }
    Ok(config)
}

fn validate_axis_config(config: AxisConfig) -> ChartResult<AxisConfig> {
    if !config.x_tick_spacing_px.is_finite() || config.x_tick_spacing_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "x tick spacing must be finite and > 0".to_owned(),
        ));
    }
    if !config.font_size_px.is_finite() || config.font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "axis font size must be finite and > 0".to_owned(),
        ));
    }
    ensure_non_negative("label_gap_px", config.label_gap_px)?;
    Ok(config)
}

pub(super) fn validate_series_style(style: SeriesStyle) -> ChartResult<SeriesStyle> {
    style.line_color.validate()?;
    style.point_fill.validate()?;
    style.point_stroke.validate()?;
    for (name, value) in [
        ("line_width", style.line_width),
        ("point_radius", style.point_radius),
        ("point_stroke_width", style.point_stroke_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "series style `{name}` must be finite and > 0"
            )));
        }
    }
    ensure_non_negative("hit_slop_px", style.hit_slop_px)?;
    Ok(style)
}

fn ensure_non_negative(name: &str, value: f64) -> ChartResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(value)
}
