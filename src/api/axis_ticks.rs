use chrono::{DateTime, Utc};

use crate::core::{Domain, Projection, nice_tick_step, nice_ticks, time_ticks_with_interval};
use crate::render::{AxisLabel, TextHAlign};

use super::axis_label_format::{format_sample_axis_date, format_value_label};
use super::{AxisConfig, XAxisLabelMode};

const MIN_X_TICKS: usize = 2;
const MAX_X_TICKS: usize = 12;

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Value-axis labels, right-aligned just left of the plot area.
pub(super) fn build_y_axis_labels(projection: &Projection, axis: AxisConfig) -> Vec<AxisLabel> {
    let domain = projection.y_domain();
    let step = nice_tick_step(domain, axis.y_tick_count);
    nice_ticks(domain, axis.y_tick_count)
        .into_iter()
        .map(|value| AxisLabel {
            text: format_value_label(value, step),
            value,
            x: -axis.label_gap_px,
            y: projection.y_scale.map(value),
            font_size_px: axis.font_size_px,
            h_align: TextHAlign::Right,
        })
        .collect()
}

/// Date-axis labels, centered below the plot area.
pub(super) fn build_x_axis_labels(projection: &Projection, axis: AxisConfig) -> Vec<AxisLabel> {
    if projection.points.is_empty() {
        return Vec::new();
    }
    let baseline = projection.viewport.plot_height() + axis.label_gap_px + axis.font_size_px;
    // Labels sit on exact positions even when markers snap to whole pixels.
    let label_scale = projection.x_scale.with_round(false);

    match axis.x_label_mode {
        XAxisLabelMode::TimeTicks => {
            let Some(domain) = date_domain(projection) else {
                return Vec::new();
            };
            let count = axis_tick_target_count(
                projection.viewport.plot_width(),
                axis.x_tick_spacing_px,
                MIN_X_TICKS,
                MAX_X_TICKS,
            );
            let ticks = time_ticks_with_interval(domain, count);
            let Some(interval) = ticks.interval else {
                return Vec::new();
            };
            ticks
                .ticks
                .into_iter()
                .map(|time| AxisLabel {
                    text: interval.format(time),
                    value: time.timestamp_millis() as f64,
                    x: label_scale.map_time(time),
                    y: baseline,
                    font_size_px: axis.font_size_px,
                    h_align: TextHAlign::Center,
                })
                .collect()
        }
        XAxisLabelMode::AlternateSamples => projection
            .points
            .iter()
            .filter(|point| point.index % 2 == 1)
            .map(|point| AxisLabel {
                text: format_sample_axis_date(point.date),
                value: point.date.timestamp_millis() as f64,
                x: label_scale.map_time(point.date),
                y: baseline,
                font_size_px: axis.font_size_px,
                h_align: TextHAlign::Center,
            })
            .collect(),
    }
}

fn date_domain(projection: &Projection) -> Option<Domain<DateTime<Utc>>> {
    Domain::extent(projection.points.iter().map(|point| point.date))
}
