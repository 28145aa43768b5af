use crate::render::{ChartScene, MarkerPrimitive, PathPrimitive, TooltipOverlay};

use super::axis_label_format::{format_tooltip_date, format_tooltip_value};
use super::axis_ticks::{build_x_axis_labels, build_y_axis_labels};
use super::engine_core::EngineCore;

/// Materializes the current projection and animation state into a scene.
pub(super) fn build_scene(core: &EngineCore) -> ChartScene {
    let mut scene = ChartScene::new(core.config.viewport);
    let Some(projection) = core.projector.projection() else {
        return scene;
    };
    let style = core.config.style;
    let features = core.config.features;

    if !projection.path.is_empty() {
        let reveal = core.path_draw.reveal();
        scene.path = Some(PathPrimitive {
            vertices: projection.path.vertices().to_vec(),
            total_length: projection.path_length(),
            dash_array: reveal.total_length,
            dash_offset: reveal.dash_offset,
            opacity: if reveal.visible { 1.0 } else { 0.0 },
            stroke_width: style.line_width,
            color: style.line_color,
        });
    }

    if core.markers_visible() {
        scene.markers = projection
            .points
            .iter()
            .map(|point| MarkerPrimitive {
                index: point.index,
                x: point.x,
                y: point.y,
                radius: core.point_enter.radius(point.index).unwrap_or(0.0).max(0.0),
                stroke_width: style.point_stroke_width,
                fill: style.point_fill,
                stroke: style.point_stroke,
            })
            .collect();
    }

    if features.show_axes {
        scene.x_axis = build_x_axis_labels(projection, core.config.axis);
        scene.y_axis = build_y_axis_labels(projection, core.config.axis);
    }

    if core.tooltip_enabled() {
        scene.tooltip = core.tooltip.anchor(&projection.points).and_then(|anchor| {
            let point = projection.points.get(anchor.point_index)?;
            Some(TooltipOverlay {
                point_index: anchor.point_index,
                x: anchor.x,
                y: anchor.y,
                opacity: anchor.opacity.clamp(0.0, 1.0),
                date_text: format_tooltip_date(point.date),
                value_text: format_tooltip_value(point.value),
            })
        });
    }

    scene
}
