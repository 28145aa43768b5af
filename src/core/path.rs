use serde::{Deserialize, Serialize};

use crate::core::projection::ProjectedPoint;

/// Straight segment between two consecutive projected points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub fn length(self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

/// Polyline through projected points, in input order.
///
/// The total length is measured from these exact vertices; stroke-dash reveal
/// depends on it matching what the renderer actually strokes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    vertices: Vec<(f64, f64)>,
}

impl LinePath {
    #[must_use]
    pub fn from_points(points: &[ProjectedPoint]) -> Self {
        Self {
            vertices: points.iter().map(|point| (point.x, point.y)).collect(),
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.vertices.windows(2).map(|pair| LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        })
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.segments().map(LineSegment::length).sum()
    }

    /// SVG path data (`M x,y L x,y ...`) for hosts drawing through SVG.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::with_capacity(self.vertices.len() * 16);
        for (index, (x, y)) in self.vertices.iter().enumerate() {
            if index > 0 {
                data.push('L');
            } else {
                data.push('M');
            }
            data.push_str(&format!("{x},{y}"));
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::LinePath;

    #[test]
    fn total_length_sums_segment_lengths() {
        let path = LinePath {
            vertices: vec![(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)],
        };
        assert_eq!(path.segments().count(), 2);
        assert_eq!(path.total_length(), 11.0);
        assert_eq!(path.to_svg_path_data(), "M0,0L3,4L3,10");
    }

    #[test]
    fn single_vertex_has_zero_length() {
        let path = LinePath {
            vertices: vec![(1.0, 1.0)],
        };
        assert_eq!(path.total_length(), 0.0);
    }
}
