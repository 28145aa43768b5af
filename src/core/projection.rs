use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::domain::Domain;
use crate::core::path::LinePath;
use crate::core::scale::Scale;
use crate::core::types::{Sample, Viewport};
use crate::error::{ChartError, ChartResult};

/// How the y-axis domain is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YDomainMode {
    /// Min/max of the sample values.
    #[default]
    DataExtent,
    /// Fixed `[0, 100]`, for fields known to be percentages.
    Percentage,
}

impl YDomainMode {
    #[must_use]
    pub fn resolve(self, samples: &[Sample]) -> Domain<f64> {
        match self {
            Self::DataExtent => Domain::extent(samples.iter().map(|sample| sample.value))
                .unwrap_or_else(|| Domain::point(0.0)),
            Self::Percentage => Domain::new(0.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionOptions {
    pub y_domain_mode: YDomainMode,
    /// Round projected coordinates to whole pixels for crisp rendering.
    pub round_to_pixels: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            y_domain_mode: YDomainMode::DataExtent,
            round_to_pixels: true,
        }
    }
}

/// A sample placed in plot-area pixel space (origin at the plot's top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub index: usize,
    pub date: DateTime<Utc>,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    #[must_use]
    pub fn sample(self) -> Sample {
        Sample::new(self.date, self.value)
    }
}

/// Output of one projection pass: scales, points and the connecting path.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub viewport: Viewport,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub points: Vec<ProjectedPoint>,
    pub path: LinePath,
}

impl Projection {
    #[must_use]
    pub fn path_length(&self) -> f64 {
        self.path.total_length()
    }

    #[must_use]
    pub fn x_domain(&self) -> Domain<f64> {
        self.x_scale.domain()
    }

    #[must_use]
    pub fn y_domain(&self) -> Domain<f64> {
        self.y_scale.domain()
    }
}

/// Projects samples into plot-area pixel space.
///
/// The output has the same length and order as `samples`. The function is
/// pure, so identical inputs always yield bit-identical coordinates.
pub fn project_samples(
    samples: &[Sample],
    viewport: Viewport,
    options: ProjectionOptions,
) -> ChartResult<Projection> {
    let viewport = viewport.validate()?;
    if let Some(index) = samples.iter().position(|sample| !sample.value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "sample {index} has a non-finite value"
        )));
    }

    let x_domain = Domain::extent(samples.iter().map(|sample| sample.date))
        .unwrap_or_else(|| Domain::point(DateTime::UNIX_EPOCH));
    let y_domain = options.y_domain_mode.resolve(samples);

    let x_scale = Scale::time(x_domain, (0.0, viewport.plot_width()))?
        .with_round(options.round_to_pixels);
    let y_scale = Scale::linear(y_domain, (viewport.plot_height(), 0.0))?
        .with_round(options.round_to_pixels);

    let points = project_points(samples, x_scale, y_scale);
    let path = LinePath::from_points(&points);
    trace!(
        count = points.len(),
        path_length = path.total_length(),
        "projected samples"
    );

    Ok(Projection {
        viewport,
        x_scale,
        y_scale,
        points,
        path,
    })
}

fn project_point(index: usize, sample: &Sample, x_scale: Scale, y_scale: Scale) -> ProjectedPoint {
    ProjectedPoint {
        index,
        date: sample.date,
        value: sample.value,
        x: x_scale.map_time(sample.date),
        y: y_scale.map(sample.value),
    }
}

#[cfg(not(feature = "parallel-projection"))]
fn project_points(samples: &[Sample], x_scale: Scale, y_scale: Scale) -> Vec<ProjectedPoint> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| project_point(index, sample, x_scale, y_scale))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_points(samples: &[Sample], x_scale: Scale, y_scale: Scale) -> Vec<ProjectedPoint> {
    use rayon::prelude::*;

    samples
        .par_iter()
        .enumerate()
        .map(|(index, sample)| project_point(index, sample, x_scale, y_scale))
        .collect()
}

/// Result of [`CoordinateProjector::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionChange {
    /// Same sample sequence (by identity), viewport and options as last time.
    Unchanged,
    /// Points were recomputed; anything derived from the old pixels is stale.
    Recomputed,
}

#[derive(Debug, Clone)]
struct ProjectionCache {
    samples: Arc<[Sample]>,
    projection: Projection,
}

/// Caching wrapper around [`project_samples`].
///
/// Change detection is identity based: handing over the same `Arc` again is a
/// no-op, while a new allocation always re-projects even if its contents match.
#[derive(Debug, Clone, Default)]
pub struct CoordinateProjector {
    options: ProjectionOptions,
    cache: Option<ProjectionCache>,
}

impl CoordinateProjector {
    #[must_use]
    pub fn new(options: ProjectionOptions) -> Self {
        Self {
            options,
            cache: None,
        }
    }

    #[must_use]
    pub fn options(&self) -> ProjectionOptions {
        self.options
    }

    /// Replaces projection options. The next `update` always recomputes.
    pub fn set_options(&mut self, options: ProjectionOptions) {
        if self.options != options {
            self.options = options;
            self.cache = None;
        }
    }

    #[must_use]
    pub fn projection(&self) -> Option<&Projection> {
        self.cache.as_ref().map(|cache| &cache.projection)
    }

    pub fn clear(&mut self) {
        self.cache = None;
    }

    pub fn update(
        &mut self,
        samples: &Arc<[Sample]>,
        viewport: Viewport,
    ) -> ChartResult<ProjectionChange> {
        if let Some(cache) = &self.cache {
            if Arc::ptr_eq(&cache.samples, samples) && cache.projection.viewport == viewport {
                return Ok(ProjectionChange::Unchanged);
            }
        }

        let projection = project_samples(samples, viewport, self.options)?;
        debug!(
            count = projection.points.len(),
            plot_width = viewport.plot_width(),
            plot_height = viewport.plot_height(),
            "re-projected samples"
        );
        self.cache = Some(ProjectionCache {
            samples: Arc::clone(samples),
            projection,
        });
        Ok(ProjectionChange::Recomputed)
    }
}
