pub mod domain;
pub mod path;
pub mod primitives;
pub mod projection;
pub mod scale;
pub mod ticks;
pub mod time_ticks;
pub mod types;

pub use domain::Domain;
pub use path::{LinePath, LineSegment};
pub use projection::{
    CoordinateProjector, ProjectedPoint, Projection, ProjectionChange, ProjectionOptions,
    YDomainMode, project_samples,
};
pub use scale::{Scale, ScaleKind};
pub use ticks::{nice_tick_step, nice_ticks};
pub use time_ticks::{TimeTickInterval, TimeTicks, time_ticks, time_ticks_with_interval};
pub use types::{Margins, Sample, Viewport};
