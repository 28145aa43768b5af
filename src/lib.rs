//! linechart: backend-agnostic core of an animated time-series line chart.
//!
//! The crate turns an ordered sequence of dated samples into plot-area pixel
//! geometry, drives a looping stroke draw-in of the connecting line with a
//! staggered marker entrance, and manages a hover tooltip. Drawing itself is
//! left to a [`render::Renderer`] implementation.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod input;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
