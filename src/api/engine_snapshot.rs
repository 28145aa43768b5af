use serde::{Deserialize, Serialize};

use crate::animation::{PathDrawPhase, PathReveal};
use crate::core::{ProjectedPoint, Viewport};
use crate::interaction::TooltipState;

use super::FeatureFlags;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub features: FeatureFlags,
    /// Epoch milliseconds.
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub points: Vec<ProjectedPoint>,
    pub path_length: f64,
    pub path_phase: PathDrawPhase,
    pub path_reveal: PathReveal,
    pub path_cycles: u64,
    pub marker_radii: Vec<f64>,
    pub tooltip_state: TooltipState,
    pub hovered_point: Option<usize>,
    pub tooltip_opacity: f64,
    pub active_tweens: usize,
    pub clock: f64,
}
