mod tooltip;

pub use hit_test::hit_test_points;
pub use tooltip::{TooltipAnchor, TooltipConfig, TooltipController, TooltipState};
