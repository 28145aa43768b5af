mod animation_controller;
mod axis_label_format;
mod axis_ticks;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod scene_builder;
mod snapshot_controller;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::{
    AnimationTimings, AxisConfig, ChartEngineConfig, FeatureFlags, SeriesStyle, XAxisLabelMode,
};
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
