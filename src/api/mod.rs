mod animation;
mod chart_config;
mod engine;
mod engine_snapshot;
mod render_frame_builder;
mod viewport_provider;

pub use animation::AnimationReplay;
pub use chart_config::BarChartConfig;
pub use engine::BarChartEngine;
pub use engine_snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
};
pub use render_frame_builder::{
    AXIS_STROKE_WIDTH_PX, TICK_LABEL_BASELINE_SHIFT_PX, TICK_MARK_LENGTH_PX, format_bar_value,
};
pub use viewport_provider::{
    SharedViewportProvider, SubscriptionId, ViewportListener, ViewportProvider,
};
