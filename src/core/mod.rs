pub mod axis;
pub mod bar_layout;
pub mod layout;
pub mod normalization;
pub mod pixel;
pub mod series;
pub mod ticks;
pub mod types;

pub use axis::{AXIS_ORIGIN_OFFSET_PX, AxisLayout};
pub use bar_layout::{
    BAR_SIDE_PADDING_PX, BarGeometry, CATEGORY_LABEL_OFFSET_PX, TOOLTIP_OFFSET_PX, project_bars,
};
pub use layout::{ChartLayout, LayoutOptions};
pub use normalization::{FlatRangePolicy, NormalizationPolicy, ValueRange};
pub use pixel::{PixelPoint, PixelRect, PixelSegment};
pub use series::{BarDatum, Series};
pub use ticks::{
    DEFAULT_TICK_COUNT, MAX_TICK_COUNT, SCIENTIFIC_NOTATION_THRESHOLD, Tick, TickSet,
    format_compact, format_tick_label, round_tick_value,
};
pub use types::Viewport;
