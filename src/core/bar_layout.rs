use serde::{Deserialize, Serialize};

use crate::core::Series;
use crate::core::axis::AxisLayout;
use crate::core::normalization::{FlatRangePolicy, ValueRange};
use crate::core::pixel::{PixelPoint, PixelRect};

/// Horizontal gap inside each slot, split evenly on both sides of a bar.
pub const BAR_SIDE_PADDING_PX: f64 = 10.0;
/// Vertical distance between the bar top and its value tooltip.
pub const TOOLTIP_OFFSET_PX: f64 = 16.0;
/// Vertical distance between the X axis and the category label.
pub const CATEGORY_LABEL_OFFSET_PX: f64 = 16.0;

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub label: String,
    pub value: f64,
    /// Normalized height in `[0, 1]`.
    pub ratio: f64,
    /// Full slot owned by this bar, including padding.
    pub slot_x: f64,
    pub slot_width: f64,
    /// Visible bar rectangle, growing upward from the X axis.
    pub rect: PixelRect,
    /// Pointer region spanning the whole plot column of this bar.
    pub hit_rect: PixelRect,
    pub tooltip_anchor: PixelPoint,
    pub label_anchor: PixelPoint,
}

impl BarGeometry {
    #[must_use]
    pub fn has_visible_height(&self) -> bool {
        self.rect.height > 0.0
    }
}

/// Projects every bar of `series` into the plot area described by `axes`.
///
/// Without a range (no finite values) all bars get zero height.
#[must_use]
pub fn project_bars(
    series: &Series,
    range: Option<ValueRange>,
    axes: AxisLayout,
    flat: FlatRangePolicy,
) -> Vec<BarGeometry> {
    if series.is_empty() {
        return Vec::new();
    }

    let slot_width = axes.x_axis_length / series.len() as f64;
    let bar_width = (slot_width - BAR_SIDE_PADDING_PX).max(0.0);
    let half_padding = (slot_width - bar_width) * 0.5;

    series
        .bars()
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let ratio = range.map_or(0.0, |range| range.normalize(bar.value, flat));
            let slot_x = axes.origin_x + index as f64 * slot_width;
            let height = ratio * axes.y_axis_length;
            let top_y = axes.ratio_to_y(ratio);
            let center_x = slot_x + slot_width * 0.5;

            BarGeometry {
                index,
                label: bar.label.clone(),
                value: bar.value,
                ratio,
                slot_x,
                slot_width,
                rect: PixelRect::new(slot_x + half_padding, top_y, bar_width, height),
                hit_rect: PixelRect::new(
                    slot_x + half_padding,
                    axes.top_y,
                    bar_width,
                    axes.y_axis_length,
                ),
                tooltip_anchor: PixelPoint::new(center_x, top_y - TOOLTIP_OFFSET_PX),
                label_anchor: PixelPoint::new(center_x, axes.baseline_y + CATEGORY_LABEL_OFFSET_PX),
            }
        })
        .collect()
}
