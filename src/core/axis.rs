use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::core::pixel::{PixelPoint, PixelSegment};

/// Distance between each viewport edge and the plot area.
pub const AXIS_ORIGIN_OFFSET_PX: f64 = 50.0;

/// Pixel placement of both axes for one viewport.
///
/// The Y axis runs from `top_y` down to `baseline_y` at `origin_x`; the X axis
/// runs along `baseline_y` from `origin_x` to `x_end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub origin_x: f64,
    pub top_y: f64,
    pub baseline_y: f64,
    pub x_end: f64,
    pub x_axis_length: f64,
    pub y_axis_length: f64,
}

impl AxisLayout {
    /// Axis lengths are clamped to zero for viewports smaller than the margins.
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let viewport = viewport.sanitized();
        let x_axis_length = (viewport.width - 2.0 * AXIS_ORIGIN_OFFSET_PX).max(0.0);
        let y_axis_length = (viewport.height - 2.0 * AXIS_ORIGIN_OFFSET_PX).max(0.0);

        Self {
            origin_x: AXIS_ORIGIN_OFFSET_PX,
            top_y: AXIS_ORIGIN_OFFSET_PX,
            baseline_y: AXIS_ORIGIN_OFFSET_PX + y_axis_length,
            x_end: AXIS_ORIGIN_OFFSET_PX + x_axis_length,
            x_axis_length,
            y_axis_length,
        }
    }

    #[must_use]
    pub fn x_axis(self) -> PixelSegment {
        PixelSegment::new(
            PixelPoint::new(self.origin_x, self.baseline_y),
            PixelPoint::new(self.x_end, self.baseline_y),
        )
    }

    #[must_use]
    pub fn y_axis(self) -> PixelSegment {
        PixelSegment::new(
            PixelPoint::new(self.origin_x, self.top_y),
            PixelPoint::new(self.origin_x, self.baseline_y),
        )
    }

    /// Pixel y reached by a bar with the given height ratio.
    #[must_use]
    pub fn ratio_to_y(self, ratio: f64) -> f64 {
        self.top_y + (1.0 - ratio) * self.y_axis_length
    }
}
