use serde::{Deserialize, Serialize};

use crate::core::axis::AxisLayout;
use crate::core::bar_layout::{BarGeometry, project_bars};
use crate::core::normalization::{FlatRangePolicy, NormalizationPolicy, ValueRange};
use crate::core::ticks::{DEFAULT_TICK_COUNT, TickSet};
use crate::core::{Series, Viewport};

/// Geometry knobs that influence layout, independent of colors and fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub tick_count: usize,
    pub normalization: NormalizationPolicy,
    pub flat_range: FlatRangePolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            normalization: NormalizationPolicy::default(),
            flat_range: FlatRangePolicy::default(),
        }
    }
}

/// Static chart layout for one series and viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub axes: AxisLayout,
    pub range: Option<ValueRange>,
    pub ticks: TickSet,
    pub bars: Vec<BarGeometry>,
}

impl ChartLayout {
    /// Pure geometry pass: maps `series` into pixel space for `viewport`.
    ///
    /// Degenerate inputs draw less instead of failing: an empty series yields
    /// axes only, and invalid viewports are clamped to zero size.
    #[must_use]
    pub fn compute(series: &Series, viewport: Viewport, options: LayoutOptions) -> Self {
        let viewport = viewport.sanitized();
        let axes = AxisLayout::from_viewport(viewport);
        let range = ValueRange::from_values(series.values(), options.normalization);
        let ticks = range.map_or_else(TickSet::default, |range| {
            TickSet::build(range, axes, options.tick_count, options.flat_range)
        });
        let bars = project_bars(series, range, axes, options.flat_range);

        Self {
            viewport,
            axes,
            range,
            ticks,
            bars,
        }
    }

    /// Index of the bar whose hit region contains the pointer.
    #[must_use]
    pub fn bar_at(&self, x: f64, y: f64) -> Option<usize> {
        self.bars
            .iter()
            .find(|bar| bar.hit_rect.contains(x, y))
            .map(|bar| bar.index)
    }
}
