use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::axis::AxisLayout;
use crate::core::normalization::{FlatRangePolicy, ValueRange};

pub const DEFAULT_TICK_COUNT: usize = 5;
/// Upper bound on ticks per axis; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 1_000;
/// Magnitude from which labels switch to scientific notation.
pub const SCIENTIFIC_NOTATION_THRESHOLD: f64 = 1e15;
/// From this magnitude on, `value * 100` is already an integer and must not be nudged.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// One Y-axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// Ordered Y-axis ticks, top to bottom.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickSet {
    ticks: SmallVec<[Tick; DEFAULT_TICK_COUNT]>,
}

impl TickSet {
    /// Builds `tick_count` evenly spaced ticks from the ceiling down,
    /// clamped to `1..=MAX_TICK_COUNT`.
    ///
    /// The floor itself gets no tick. A flat range collapses to a single tick
    /// at the level the bars reach.
    #[must_use]
    pub fn build(
        range: ValueRange,
        axes: AxisLayout,
        tick_count: usize,
        flat: FlatRangePolicy,
    ) -> Self {
        if range.is_flat() {
            let tick = Tick::new(axes.ratio_to_y(flat.ratio()), range.ceiling);
            return Self {
                ticks: SmallVec::from_elem(tick, 1),
            };
        }

        let tick_count = tick_count.clamp(1, MAX_TICK_COUNT);
        let step_px = axes.y_axis_length / tick_count as f64;
        let ticks = (0..tick_count)
            .map(|index| {
                Tick::new(
                    axes.top_y + index as f64 * step_px,
                    range.level_below_ceiling(index, tick_count),
                )
            })
            .collect();
        Self { ticks }
    }

    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl Tick {
    fn new(y: f64, value: f64) -> Self {
        Self {
            y,
            value,
            label: format_tick_label(value),
        }
    }
}

/// Rounds to two decimals, half away from zero.
///
/// The product `value * 100` can land just below a `.5` boundary (`2.005`
/// becomes `200.49999999999997`), so it is nudged outward by a few ulps
/// before rounding. Values whose product overflows are returned as is.
#[must_use]
pub fn round_tick_value(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    if scaled.abs() >= EXACT_INTEGER_LIMIT {
        return scaled / 100.0;
    }
    let nudge = scaled.abs().max(1.0) * f64::EPSILON * 4.0;
    let rounded = (scaled + nudge.copysign(scaled)).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a tick value with at most two decimals and no trailing zeros.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    format_compact(round_tick_value(value))
}

/// Shortest display form, switching to scientific notation for huge magnitudes.
#[must_use]
pub fn format_compact(value: f64) -> String {
    if value.abs() >= SCIENTIFIC_NOTATION_THRESHOLD {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}
