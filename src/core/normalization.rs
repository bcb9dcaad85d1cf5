use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Rule mapping a raw value onto a `[0, 1]` bar-height ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// `(value - min) / (max - min)`.
    #[default]
    MinMax,
    /// `value / max`; bars start at zero.
    ZeroFloor,
}

/// Bar height used when the value range collapses to a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatRangePolicy {
    #[default]
    Full,
    Empty,
}

impl FlatRangePolicy {
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Empty => 0.0,
        }
    }
}

/// Value domain covered by the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub floor: f64,
    pub ceiling: f64,
}

impl ValueRange {
    /// Computes the domain from finite values only.
    ///
    /// Returns `None` when no finite value exists.
    pub fn from_values(
        values: impl IntoIterator<Item = f64>,
        policy: NormalizationPolicy,
    ) -> Option<Self> {
        let mut min: Option<OrderedFloat<f64>> = None;
        let mut max: Option<OrderedFloat<f64>> = None;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            let value = OrderedFloat(value);
            min = Some(min.map_or(value, |current| current.min(value)));
            max = Some(max.map_or(value, |current| current.max(value)));
        }

        let (min, max) = (min?.into_inner(), max?.into_inner());
        let floor = match policy {
            NormalizationPolicy::MinMax => min,
            NormalizationPolicy::ZeroFloor => 0.0,
        };
        Some(Self {
            floor,
            ceiling: max,
        })
    }

    /// `ceiling - floor`; infinite when the bounds are more than `f64::MAX` apart.
    #[must_use]
    pub fn span(self) -> f64 {
        self.ceiling - self.floor
    }

    /// A range with no positive span, e.g. all values equal.
    #[must_use]
    pub fn is_flat(self) -> bool {
        self.ceiling <= self.floor
    }

    /// Maps `value` into `[0, 1]`. Non-finite values map to the floor.
    #[must_use]
    pub fn normalize(self, value: f64, flat: FlatRangePolicy) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        if self.is_flat() {
            return flat.ratio();
        }
        let span = self.span();
        let ratio = if span.is_finite() {
            (value - self.floor) / span
        } else {
            (value / 2.0 - self.floor / 2.0) / self.half_span()
        };
        ratio.clamp(0.0, 1.0)
    }

    /// Value `step` of `steps` equal steps down from the ceiling.
    #[must_use]
    pub fn level_below_ceiling(self, step: usize, steps: usize) -> f64 {
        let (step, steps) = (step as f64, steps.max(1) as f64);
        let span = self.span();
        if span.is_finite() {
            self.ceiling - step * (span / steps)
        } else {
            (self.ceiling / 2.0 - step * (self.half_span() / steps)) * 2.0
        }
    }

    fn half_span(self) -> f64 {
        self.ceiling / 2.0 - self.floor / 2.0
    }
}
