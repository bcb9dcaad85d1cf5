use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_TICK_COUNT, FlatRangePolicy, LayoutOptions, MAX_TICK_COUNT, NormalizationPolicy,
    Series,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::AnimationReplay;

/// Public chart configuration: data, colors, and layout policies.
///
/// This type is serializable so hosts can load a chart from JSON without
/// inventing their own format. Every field except `values` has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub values: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default = "default_foreground")]
    pub axis_color: Color,
    #[serde(default = "default_foreground")]
    pub text_color: Color,
    #[serde(default = "default_foreground")]
    pub bar_color: Color,
    #[serde(default = "default_highlight_color")]
    pub highlight_color: Color,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub normalization: NormalizationPolicy,
    #[serde(default)]
    pub flat_range: FlatRangePolicy,
    #[serde(default = "default_animation_duration_seconds")]
    pub animation_duration_seconds: f64,
    #[serde(default)]
    pub animation_replay: AnimationReplay,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
}

impl BarChartConfig {
    /// Creates a config for `values` with every other option at its default.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            labels: Vec::new(),
            axis_color: default_foreground(),
            text_color: default_foreground(),
            bar_color: default_foreground(),
            highlight_color: default_highlight_color(),
            tick_count: default_tick_count(),
            normalization: NormalizationPolicy::default(),
            flat_range: FlatRangePolicy::default(),
            animation_duration_seconds: default_animation_duration_seconds(),
            animation_replay: AnimationReplay::default(),
            font_family: default_font_family(),
            font_size_px: default_font_size_px(),
        }
    }

    #[must_use]
    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.axis_color = color;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: NormalizationPolicy) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn with_flat_range(mut self, flat_range: FlatRangePolicy) -> Self {
        self.flat_range = flat_range;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, duration_seconds: f64, replay: AnimationReplay) -> Self {
        self.animation_duration_seconds = duration_seconds;
        self.animation_replay = replay;
        self
    }

    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size_px: f64) -> Self {
        self.font_family = family.into();
        self.font_size_px = size_px;
        self
    }

    #[must_use]
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            tick_count: self.tick_count,
            normalization: self.normalization,
            flat_range: self.flat_range,
        }
    }

    #[must_use]
    pub fn series(&self) -> Series {
        Series::from_values_and_labels(&self.values, &self.labels)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !(1..=MAX_TICK_COUNT).contains(&self.tick_count) {
            return Err(ChartError::InvalidConfig(format!(
                "tick count must be in 1..={MAX_TICK_COUNT}, got {}",
                self.tick_count
            )));
        }
        if !self.animation_duration_seconds.is_finite() || self.animation_duration_seconds < 0.0 {
            return Err(ChartError::InvalidConfig(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if self.font_family.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "font family must not be empty".to_owned(),
            ));
        }
        for (name, color) in [
            ("axis", self.axis_color),
            ("text", self.text_color),
            ("bar", self.bar_color),
            ("highlight", self.highlight_color),
        ] {
            color.validate().map_err(|err| {
                ChartError::InvalidConfig(format!("{name} color is invalid: {err}"))
            })?;
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart config: {e}"))
        })
    }
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn default_foreground() -> Color {
    Color::BLACK
}

fn default_highlight_color() -> Color {
    Color::WHITE
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_animation_duration_seconds() -> f64 {
    1.0
}

fn default_font_family() -> String {
    "Courier".to_owned()
}

fn default_font_size_px() -> f64 {
    12.0
}
