use tracing::trace;

use crate::core::{BarGeometry, format_compact};
use crate::error::ChartResult;
use crate::render::{
    BarPrimitive, EntryAnimation, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::BarChartEngine;

pub const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
/// Length of the tick mark drawn left of the Y axis.
pub const TICK_MARK_LENGTH_PX: f64 = 5.0;
/// Tick labels sit slightly below their mark so the text centers on it.
pub const TICK_LABEL_BASELINE_SHIFT_PX: f64 = 5.0;

impl<R: Renderer> BarChartEngine<R> {
    /// Materializes the current layout and hover state into a frame.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let layout = &self.layout;
        let config = &self.config;
        let axes = layout.axes;

        let mut frame = RenderFrame::new(layout.viewport, config.font_family.clone());
        for axis in [axes.x_axis(), axes.y_axis()] {
            frame = frame.with_line(LinePrimitive::new(
                axis.start.x,
                axis.start.y,
                axis.end.x,
                axis.end.y,
                AXIS_STROKE_WIDTH_PX,
                config.axis_color,
            ));
        }

        for tick in layout.ticks.ticks() {
            frame = frame
                .with_line(LinePrimitive::new(
                    axes.origin_x,
                    tick.y,
                    axes.origin_x - TICK_MARK_LENGTH_PX,
                    tick.y,
                    AXIS_STROKE_WIDTH_PX,
                    config.axis_color,
                ))
                .with_text(TextPrimitive::new(
                    tick.label.clone(),
                    axes.origin_x - TICK_MARK_LENGTH_PX,
                    tick.y + TICK_LABEL_BASELINE_SHIFT_PX,
                    config.font_size_px,
                    config.text_color,
                    TextHAlign::Right,
                ));
        }

        for bar in &layout.bars {
            frame = frame.with_bar(self.bar_primitive(bar));
        }

        trace!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            bars = frame.bars.len(),
            "built render frame"
        );
        Ok(frame)
    }

    fn bar_primitive(&self, bar: &BarGeometry) -> BarPrimitive {
        let config = &self.config;
        let hovered = self.hover.is_hovered(bar.index);
        let fill = if hovered {
            config.highlight_color
        } else {
            config.bar_color
        };
        let value_text = format_bar_value(bar.value);

        let label = (!bar.label.is_empty()).then(|| {
            TextPrimitive::new(
                bar.label.clone(),
                bar.label_anchor.x,
                bar.label_anchor.y,
                config.font_size_px,
                config.text_color,
                TextHAlign::Center,
            )
        });
        let animates = bar.has_visible_height()
            && config.animation_duration_seconds > 0.0
            && self
                .animations
                .is_pending(bar.index, config.animation_replay);
        let animation = animates.then_some(EntryAnimation {
            from_height: 0.0,
            to_height: bar.rect.height,
            duration_seconds: config.animation_duration_seconds,
        });

        BarPrimitive {
            index: bar.index,
            rect: RectPrimitive::new(bar.rect, fill),
            hit_rect: bar.hit_rect,
            hovered,
            label,
            tooltip: TextPrimitive::new(
                value_text.clone(),
                bar.tooltip_anchor.x,
                bar.tooltip_anchor.y,
                config.font_size_px,
                config.text_color,
                TextHAlign::Center,
            ),
            title: value_text,
            animation,
        }
    }
}

/// Raw value text shown in tooltips and native titles.
#[must_use]
pub fn format_bar_value(value: f64) -> String {
    format_compact(value)
}
