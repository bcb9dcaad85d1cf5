use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{BarPrimitive, LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub font_family: String,
    /// Axis lines followed by tick marks.
    pub lines: Vec<LinePrimitive>,
    /// Tick labels.
    pub texts: Vec<TextPrimitive>,
    pub bars: Vec<BarPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, font_family: impl Into<String>) -> Self {
        Self {
            viewport,
            font_family: font_family.into(),
            lines: Vec::new(),
            texts: Vec::new(),
            bars: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    /// Zero-sized viewports are accepted; they simply draw nothing visible.
    pub fn validate(&self) -> ChartResult<()> {
        let Viewport { width, height } = self.viewport;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for bar in &self.bars {
            bar.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty() && self.bars.is_empty()
    }

    #[must_use]
    pub fn hovered_bar(&self) -> Option<&BarPrimitive> {
        self.bars.iter().find(|bar| bar.hovered)
    }
}
