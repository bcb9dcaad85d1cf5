use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{BarPrimitive, Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub bars_drawn: usize,
    pub texts_drawn: usize,
    pub animations_emitted: usize,
}

/// Renderer producing a standalone SVG document per frame.
///
/// Each bar is emitted as a `<g data-bar-index="..">` group so a host can
/// route pointer-enter/leave events on that group back to the engine.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    background: Option<Color>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Paints a full-size background rectangle before the chart.
    pub fn set_background(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.background = color;
        Ok(())
    }

    /// SVG markup of the last rendered frame.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_frame(&self, out: &mut String, frame: &RenderFrame) -> ChartResult<SvgRenderStats> {
        let mut stats = SvgRenderStats::default();
        let width = frame.viewport.width;
        let height = frame.viewport.height;

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )
        .map_err(|err| map_backend_error("failed to write svg header", err))?;

        if let Some(background) = self.background {
            writeln!(
                out,
                r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
                background.to_css()
            )
            .map_err(|err| map_backend_error("failed to write background", err))?;
        }

        for line in &frame.lines {
            writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.color.to_css(),
                line.stroke_width
            )
            .map_err(|err| map_backend_error("failed to write line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            write_text(out, &frame.font_family, text, true)?;
            stats.texts_drawn += 1;
        }

        for bar in &frame.bars {
            write_bar(out, &frame.font_family, bar, &mut stats)?;
            stats.bars_drawn += 1;
        }

        out.push_str("</svg>\n");
        Ok(stats)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut document = String::new();
        let stats = self.write_frame(&mut document, frame)?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_bar(
    out: &mut String,
    font_family: &str,
    bar: &BarPrimitive,
    stats: &mut SvgRenderStats,
) -> ChartResult<()> {
    writeln!(out, r#"  <g data-bar-index="{}">"#, bar.index)
        .map_err(|err| map_backend_error("failed to open bar group", err))?;

    write_text(out, font_family, &bar.tooltip, bar.tooltip_visible())?;
    stats.texts_drawn += usize::from(bar.tooltip_visible());

    let rect = bar.rect.rect;
    if rect.height > 0.0 {
        let fill = bar.rect.fill_color.to_css();
        match bar.animation {
            Some(animation) => {
                writeln!(
                    out,
                    r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{fill}">"#,
                    rect.x, rect.y, rect.width, rect.height
                )
                .and_then(|()| {
                    writeln!(
                        out,
                        r#"      <animate attributeName="height" from="{}" to="{}" dur="{}s"/>"#,
                        animation.from_height, animation.to_height, animation.duration_seconds
                    )
                })
                .and_then(|()| {
                    writeln!(
                        out,
                        r#"      <animate attributeName="y" from="{}" to="{}" dur="{}s"/>"#,
                        rect.bottom() - animation.from_height,
                        rect.y,
                        animation.duration_seconds
                    )
                })
                .and_then(|()| writeln!(out, "    </rect>"))
                .map_err(|err| map_backend_error("failed to write animated bar", err))?;
                stats.animations_emitted += 1;
            }
            None => {
                writeln!(
                    out,
                    r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
                    rect.x, rect.y, rect.width, rect.height
                )
                .map_err(|err| map_backend_error("failed to write bar", err))?;
            }
        }
    } else {
        let hit = bar.hit_rect;
        writeln!(
            out,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="transparent"/>"#,
            hit.x, hit.y, hit.width, hit.height
        )
        .map_err(|err| map_backend_error("failed to write bar hit region", err))?;
    }

    if let Some(label) = &bar.label {
        write_text(out, font_family, label, true)?;
        stats.texts_drawn += 1;
    }

    writeln!(out, "    <title>{}</title>", escape_xml(&bar.title))
        .and_then(|()| writeln!(out, "  </g>"))
        .map_err(|err| map_backend_error("failed to close bar group", err))
}

fn write_text(
    out: &mut String,
    font_family: &str,
    text: &TextPrimitive,
    visible: bool,
) -> ChartResult<()> {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let display = if visible { "" } else { r#" display="none""# };
    writeln!(
        out,
        r#"    <text font-family="{}" font-size="{}" fill="{}" x="{}" y="{}" text-anchor="{anchor}"{display}>{}</text>"#,
        escape_xml(font_family),
        text.font_size_px,
        text.color.to_css(),
        text.x,
        text.y,
        escape_xml(&text.text)
    )
    .map_err(|err| map_backend_error("failed to write text", err))
}

/// Escapes the five XML special characters.
#[must_use]
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn map_backend_error(prefix: &str, err: std::fmt::Error) -> ChartError {
    ChartError::Render(format!("{prefix}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
