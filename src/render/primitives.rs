use serde::{Deserialize, Serialize};

use crate::core::PixelRect;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a CSS color string (`#rrggbb`, `#rrggbbaa` or a basic name).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, u8::MAX)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let channel = |value: u8| f64::from(value) / 255.0;
        Self::rgba(channel(red), channel(green), channel(blue), channel(alpha))
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa` or one of a few CSS color names.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        let named = match normalized.as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "transparent" => Some(Self::TRANSPARENT),
            "red" => Some(Self::from_rgb8(0xff, 0x00, 0x00)),
            "green" => Some(Self::from_rgb8(0x00, 0x80, 0x00)),
            "blue" => Some(Self::from_rgb8(0x00, 0x00, 0xff)),
            "gray" | "grey" => Some(Self::from_rgb8(0x80, 0x80, 0x80)),
            _ => None,
        };
        if let Some(color) = named {
            return Ok(color);
        }

        let hex = normalized
            .strip_prefix('#')
            .ok_or_else(|| invalid_color(input))?;
        if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid_color(input));
        }
        let digit = |index: usize| u8::from_str_radix(&hex[index..=index], 16);
        let pair = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16);
        let color = match hex.len() {
            3 => {
                let (r, g, b) = (digit(0), digit(1), digit(2));
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Self::from_rgb8(r * 17, g * 17, b * 17),
                    _ => return Err(invalid_color(input)),
                }
            }
            6 | 8 => {
                let alpha = if hex.len() == 8 { pair(6) } else { Ok(u8::MAX) };
                match (pair(0), pair(2), pair(4), alpha) {
                    (Ok(r), Ok(g), Ok(b), Ok(a)) => Self::from_rgba8(r, g, b, a),
                    _ => return Err(invalid_color(input)),
                }
            }
            _ => return Err(invalid_color(input)),
        };
        Ok(color)
    }

    /// Formats as `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (byte(self.red), byte(self.green), byte(self.blue));
        if self.alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let alpha = (self.alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
            format!("rgba({r}, {g}, {b}, {alpha})")
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidConfig(format!("unsupported color `{input}`"))
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_css(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle in pixel space. Zero width or height is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub rect: PixelRect,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(rect: PixelRect, fill_color: Color) -> Self {
        Self { rect, fill_color }
    }

    pub fn validate(self) -> ChartResult<()> {
        let PixelRect {
            x,
            y,
            width,
            height,
        } = self.rect;
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Height transition played when a bar is painted for the first time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryAnimation {
    pub from_height: f64,
    pub to_height: f64,
    pub duration_seconds: f64,
}

impl EntryAnimation {
    /// Interpolated height at `elapsed_seconds`, clamped to the end value.
    #[must_use]
    pub fn height_at(self, elapsed_seconds: f64) -> f64 {
        if self.duration_seconds <= 0.0 || elapsed_seconds >= self.duration_seconds {
            return self.to_height;
        }
        let progress = (elapsed_seconds / self.duration_seconds).max(0.0);
        self.from_height + (self.to_height - self.from_height) * progress
    }
}

/// Everything drawn for one bar: its rectangle, pointer region and texts.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPrimitive {
    pub index: usize,
    pub rect: RectPrimitive,
    pub hit_rect: PixelRect,
    pub hovered: bool,
    /// Category label below the X axis; `None` for blank labels.
    pub label: Option<TextPrimitive>,
    /// Value tooltip above the bar, shown only while hovered.
    pub tooltip: TextPrimitive,
    /// Native hover text, present regardless of hover state.
    pub title: String,
    pub animation: Option<EntryAnimation>,
}

impl BarPrimitive {
    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        self.hovered
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.rect.validate()?;
        RectPrimitive::new(self.hit_rect, Color::TRANSPARENT).validate()?;
        if let Some(label) = &self.label {
            label.validate()?;
        }
        self.tooltip.validate()?;
        if let Some(animation) = self.animation {
            if !animation.duration_seconds.is_finite() || animation.duration_seconds < 0.0 {
                return Err(ChartError::InvalidData(
                    "animation duration must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, EntryAnimation};

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(Color::parse_css("black").expect("named"), Color::BLACK);
        assert_eq!(Color::parse_css(" WHITE ").expect("named"), Color::WHITE);
        assert_eq!(
            Color::parse_css("#f00").expect("short hex"),
            Color::from_rgb8(255, 0, 0)
        );
        assert_eq!(
            Color::parse_css("#336699").expect("hex").to_css(),
            "#336699"
        );
        assert_eq!(
            Color::parse_css("#00000000").expect("hex with alpha"),
            Color::TRANSPARENT
        );
    }

    #[test]
    fn rejects_unknown_colors() {
        assert!(Color::parse_css("mauve").is_err());
        assert!(Color::parse_css("#12345").is_err());
        assert!(Color::parse_css("#gg0000").is_err());
    }

    #[test]
    fn translucent_colors_format_as_rgba() {
        assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn animation_interpolates_linearly() {
        let animation = EntryAnimation {
            from_height: 0.0,
            to_height: 200.0,
            duration_seconds: 1.0,
        };
        assert_eq!(animation.height_at(0.0), 0.0);
        assert_eq!(animation.height_at(0.25), 50.0);
        assert_eq!(animation.height_at(3.0), 200.0);
    }
}
