use serde::{Deserialize, Serialize};

use crate::core::PixelSegment;
use crate::error::{TrendlineError, TrendlineResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Deserializes either from `{red, green, blue, alpha}` or from a CSS color
/// string (`#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)`,
/// or one of the basic named colors such as `red` or `transparent`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorInput")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorInput {
    Css(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque")]
        alpha: f64,
    },
}

fn opaque() -> f64 {
    1.0
}

impl TryFrom<ColorInput> for Color {
    type Error = TrendlineError;

    fn try_from(input: ColorInput) -> TrendlineResult<Self> {
        let color = match input {
            ColorInput::Css(text) => Self::parse_css(&text)?,
            ColorInput::Channels {
                red,
                green,
                blue,
                alpha,
            } => Self::rgba(red, green, blue, alpha),
        };
        color.validate()?;
        Ok(color)
    }
}

impl Color {
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

    /// Builds a color from 0..=255 channels and a 0..=1 alpha.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub const fn transparent() -> Self {
        Self::rgba(1.0, 1.0, 1.0, 0.0)
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha == 0.0
    }

    pub fn parse_css(input: &str) -> TrendlineResult<Self> {
        let text = input.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }

        let lower = text.to_ascii_lowercase();
        if let Some(color) = named_color(&lower) {
            return Ok(color);
        }
        let (body, expects_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid_color(input));
        };
        let body = body.strip_suffix(')').ok_or_else(|| invalid_color(input))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid_color(input));
        }

        let mut channels = [0.0f64; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let value: f64 = part.parse().map_err(|_| invalid_color(input))?;
            if !(0.0..=255.0).contains(&value) {
                return Err(invalid_color(input));
            }
            *slot = value / 255.0;
        }
        let alpha = if expects_alpha {
            parts[3].parse().map_err(|_| invalid_color(input))?
        } else {
            1.0
        };

        let color = Self::rgba(channels[0], channels[1], channels[2], alpha);
        color.validate()?;
        Ok(color)
    }

    pub fn validate(self) -> TrendlineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TrendlineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let nibble = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let byte = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_rgba8(
            nibble(0)? * 17,
            nibble(1)? * 17,
            nibble(2)? * 17,
            1.0,
        )),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 1.0)),
        8 => Some(Color::from_rgba8(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f64::from(byte(6)?) / 255.0,
        )),
        _ => None,
    }
}

// CSS 2.1 basic keywords.
const NAMED_COLORS: [(&str, [u8; 3]); 18] = [
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("orange", [255, 165, 0]),
];

fn named_color(name: &str) -> Option<Color> {
    if name == "transparent" {
        return Some(Color::rgba(0.0, 0.0, 0.0, 0.0));
    }
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, [red, green, blue])| Color::from_rgba8(red, green, blue, 1.0))
}

fn invalid_color(input: &str) -> TrendlineError {
    TrendlineError::InvalidData(format!("unsupported color `{input}`"))
}

/// Dash pattern used by dashed trendlines: 2px on, 3px off.
pub const DASHED_PATTERN: [f64; 2] = [2.0, 3.0];

/// Stroke pattern of a line primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl LineStrokeStyle {
    /// Dash segments for the surface; empty means a continuous stroke.
    #[must_use]
    pub fn dash_pattern(self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &DASHED_PATTERN,
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
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
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn from_segment(segment: PixelSegment, stroke_width: f64, color: Color) -> Self {
        Self::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            stroke_width,
            color,
        )
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    #[must_use]
    pub const fn segment(self) -> PixelSegment {
        PixelSegment::new(self.x1, self.y1, self.x2, self.y2)
    }

    /// Zero width is accepted: a host may configure a dataset with no border.
    pub fn validate(self) -> TrendlineResult<()> {
        if !self.segment().is_finite() {
            return Err(TrendlineError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(TrendlineError::InvalidData(
                "line stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
