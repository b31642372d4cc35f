use serde::{Deserialize, Serialize};

use crate::core::PixelSegment;
use crate::render::{Color, LinePrimitive, LineStrokeStyle};

pub const DEFAULT_TRENDLINE_WIDTH_PX: f64 = 3.0;

/// Translucent gray used when neither the trendline nor the dataset names a color.
#[must_use]
pub fn default_trendline_color() -> Color {
    Color::from_rgba8(169, 169, 169, 0.6)
}

/// Per-dataset `trendline` configuration object.
///
/// Every field is optional; unset fields fall back to the dataset's own
/// stroke style. The `style`, `width` and `display` aliases are accepted for
/// configs written against older key names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendlineConfig {
    #[serde(default, alias = "style")]
    pub color: Option<Color>,
    #[serde(default, alias = "width")]
    pub width_px: Option<f64>,
    #[serde(default)]
    pub line_style: Option<String>,
    #[serde(default, alias = "display")]
    pub visible: Option<bool>,
}

impl TrendlineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_width_px(mut self, width_px: f64) -> Self {
        self.width_px = Some(width_px);
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: impl Into<String>) -> Self {
        self.line_style = Some(line_style.into());
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }
}

/// Fully resolved stroke style for one dataset's trendline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendlineStyle {
    pub color: Color,
    pub width_px: f64,
    pub stroke_style: LineStrokeStyle,
}

impl TrendlineStyle {
    #[must_use]
    pub fn line_primitive(self, segment: PixelSegment) -> LinePrimitive {
        LinePrimitive::from_segment(segment, self.width_px, self.color)
            .with_stroke_style(self.stroke_style)
    }
}

/// Resolves the trendline style from its config and the dataset's stroke.
///
/// A trendline explicitly marked invisible keeps its draw call but is
/// painted fully transparent.
#[must_use]
pub fn resolve_trendline_style(
    config: &TrendlineConfig,
    dataset_border_color: Option<Color>,
    dataset_border_width: Option<f64>,
) -> TrendlineStyle {
    let color = if config.visible == Some(false) {
        Color::transparent()
    } else {
        config
            .color
            .or(dataset_border_color)
            .unwrap_or_else(default_trendline_color)
    };

    let width_px = config
        .width_px
        .filter(|width| width.is_finite() && *width > 0.0)
        .or_else(|| dataset_border_width.filter(|width| width.is_finite() && *width >= 0.0))
        .unwrap_or(DEFAULT_TRENDLINE_WIDTH_PX);

    TrendlineStyle {
        color,
        width_px,
        stroke_style: resolve_stroke_style(config.line_style.as_deref()),
    }
}

fn resolve_stroke_style(line_style: Option<&str>) -> LineStrokeStyle {
    let name = line_style.map(|name| name.trim().to_ascii_lowercase());
    match name.as_deref() {
        Some("dotted" | "dashed") => LineStrokeStyle::Dashed,
        _ => LineStrokeStyle::Solid,
    }
}
