use serde::{Deserialize, Serialize};

use crate::error::{TrendlineError, TrendlineResult};

/// Pixel rectangle in which the host plots data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartArea {
    #[must_use]
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn validate(self) -> TrendlineResult<()> {
        let finite = [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|value| value.is_finite());
        if !finite || self.right <= self.left || self.bottom <= self.top {
            return Err(TrendlineError::InvalidData(
                "chart area must be finite with right > left and bottom > top".to_owned(),
            ));
        }
        Ok(())
    }
}

/// The two geometry values the bottom clip needs.
///
/// `width` is the full chart width in pixels, not the plot-area width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipBounds {
    pub bottom: f64,
    pub width: f64,
}

impl ClipBounds {
    #[must_use]
    pub const fn new(bottom: f64, width: f64) -> Self {
        Self { bottom, width }
    }
}

/// Straight segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PixelSegment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }
}

/// Which endpoint, if any, was pulled back to the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BottomClip {
    None,
    Left,
    Right,
}

/// Pulls an endpoint that falls below the plot bottom back onto the bottom edge.
///
/// Only one endpoint is corrected; the left side is checked first. The new x is
/// a linear interpolation across the chart width by the fraction of the
/// segment's height that lies below the edge, which matches the true crossing
/// only when the x mapping is linear. Top, left and right edges are never
/// clipped.
#[must_use]
pub fn clip_segment_to_bottom(
    segment: PixelSegment,
    bounds: ClipBounds,
) -> (PixelSegment, BottomClip) {
    let PixelSegment {
        mut x1,
        mut y1,
        mut x2,
        mut y2,
    } = segment;
    let ClipBounds { bottom, width } = bounds;

    if y1 > bottom {
        let diff = y1 - bottom;
        let line_height = y1 - y2;
        let overlap = diff / line_height;

        y1 = bottom;
        x1 += width * overlap;
        return (PixelSegment::new(x1, y1, x2, y2), BottomClip::Left);
    }

    if y2 > bottom {
        let diff = y2 - bottom;
        let line_height = y2 - y1;
        let overlap = diff / line_height;
        let subtraction = width - width * overlap;

        y2 = bottom;
        x2 = width - (x2 - subtraction);
        return (PixelSegment::new(x1, y1, x2, y2), BottomClip::Right);
    }

    (segment, BottomClip::None)
}
