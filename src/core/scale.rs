use serde::{Deserialize, Serialize};

use crate::error::{TrendlineError, TrendlineResult};

/// Axis type discriminator declared by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    #[default]
    Linear,
    Category,
    Time,
}

/// Host-provided mapping from a data value on one axis to a pixel coordinate.
pub trait ValueToPixel {
    fn value_to_pixel(&self, value: f64) -> f64;
}

impl<F> ValueToPixel for F
where
    F: Fn(f64) -> f64,
{
    fn value_to_pixel(&self, value: f64) -> f64 {
        self(value)
    }
}

/// Affine mapping of a data domain onto a pixel range.
///
/// The pixel range may be inverted (`pixel_start > pixel_end`), which is how
/// vertical axes map larger values closer to the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> TrendlineResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(TrendlineError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(TrendlineError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    /// Maps a data value to pixels. Non-finite input maps to a non-finite pixel.
    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

impl ValueToPixel for LinearScale {
    fn value_to_pixel(&self, value: f64) -> f64 {
        self.domain_to_pixel(value)
    }
}
