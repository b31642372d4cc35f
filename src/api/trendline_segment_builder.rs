use serde_json::Value;

use crate::core::{
    BottomClip, ClipBounds, LineFitter, PixelSegment, SampleMode, ValueToPixel,
    clip_segment_to_bottom, extract_samples,
};

/// Fits one dataset in a single pass, skipping null entries.
#[must_use]
pub fn fit_dataset(data: &[Value], mode: SampleMode) -> LineFitter {
    extract_samples(data, mode).collect()
}

/// Maps the fitted line at the observed x range into pixel space.
///
/// When `rendered_endpoints` is given (indexed datasets), those host pixel
/// positions replace the mapped x values; indexed x has no pixel mapping of
/// its own that would line up with the rendered points.
#[must_use]
pub fn project_trendline_segment(
    fitter: &LineFitter,
    x_scale: &dyn ValueToPixel,
    y_scale: &dyn ValueToPixel,
    rendered_endpoints: Option<(f64, f64)>,
) -> PixelSegment {
    let min_x = fitter.min_x();
    let max_x = fitter.max_x();
    let (x1, x2) = match rendered_endpoints {
        Some(endpoints) => endpoints,
        None => (x_scale.value_to_pixel(min_x), x_scale.value_to_pixel(max_x)),
    };
    let y1 = y_scale.value_to_pixel(fitter.evaluate(min_x));
    let y2 = y_scale.value_to_pixel(fitter.evaluate(max_x));
    PixelSegment::new(x1, y1, x2, y2)
}

/// Drawable result for one dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendlineSegment {
    pub mode: SampleMode,
    pub fitter: LineFitter,
    pub segment: PixelSegment,
    pub clip: BottomClip,
}

impl TrendlineSegment {
    /// Degenerate fits (too few samples, zero x-variance, NaN input) are never
    /// drawn, even when rounding leaves their pixels finite.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        !self.fitter.is_degenerate() && self.segment.is_finite()
    }
}

/// Fits, projects and bottom-clips one dataset.
#[must_use]
pub fn build_trendline_segment(
    data: &[Value],
    mode: SampleMode,
    x_scale: &dyn ValueToPixel,
    y_scale: &dyn ValueToPixel,
    rendered_endpoints: Option<(f64, f64)>,
    bounds: ClipBounds,
) -> TrendlineSegment {
    let fitter = fit_dataset(data, mode);
    let projected = project_trendline_segment(&fitter, x_scale, y_scale, rendered_endpoints);
    let (segment, clip) = clip_segment_to_bottom(projected, bounds);
    TrendlineSegment {
        mode,
        fitter,
        segment,
        clip,
    }
}
