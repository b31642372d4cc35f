use approx::assert_abs_diff_eq;
use chart_trendline::core::{BottomClip, ClipBounds, PixelSegment, clip_segment_to_bottom};

#[test]
fn segment_above_bottom_is_untouched() {
    let segment = PixelSegment::new(10.0, 100.0, 110.0, 250.0);
    let (clipped, side) = clip_segment_to_bottom(segment, ClipBounds::new(250.0, 400.0));

    assert_eq!(side, BottomClip::None);
    assert_eq!(clipped, segment);
}

#[test]
fn left_endpoint_below_bottom_is_pinned_and_shifted_right() {
    let segment = PixelSegment::new(10.0, 300.0, 110.0, 100.0);
    let bounds = ClipBounds::new(250.0, 400.0);
    let (clipped, side) = clip_segment_to_bottom(segment, bounds);

    assert_eq!(side, BottomClip::Left);
    assert_eq!(clipped.y1, bounds.bottom);
    let diff = 300.0 - 250.0;
    let line_height = 300.0 - 100.0;
    let expected_x1 = 10.0 + 400.0 * diff / line_height;
    assert_abs_diff_eq!(clipped.x1, expected_x1, epsilon = 1e-12);
    assert_eq!((clipped.x2, clipped.y2), (110.0, 100.0));
}

#[test]
fn right_endpoint_below_bottom_is_mirrored_against_chart_width() {
    let segment = PixelSegment::new(10.0, 100.0, 110.0, 300.0);
    let (clipped, side) = clip_segment_to_bottom(segment, ClipBounds::new(250.0, 400.0));

    assert_eq!(side, BottomClip::Right);
    assert_eq!(clipped.y2, 250.0);
    // overlap = 50 / 200; x2 = width - (x2 - (width - width * overlap))
    assert_abs_diff_eq!(clipped.x2, 590.0, epsilon = 1e-12);
    assert_eq!((clipped.x1, clipped.y1), (10.0, 100.0));
}

#[test]
fn left_side_wins_when_both_endpoints_are_below() {
    let segment = PixelSegment::new(0.0, 300.0, 100.0, 400.0);
    let (clipped, side) = clip_segment_to_bottom(segment, ClipBounds::new(250.0, 400.0));

    assert_eq!(side, BottomClip::Left);
    assert_eq!(clipped.y1, 250.0);
    assert_eq!(clipped.y2, 400.0);
    assert_abs_diff_eq!(clipped.x1, -200.0, epsilon = 1e-12);
}

#[test]
fn endpoint_exactly_on_bottom_is_not_clipped() {
    let segment = PixelSegment::new(0.0, 250.0, 100.0, 50.0);
    let (clipped, side) = clip_segment_to_bottom(segment, ClipBounds::new(250.0, 400.0));

    assert_eq!(side, BottomClip::None);
    assert_eq!(clipped, segment);
}

#[test]
fn non_finite_segment_passes_through_unclipped() {
    let segment = PixelSegment::new(0.0, f64::NAN, 100.0, f64::NAN);
    let (clipped, side) = clip_segment_to_bottom(segment, ClipBounds::new(250.0, 400.0));

    assert_eq!(side, BottomClip::None);
    assert!(!clipped.is_finite());
}
