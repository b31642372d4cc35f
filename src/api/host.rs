use crate::core::{AxisKind, ClipBounds, ValueToPixel, Viewport};

use super::DatasetConfig;

/// Read-only view of the host chart during one redraw.
///
/// Scales, layout and rendered point positions are computed and owned by the
/// host; plugins only consume them.
pub trait HostChart {
    fn viewport(&self) -> Viewport;

    /// Plot-area bottom edge and full chart width, in pixels.
    fn clip_bounds(&self) -> ClipBounds;

    fn x_axis_kind(&self) -> AxisKind;

    fn x_scale(&self) -> &dyn ValueToPixel;

    /// Vertical scale for `axis_id`, or the default vertical scale for `None`.
    fn y_scale(&self, axis_id: Option<&str>) -> Option<&dyn ValueToPixel>;

    fn datasets(&self) -> &[DatasetConfig];

    fn is_dataset_visible(&self, dataset_index: usize) -> bool;

    /// Pixel x of a point the host already laid out for a dataset.
    fn rendered_point_x(&self, dataset_index: usize, point_index: usize) -> Option<f64>;
}
