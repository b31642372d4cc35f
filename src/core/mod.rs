pub mod geometry;
pub mod line_fitter;
pub mod numeric;
pub mod sample;
pub mod scale;
pub mod types;

pub use geometry::{BottomClip, ChartArea, ClipBounds, PixelSegment, clip_segment_to_bottom};
pub use line_fitter::LineFitter;
pub use numeric::{parse_epoch_millis, parse_float};
pub use sample::{Sample, SampleMode, extract_samples, read_sample};
pub use scale::{AxisKind, LinearScale, ValueToPixel};
pub use types::Viewport;
