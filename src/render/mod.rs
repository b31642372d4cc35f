mod frame;
mod primitives;
mod surface;

pub use frame::RenderFrame;
pub use primitives::{Color, DASHED_PATTERN, LinePrimitive, LineStrokeStyle};
pub use surface::{DrawingSurface, RecordingSurface, SurfaceCommand};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoRenderer;
