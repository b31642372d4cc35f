use cairo::{Context, Format, ImageSurface};

use crate::error::{TrendlineError, TrendlineResult};
use crate::render::{Color, DrawingSurface, RenderFrame};

impl DrawingSurface for Context {
    fn set_line_width(&mut self, width: f64) {
        Context::set_line_width(self, width);
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.set_dash(pattern, 0.0);
    }

    fn set_stroke_color(&mut self, color: Color) {
        apply_color(self, color);
    }

    fn begin_path(&mut self) {
        self.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        Context::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        Context::line_to(self, x, y);
    }

    fn stroke(&mut self) -> TrendlineResult<()> {
        Context::stroke(self).map_err(|err| map_backend_error("failed to stroke line", err))
    }
}

/// Offscreen cairo image surface that trendline frames can be painted onto.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    lines_drawn: usize,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> TrendlineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(TrendlineError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            lines_drawn: 0,
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> TrendlineResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn lines_drawn(&self) -> usize {
        self.lines_drawn
    }

    /// Creates a drawing context on the image surface, cleared to the clear color.
    pub fn begin_frame(&mut self) -> TrendlineResult<Context> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        Ok(context)
    }

    pub fn render(&mut self, frame: &RenderFrame) -> TrendlineResult<()> {
        let mut context = self.begin_frame()?;
        frame.stroke_on(&mut context)?;
        self.lines_drawn = frame.lines.len();
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TrendlineError {
    TrendlineError::Backend(format!("{prefix}: {err}"))
}
