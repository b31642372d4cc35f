use crate::core::Viewport;
use crate::error::TrendlineResult;
use crate::render::{DrawingSurface, LinePrimitive};

/// Trendline primitives produced by one plugin pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn validate(&self) -> TrendlineResult<()> {
        self.viewport.validate()?;
        for line in &self.lines {
            line.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Strokes every line in order, leaving the surface with no dash pattern.
    pub fn stroke_on(&self, surface: &mut dyn DrawingSurface) -> TrendlineResult<()> {
        self.validate()?;
        for line in &self.lines {
            surface.stroke_line(line)?;
        }
        surface.set_line_dash(&[]);
        Ok(())
    }
}
