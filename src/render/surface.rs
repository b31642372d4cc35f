use crate::error::TrendlineResult;
use crate::render::{Color, LinePrimitive};

/// Stateful 2D drawing context owned by the host for the duration of a frame.
///
/// State set through this trait (width, dash, color) persists until changed,
/// so callers set it immediately before use and clear the dash afterwards.
pub trait DrawingSurface {
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, pattern: &[f64]);
    fn set_stroke_color(&mut self, color: Color);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self) -> TrendlineResult<()>;

    /// Strokes one primitive and resets the dash pattern so later drawing is
    /// unaffected, even when the stroke itself fails.
    fn stroke_line(&mut self, line: &LinePrimitive) -> TrendlineResult<()> {
        self.set_line_width(line.stroke_width);
        self.set_line_dash(line.stroke_style.dash_pattern());
        self.begin_path();
        self.move_to(line.x1, line.y1);
        self.line_to(line.x2, line.y2);
        self.set_stroke_color(line.color);
        let result = self.stroke();
        self.set_line_dash(&[]);
        result
    }
}

/// One call recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    SetLineWidth(f64),
    SetLineDash(Vec<f64>),
    SetStrokeColor(Color),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
}

/// Headless surface that records every call.
///
/// Used by tests and by hosts that want to inspect the draw sequence before
/// replaying it on a real backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, SurfaceCommand::Stroke))
            .count()
    }

    /// `(x1, y1, x2, y2)` of every stroked path, in draw order.
    #[must_use]
    pub fn stroked_segments(&self) -> Vec<(f64, f64, f64, f64)> {
        let mut segments = Vec::new();
        let mut start = None;
        let mut end = None;
        for command in &self.commands {
            match *command {
                SurfaceCommand::BeginPath => {
                    start = None;
                    end = None;
                }
                SurfaceCommand::MoveTo(x, y) => start = Some((x, y)),
                SurfaceCommand::LineTo(x, y) => end = Some((x, y)),
                SurfaceCommand::Stroke => {
                    if let (Some((x1, y1)), Some((x2, y2))) = (start, end) {
                        segments.push((x1, y1, x2, y2));
                    }
                }
                _ => {}
            }
        }
        segments
    }

    /// Dash pattern in effect after the last recorded call.
    #[must_use]
    pub fn current_dash(&self) -> &[f64] {
        self.commands
            .iter()
            .rev()
            .find_map(|command| match command {
                SurfaceCommand::SetLineDash(pattern) => Some(pattern.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(SurfaceCommand::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.commands.push(SurfaceCommand::SetLineDash(pattern.to_vec()));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetStrokeColor(color));
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(SurfaceCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(SurfaceCommand::LineTo(x, y));
    }

    fn stroke(&mut self) -> TrendlineResult<()> {
        self.commands.push(SurfaceCommand::Stroke);
        Ok(())
    }
}
