//! Recording surface: captures draw commands instead of rasterizing them.
//!
//! Used by the painter tests and available to downstream crates that want to
//! assert on draw output without a real canvas.

use kurbo::{Line, Rect};
use peniko::Color;

use crate::surface::Surface;

/// One captured draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    SetStroke(Color),
    SetFill(Color),
    SetLineDash(Vec<f64>, f64),
    Clear(Rect),
    FillRect(Rect),
    StrokeRect(Rect),
    StrokeSegments(Vec<Line>),
}

/// Surface that records every command in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles filled so far, in draw order.
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::FillRect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// All stroked line segments, flattened across paths.
    pub fn stroked_segments(&self) -> Vec<Line> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::StrokeSegments(segments) => Some(segments.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_stroke(&mut self, color: Color) {
        self.commands.push(DrawCmd::SetStroke(color));
    }

    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCmd::SetFill(color));
    }

    fn set_line_dash(&mut self, pattern: &[f64], offset: f64) {
        self.commands
            .push(DrawCmd::SetLineDash(pattern.to_vec(), offset));
    }

    fn clear(&mut self, rect: Rect) {
        self.commands.push(DrawCmd::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCmd::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCmd::StrokeRect(rect));
    }

    fn stroke_segments(&mut self, segments: &[Line]) {
        self.commands
            .push(DrawCmd::StrokeSegments(segments.to_vec()));
    }
}
