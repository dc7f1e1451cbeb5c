//! Drawing surface abstraction.

use kurbo::{Line, Rect};
use peniko::Color;

/// Minimal Canvas2D-shaped drawing surface the painter targets.
///
/// Style setters are sticky, as on a 2D context: they apply to every
/// subsequent draw until changed.
pub trait Surface {
    fn set_stroke(&mut self, color: Color);
    fn set_fill(&mut self, color: Color);
    /// Dash pattern for strokes; an empty pattern means solid lines.
    fn set_line_dash(&mut self, pattern: &[f64], offset: f64);
    /// Reset a rectangle to transparent.
    fn clear(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    /// Stroke all segments as one path with the current stroke style.
    fn stroke_segments(&mut self, segments: &[Line]);
}
