//! Per-frame painter: grid lines, highlighted cells, selection rectangle.

use kurbo::{Line, Point, Rect};

use selgrid_core::Frame;

use crate::surface::Surface;

/// How much each highlighted cell is shrunk (total, split across both sides)
/// so grid lines stay visible through the highlight.
pub const CELL_INSET: f64 = 5.0;

/// Absorbs float drift when walking cell boundaries.
const GRID_EPS: f64 = 1e-6;

/// Draw one frame: clear, grid, highlighted cells, then (while dragging) the
/// raw selection rectangle.
///
/// Called unconditionally every animation frame; draws nothing while the
/// canvas is not ready.
pub fn draw_frame<S: Surface>(surface: &mut S, frame: &Frame<'_>) {
    if frame.canvas.is_zero() {
        return;
    }

    surface.clear(Rect::new(0.0, 0.0, frame.canvas.width, frame.canvas.height));

    draw_grid(surface, frame);
    fill_cells(surface, frame);
    if frame.dragging {
        draw_select_area(surface, frame);
    }
}

/// Grid lines at each cell boundary, inset by the paddings.
fn draw_grid<S: Surface>(surface: &mut S, frame: &Frame<'_>) {
    let cell = frame.cell_size;
    if cell <= 0.0 {
        return;
    }

    let p = frame.paddings;
    let right = frame.canvas.width - p.right;
    let bottom = frame.canvas.height - p.bottom;

    let style = frame.grid_styles;
    surface.set_stroke(style.stroke);
    surface.set_line_dash(&style.line_dash, style.line_dash_offset);

    let mut segments = Vec::new();
    let mut x = p.left;
    while x <= right + GRID_EPS {
        segments.push(Line::new(Point::new(x, p.top), Point::new(x, bottom)));
        x += cell;
    }
    let mut y = p.top;
    while y <= bottom + GRID_EPS {
        segments.push(Line::new(Point::new(p.left, y), Point::new(right, y)));
        y += cell;
    }
    surface.stroke_segments(&segments);
}

/// Highlighted cells covering the snapped selection.
///
/// Skipped until a gesture has started at least once. Each cell is cleared
/// then filled at an inset so grid lines show through; cells outside the
/// padded bounds were already dropped by the engine's single clamp rule.
fn fill_cells<S: Surface>(surface: &mut S, frame: &Frame<'_>) {
    if !frame.has_selection || frame.cells.is_empty() {
        return;
    }

    let style = frame.cells_styles;
    surface.set_stroke(style.stroke);
    surface.set_line_dash(&style.line_dash, style.line_dash_offset);
    if let Some(fill) = style.fill {
        surface.set_fill(fill);
    }

    let half_inset = CELL_INSET / 2.0;
    for cell in &frame.cells {
        let inset = Rect::new(
            cell.x0 + half_inset,
            cell.y0 + half_inset,
            cell.x1 - half_inset,
            cell.y1 - half_inset,
        );
        surface.clear(inset);
        if style.fill.is_some() {
            surface.fill_rect(inset);
        }
    }
}

/// Raw selection rectangle, drawn only while dragging.
fn draw_select_area<S: Surface>(surface: &mut S, frame: &Frame<'_>) {
    let style = frame.select_area_styles;
    surface.set_stroke(style.stroke);
    surface.set_line_dash(&style.line_dash, style.line_dash_offset);

    let area = frame.area;
    let rect = Rect::new(area.x, area.y, area.x + area.w, area.y + area.h);
    surface.stroke_rect(rect);
    if let Some(fill) = style.fill {
        surface.set_fill(fill);
        surface.fill_rect(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCmd, RecordingSurface};
    use selgrid_core::{GridEngine, Size};

    fn ready_engine() -> GridEngine {
        let mut engine = GridEngine::default();
        engine.set_media_size(Size::new(1000.0, 1000.0));
        engine.container_resized(310.0, 310.0);
        engine
    }

    #[test]
    fn test_not_ready_draws_nothing() {
        let engine = GridEngine::default();
        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &engine.frame());
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_grid_lines_stay_in_padded_bounds() {
        let engine = ready_engine();
        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &engine.frame());

        let segments = surface.stroked_segments();
        // 310px canvas with 30px cells: 10 cells + 5px padding, 11 lines per
        // axis.
        assert_eq!(segments.len(), 22);
        for line in &segments {
            for point in [line.p0, line.p1] {
                assert!(point.x >= 5.0 - 1e-9 && point.x <= 305.0 + 1e-9);
                assert!(point.y >= 5.0 - 1e-9 && point.y <= 305.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_no_cell_highlight_before_first_gesture() {
        let engine = ready_engine();
        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &engine.frame());
        assert!(surface.filled_rects().is_empty());
    }

    #[test]
    fn test_selection_rect_only_while_dragging() {
        let mut engine = ready_engine();
        engine.pointer_down(Point::new(40.0, 40.0));
        engine.pointer_move(Point::new(100.0, 100.0));

        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &engine.frame());
        let strokes = surface
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::StrokeRect(_)))
            .count();
        assert_eq!(strokes, 1);

        engine.pointer_up();
        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &engine.frame());
        let strokes = surface
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::StrokeRect(_)))
            .count();
        assert_eq!(strokes, 0);
        // The cell highlight persists after the drag ends.
        assert!(!surface.filled_rects().is_empty());
    }

    #[test]
    fn test_highlighted_cells_are_inset() {
        let mut engine = ready_engine();
        engine.pointer_down(Point::new(40.0, 40.0));
        engine.pointer_move(Point::new(60.0, 60.0));

        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &engine.frame());

        let cell_size = engine.config().cell_size;
        for rect in surface.filled_rects() {
            // The raw selection fill is larger; cell fills are exactly one
            // inset cell.
            if (rect.width() - (cell_size - CELL_INSET)).abs() < 1e-9 {
                assert!((rect.height() - (cell_size - CELL_INSET)).abs() < 1e-9);
            }
        }
        // Every cell fill is preceded by a clear of the same rect.
        let mut last_clear = None;
        for cmd in &surface.commands {
            match cmd {
                DrawCmd::Clear(rect) => last_clear = Some(*rect),
                DrawCmd::FillRect(rect)
                    if (rect.width() - (cell_size - CELL_INSET)).abs() < 1e-9 =>
                {
                    assert_eq!(last_clear, Some(*rect));
                }
                _ => {}
            }
        }
    }
}
