//! Grid-alignment geometry: cell snapping and the padded cell lattice.
//!
//! `snap_to_cell` is the single source of truth for grid alignment. Both the
//! gesture tracker (reported `AreaInPx`) and the renderer (highlighted cells)
//! go through [`GridGeometry`], so reported and drawn cells cannot diverge.

use kurbo::Rect;

use crate::area::{AreaInPercent, AreaInPx, SelectableArea};
use crate::paddings::Paddings;
use crate::sizing::CanvasSize;

/// Tolerance for the padded-bounds clamp, absorbs float drift from the
/// padding division.
const BOUNDS_EPS: f64 = 1e-6;

/// Snap a coordinate down to the nearest cell boundary at or below it.
///
/// Returns 0 when `cell_size` is 0: a degenerate grid is a no-op, not an
/// error.
pub fn snap_to_cell(coordinate: f64, padding: f64, cell_size: f64) -> f64 {
    if cell_size == 0.0 {
        return 0.0;
    }
    ((coordinate - padding) / cell_size).floor() * cell_size + padding
}

/// The cell lattice of one canvas: its size, grid paddings, and cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub canvas: CanvasSize,
    pub paddings: Paddings,
    pub cell_size: f64,
}

impl GridGeometry {
    pub fn new(canvas: CanvasSize, paddings: Paddings, cell_size: f64) -> Self {
        Self {
            canvas,
            paddings,
            cell_size,
        }
    }

    /// Snap the raw drag rectangle outward to whole cell boundaries.
    ///
    /// Start edges snap down; end edges snap down and then extend one full
    /// cell, so the snapped region always contains the raw rectangle and
    /// covers at least one cell.
    pub fn area_in_px(&self, area: &SelectableArea) -> AreaInPx {
        let cell = self.cell_size;
        let p = self.paddings;
        AreaInPx {
            left: snap_to_cell(area.x, p.left, cell),
            top: snap_to_cell(area.y, p.top, cell),
            right: snap_to_cell(area.x + area.w, p.left, cell) + cell,
            bottom: snap_to_cell(area.y + area.h, p.top, cell) + cell,
        }
    }

    /// Normalize a snapped area to fractions of the canvas dimensions.
    ///
    /// All zeros when the canvas has a zero axis (not ready yet).
    pub fn area_in_percent(&self, px: &AreaInPx) -> AreaInPercent {
        if self.canvas.is_zero() {
            return AreaInPercent::default();
        }
        AreaInPercent {
            top: px.top / self.canvas.height,
            left: px.left / self.canvas.width,
            right: px.right / self.canvas.width,
            bottom: px.bottom / self.canvas.height,
        }
    }

    /// The grid cells covered by a snapped area, clamped to the padded
    /// canvas bounds.
    ///
    /// The outward snap can push the end edges one cell past the canvas;
    /// cells not fully inside `[padding, dimension - padding]` are skipped.
    pub fn cells_covering(&self, px: &AreaInPx) -> Vec<Rect> {
        let cell = self.cell_size;
        if cell <= 0.0 || self.canvas.is_zero() {
            return Vec::new();
        }

        let p = self.paddings;
        let max_x = self.canvas.width - p.right + BOUNDS_EPS;
        let max_y = self.canvas.height - p.bottom + BOUNDS_EPS;

        let mut cells = Vec::new();
        let mut y = px.top;
        while y < px.bottom - BOUNDS_EPS {
            let mut x = px.left;
            while x < px.right - BOUNDS_EPS {
                let inside = x >= p.left - BOUNDS_EPS
                    && x + cell <= max_x
                    && y >= p.top - BOUNDS_EPS
                    && y + cell <= max_y;
                if inside {
                    cells.push(Rect::new(x, y, x + cell, y + cell));
                }
                x += cell;
            }
            y += cell;
        }
        cells
    }
}
