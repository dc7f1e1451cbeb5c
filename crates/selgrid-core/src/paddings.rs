//! Grid paddings: the sub-cell remainder split evenly between the two edges
//! of each axis so whole cells tile the canvas exactly.

use serde::{Deserialize, Serialize};

use crate::sizing::CanvasSize;

/// Per-edge margins, in canvas pixels. Symmetric: top == bottom and
/// left == right.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Paddings {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Paddings {
    /// Split each axis remainder `dimension - floor(dimension / cell) * cell`
    /// in half. Invariant: `2 * padding + cell_count * cell == dimension`.
    ///
    /// All zeros for a zero-sized canvas or non-positive cell size.
    pub fn for_grid(canvas: CanvasSize, cell_size: f64) -> Paddings {
        if canvas.is_zero() || cell_size <= 0.0 {
            return Paddings::default();
        }

        let cell_count_x = (canvas.width / cell_size).floor();
        let cell_count_y = (canvas.height / cell_size).floor();

        let padding_x = (canvas.width - cell_count_x * cell_size) / 2.0;
        let padding_y = (canvas.height - cell_count_y * cell_size) / 2.0;

        Paddings {
            top: padding_y,
            left: padding_x,
            right: padding_x,
            bottom: padding_y,
        }
    }
}
