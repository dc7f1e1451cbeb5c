//! Selection area types: the raw drag rectangle and its cell-snapped forms.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Raw unsnapped rectangle spanning the drag gesture.
///
/// Width and height are always non-negative regardless of drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectableArea {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl SelectableArea {
    /// Zero-extent area anchored at the drag start point.
    pub fn at(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            w: 0.0,
            h: 0.0,
        }
    }

    /// Rectangle spanned by the drag, normalized with min/abs so the origin
    /// is the top-left corner whichever direction the pointer moved.
    pub fn from_drag(start: Point, current: Point) -> Self {
        Self {
            x: current.x.min(start.x),
            y: current.y.min(start.y),
            w: (current.x - start.x).abs(),
            h: (current.y - start.y).abs(),
        }
    }
}

/// Selection snapped outward to whole cell boundaries, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaInPx {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

/// The snapped selection normalized to [0, 1] fractions of the canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaInPercent {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Composite payload delivered to consumers on pointer move and up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaInfo {
    pub area: SelectableArea,
    pub area_in_px: AreaInPx,
    pub area_in_percent: AreaInPercent,
}
