//! Overlay configuration: cell size, per-layer draw styles, and user
//! callbacks.

use kurbo::Point;
use peniko::Color;

use crate::area::AreaInfo;

/// Default grid cell edge length in canvas pixels.
pub const DEFAULT_CELL_SIZE: f64 = 30.0;

/// Stroke/fill/dash settings for one visual layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStyle {
    pub stroke: Color,
    pub fill: Option<Color>,
    pub line_dash: Vec<f64>,
    pub line_dash_offset: f64,
}

impl LayerStyle {
    /// Grid lines: dashed blue strokes.
    pub fn grid_default() -> Self {
        Self {
            stroke: Color::from_rgba8(0, 0, 255, 255),
            fill: None,
            line_dash: vec![5.0, 5.0],
            line_dash_offset: 0.0,
        }
    }

    /// Raw selection rectangle: red outline, translucent red fill.
    pub fn select_area_default() -> Self {
        Self {
            stroke: Color::from_rgba8(255, 0, 0, 255),
            fill: Some(Color::from_rgba8(100, 0, 0, 77)),
            line_dash: Vec::new(),
            line_dash_offset: 0.0,
        }
    }

    /// Highlighted cells: same palette as the selection rectangle.
    pub fn cells_default() -> Self {
        Self {
            stroke: Color::from_rgba8(255, 0, 0, 255),
            fill: Some(Color::from_rgba8(100, 0, 0, 77)),
            line_dash: Vec::new(),
            line_dash_offset: 0.0,
        }
    }
}

/// Engine configuration. Replaced wholesale on reconfiguration; there is no
/// partial merge across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Grid cell edge length in canvas pixels.
    pub cell_size: f64,
    pub grid_styles: LayerStyle,
    pub select_area_styles: LayerStyle,
    pub cells_styles: LayerStyle,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            grid_styles: LayerStyle::grid_default(),
            select_area_styles: LayerStyle::select_area_default(),
            cells_styles: LayerStyle::cells_default(),
        }
    }
}

/// Gesture callbacks. Absent callbacks are no-ops.
#[derive(Default)]
pub struct GridCallbacks {
    /// Fired once per drag start with the down point.
    pub on_down: Option<Box<dyn FnMut(Point)>>,
    /// Fired at most once per throttle window during a drag.
    pub on_move: Option<Box<dyn FnMut(&AreaInfo)>>,
    /// Fired once per drag end with the final selection.
    pub on_up: Option<Box<dyn FnMut(&AreaInfo)>>,
}

impl std::fmt::Debug for GridCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridCallbacks")
            .field("on_down", &self.on_down.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_up", &self.on_up.is_some())
            .finish()
    }
}
