//! SelGrid Core Library
//!
//! Platform-agnostic engine for a cell-snapping selection grid overlaid on a
//! rectangular media element: responsive canvas sizing, grid paddings,
//! centering placement, and a drag-gesture tracker that reports selections in
//! both pixel and normalized coordinates.

pub mod area;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod paddings;
pub mod placement;
pub mod sizing;
pub mod throttle;
pub mod tracker;

pub use area::{AreaInPercent, AreaInPx, AreaInfo, SelectableArea};
pub use config::{GridCallbacks, GridConfig, LayerStyle, DEFAULT_CELL_SIZE};
pub use engine::{Frame, GridEngine};
pub use geometry::{snap_to_cell, GridGeometry};
pub use paddings::Paddings;
pub use placement::Placement;
pub use sizing::{canvas_resolution, CanvasSize, ResponsiveSizer, Size};
pub use throttle::{Throttle, MOVE_THROTTLE};
pub use tracker::{DragState, GestureTracker, MoveOutcome};
