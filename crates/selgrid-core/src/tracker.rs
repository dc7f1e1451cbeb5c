//! Drag-gesture state machine producing raw and cell-snapped selections.

use kurbo::Point;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

use crate::area::{AreaInfo, SelectableArea};
use crate::geometry::GridGeometry;
use crate::throttle::{Throttle, MOVE_THROTTLE};

/// Gesture state: Idle until a pointer-down, Dragging until pointer-up or a
/// forced reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { start: Point },
}

/// Result of feeding a pointer-move into the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Not dragging: the event produces nothing.
    Ignored,
    /// State updated but the callback window is closed.
    Throttled,
    /// State updated; deliver this to the move callback.
    Report(AreaInfo),
}

/// Tracks one drag gesture at a time.
///
/// Owns all cross-cutting gesture state; the render path only reads it.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    state: DragState,
    area: SelectableArea,
    /// Set on pointer-down, cleared with the rest of the gesture state when
    /// the canvas size changes; gates cell-highlight drawing.
    has_selection: bool,
    throttle: Throttle,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
            area: SelectableArea::default(),
            has_selection: false,
            throttle: Throttle::new(MOVE_THROTTLE),
        }
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Current raw selection rectangle.
    pub fn area(&self) -> SelectableArea {
        self.area
    }

    /// Whether a gesture has started at least once on this canvas.
    pub fn has_selection(&self) -> bool {
        self.has_selection
    }

    /// Idle -> Dragging. Anchors the gesture and zeroes the area.
    pub fn pointer_down(&mut self, point: Point) -> Point {
        self.state = DragState::Dragging { start: point };
        self.area = SelectableArea::at(point);
        self.has_selection = true;
        self.throttle.reset();
        point
    }

    /// Update the drag with a new pointer position.
    ///
    /// A move while Idle (no prior down, or after a resize reset) is a
    /// no-op.
    pub fn pointer_move_at(
        &mut self,
        point: Point,
        geometry: &GridGeometry,
        now: Instant,
    ) -> MoveOutcome {
        let DragState::Dragging { start } = self.state else {
            return MoveOutcome::Ignored;
        };

        self.area = SelectableArea::from_drag(start, point);

        if self.throttle.allow(now) {
            MoveOutcome::Report(self.area_info(geometry))
        } else {
            MoveOutcome::Throttled
        }
    }

    /// Convenience wrapper using the current time.
    pub fn pointer_move(&mut self, point: Point, geometry: &GridGeometry) -> MoveOutcome {
        self.pointer_move_at(point, geometry, Instant::now())
    }

    /// Dragging -> Idle with the final selection; `None` while Idle.
    pub fn pointer_up(&mut self, geometry: &GridGeometry) -> Option<AreaInfo> {
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;
        Some(self.area_info(geometry))
    }

    /// Force-reset to Idle, discarding any in-progress gesture and the last
    /// selection.
    ///
    /// Called whenever the canvas size changes or the overlay is
    /// reconfigured: an in-flight drag never survives a resize, and the old
    /// area is canvas-space so it is meaningless against the new grid.
    pub fn clear(&mut self) {
        self.state = DragState::Idle;
        self.area = SelectableArea::default();
        self.has_selection = false;
        self.throttle.reset();
    }

    /// Current selection in raw, pixel-snapped, and percent forms.
    pub fn area_info(&self, geometry: &GridGeometry) -> AreaInfo {
        let area_in_px = geometry.area_in_px(&self.area);
        AreaInfo {
            area: self.area,
            area_in_px,
            area_in_percent: geometry.area_in_percent(&area_in_px),
        }
    }
}
