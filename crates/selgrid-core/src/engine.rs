//! Engine facade composing sizing, paddings, placement, and the gesture
//! tracker behind a single per-overlay instance.

use kurbo::{Point, Rect};

#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

use crate::area::SelectableArea;
use crate::config::{GridCallbacks, GridConfig, LayerStyle};
use crate::geometry::GridGeometry;
use crate::paddings::Paddings;
use crate::placement::Placement;
use crate::sizing::{CanvasSize, ResponsiveSizer, Size};
use crate::tracker::{GestureTracker, MoveOutcome};

/// Read-only snapshot handed to the renderer once per animation frame.
#[derive(Debug)]
pub struct Frame<'a> {
    pub canvas: CanvasSize,
    pub paddings: Paddings,
    pub cell_size: f64,
    pub grid_styles: &'a LayerStyle,
    pub select_area_styles: &'a LayerStyle,
    pub cells_styles: &'a LayerStyle,
    /// Raw drag rectangle.
    pub area: SelectableArea,
    /// Highlighted cells covering the snapped selection, already clamped to
    /// the padded canvas bounds.
    pub cells: Vec<Rect>,
    pub dragging: bool,
    /// False until a gesture starts, and again after any canvas resize; the
    /// cell layer is skipped while false.
    pub has_selection: bool,
}

/// One selection-grid overlay instance.
///
/// Owns all mutable state; every derived value (canvas size, paddings,
/// placement) is a pure function of the current inputs, recomputed whenever
/// an input changes.
#[derive(Debug)]
pub struct GridEngine {
    config: GridConfig,
    callbacks: GridCallbacks,
    sizer: ResponsiveSizer,
    canvas: CanvasSize,
    paddings: Paddings,
    placement: Placement,
    tracker: GestureTracker,
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridEngine {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            callbacks: GridCallbacks::default(),
            sizer: ResponsiveSizer::new(),
            canvas: CanvasSize::ZERO,
            paddings: Paddings::default(),
            placement: Placement::default(),
            tracker: GestureTracker::new(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    pub fn paddings(&self) -> Paddings {
        self.paddings
    }

    /// CSS offsets centering the canvas in its container.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Replace the configuration wholesale.
    ///
    /// Resets any in-progress drag and recomputes all derived state; styles
    /// and cell size never merge with the previous configuration.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
        self.tracker.clear();
        self.recompute();
    }

    /// Replace the whole callback set (absent entries become no-ops).
    pub fn set_callbacks(&mut self, callbacks: GridCallbacks) {
        self.callbacks = callbacks;
    }

    /// Feed a container box size from a resize notification.
    pub fn container_resized(&mut self, width: f64, height: f64) {
        self.sizer.container_resized(width, height);
        self.recompute();
    }

    /// Record the media's natural size once measured.
    pub fn set_media_size(&mut self, media: Size) {
        self.sizer.set_media(media);
        self.recompute();
    }

    /// Idle -> Dragging; fires the down callback.
    pub fn pointer_down(&mut self, point: Point) {
        let point = self.tracker.pointer_down(point);
        if let Some(on_down) = self.callbacks.on_down.as_mut() {
            on_down(point);
        }
    }

    /// Drag update; fires the move callback unless throttled or idle.
    pub fn pointer_move(&mut self, point: Point) {
        self.pointer_move_at(point, Instant::now());
    }

    /// `pointer_move` with an explicit timestamp.
    pub fn pointer_move_at(&mut self, point: Point, now: Instant) {
        let outcome = self.tracker.pointer_move_at(point, &self.geometry(), now);
        if let MoveOutcome::Report(info) = outcome {
            if let Some(on_move) = self.callbacks.on_move.as_mut() {
                on_move(&info);
            }
        }
    }

    /// Dragging -> Idle; fires the up callback with the final selection.
    pub fn pointer_up(&mut self) {
        if let Some(info) = self.tracker.pointer_up(&self.geometry()) {
            if let Some(on_up) = self.callbacks.on_up.as_mut() {
                on_up(&info);
            }
        }
    }

    /// Snapshot for the renderer.
    pub fn frame(&self) -> Frame<'_> {
        let geometry = self.geometry();
        let cells = if self.tracker.has_selection() {
            geometry.cells_covering(&geometry.area_in_px(&self.tracker.area()))
        } else {
            Vec::new()
        };
        Frame {
            canvas: self.canvas,
            paddings: self.paddings,
            cell_size: self.config.cell_size,
            grid_styles: &self.config.grid_styles,
            select_area_styles: &self.config.select_area_styles,
            cells_styles: &self.config.cells_styles,
            area: self.tracker.area(),
            cells,
            dragging: self.tracker.is_dragging(),
            has_selection: self.tracker.has_selection(),
        }
    }

    fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.canvas, self.paddings, self.config.cell_size)
    }

    fn recompute(&mut self) {
        let canvas = self.sizer.canvas_size();
        if canvas != self.canvas {
            // Neither an in-flight drag nor a completed selection survives a
            // resize: the old area is in old-canvas coordinates and would
            // snap to the wrong cells on the new grid.
            self.tracker.clear();
            log::debug!(
                "canvas resized to {:.1}x{:.1}",
                canvas.width,
                canvas.height
            );
        }
        self.canvas = canvas;
        self.paddings = Paddings::for_grid(canvas, self.config.cell_size);
        self.placement = match self.sizer.container() {
            Some(container) => Placement::center(container, canvas),
            None => Placement::default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn ready_engine() -> GridEngine {
        let mut engine = GridEngine::default();
        engine.set_media_size(Size::new(1920.0, 1080.0));
        engine.container_resized(500.0, 500.0);
        engine
    }

    #[test]
    fn test_not_ready_until_both_sizes() {
        let mut engine = GridEngine::default();
        assert!(engine.canvas_size().is_zero());
        assert_eq!(*engine.placement(), Placement::default());

        engine.container_resized(500.0, 500.0);
        assert!(engine.canvas_size().is_zero());

        engine.set_media_size(Size::new(1920.0, 1080.0));
        let canvas = engine.canvas_size();
        assert!((canvas.width - 500.0).abs() < 1e-9);
        assert!((canvas.height - 281.25).abs() < 1e-9);
    }

    #[test]
    fn test_derived_state_follows_resize() {
        let mut engine = ready_engine();
        let before = engine.paddings();
        engine.container_resized(1000.0, 1000.0);
        assert_ne!(engine.paddings(), before);
        // Letterboxed vertically: horizontal offsets stay 0%.
        assert_eq!(engine.placement().left, "0%");
        assert_ne!(engine.placement().top, "0%");
    }

    #[test]
    fn test_callbacks_fire_once_per_transition() {
        let downs = Rc::new(RefCell::new(0));
        let ups = Rc::new(RefCell::new(0));
        let mut engine = ready_engine();

        let d = downs.clone();
        let u = ups.clone();
        engine.set_callbacks(GridCallbacks {
            on_down: Some(Box::new(move |_| *d.borrow_mut() += 1)),
            on_move: None,
            on_up: Some(Box::new(move |_| *u.borrow_mut() += 1)),
        });

        engine.pointer_down(Point::new(40.0, 40.0));
        engine.pointer_move(Point::new(60.0, 60.0));
        engine.pointer_up();
        // Up without a drag in progress fires nothing.
        engine.pointer_up();

        assert_eq!(*downs.borrow(), 1);
        assert_eq!(*ups.borrow(), 1);
    }

    #[test]
    fn test_move_callback_rate_is_bounded() {
        let moves = Rc::new(RefCell::new(0));
        let mut engine = ready_engine();
        let m = moves.clone();
        engine.set_callbacks(GridCallbacks {
            on_down: None,
            on_move: Some(Box::new(move |_| *m.borrow_mut() += 1)),
            on_up: None,
        });

        engine.pointer_down(Point::new(0.0, 0.0));
        let start = Instant::now();
        for ms in 0..100 {
            engine.pointer_move_at(
                Point::new(ms as f64, ms as f64),
                start + Duration::from_millis(ms),
            );
        }
        let count = *moves.borrow();
        assert!(count >= 1 && count <= 10, "move callback fired {count} times");
    }

    #[test]
    fn test_resize_mid_drag_silences_moves() {
        let moves = Rc::new(RefCell::new(0));
        let mut engine = ready_engine();
        let m = moves.clone();
        engine.set_callbacks(GridCallbacks {
            on_down: None,
            on_move: Some(Box::new(move |_| *m.borrow_mut() += 1)),
            on_up: None,
        });

        engine.pointer_down(Point::new(40.0, 40.0));
        engine.container_resized(600.0, 600.0);
        engine.pointer_move(Point::new(80.0, 80.0));
        assert_eq!(*moves.borrow(), 0);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_reconfiguration_replaces_callbacks_and_resets_drag() {
        let old_moves = Rc::new(RefCell::new(0));
        let mut engine = ready_engine();
        let m = old_moves.clone();
        engine.set_callbacks(GridCallbacks {
            on_down: None,
            on_move: Some(Box::new(move |_| *m.borrow_mut() += 1)),
            on_up: None,
        });

        engine.pointer_down(Point::new(40.0, 40.0));
        engine.set_config(GridConfig {
            cell_size: 50.0,
            ..GridConfig::default()
        });
        // Old callback set is gone and the drag was discarded.
        engine.set_callbacks(GridCallbacks::default());
        engine.pointer_move(Point::new(80.0, 80.0));
        assert_eq!(*old_moves.borrow(), 0);
        assert_eq!(engine.config().cell_size, 50.0);
    }

    #[test]
    fn test_resize_drops_completed_selection() {
        let mut engine = ready_engine();
        engine.pointer_down(Point::new(40.0, 40.0));
        engine.pointer_move(Point::new(100.0, 100.0));
        engine.pointer_up();
        assert!(!engine.frame().cells.is_empty());

        // Doubling the container invalidates the old-canvas-space area; no
        // stale cells may be re-snapped against the new grid.
        engine.container_resized(1000.0, 1000.0);
        let frame = engine.frame();
        assert!(!frame.has_selection);
        assert!(frame.cells.is_empty());
        assert_eq!(frame.area, SelectableArea::default());

        // The next gesture highlights again.
        engine.pointer_down(Point::new(40.0, 40.0));
        engine.pointer_move(Point::new(100.0, 100.0));
        assert!(!engine.frame().cells.is_empty());
    }

    #[test]
    fn test_reconfiguration_drops_completed_selection() {
        let mut engine = ready_engine();
        engine.pointer_down(Point::new(40.0, 40.0));
        engine.pointer_move(Point::new(100.0, 100.0));
        engine.pointer_up();

        engine.set_config(GridConfig::default());
        let frame = engine.frame();
        assert!(!frame.has_selection);
        assert!(frame.cells.is_empty());
    }

    #[test]
    fn test_frame_reflects_gesture() {
        let mut engine = ready_engine();
        let frame = engine.frame();
        assert!(!frame.has_selection);
        assert!(frame.cells.is_empty());

        engine.pointer_down(Point::new(40.0, 40.0));
        engine.pointer_move(Point::new(100.0, 100.0));
        let frame = engine.frame();
        assert!(frame.dragging);
        assert!(frame.has_selection);
        assert!(!frame.cells.is_empty());

        engine.pointer_up();
        let frame = engine.frame();
        assert!(!frame.dragging);
        // Selection stays visible after the drag ends.
        assert!(frame.has_selection);
        assert!(!frame.cells.is_empty());
    }
}
