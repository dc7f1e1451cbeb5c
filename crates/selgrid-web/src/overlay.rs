//! The DOM overlay: canvas element lifecycle, resize observation, pointer
//! listeners, and the animation-frame render loop.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, PointerEvent, ResizeObserver,
};

use selgrid_core::GridEngine;
use selgrid_render::draw_frame;

use crate::error::{OverlayError, OverlayResult};
use crate::options::OverlayOptions;
use crate::surface::CanvasSurface;

/// State shared between the event closures and the render loop.
struct Inner {
    engine: GridEngine,
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    raf_id: Option<i32>,
}

impl Inner {
    /// Re-read the container box and sync the canvas element to the derived
    /// size and placement.
    fn handle_resize(&mut self) {
        let width = self.container.client_width() as f64;
        let height = self.container.client_height() as f64;
        self.engine.container_resized(width, height);

        let canvas_size = self.engine.canvas_size();
        self.canvas.set_width(canvas_size.width.round() as u32);
        self.canvas.set_height(canvas_size.height.round() as u32);

        let placement = self.engine.placement();
        let style = self.canvas.style();
        let _ = style.set_property("top", &placement.top);
        let _ = style.set_property("left", &placement.left);
        let _ = style.set_property("right", &placement.right);
        let _ = style.set_property("bottom", &placement.bottom);
    }

    fn draw(&mut self) {
        let frame = self.engine.frame();
        draw_frame(&mut self.surface, &frame);
    }
}

/// A selection-grid overlay attached to one container element.
///
/// Creates a `<canvas>` next to the container, observes the container's box
/// size, listens for pointer events on the canvas, and redraws every
/// animation frame until detached. Each attach is paired with exactly one
/// detach; dropping the overlay detaches it.
pub struct GridOverlay {
    inner: Rc<RefCell<Inner>>,
    observer: Option<ResizeObserver>,
    on_resize: Option<Closure<dyn FnMut()>>,
    on_down: Option<Closure<dyn FnMut(PointerEvent)>>,
    on_move: Option<Closure<dyn FnMut(PointerEvent)>>,
    on_up: Option<Closure<dyn FnMut(PointerEvent)>>,
    raf: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl GridOverlay {
    /// Create the overlay canvas and attach it next to `container`.
    pub fn attach(container: HtmlElement, options: OverlayOptions) -> OverlayResult<Self> {
        let window = web_sys::window().ok_or(OverlayError::NoWindow)?;
        let document = window.document().ok_or(OverlayError::NoWindow)?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| OverlayError::Dom("created element is not a canvas".into()))?;

        let style = canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;

        let parent = container.parent_element().ok_or(OverlayError::NoParent)?;
        parent.append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(OverlayError::NoContext)?
            .dyn_into()
            .map_err(|_| OverlayError::NoContext)?;

        let mut engine = GridEngine::new(options.config);
        engine.set_callbacks(options.callbacks);
        if let Some(media) = options.media_size {
            engine.set_media_size(media);
        }

        let inner = Rc::new(RefCell::new(Inner {
            engine,
            container,
            canvas,
            surface: CanvasSurface::new(ctx),
            raf_id: None,
        }));
        inner.borrow_mut().handle_resize();

        let mut overlay = Self {
            inner,
            observer: None,
            on_resize: None,
            on_down: None,
            on_move: None,
            on_up: None,
            raf: Rc::new(RefCell::new(None)),
        };
        overlay.subscribe()?;
        overlay.start_render_loop()?;
        log::debug!("grid overlay attached");
        Ok(overlay)
    }

    /// Replace the whole configuration: callbacks, styles, cell size, media
    /// size.
    ///
    /// Discards any in-progress drag and re-subscribes the observer and
    /// listeners rather than patching them in place.
    pub fn set_options(&mut self, options: OverlayOptions) -> OverlayResult<()> {
        self.unsubscribe();
        {
            let mut inner = self.inner.borrow_mut();
            inner.engine.set_config(options.config);
            inner.engine.set_callbacks(options.callbacks);
            if let Some(media) = options.media_size {
                inner.engine.set_media_size(media);
            }
            inner.handle_resize();
        }
        self.subscribe()
    }

    /// Tear the overlay down: stop the render loop, release the observer and
    /// listeners, remove the canvas from the DOM.
    pub fn detach(&mut self) {
        self.stop_render_loop();
        self.unsubscribe();
        let inner = self.inner.borrow();
        inner.canvas.remove();
        log::debug!("grid overlay detached");
    }

    fn subscribe(&mut self) -> OverlayResult<()> {
        let inner = self.inner.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            inner.borrow_mut().handle_resize();
        }) as Box<dyn FnMut()>);
        let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        observer.observe(&self.inner.borrow().container);
        self.observer = Some(observer);
        self.on_resize = Some(on_resize);

        let inner = self.inner.clone();
        let on_down = Closure::wrap(Box::new(move |event: PointerEvent| {
            inner.borrow_mut().engine.pointer_down(offset_point(&event));
        }) as Box<dyn FnMut(PointerEvent)>);

        let inner = self.inner.clone();
        let on_move = Closure::wrap(Box::new(move |event: PointerEvent| {
            inner.borrow_mut().engine.pointer_move(offset_point(&event));
        }) as Box<dyn FnMut(PointerEvent)>);

        let inner = self.inner.clone();
        let on_up = Closure::wrap(Box::new(move |_event: PointerEvent| {
            inner.borrow_mut().engine.pointer_up();
        }) as Box<dyn FnMut(PointerEvent)>);

        {
            let inner = self.inner.borrow();
            let canvas = &inner.canvas;
            canvas
                .add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref())?;
            canvas
                .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())?;
            canvas.add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref())?;
        }
        self.on_down = Some(on_down);
        self.on_move = Some(on_move);
        self.on_up = Some(on_up);
        Ok(())
    }

    fn unsubscribe(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.on_resize = None;

        let canvas = self.inner.borrow().canvas.clone();
        if let Some(on_down) = self.on_down.take() {
            let _ = canvas.remove_event_listener_with_callback(
                "pointerdown",
                on_down.as_ref().unchecked_ref(),
            );
        }
        if let Some(on_move) = self.on_move.take() {
            let _ = canvas.remove_event_listener_with_callback(
                "pointermove",
                on_move.as_ref().unchecked_ref(),
            );
        }
        if let Some(on_up) = self.on_up.take() {
            let _ = canvas
                .remove_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref());
        }
    }

    /// Continuous redraw: the callback reschedules itself every frame until
    /// the overlay is detached.
    fn start_render_loop(&mut self) -> OverlayResult<()> {
        let inner = self.inner.clone();
        let holder = self.raf.clone();
        let tick = Closure::wrap(Box::new(move |_timestamp: f64| {
            let mut inner_ref = inner.borrow_mut();
            inner_ref.draw();
            inner_ref.raf_id = holder
                .borrow()
                .as_ref()
                .and_then(|cb| request_frame(cb).ok());
        }) as Box<dyn FnMut(f64)>);

        self.inner.borrow_mut().raf_id = Some(request_frame(&tick)?);
        *self.raf.borrow_mut() = Some(tick);
        Ok(())
    }

    fn stop_render_loop(&mut self) {
        if let Some(id) = self.inner.borrow_mut().raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.raf.borrow_mut().take();
    }
}

impl Drop for GridOverlay {
    fn drop(&mut self) {
        self.detach();
    }
}

fn request_frame(tick: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(tick.as_ref().unchecked_ref())
}

fn offset_point(event: &PointerEvent) -> Point {
    Point::new(event.offset_x() as f64, event.offset_y() as f64)
}
