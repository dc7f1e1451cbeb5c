//! JavaScript-facing bindings for the overlay.
//!
//! Mirrors the original library's surface: an options object carrying the
//! media size, cell size, and mouse callbacks, and a grid handle with
//! `setOptions`/`destroy`. Callback payloads are plain JS objects
//! (`{x, y}` points, `{area, areaInPx, areaInPercent}` area info).

use js_sys::{Function, Object, Reflect};
use kurbo::Point;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use selgrid_core::{AreaInfo, GridCallbacks};

use crate::options::OverlayOptions;
use crate::overlay::GridOverlay;

/// Configuration handed in from JS. Each `setOptions` call supplies a whole
/// new set; callbacks left unset become no-ops.
#[wasm_bindgen]
#[derive(Default)]
pub struct GridOptions {
    media: Option<(f64, f64)>,
    cell_size: Option<f64>,
    on_mouse_down: Option<Function>,
    on_mouse_move: Option<Function>,
    on_mouse_up: Option<Function>,
}

#[wasm_bindgen]
impl GridOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GridOptions {
        GridOptions::default()
    }

    /// Natural size of the media the overlay tracks.
    #[wasm_bindgen(js_name = setMediaSize)]
    pub fn set_media_size(&mut self, width: f64, height: f64) {
        self.media = Some((width, height));
    }

    /// Grid cell edge length in canvas pixels (default 30).
    #[wasm_bindgen(js_name = setCellSize)]
    pub fn set_cell_size(&mut self, cell_size: f64) {
        self.cell_size = Some(cell_size);
    }

    /// Fired once per drag start with a `{x, y}` point.
    #[wasm_bindgen(js_name = onMouseDown)]
    pub fn on_mouse_down(&mut self, callback: Function) {
        self.on_mouse_down = Some(callback);
    }

    /// Fired at most once per throttle window during a drag with area info.
    #[wasm_bindgen(js_name = onMouseMove)]
    pub fn on_mouse_move(&mut self, callback: Function) {
        self.on_mouse_move = Some(callback);
    }

    /// Fired once per drag end with the final area info.
    #[wasm_bindgen(js_name = onMouseUp)]
    pub fn on_mouse_up(&mut self, callback: Function) {
        self.on_mouse_up = Some(callback);
    }
}

impl GridOptions {
    fn to_overlay_options(&self) -> OverlayOptions {
        let callbacks = GridCallbacks {
            on_down: self.on_mouse_down.clone().map(wrap_point_callback),
            on_move: self.on_mouse_move.clone().map(wrap_area_callback),
            on_up: self.on_mouse_up.clone().map(wrap_area_callback),
        };
        OverlayOptions::from_parts(self.media, self.cell_size, callbacks)
    }
}

/// A selection grid mounted over a container element.
#[wasm_bindgen]
pub struct SelectableGrid {
    overlay: GridOverlay,
}

#[wasm_bindgen]
impl SelectableGrid {
    /// Attach the overlay canvas next to `container`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: &GridOptions) -> Result<SelectableGrid, JsValue> {
        let overlay = GridOverlay::attach(container, options.to_overlay_options())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(SelectableGrid { overlay })
    }

    /// Replace the whole configuration; discards any in-progress drag and
    /// re-subscribes the observer and listeners.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: &GridOptions) -> Result<(), JsValue> {
        self.overlay
            .set_options(options.to_overlay_options())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Tear the overlay down and remove its canvas from the DOM.
    pub fn destroy(self) {
        // Dropping the overlay detaches it.
    }
}

fn wrap_point_callback(function: Function) -> Box<dyn FnMut(Point)> {
    Box::new(move |point| {
        if let Err(err) = function.call1(&JsValue::NULL, &point_to_js(point)) {
            log::warn!("mouse-down callback threw: {err:?}");
        }
    })
}

fn wrap_area_callback(function: Function) -> Box<dyn FnMut(&AreaInfo)> {
    Box::new(move |info| {
        if let Err(err) = function.call1(&JsValue::NULL, &area_info_to_js(info)) {
            log::warn!("area callback threw: {err:?}");
        }
    })
}

fn point_to_js(point: Point) -> JsValue {
    let object = Object::new();
    set_number(&object, "x", point.x);
    set_number(&object, "y", point.y);
    object.into()
}

fn area_info_to_js(info: &AreaInfo) -> JsValue {
    let area = Object::new();
    set_number(&area, "x", info.area.x);
    set_number(&area, "y", info.area.y);
    set_number(&area, "w", info.area.w);
    set_number(&area, "h", info.area.h);

    let area_in_px = Object::new();
    set_number(&area_in_px, "top", info.area_in_px.top);
    set_number(&area_in_px, "left", info.area_in_px.left);
    set_number(&area_in_px, "right", info.area_in_px.right);
    set_number(&area_in_px, "bottom", info.area_in_px.bottom);

    let area_in_percent = Object::new();
    set_number(&area_in_percent, "top", info.area_in_percent.top);
    set_number(&area_in_percent, "left", info.area_in_percent.left);
    set_number(&area_in_percent, "right", info.area_in_percent.right);
    set_number(&area_in_percent, "bottom", info.area_in_percent.bottom);

    let object = Object::new();
    set_value(&object, "area", &area);
    set_value(&object, "areaInPx", &area_in_px);
    set_value(&object, "areaInPercent", &area_in_percent);
    object.into()
}

fn set_number(object: &Object, key: &str, value: f64) {
    set_value(object, key, &JsValue::from_f64(value));
}

fn set_value(object: &Object, key: &str, value: &JsValue) {
    // Reflect::set only fails on frozen objects; these are freshly built.
    let _ = Reflect::set(object, &JsValue::from_str(key), value);
}
