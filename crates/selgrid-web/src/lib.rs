//! SelGrid Web
//!
//! Browser overlay for the selection grid: a `<canvas>` positioned over an
//! image or video container, driven by ResizeObserver, pointer events, and a
//! requestAnimationFrame render loop.

pub mod error;
pub mod options;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod js;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod surface;

pub use error::{OverlayError, OverlayResult};
pub use options::OverlayOptions;
#[cfg(target_arch = "wasm32")]
pub use js::{GridOptions, SelectableGrid};
#[cfg(target_arch = "wasm32")]
pub use overlay::GridOverlay;
#[cfg(target_arch = "wasm32")]
pub use surface::CanvasSurface;

pub use selgrid_core::{
    AreaInPercent, AreaInPx, AreaInfo, CanvasSize, GridCallbacks, GridConfig, LayerStyle,
    SelectableArea, Size,
};

/// Set up panic reporting and logging when loaded in the browser.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("selgrid loaded");
}
