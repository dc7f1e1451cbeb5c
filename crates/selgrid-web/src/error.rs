//! Overlay errors.

use thiserror::Error;

/// Errors from attaching the overlay to the DOM.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("no window available")]
    NoWindow,
    #[error("container element has no parent to host the overlay canvas")]
    NoParent,
    #[error("2D canvas context unavailable")]
    NoContext,
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type for overlay operations.
pub type OverlayResult<T> = Result<T, OverlayError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for OverlayError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        OverlayError::Dom(format!("{value:?}"))
    }
}
