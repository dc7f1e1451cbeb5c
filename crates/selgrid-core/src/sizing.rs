//! Responsive sizing: container and media dimensions, and the canvas size
//! derived from them.

use serde::{Deserialize, Serialize};

/// Measured dimensions of a box, with its width/height aspect ratio.
///
/// Used both for the container element and for the media's natural size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
    /// width / height; 0 when the height is 0.
    pub aspect: f64,
}

impl Size {
    /// Create a size, deriving the aspect ratio.
    pub fn new(width: f64, height: f64) -> Self {
        let aspect = if height == 0.0 { 0.0 } else { width / height };
        Self {
            width,
            height,
            aspect,
        }
    }
}

/// Computed overlay canvas dimensions.
///
/// Always fits inside the container box while preserving the media aspect;
/// never mutated independently of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const ZERO: CanvasSize = CanvasSize {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either axis is zero (overlay not ready to render).
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Fit the media's aspect ratio inside the container box.
///
/// Returns `CanvasSize::ZERO` until both sizes are known. When the media
/// scaled to the container width still fits vertically, the canvas is
/// width-constrained; otherwise it is height-constrained.
pub fn canvas_resolution(container: Option<Size>, media: Option<Size>) -> CanvasSize {
    let (Some(container), Some(media)) = (container, media) else {
        return CanvasSize::ZERO;
    };
    if media.aspect == 0.0 {
        return CanvasSize::ZERO;
    }

    let fit_width = container.height * media.aspect;
    let fit_height = container.width / media.aspect;

    if fit_height <= container.height {
        CanvasSize::new(container.width, fit_height)
    } else {
        CanvasSize::new(fit_width, container.height)
    }
}

/// Tracks the latest container and media sizes and derives the canvas size.
///
/// Pure state: resize notifications feed [`ResponsiveSizer::container_resized`],
/// the DOM (or host) owns the actual elements.
#[derive(Debug, Clone, Default)]
pub struct ResponsiveSizer {
    container: Option<Size>,
    media: Option<Size>,
}

impl ResponsiveSizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new container box size (from a resize notification).
    pub fn container_resized(&mut self, width: f64, height: f64) {
        self.container = Some(Size::new(width, height));
    }

    /// Record the media's natural size.
    pub fn set_media(&mut self, media: Size) {
        self.media = Some(media);
    }

    pub fn container(&self) -> Option<Size> {
        self.container
    }

    pub fn media(&self) -> Option<Size> {
        self.media
    }

    /// Current canvas size; `ZERO` until both inputs are known.
    pub fn canvas_size(&self) -> CanvasSize {
        canvas_resolution(self.container, self.media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_derivation() {
        let size = Size::new(1920.0, 1080.0);
        assert!((size.aspect - 16.0 / 9.0).abs() < 1e-12);

        let degenerate = Size::new(100.0, 0.0);
        assert_eq!(degenerate.aspect, 0.0);
    }

    #[test]
    fn test_resolution_requires_both_inputs() {
        assert_eq!(canvas_resolution(None, None), CanvasSize::ZERO);
        assert_eq!(
            canvas_resolution(Some(Size::new(500.0, 500.0)), None),
            CanvasSize::ZERO
        );
        assert_eq!(
            canvas_resolution(None, Some(Size::new(1920.0, 1080.0))),
            CanvasSize::ZERO
        );
    }

    #[test]
    fn test_width_constrained_fit() {
        // Square container, wide media: full width, reduced height.
        let canvas = canvas_resolution(
            Some(Size::new(500.0, 500.0)),
            Some(Size::new(1920.0, 1080.0)),
        );
        assert!((canvas.width - 500.0).abs() < 1e-9);
        assert!((canvas.height - 281.25).abs() < 1e-9);
    }

    #[test]
    fn test_height_constrained_fit() {
        // Wide container, tall media: full height, reduced width.
        let canvas = canvas_resolution(
            Some(Size::new(800.0, 400.0)),
            Some(Size::new(1080.0, 1920.0)),
        );
        assert!((canvas.height - 400.0).abs() < 1e-9);
        assert!((canvas.width - 400.0 * (1080.0 / 1920.0)).abs() < 1e-9);
    }

    #[test]
    fn test_sizer_tracks_latest_container() {
        let mut sizer = ResponsiveSizer::new();
        sizer.set_media(Size::new(1920.0, 1080.0));
        assert_eq!(sizer.canvas_size(), CanvasSize::ZERO);

        sizer.container_resized(500.0, 500.0);
        assert!((sizer.canvas_size().height - 281.25).abs() < 1e-9);

        sizer.container_resized(1000.0, 500.0);
        let canvas = sizer.canvas_size();
        assert!((canvas.height - 500.0).abs() < 1e-9);
        assert!((canvas.width - 500.0 * (16.0 / 9.0)).abs() < 1e-9);
    }
}
