//! Overlay configuration as supplied by consumers.

use selgrid_core::{GridCallbacks, GridConfig, Size};

/// Everything the overlay recognizes. Supplied whole on attach and on every
/// reconfiguration; callbacks and styles are replaced, never merged.
#[derive(Debug, Default)]
pub struct OverlayOptions {
    /// Natural size of the media the overlay tracks; the overlay renders
    /// nothing until this is known.
    pub media_size: Option<Size>,
    pub config: GridConfig,
    pub callbacks: GridCallbacks,
}

impl OverlayOptions {
    /// Build options the way the JS bindings supply them: an optional media
    /// size and an optional cell size over the default configuration.
    pub fn from_parts(
        media: Option<(f64, f64)>,
        cell_size: Option<f64>,
        callbacks: GridCallbacks,
    ) -> Self {
        let mut config = GridConfig::default();
        if let Some(cell) = cell_size {
            config.cell_size = cell;
        }
        Self {
            media_size: media.map(|(width, height)| Size::new(width, height)),
            config,
            callbacks,
        }
    }
}
