//! SelGrid Render Library
//!
//! Surface abstraction and the per-frame painter for the selection grid.
//! The browser implementation draws onto a Canvas2D context; the recording
//! surface replays draw commands for headless tests.

mod painter;
pub mod recording;
mod surface;

pub use painter::{draw_frame, CELL_INSET};
pub use recording::{DrawCmd, RecordingSurface};
pub use surface::Surface;
