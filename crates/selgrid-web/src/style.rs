//! Color conversion for the Canvas2D boundary.

use peniko::Color;

/// Format a color as a CSS `rgba()` string.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!(
        "rgba({}, {}, {}, {})",
        rgba.r,
        rgba.g,
        rgba.b,
        rgba.a as f64 / 255.0
    )
}
