//! Canvas placement: CSS percentage offsets centering the canvas within its
//! container on whichever axis the canvas is smaller.

use crate::sizing::{CanvasSize, Size};

/// CSS-style offsets for the four edges, as percentage strings (`"12.5%"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub top: String,
    pub left: String,
    pub right: String,
    pub bottom: String,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            top: "0%".to_string(),
            left: "0%".to_string(),
            right: "0%".to_string(),
            bottom: "0%".to_string(),
        }
    }
}

impl Placement {
    /// Center the canvas within the container.
    ///
    /// An axis where the canvas is not smaller than the container gets `0%`;
    /// zero-sized container or canvas short-circuits to all `0%`.
    pub fn center(container: Size, canvas: CanvasSize) -> Placement {
        if container.width == 0.0 || container.height == 0.0 || canvas.is_zero() {
            return Placement::default();
        }

        let offset_x = if canvas.width <= container.width {
            (container.width - canvas.width) / 2.0
        } else {
            0.0
        };
        let offset_y = if canvas.height <= container.height {
            (container.height - canvas.height) / 2.0
        } else {
            0.0
        };

        let horizontal = format_percent(offset_x / container.width);
        let vertical = format_percent(offset_y / container.height);

        Placement {
            top: vertical.clone(),
            left: horizontal.clone(),
            right: horizontal,
            bottom: vertical,
        }
    }
}

fn format_percent(fraction: f64) -> String {
    format!("{}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering_both_axes() {
        let placement = Placement::center(Size::new(200.0, 200.0), CanvasSize::new(100.0, 100.0));
        assert_eq!(placement.top, "25%");
        assert_eq!(placement.left, "25%");
        assert_eq!(placement.right, "25%");
        assert_eq!(placement.bottom, "25%");
    }

    #[test]
    fn test_full_axis_gets_zero() {
        // Canvas fills the width, letterboxed vertically.
        let placement = Placement::center(Size::new(500.0, 500.0), CanvasSize::new(500.0, 281.25));
        assert_eq!(placement.left, "0%");
        assert_eq!(placement.right, "0%");
        assert_eq!(placement.top, placement.bottom);
        assert_eq!(placement.top, format!("{}%", (500.0 - 281.25) / 2.0 / 500.0 * 100.0));
    }

    #[test]
    fn test_zero_container_short_circuits() {
        let placement = Placement::center(Size::new(0.0, 200.0), CanvasSize::new(100.0, 100.0));
        assert_eq!(placement, Placement::default());
    }

    #[test]
    fn test_not_ready_canvas() {
        let placement = Placement::center(Size::new(200.0, 200.0), CanvasSize::ZERO);
        assert_eq!(placement, Placement::default());
    }
}
