//! Canvas2D implementation of the drawing surface.

use kurbo::{Line, Rect};
use peniko::Color;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use selgrid_render::Surface;

use crate::style::css_color;

/// Surface backed by a `CanvasRenderingContext2d`.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn set_stroke(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&css_color(color));
    }

    fn set_fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
    }

    fn set_line_dash(&mut self, pattern: &[f64], offset: f64) {
        let dash = js_sys::Array::new();
        for segment in pattern {
            dash.push(&JsValue::from_f64(*segment));
        }
        // set_line_dash only fails on negative segment lengths, which the
        // styles never produce.
        let _ = self.ctx.set_line_dash(&dash);
        self.ctx.set_line_dash_offset(offset);
    }

    fn clear(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_segments(&mut self, segments: &[Line]) {
        self.ctx.begin_path();
        for line in segments {
            self.ctx.move_to(line.p0.x, line.p0.y);
            self.ctx.line_to(line.p1.x, line.p1.y);
        }
        self.ctx.stroke();
    }
}
