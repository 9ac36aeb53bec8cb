//! Canvas2D raster backend.
//!
//! Forwards raster calls to an HTML `<canvas>` via
//! `CanvasRenderingContext2d`. Setting the element's width or height clears
//! its pixels and resets the context state, which is exactly the resize
//! semantics replay relies on.

use doodle_core::model::StrokeStyle;
use doodle_core::raster::Raster;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRaster {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRaster {
    /// Acquire the 2D context of `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Invalid 2d context type"))?;
        Ok(Self { canvas, ctx })
    }

    /// Top-left of the canvas in client coordinates.
    pub fn origin(&self) -> (f32, f32) {
        let rect = self.canvas.get_bounding_client_rect();
        (rect.left() as f32, rect.top() as f32)
    }
}

impl Raster for CanvasRaster {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn begin_path(&mut self, style: &StrokeStyle) {
        self.ctx.begin_path();
        self.ctx.set_line_width(style.line_width as f64);
        self.ctx.set_line_cap(style.line_cap.as_str());
        self.ctx.set_line_join("round");
        self.ctx.set_stroke_style_str(&style.color.to_css());
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
