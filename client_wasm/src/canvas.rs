//! 2D canvas implementation of the drawing surface

use game_core::DrawSurface;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context is not a CanvasRenderingContext2d"))?;
        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(cx as f64, cy as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            console_log!("Failed to draw circle: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: f32, color: &str) {
        let dash = JsValue::from_f64(dash as f64);
        let pattern = js_sys::Array::of2(&dash, &dash);
        if let Err(e) = self.ctx.set_line_dash(&pattern) {
            console_log!("Failed to set line dash: {:?}", e);
        }

        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();

        // Back to solid lines for anything drawn after the net
        if let Err(e) = self.ctx.set_line_dash(&js_sys::Array::new()) {
            console_log!("Failed to reset line dash: {:?}", e);
        }
    }
}
