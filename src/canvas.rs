//! `Surface` over a 2D canvas context.

use greeting_core::{EffectError, Extent, Hsla, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn by_id(document: &web::Document, element_id: &str) -> Result<Self, EffectError> {
        let canvas = document
            .get_element_by_id(element_id)
            .ok_or_else(|| EffectError::MissingElement(element_id.to_string()))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| EffectError::NotACanvas(element_id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or_else(|| EffectError::NoContext(element_id.to_string()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn element(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Extent {
        Extent::new(self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, size: Extent) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.css()));
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    #[allow(deprecated)]
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Hsla) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.css()));
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    #[allow(deprecated)]
    fn stroke_fade_line(&mut self, head: Vec2, tail: Vec2, width: f32, color: Hsla) {
        let grad = self.ctx.create_linear_gradient(
            head.x as f64,
            head.y as f64,
            tail.x as f64,
            tail.y as f64,
        );
        _ = grad.add_color_stop(0.0, &color.css());
        _ = grad.add_color_stop(1.0, &color.with_alpha(0.0).css());
        self.ctx.set_stroke_style(&grad);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(head.x as f64, head.y as f64);
        self.ctx.line_to(tail.x as f64, tail.y as f64);
        self.ctx.stroke();
    }
}
