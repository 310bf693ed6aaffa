//! Canvas 2D backend (WASM only)

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::Renderer;

/// Draws through a `CanvasRenderingContext2d`
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
    }
}

impl Renderer for Canvas2d {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn cell(&mut self, origin: Vec2, size: f32, fill: &str, stroke: &str) {
        let size = size as f64;
        self.ctx.begin_path();
        self.ctx.rect(origin.x as f64, origin.y as f64, size, size);
        self.ctx.set_fill_style_str(fill);
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.fill();
        self.ctx.stroke();
    }
}
