use epicycles_core::{DrawingContext, Rgba};
use glam::{DAffine2, DVec2};
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D backend for the scene renderer.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawingContext for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_transform(&mut self, t: DAffine2) {
        let m = t.matrix2;
        _ = self.ctx.set_transform(
            m.x_axis.x,
            m.x_axis.y,
            m.y_axis.x,
            m.y_axis.y,
            t.translation.x,
            t.translation.y,
        );
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: DVec2) {
        self.ctx.line_to(p.x, p.y);
    }

    fn circle(&mut self, center: DVec2, radius: f64) {
        // Start a fresh sub-path on the rim so no chord joins the previous point.
        self.ctx.move_to(center.x + radius, center.y);
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
    }

    fn fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke(&mut self, color: Rgba, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}
