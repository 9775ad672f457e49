//! Scene drawing against an abstract 2D path API.
//!
//! Hosts implement [`DrawingContext`] for their surface (Canvas 2D in the
//! browser, [`RecordingContext`] for headless runs and tests). Everything
//! after the first `set_transform` is in drawing coordinates (CSS pixels from
//! the viewport center); line widths are passed already scaled so they stay a
//! constant number of CSS pixels under zoom.

use crate::constants::*;
use crate::epicycles::{circle_opacity, CircleDescriptor};
use crate::session::Session;
use glam::{DAffine2, DVec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

pub const TARGET_COLOR: Rgba = Rgba::rgba(50, 240, 250, 0.8);
pub const TRAIL_COLOR: Rgba = Rgba::rgb(0, 0, 255);
pub const HUB_COLOR: Rgba = Rgba::rgb(50, 50, 50);
pub const PEN_FILL: Rgba = Rgba::rgb(0, 0, 255);
pub const PEN_EDGE: Rgba = Rgba::rgb(0, 0, 0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

pub trait DrawingContext {
    /// Clear the whole surface in surface pixels.
    fn clear(&mut self, width: f64, height: f64);
    fn set_transform(&mut self, transform: DAffine2);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    /// Add a full circle as a closed sub-path.
    fn circle(&mut self, center: DVec2, radius: f64);
    fn fill(&mut self, color: Rgba);
    fn stroke(&mut self, color: Rgba, width: f64);
}

/// Draw one frame of `session`.
pub fn draw_scene<C: DrawingContext + ?Sized>(session: &Session, ctx: &mut C, viewport: Viewport) {
    ctx.set_transform(DAffine2::IDENTITY);
    ctx.clear(viewport.width, viewport.height);

    let camera = session.camera();
    ctx.set_transform(camera.view_transform(viewport.size(), viewport.device_pixel_ratio));
    // One CSS pixel in drawing units; the transform already covers the DPR.
    let px = camera.pixel_size();

    let circles = session.chain().circles();
    draw_chain(ctx, circles, px);

    draw_polyline(
        ctx,
        session.target().points().iter().copied(),
        TARGET_COLOR,
        TARGET_LINE_WIDTH_PX * px,
    );
    draw_polyline(
        ctx,
        session.trail().positions(),
        TRAIL_COLOR,
        TRAIL_LINE_WIDTH_PX * px,
    );

    if let Some(pen) = session.chain().pen() {
        ctx.begin_path();
        ctx.circle(pen, PEN_RADIUS_PX * px);
        ctx.fill(PEN_FILL);
        ctx.stroke(PEN_EDGE, px);
    }
}

fn draw_chain<C: DrawingContext + ?Sized>(ctx: &mut C, circles: &[CircleDescriptor], px: f64) {
    let line_width = CHAIN_LINE_WIDTH_PX * px;
    for (i, c) in circles.iter().enumerate() {
        let o = circle_opacity(i, CIRCLE_OPACITY_DECAY);
        let edge = Rgba::rgba(20, 20, 20, o);
        if c.radius > 0.0 {
            ctx.begin_path();
            ctx.circle(c.center, c.radius);
            ctx.fill(disc_color(o));
            ctx.stroke(edge, line_width);

            ctx.begin_path();
            ctx.circle(c.center, (c.radius * HUB_RADIUS_RATIO).min(HUB_RADIUS_MAX));
            ctx.fill(HUB_COLOR);
            ctx.stroke(edge, line_width);
        }
        if i > 0 {
            ctx.begin_path();
            ctx.move_to(c.center);
            ctx.line_to(circles[i - 1].center);
            ctx.stroke(edge, line_width);
        }
    }
}

/// Pale disc tint, shifting from cyan toward white as opacity drops.
fn disc_color(opacity: f64) -> Rgba {
    Rgba::rgba(
        240,
        (220.0 + 20.0 * opacity).round() as u8,
        (240.0 - 20.0 * opacity).round() as u8,
        opacity,
    )
}

fn draw_polyline<C, I>(ctx: &mut C, points: I, color: Rgba, width: f64)
where
    C: DrawingContext + ?Sized,
    I: IntoIterator<Item = DVec2>,
{
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return;
    };
    let Some(second) = points.next() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first);
    ctx.line_to(second);
    for p in points {
        ctx.line_to(p);
    }
    ctx.stroke(color, width);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    SetTransform(DAffine2),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    Circle { center: DVec2, radius: f64 },
    Fill(Rgba),
    Stroke { color: Rgba, width: f64 },
}

/// [`DrawingContext`] that just records the operations it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    ops: Vec<DrawOp>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Circles with a positive radius, in issue order.
    pub fn circles(&self) -> impl Iterator<Item = (DVec2, f64)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Circle { center, radius } if radius > 0.0 => Some((center, radius)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke { .. }))
            .count()
    }
}

impl DrawingContext for RecordingContext {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }
    fn set_transform(&mut self, transform: DAffine2) {
        self.ops.push(DrawOp::SetTransform(transform));
    }
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }
    fn move_to(&mut self, p: DVec2) {
        self.ops.push(DrawOp::MoveTo(p));
    }
    fn line_to(&mut self, p: DVec2) {
        self.ops.push(DrawOp::LineTo(p));
    }
    fn circle(&mut self, center: DVec2, radius: f64) {
        self.ops.push(DrawOp::Circle { center, radius });
    }
    fn fill(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Fill(color));
    }
    fn stroke(&mut self, color: Rgba, width: f64) {
        self.ops.push(DrawOp::Stroke { color, width });
    }
}
