//! Zoom and pan state for the 2D view.
//!
//! The zoom level glides toward an integer target at a fixed rate and the
//! focus point is exponentially smoothed toward the pen, so the view follows
//! the drawing without snapping. Panning is blended in by [`pan_easing`] so it
//! only becomes visible once the zoom has progressed.

use crate::constants::{
    FOCUS_BLEND, ZOOM_EXPONENT, ZOOM_LEVEL_MAX, ZOOM_LEVEL_MIN, ZOOM_SPEED,
};
use crate::geometry::{pan_easing, Point2D};
use glam::{DAffine2, DVec2};

#[derive(Clone, Debug)]
pub struct Camera {
    current_zoom_level: f64,
    target_zoom_level: i32,
    focus: Point2D,
    scale_factor: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            current_zoom_level: 0.0,
            target_zoom_level: ZOOM_LEVEL_MIN,
            focus: Point2D::ZERO,
            scale_factor: 1.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a zoom level; out-of-range values are clamped.
    pub fn set_target_zoom_level(&mut self, level: i32) {
        self.target_zoom_level = level.clamp(ZOOM_LEVEL_MIN, ZOOM_LEVEL_MAX);
    }

    pub fn zoom_in(&mut self) {
        self.set_target_zoom_level(self.target_zoom_level.saturating_add(1));
    }

    pub fn zoom_out(&mut self) {
        self.set_target_zoom_level(self.target_zoom_level.saturating_sub(1));
    }

    /// Move the zoom level toward the target by at most `ZOOM_SPEED * dt_sec`.
    pub fn tick(&mut self, dt_sec: f64) {
        let target = self.target_zoom_level as f64;
        let step = ZOOM_SPEED * dt_sec.max(0.0);
        let zoom = self.current_zoom_level;
        if zoom < target {
            self.set_zoom_level((zoom + step).min(target));
        } else if zoom > target {
            self.set_zoom_level((zoom - step).max(target));
        }
    }

    /// Blend the focus toward `p`.
    pub fn update_focus(&mut self, p: Point2D) {
        self.focus = self.focus * FOCUS_BLEND + p * (1.0 - FOCUS_BLEND);
    }

    /// Back to the unzoomed view centered on the origin.
    pub fn reset(&mut self) {
        self.target_zoom_level = ZOOM_LEVEL_MIN;
        self.set_zoom_level(ZOOM_LEVEL_MIN as f64);
        self.focus = Point2D::ZERO;
    }

    fn set_zoom_level(&mut self, level: f64) {
        self.current_zoom_level = level;
        self.scale_factor = (level * ZOOM_EXPONENT).exp();
    }

    #[inline]
    pub fn current_zoom_level(&self) -> f64 {
        self.current_zoom_level
    }

    #[inline]
    pub fn target_zoom_level(&self) -> i32 {
        self.target_zoom_level
    }

    #[inline]
    pub fn focus(&self) -> Point2D {
        self.focus
    }

    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Size of one surface unit after zoom, in drawing coordinates.
    #[inline]
    pub fn pixel_size(&self) -> f64 {
        1.0 / self.scale_factor
    }

    /// Drawing-to-surface transform for a backing store of `viewport` device
    /// pixels: center, scale by zoom and `device_pixel_ratio`, then pan by the
    /// eased focus. Drawing units are CSS pixels.
    pub fn view_transform(&self, viewport: DVec2, device_pixel_ratio: f64) -> DAffine2 {
        let pan = -self.focus * pan_easing(self.current_zoom_level);
        DAffine2::from_translation(viewport * 0.5)
            * DAffine2::from_scale(DVec2::splat(self.scale_factor * device_pixel_ratio))
            * DAffine2::from_translation(pan)
    }
}
