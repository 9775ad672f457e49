use crate::constants::{CIRCLE_COUNT_ID, MIN_RADIUS_ID};
use crate::dom;
use crate::input::circle_count_label;
use web_sys as web;

/// Circle-count and precision labels, written only when their values change.
pub struct Hud {
    document: web::Document,
    circle_count: Option<usize>,
    min_radius: Option<f64>,
}

impl Hud {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            circle_count: None,
            min_radius: None,
        }
    }

    pub fn update(&mut self, circle_count: usize, min_radius: f64) {
        if self.circle_count != Some(circle_count) {
            self.circle_count = Some(circle_count);
            dom::set_inner_text(
                &self.document,
                CIRCLE_COUNT_ID,
                &circle_count_label(circle_count),
            );
        }
        if self.min_radius != Some(min_radius) {
            self.min_radius = Some(min_radius);
            dom::set_inner_text(&self.document, MIN_RADIUS_ID, &format!("{}", min_radius));
        }
    }
}
