// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use epicycles_core::{AnimationDriver, DrawOp, RecordingContext, Session, StrokeQueue, Viewport};
use glam::DVec2;
use input::*;
use std::f64::consts::TAU;

#[test]
fn speed_keys_map_to_speed_actions() {
    for key in ["+", "=", "ArrowUp"] {
        assert_eq!(key_action(key), Some(KeyAction::SpeedUp), "{key}");
    }
    for key in ["-", "_", "ArrowDown"] {
        assert_eq!(key_action(key), Some(KeyAction::SlowDown), "{key}");
    }
}

#[test]
fn bracket_keys_adjust_precision() {
    assert_eq!(key_action("]"), Some(KeyAction::RaisePrecision));
    assert_eq!(key_action("["), Some(KeyAction::LowerPrecision));
}

#[test]
fn zoom_keys_ignore_case() {
    assert_eq!(key_action("z"), Some(KeyAction::ZoomIn));
    assert_eq!(key_action("Z"), Some(KeyAction::ZoomIn));
    assert_eq!(key_action("x"), Some(KeyAction::ZoomOut));
    assert_eq!(key_action("X"), Some(KeyAction::ZoomOut));
}

#[test]
fn unrelated_keys_are_ignored() {
    for key in ["a", "Enter", " ", "Shift", ""] {
        assert_eq!(key_action(key), None, "{key:?}");
    }
}

#[test]
fn surface_center_maps_to_origin() {
    let p = surface_local(DVec2::new(200.0, 150.0), DVec2::new(400.0, 300.0));
    assert_eq!(p, DVec2::ZERO);
}

#[test]
fn surface_corners_stay_in_css_pixels() {
    let rect = DVec2::new(400.0, 300.0);
    assert_eq!(surface_local(DVec2::ZERO, rect), DVec2::new(-200.0, -150.0));
    assert_eq!(surface_local(rect, rect), DVec2::new(200.0, 150.0));
}

// Replay a 100 CSS px circle drawn on a 400x300 CSS canvas backed at `dpr`.
fn replay_css_circle(dpr: f64) -> (f64, usize, Vec<DrawOp>) {
    let rect = DVec2::new(400.0, 300.0);
    let mut queue = StrokeQueue::default();
    queue.start();
    for j in 0..120 {
        let t = TAU * j as f64 / 120.0;
        let offset = rect * 0.5 + DVec2::new(t.cos(), t.sin()) * 100.0;
        queue.sample(surface_local(offset, rect));
    }
    queue.end();

    let mut driver = AnimationDriver::new(Session::default());
    let mut ctx = RecordingContext::new();
    let viewport = Viewport::new(rect.x * dpr, rect.y * dpr, dpr);
    driver.step(0.0, queue.drain(), &mut ctx, viewport);
    let session = driver.session();
    (session.angular_speed(), session.target().len(), ctx.take())
}

#[test]
fn stroke_units_ignore_device_pixel_ratio() {
    let (omega_1x, samples_1x, _) = replay_css_circle(1.0);
    let (omega_2x, samples_2x, ops_2x) = replay_css_circle(2.0);
    assert_eq!(samples_1x, samples_2x);
    assert!((omega_1x - omega_2x).abs() < 1e-12, "{omega_1x} vs {omega_2x}");

    // The view transform carries the ratio: the stroke's first point,
    // 100 CSS px right of center, lands 200 backing pixels right of center.
    let view = ops_2x
        .iter()
        .filter_map(|op| match *op {
            DrawOp::SetTransform(t) => Some(t),
            _ => None,
        })
        .nth(1)
        .unwrap();
    let p = view.transform_point2(DVec2::new(100.0, 0.0));
    assert!(p.distance(DVec2::new(600.0, 300.0)) < 1e-9, "{p:?}");
}

#[test]
fn circle_label_pluralizes() {
    assert_eq!(circle_count_label(0), "");
    assert_eq!(circle_count_label(1), " : 1 circle");
    assert_eq!(circle_count_label(37), " : 37 circles");
}
