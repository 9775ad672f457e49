// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn key_deltas_are_positive() {
    assert!(SPEED_KEY_DELTA > 0.0);
    assert!(PRECISION_KEY_DELTA > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn action_queue_holds_a_burst_of_presses() {
    assert!(ACTION_QUEUE_CAPACITY >= 8);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, CIRCLE_COUNT_ID, MIN_RADIUS_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
