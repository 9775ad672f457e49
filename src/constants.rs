// DOM hooks and host-side tuning for the browser front-end.

pub const CANVAS_ID: &str = "app-canvas";
pub const CIRCLE_COUNT_ID: &str = "circle-count";
pub const MIN_RADIUS_ID: &str = "min-radius";

// Step sizes applied per key press; the session scales them by its own steps.
pub const SPEED_KEY_DELTA: f64 = 1.0;
pub const PRECISION_KEY_DELTA: f64 = 1.0;

// Upper bound on key actions buffered between frames.
pub const ACTION_QUEUE_CAPACITY: usize = 64;
