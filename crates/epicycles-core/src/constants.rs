use std::f64::consts::PI;

// Shared tuning constants used by the web and native frontends.

// Stroke capture
pub const MIN_SAMPLE_SQUARED_DISTANCE: f64 = 50.0; // decimation gate between consecutive samples
pub const MIN_STROKE_LENGTH: f64 = 10.0; // closed length at or below which a stroke is a tap
pub const STROKE_QUEUE_CAPACITY: usize = 1024;

// Decomposition
pub const MIN_DFT_SAMPLES: usize = 10;

// Replay speed
pub const INITIAL_ANGULAR_SPEED: f64 = 0.1;
pub const REPLAY_SPEED_FACTOR: f64 = 50.0; // omega = factor * 2π / closed length
pub const SPEED_STEP: f64 = 0.5;
pub const PRECISION_STEP: f64 = 1.0;

// Trail retention: points more than this much phase behind the pen are dropped
pub const TRAIL_PHASE_WINDOW: f64 = 1.8 * PI;

// Camera
pub const ZOOM_LEVEL_MIN: i32 = 0;
pub const ZOOM_LEVEL_MAX: i32 = 4;
pub const ZOOM_SPEED: f64 = 3.0; // zoom levels per second
pub const ZOOM_EXPONENT: f64 = 0.5; // scale = exp(level * k)
pub const FOCUS_BLEND: f64 = 0.1; // new = old*α + input*(1-α)

// Chain styling
pub const CIRCLE_OPACITY_DECAY: f64 = 0.05;
pub const HUB_RADIUS_MAX: f64 = 5.0;
pub const HUB_RADIUS_RATIO: f64 = 0.05;

// Line widths and sizes in CSS pixels
pub const CHAIN_LINE_WIDTH_PX: f64 = 1.0;
pub const TARGET_LINE_WIDTH_PX: f64 = 5.0;
pub const TRAIL_LINE_WIDTH_PX: f64 = 1.0;
pub const PEN_RADIUS_PX: f64 = 3.0;
