//! Stroke lifecycle: drawing a target curve, then replaying it as epicycles.
//!
//! All mutable state lives in one [`Session`] owned by the frame loop. Input
//! reaches it only as [`StrokeEvent`]s applied at the start of a tick.

use crate::camera::Camera;
use crate::constants::*;
use crate::curve::PointSequence;
use crate::epicycles::EpicycleChain;
use crate::fourier::{self, SpectrumError};
use crate::geometry::Point2D;
use crate::stroke::StrokeEvent;
use crate::trail::Trail;
use std::f64::consts::TAU;

#[derive(Clone, Debug)]
pub struct SessionParams {
    pub min_sample_squared_distance: f64,
    pub min_stroke_length: f64,
    pub initial_angular_speed: f64,
    pub replay_speed_factor: f64,
    pub speed_step: f64,
    pub precision_step: f64,
    pub trail_phase_window: f64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            min_sample_squared_distance: MIN_SAMPLE_SQUARED_DISTANCE,
            min_stroke_length: MIN_STROKE_LENGTH,
            initial_angular_speed: INITIAL_ANGULAR_SPEED,
            replay_speed_factor: REPLAY_SPEED_FACTOR,
            speed_step: SPEED_STEP,
            precision_step: PRECISION_STEP,
            trail_phase_window: TRAIL_PHASE_WINDOW,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Drawing,
}

/// What happened when a stroke ended.
#[derive(Clone, Debug, PartialEq)]
pub enum StrokeOutcome {
    /// No stroke was open.
    Ignored,
    /// Closed length at or below the tap threshold.
    TooShort { length: f64 },
    /// The decomposer produced nothing usable.
    Rejected(SpectrumError),
    Replaying { terms: usize, length: f64 },
}

#[derive(Debug)]
pub struct Session {
    pub params: SessionParams,
    mode: Mode,
    target: PointSequence,
    trail: Trail,
    chain: EpicycleChain,
    camera: Camera,
    phase: f64,
    angular_speed: f64,
    magnitude_cutoff: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionParams::default())
    }
}

impl Session {
    pub fn new(params: SessionParams) -> Self {
        Self {
            mode: Mode::Idle,
            target: PointSequence::new(),
            trail: Trail::new(params.trail_phase_window),
            chain: EpicycleChain::new(),
            camera: Camera::new(),
            phase: 0.0,
            angular_speed: params.initial_angular_speed,
            magnitude_cutoff: 0.0,
            params,
        }
    }

    pub fn apply(&mut self, ev: StrokeEvent) {
        match ev {
            StrokeEvent::Start => self.on_stroke_start(),
            StrokeEvent::Sample(p) => self.on_stroke_sample(p),
            StrokeEvent::End => {
                self.on_stroke_end();
            }
        }
    }

    /// Begin a new stroke, abandoning whatever was drawn or replaying.
    pub fn on_stroke_start(&mut self) {
        self.target.clear();
        self.trail.clear();
        self.chain.clear();
        self.phase = 0.0;
        self.camera.reset();
        self.mode = Mode::Drawing;
    }

    pub fn on_stroke_sample(&mut self, p: Point2D) {
        if self.mode == Mode::Drawing {
            self.target
                .add_if_far_enough(p, self.params.min_sample_squared_distance);
        }
    }

    pub fn on_stroke_end(&mut self) -> StrokeOutcome {
        if self.mode != Mode::Drawing {
            return StrokeOutcome::Ignored;
        }
        self.mode = Mode::Idle;

        let length = self.target.total_length();
        if length <= self.params.min_stroke_length {
            log::debug!("[stroke] discarded tap (length {:.1})", length);
            self.target.clear();
            return StrokeOutcome::TooShort { length };
        }

        self.angular_speed = self.params.replay_speed_factor * TAU / length;
        match fourier::decompose(&self.target) {
            Ok(spectrum) => {
                let terms = spectrum.len();
                log::info!(
                    "[stroke] samples={} length={:.1} terms={} omega={:.3}",
                    self.target.len(),
                    length,
                    terms,
                    self.angular_speed
                );
                self.chain.set_spectrum(spectrum);
                self.target.close_loop();
                StrokeOutcome::Replaying { terms, length }
            }
            Err(e) => {
                log::debug!("[stroke] no spectrum: {}", e);
                self.target.clear();
                StrokeOutcome::Rejected(e)
            }
        }
    }

    /// Advance one frame of `dt_sec` seconds.
    pub fn tick(&mut self, dt_sec: f64) {
        self.camera.tick(dt_sec);
        if !self.is_replaying() {
            return;
        }
        // Scale by the zoomed pixel size so on-screen speed stays constant.
        self.phase += dt_sec * self.angular_speed * self.camera.pixel_size();
        self.chain.advance(self.phase, self.magnitude_cutoff);
        if let Some(pen) = self.chain.pen() {
            self.camera.update_focus(pen);
            self.trail.push(pen, self.phase);
        }
    }

    pub fn change_speed(&mut self, delta: f64) {
        self.angular_speed = (self.angular_speed + delta * self.params.speed_step).max(0.0);
        log::info!("[params] omega={:.3}", self.angular_speed);
    }

    /// Adjust the magnitude cutoff. The trail no longer matches the chain, so it is cleared.
    pub fn change_precision(&mut self, delta: f64) {
        self.magnitude_cutoff =
            (self.magnitude_cutoff + delta * self.params.precision_step).max(0.0);
        self.trail.clear();
        log::info!("[params] min radius={}", self.magnitude_cutoff);
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.mode == Mode::Drawing
    }

    #[inline]
    pub fn is_replaying(&self) -> bool {
        self.mode == Mode::Idle && self.chain.has_terms()
    }

    #[inline]
    pub fn circle_count(&self) -> usize {
        self.chain.circle_count()
    }

    #[inline]
    pub fn target(&self) -> &PointSequence {
        &self.target
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[inline]
    pub fn chain(&self) -> &EpicycleChain {
        &self.chain
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    #[inline]
    pub fn magnitude_cutoff(&self) -> f64 {
        self.magnitude_cutoff
    }
}
