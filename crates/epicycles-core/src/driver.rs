use crate::render::{self, DrawingContext, Viewport};
use crate::session::Session;
use crate::stroke::StrokeEvent;
use instant::Instant;

// A hidden tab can stall the host scheduler for seconds; cap the step so
// replay resumes where it left off instead of jumping.
pub const MAX_FRAME_DT_SEC: f64 = 0.25;

/// Per-frame entry point the host scheduler calls.
///
/// One frame applies pending input, advances the session and draws it, in
/// that order, and always runs to completion.
#[derive(Debug)]
pub struct AnimationDriver {
    session: Session,
    last_instant: Option<Instant>,
    frames: u64,
}

impl AnimationDriver {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            last_instant: None,
            frames: 0,
        }
    }

    /// Run a frame at wall-clock time `now`. The first frame has `dt = 0`.
    pub fn frame<C, I>(&mut self, now: Instant, events: I, ctx: &mut C, viewport: Viewport)
    where
        C: DrawingContext + ?Sized,
        I: IntoIterator<Item = StrokeEvent>,
    {
        let dt_sec = match self.last_instant {
            Some(prev) => (now - prev).as_secs_f64(),
            None => 0.0,
        };
        self.last_instant = Some(now);
        self.step(dt_sec, events, ctx, viewport);
    }

    /// Run a frame with an explicit time step.
    pub fn step<C, I>(&mut self, dt_sec: f64, events: I, ctx: &mut C, viewport: Viewport)
    where
        C: DrawingContext + ?Sized,
        I: IntoIterator<Item = StrokeEvent>,
    {
        for ev in events {
            self.session.apply(ev);
        }
        self.session.tick(dt_sec.clamp(0.0, MAX_FRAME_DT_SEC));
        render::draw_scene(&self.session, ctx, viewport);
        self.frames += 1;
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
