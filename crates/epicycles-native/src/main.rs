//! Headless runner: draws a built-in heart through the stroke queue, then
//! replays it for a fixed simulated time and logs what the frames contain.

use anyhow::Context;
use epicycles_core::{
    AnimationDriver, DrawOp, Point2D, RecordingContext, Session, SessionParams, StrokeQueue,
    Viewport,
};
use std::f64::consts::TAU;

const FRAME_DT_SEC: f64 = 1.0 / 60.0;
const SAMPLES_PER_FRAME: usize = 4;
const DEFAULT_REPLAY_SEC: f64 = 10.0;
const HEART_SAMPLES: usize = 240;

/// Classic heart curve, scaled to a few hundred pixels and flipped so it is
/// upright in y-down surface coordinates.
fn heart_point(t: f64) -> Point2D {
    let s = t.sin();
    let x = 16.0 * s * s * s;
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Point2D::new(x, -y) * 12.0
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let replay_sec = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f64>()
            .with_context(|| format!("replay seconds must be a number, got {arg:?}"))?,
        None => DEFAULT_REPLAY_SEC,
    };

    let viewport = Viewport::new(1280.0, 720.0, 1.0);
    let mut driver = AnimationDriver::new(Session::new(SessionParams::default()));
    let mut queue = StrokeQueue::default();
    let mut ctx = RecordingContext::new();

    // Feed the stroke a few samples per frame, like pointer moves would arrive.
    queue.start();
    for start in (0..HEART_SAMPLES).step_by(SAMPLES_PER_FRAME) {
        for j in start..(start + SAMPLES_PER_FRAME).min(HEART_SAMPLES) {
            queue.sample(heart_point(TAU * j as f64 / HEART_SAMPLES as f64));
        }
        driver.step(FRAME_DT_SEC, queue.drain(), &mut ctx, viewport);
        ctx.take();
    }
    queue.end();
    driver.step(FRAME_DT_SEC, queue.drain(), &mut ctx, viewport);

    let session = driver.session();
    if !session.is_replaying() {
        anyhow::bail!("built-in stroke did not produce a replay");
    }
    log::info!(
        "[native] replaying {} samples, omega={:.3}",
        session.target().len(),
        session.angular_speed()
    );

    driver.session_mut().camera_mut().set_target_zoom_level(2);
    let frames = (replay_sec / FRAME_DT_SEC).round() as usize;
    let frames_per_report = (1.0 / FRAME_DT_SEC).round() as usize;
    for frame in 1..=frames {
        ctx.take();
        driver.step(FRAME_DT_SEC, queue.drain(), &mut ctx, viewport);
        if frame % frames_per_report == 0 {
            report(&driver, &ctx);
        }
    }

    // Tighten precision a few steps and show how the chain shrinks.
    for _ in 0..3 {
        driver.session_mut().change_precision(1.0);
        ctx.take();
        driver.step(FRAME_DT_SEC, queue.drain(), &mut ctx, viewport);
        report(&driver, &ctx);
    }

    log::info!("[native] done after {} frames", driver.frames());
    Ok(())
}

fn report(driver: &AnimationDriver, ctx: &RecordingContext) {
    let session = driver.session();
    let pen = session.chain().pen().unwrap_or_default();
    let paths = ctx
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::BeginPath))
        .count();
    log::info!(
        "[native] phase={:.2} circles={} cutoff={} zoom={:.2} pen=({:.1},{:.1}) trail={} paths={}",
        session.phase(),
        session.circle_count(),
        session.magnitude_cutoff(),
        session.camera().current_zoom_level(),
        pen.x,
        pen.y,
        session.trail().len(),
        paths
    );
}
