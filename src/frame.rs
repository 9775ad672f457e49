use crate::canvas::CanvasSurface;
use crate::constants::{PRECISION_KEY_DELTA, SPEED_KEY_DELTA};
use crate::dom;
use crate::input::KeyAction;
use crate::overlay::Hud;
use epicycles_core::{AnimationDriver, Session, StrokeQueue, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: AnimationDriver,
    pub queue: Rc<RefCell<StrokeQueue>>,
    pub actions: Rc<RefCell<Vec<KeyAction>>>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub hud: Hud,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Drain first so listeners never wait on a borrow held across the draw.
        let actions: Vec<KeyAction> = self.actions.borrow_mut().drain(..).collect();
        for action in actions {
            apply_action(self.driver.session_mut(), action);
        }
        let batch = self.queue.borrow_mut().drain();

        let viewport = Viewport::new(
            self.canvas.width() as f64,
            self.canvas.height() as f64,
            dom::device_pixel_ratio(),
        );
        self.driver
            .frame(Instant::now(), batch, &mut self.surface, viewport);

        let session = self.driver.session();
        self.hud
            .update(session.circle_count(), session.magnitude_cutoff());
    }
}

fn apply_action(session: &mut Session, action: KeyAction) {
    match action {
        KeyAction::SpeedUp => session.change_speed(SPEED_KEY_DELTA),
        KeyAction::SlowDown => session.change_speed(-SPEED_KEY_DELTA),
        KeyAction::RaisePrecision => session.change_precision(-PRECISION_KEY_DELTA),
        KeyAction::LowerPrecision => session.change_precision(PRECISION_KEY_DELTA),
        KeyAction::ZoomIn => session.camera_mut().zoom_in(),
        KeyAction::ZoomOut => session.camera_mut().zoom_out(),
    }
    log::debug!(
        "[keys] {:?} speed={:.3} cutoff={}",
        action,
        session.angular_speed(),
        session.magnitude_cutoff()
    );
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
