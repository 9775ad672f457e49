use crate::input;
use epicycles_core::StrokeQueue;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse, pen and touch all feed the same queue; it folds duplicates.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub queue: Rc<RefCell<StrokeQueue>>,
}

pub fn wire_stroke_input(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_touch(&w);
}

fn client_to_surface(canvas: &web::HtmlCanvasElement, client_x: f64, client_y: f64) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    input::surface_local(
        DVec2::new(client_x - rect.left(), client_y - rect.top()),
        DVec2::new(rect.width(), rect.height()),
    )
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        w.queue.borrow_mut().start();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut queue = w.queue.borrow_mut();
        if !queue.is_stroke_open() {
            return;
        }
        ev.prevent_default();
        let p = client_to_surface(&w.canvas, ev.client_x() as f64, ev.client_y() as f64);
        queue.sample(p);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        w.queue.borrow_mut().end();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        for name in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

fn wire_touch(w: &InputWiring) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);

    let listen = |name: &str, handler: Box<dyn FnMut(web::TouchEvent)>| {
        let closure = Closure::wrap(handler);
        _ = w
            .canvas
            .add_event_listener_with_callback_and_add_event_listener_options(
                name,
                closure.as_ref().unchecked_ref(),
                &opts,
            );
        closure.forget();
    };

    let queue = w.queue.clone();
    listen(
        "touchstart",
        Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            queue.borrow_mut().start();
        }),
    );

    for name in ["touchend", "touchcancel"] {
        let queue = w.queue.clone();
        listen(
            name,
            Box::new(move |ev: web::TouchEvent| {
                ev.prevent_default();
                queue.borrow_mut().end();
            }),
        );
    }

    let queue = w.queue.clone();
    let canvas = w.canvas.clone();
    listen(
        "touchmove",
        Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(touch) = ev.changed_touches().get(0) {
                let p = client_to_surface(&canvas, touch.client_x() as f64, touch.client_y() as f64);
                queue.borrow_mut().sample(p);
            }
        }),
    );
}
