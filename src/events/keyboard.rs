use crate::constants::ACTION_QUEUE_CAPACITY;
use crate::input::{key_action, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Key presses are only recorded here; the frame applies them.
pub fn wire_keyboard(actions: Rc<RefCell<Vec<KeyAction>>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            let Some(action) = key_action(&ev.key()) else {
                return;
            };
            let mut pending = actions.borrow_mut();
            if pending.len() < ACTION_QUEUE_CAPACITY {
                pending.push(action);
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
