#![cfg(target_arch = "wasm32")]
use epicycles_core::{AnimationDriver, Session, SessionParams, StrokeQueue};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("epicycles-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::wire_canvas_resize(&canvas);

    let queue = Rc::new(RefCell::new(StrokeQueue::default()));
    let actions = Rc::new(RefCell::new(Vec::new()));

    events::wire_stroke_input(events::pointer::InputWiring {
        canvas: canvas.clone(),
        queue: queue.clone(),
    });
    events::wire_keyboard(actions.clone());

    log::info!(
        "[init] canvas {}x{} dpr={}",
        canvas.width(),
        canvas.height(),
        dom::device_pixel_ratio()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver: AnimationDriver::new(Session::new(SessionParams::default())),
        queue,
        actions,
        canvas,
        surface: canvas::CanvasSurface::new(ctx),
        hud: overlay::Hud::new(document),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
