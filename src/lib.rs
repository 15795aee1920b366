#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, MODEL_URL};
use crate::core::{IntakeSession, RegionRegistry, ViewerConfig, MODEL_SCALE};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod model;
mod overlay;
mod panel;
mod render;
mod storage;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn spawn_model_load(pending: Rc<RefCell<Option<model::MeshData>>>) {
    spawn_local(async move {
        match assets::load_model(MODEL_URL, MODEL_SCALE).await {
            Ok(mesh) => *pending.borrow_mut() = Some(mesh),
            // The forms keep working without the model
            Err(e) => log::error!("[model] load failed: {:?}", e),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("anatomy-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let app = ui::AppHandles::new(
        IntakeSession::new(RegionRegistry::builtin(), ViewerConfig::default()),
        storage::BrowserSession::open(),
    );
    log::info!(
        "[pick] {} regions registered",
        app.session.borrow().registry().len()
    );

    // Listeners are registered once for the page lifetime
    events::wire_canvas_pointerdown(&canvas, app.clone());
    events::wire_global_keydown(app.clone());
    events::wire_welcome(&document, app.clone());
    events::wire_closing(&document, app.clone());
    panel::wire(&document, app.clone());
    events::schedule_welcome(app.clone());

    let pending_mesh = Rc::new(RefCell::new(None));
    spawn_model_load(pending_mesh.clone());

    // Without WebGPU the canvas stays blank but the forms remain usable
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: app.session.clone(),
        canvas,
        gpu,
        pending_mesh,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
