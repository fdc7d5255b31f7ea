#![cfg(target_arch = "wasm32")]
use folio_core::hero::HeroText;
use folio_core::{Camera, RapierWorld, SceneController, SceneParams};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod hero;
mod input;
mod overlay;
mod render;
mod timer;

pub(crate) type SharedScene = Rc<RefCell<SceneController<RapierWorld>>>;

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

// Hidden tabs stop the accent timer; the scene keeps its current population.
fn wire_visibility(document: &web::Document, timer: Rc<RefCell<timer::AccentTimer>>, interval_ms: i32) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut t = timer.borrow_mut();
        if doc.hidden() {
            t.stop();
        } else if !t.is_active() {
            if let Err(e) = t.start(interval_ms) {
                log::error!("[accent] restart failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn scene_params() -> SceneParams {
    let mut params = SceneParams::default();
    for err in params.apply_query(&dom::location_query()) {
        log::warn!("[config] ignoring {}", err);
    }
    log::info!(
        "[config] count={} interval={}s accent={} seed={:?}",
        params.body_count,
        params.accent_interval_secs,
        params.start_accent,
        params.seed
    );
    params
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

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

    let shell = overlay::mount(&document)?;
    let canvas = shell.canvas.clone();
    // Maintain canvas internal pixel size to match CSS size * clamped devicePixelRatio
    wire_canvas_resize(&canvas);

    let params = scene_params();
    let interval_ms = params.accent_interval_ms();
    let hero_seed = params.seed.map(|s| s.wrapping_add(1));
    let scene: SharedScene = Rc::new(RefCell::new(SceneController::new(
        RapierWorld::new(),
        params,
    )));

    let timer = Rc::new(RefCell::new(timer::AccentTimer::new(scene.clone())));
    timer.borrow_mut().start(interval_ms)?;
    wire_visibility(&document, timer.clone(), interval_ms);

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_global_keydown(scene.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        pointer: pointer.clone(),
    });

    let mut rng = match hero_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let hero = match hero::HeroOverlay::mount(&shell.hero_layer, HeroText::new(&mut rng)) {
        Ok(h) => Some(h),
        Err(e) => {
            log::error!("hero text: {:?}", e);
            None
        }
    };

    let gpu = frame::init_gpu(&canvas, folio_core::config::MAX_BODY_COUNT).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        pointer,
        camera: Camera::default(),
        hero,
        gpu,
        last_instant: Instant::now(),
        elapsed: 0.0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
