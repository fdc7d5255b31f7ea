use crate::SharedScene;
use folio_core::{command_for_key, SceneCommand};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &SharedScene) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() {
        return;
    }
    let key = ev.key();
    let Some(command) = command_for_key(&key) else {
        return;
    };
    let mut s = scene.borrow_mut();
    s.apply(command);
    match command {
        SceneCommand::TogglePause => {
            // keep the page from scrolling
            ev.prevent_default();
        }
        SceneCommand::NextAccent | SceneCommand::SelectAccent(_) => {
            log::info!(
                "[keys] accent -> {} ({})",
                s.accent(),
                s.accent_color().to_srgb_hex()
            );
        }
        SceneCommand::Reshuffle => log::info!("[keys] reshuffled accent {}", s.accent()),
    }
}

pub fn wire_global_keydown(scene: SharedScene) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
