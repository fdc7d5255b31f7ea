//! Periodic accent changes.

use crate::SharedScene;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns a `setInterval` registration that ticks the scene's accent.
///
/// The interval is cleared on [`AccentTimer::stop`] and on drop, so a
/// dropped timer never fires into a stale scene.
pub struct AccentTimer {
    scene: SharedScene,
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl AccentTimer {
    pub fn new(scene: SharedScene) -> Self {
        Self {
            scene,
            handle: None,
            callback: None,
        }
    }

    pub fn start(&mut self, interval_ms: i32) -> anyhow::Result<()> {
        if self.handle.is_some() {
            return Ok(());
        }
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let scene = self.scene.clone();
        let callback = Closure::wrap(Box::new(move || {
            let mut s = scene.borrow_mut();
            if let Some(accent) = s.on_timer() {
                log::info!(
                    "[accent] tick -> {} ({})",
                    accent,
                    s.accent_color().to_srgb_hex()
                );
            }
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                interval_ms,
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
        self.scene.borrow_mut().start();
        self.handle = Some(handle);
        self.callback = Some(callback);
        log::info!("[accent] timer every {} ms", interval_ms);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(handle);
            }
            if let Ok(mut s) = self.scene.try_borrow_mut() {
                s.stop();
            }
        }
        self.callback = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for AccentTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
