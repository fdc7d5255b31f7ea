use crate::hero::HeroOverlay;
use crate::input;
use crate::render;
use crate::SharedScene;
use folio_core::{Camera, FrameInput, LightingRig};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: SharedScene,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub camera: Camera,
    pub hero: Option<HeroOverlay>,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub elapsed: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();
        self.elapsed += dt_sec.min(folio_core::constants::MAX_FRAME_DT);

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_aspect_from_size(w, h);

        let pointer_ndc = self.pointer.borrow().ndc;
        let instances = {
            let mut scene = self.scene.borrow_mut();
            let report = scene.frame(FrameInput {
                dt: dt_sec,
                pointer_ndc,
                viewport: self.camera.viewport(),
            });
            if report.swapped {
                log::debug!("[scene] swapped in {} bodies", report.bodies);
            }
            scene.instances()
        };

        if let Some(hero) = &self.hero {
            let rect = self.canvas.get_bounding_client_rect();
            let css = Vec2::new(rect.width() as f32, rect.height() as f32);
            hero.update(&self.camera, self.elapsed, css);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            match g.render(&self.camera, &instances) {
                Ok(()) => {}
                // the surface is reconfigured on the next resize check
                Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                    log::warn!("[gpu] surface lost, skipping frame");
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_instances: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, LightingRig::default(), max_instances).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
