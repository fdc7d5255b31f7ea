use folio_core::{Camera, LightingRig, SphereInstance};
use glam::Vec3;
use web_sys as web;

mod helpers;
pub(crate) mod instances;
mod spheres;
mod targets;
use instances::{pack_instances, SceneUniforms};
use spheres::{create_spheres_resources, SpheresResources};
use targets::RenderTargets;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    spheres: SpheresResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    ambient: Vec3,
    rig: LightingRig,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        rig: LightingRig,
        max_instances: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // sRGB target: the shader works in linear space
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let spheres = create_spheres_resources(&device, format, max_instances);

        let bg = rig.background.linear();
        let clear_color = wgpu::Color {
            r: bg.x as f64,
            g: bg.y as f64,
            b: bg.z as f64,
            a: 1.0,
        };
        // ambient tinted by the backdrop so shadowed sides do not go black
        let ambient = Vec3::splat(rig.ambient) + bg;
        log::info!(
            "[gpu] surface {}x{} format={:?} lights={}",
            width,
            height,
            format,
            rig.formers.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            spheres,
            width,
            height,
            clear_color,
            ambient,
            rig,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Draw one frame: opaque spheres, then transparent ones over them.
    pub fn render(
        &mut self,
        camera: &Camera,
        instances: &[SphereInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        let (mut raw, mut n_opaque) = pack_instances(instances, camera.eye);
        if raw.len() > self.spheres.capacity {
            log::warn!(
                "[gpu] {} instances exceed capacity {}, truncating",
                raw.len(),
                self.spheres.capacity
            );
            raw.truncate(self.spheres.capacity);
            n_opaque = n_opaque.min(raw.len());
        }
        let uniforms = SceneUniforms::new(camera, self.ambient, &self.rig.lights());
        self.queue.write_buffer(
            &self.spheres.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        if !raw.is_empty() {
            self.queue.write_buffer(
                &self.spheres.instance_buffer,
                0,
                bytemuck::cast_slice(&raw),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let total = raw.len() as u32;
            let opaque = n_opaque as u32;
            rpass.set_bind_group(0, &self.spheres.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.spheres.instance_buffer.slice(..));
            if opaque > 0 {
                rpass.set_pipeline(&self.spheres.opaque_pipeline);
                rpass.draw(0..6, 0..opaque);
            }
            if total > opaque {
                rpass.set_pipeline(&self.spheres.transparent_pipeline);
                rpass.draw(0..6, opaque..total);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
