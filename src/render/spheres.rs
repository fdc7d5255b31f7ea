use super::helpers;
use super::instances::{SceneUniforms, SphereRaw};

pub(crate) struct SpheresResources {
    pub(crate) opaque_pipeline: wgpu::RenderPipeline,
    pub(crate) transparent_pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) capacity: usize,
}

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4, 2 => Float32x4];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SphereRaw>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRS,
    }
}

pub(crate) fn create_spheres_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    capacity: usize,
) -> SpheresResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("spheres_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SPHERES_WGSL.into()),
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("spheres_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("spheres_instances"),
        size: (std::mem::size_of::<SphereRaw>() * capacity.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("spheres_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("spheres_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("spheres_layout"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let opaque_pipeline = helpers::make_sphere_pipeline(
        device,
        "spheres_opaque",
        &layout,
        &shader,
        instance_layout(),
        color_format,
        Some(wgpu::BlendState::REPLACE),
        true,
    );
    let transparent_pipeline = helpers::make_sphere_pipeline(
        device,
        "spheres_transparent",
        &layout,
        &shader,
        instance_layout(),
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        false,
    );
    SpheresResources {
        opaque_pipeline,
        transparent_pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer,
        capacity: capacity.max(1),
    }
}
