use folio_core::lighting::{DirectionalLight, MAX_LIGHTS};
use folio_core::{Camera, SphereInstance};
use glam::Vec3;

/// Per-instance vertex data, three `vec4<f32>` attributes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereRaw {
    pub center_radius: [f32; 4],
    pub color_opacity: [f32; 4],
    /// roughness, metalness, unused, unused
    pub material: [f32; 4],
}

impl From<&SphereInstance> for SphereRaw {
    fn from(s: &SphereInstance) -> Self {
        Self {
            center_radius: s.center.extend(s.radius).to_array(),
            color_opacity: s.color.extend(s.opacity).to_array(),
            material: [s.roughness, s.metalness, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightRaw {
    pub direction: [f32; 4],
    pub radiance: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    /// rgb ambient, light count in w
    pub ambient: [f32; 4],
    pub lights: [LightRaw; MAX_LIGHTS],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, ambient: Vec3, lights: &[DirectionalLight]) -> Self {
        let mut raw = [LightRaw::default(); MAX_LIGHTS];
        let n = lights.len().min(MAX_LIGHTS);
        for (dst, l) in raw.iter_mut().zip(lights.iter().take(n)) {
            *dst = LightRaw {
                direction: l.direction.extend(0.0).to_array(),
                radiance: l.radiance.extend(0.0).to_array(),
            };
        }
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            ambient: ambient.extend(n as f32).to_array(),
            lights: raw,
        }
    }
}

/// Pack instances for upload: opaque spheres first, then transparent ones
/// sorted back to front from `eye`. Returns the data and the opaque count.
pub fn pack_instances(instances: &[SphereInstance], eye: Vec3) -> (Vec<SphereRaw>, usize) {
    let mut opaque: Vec<SphereRaw> = Vec::with_capacity(instances.len());
    let mut transparent: Vec<(f32, SphereRaw)> = Vec::new();
    for s in instances {
        if s.opacity < 1.0 {
            transparent.push((s.center.distance_squared(eye), SphereRaw::from(s)));
        } else {
            opaque.push(SphereRaw::from(s));
        }
    }
    transparent.sort_by(|a, b| b.0.total_cmp(&a.0));
    let n_opaque = opaque.len();
    opaque.extend(transparent.into_iter().map(|(_, raw)| raw));
    (opaque, n_opaque)
}
