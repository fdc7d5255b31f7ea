// Shaders bundled as string constants
pub static SPHERES_WGSL: &str = include_str!("../../shaders/spheres.wgsl");
