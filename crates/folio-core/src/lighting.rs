//! Environment lighting.
//!
//! The scene is lit by emissive "lightformer" cards placed around it inside a
//! rotated group. The renderer does not bake an environment map; it treats
//! each card as a distant light whose strength scales with its area and
//! falls off with the square of its distance from the origin.

use crate::color::Rgb;
use glam::{EulerRot, Quat, Vec3};
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_3, PI};

pub const BACKGROUND: &str = "#141622";
pub const MAX_LIGHTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    Circle,
    Ring,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lightformer {
    pub form: Form,
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
    pub scale: f32,
}

impl Lightformer {
    fn circle(intensity: f32, position: Vec3, scale: f32) -> Self {
        Self {
            form: Form::Circle,
            color: Rgb::WHITE,
            intensity,
            position,
            scale,
        }
    }

    /// Fraction of the card's disc that emits.
    fn coverage(&self) -> f32 {
        match self.form {
            Form::Circle => 1.0,
            Form::Ring => 0.5,
        }
    }
}

/// A light resolved into world space for shading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Unit vector from the scene towards the light.
    pub direction: Vec3,
    /// Linear colour premultiplied by strength.
    pub radiance: Vec3,
}

#[derive(Clone, Debug)]
pub struct LightingRig {
    pub background: Rgb,
    pub group_rotation: Quat,
    pub formers: SmallVec<[Lightformer; MAX_LIGHTS]>,
    pub ambient: f32,
}

impl Default for LightingRig {
    fn default() -> Self {
        let ring = Lightformer {
            form: Form::Ring,
            color: Rgb::parse("#4060ff").unwrap_or(Rgb::WHITE),
            intensity: 80.0,
            position: Vec3::new(10.0, 10.0, 0.0),
            scale: 10.0,
        };
        let formers = SmallVec::from_iter([
            Lightformer::circle(100.0, Vec3::new(0.0, 5.0, -9.0), 2.0),
            Lightformer::circle(2.0, Vec3::new(-5.0, 1.0, -1.0), 2.0),
            Lightformer::circle(2.0, Vec3::new(-5.0, -1.0, -1.0), 2.0),
            Lightformer::circle(2.0, Vec3::new(10.0, 1.0, 0.0), 8.0),
            ring,
        ]);
        Self {
            background: Rgb::parse(BACKGROUND).unwrap_or(Rgb::BLACK),
            group_rotation: Quat::from_euler(EulerRot::XYZ, -FRAC_PI_3, 0.0, 1.0),
            formers,
            ambient: 0.08,
        }
    }
}

impl LightingRig {
    /// Resolve every card into a world-space directional light.
    pub fn lights(&self) -> SmallVec<[DirectionalLight; MAX_LIGHTS]> {
        self.formers
            .iter()
            .filter_map(|f| {
                let world = self.group_rotation * f.position;
                let dist_sq = world.length_squared();
                if dist_sq <= f32::EPSILON {
                    return None;
                }
                let area = PI * (f.scale / 2.0).powi(2) * f.coverage();
                let strength = f.intensity * area / (4.0 * PI * dist_sq);
                Some(DirectionalLight {
                    direction: world / dist_sq.sqrt(),
                    radiance: f.color.linear() * strength,
                })
            })
            .take(MAX_LIGHTS)
            .collect()
    }
}
