//! Physics-simulated spheres.

use crate::color::Rgb;
use crate::constants::{
    ANGULAR_DAMPING, ATTRACTION, BODY_RADIUS, COLOR_SMOOTH_TIME, FRICTION, LINEAR_DAMPING,
    SPAWN_SPREAD,
};
use crate::damp::{clamp_dt, DampedColor};
use crate::palette::{BodySpec, Material};
use crate::physics::{BodyDesc, BodyHandle, BodyKind, BodyShape, PhysicsWorld};
use glam::Vec3;
use rand::Rng;

/// Impulse that pulls a body at `position` back towards the origin.
#[inline]
pub fn attraction_impulse(position: Vec3) -> Vec3 {
    -position * ATTRACTION
}

/// Uniform sample in the spawn cube centred on the origin.
pub fn random_spawn_position<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let half = SPAWN_SPREAD * 0.5;
    Vec3::new(
        rng.gen_range(-half..=half),
        rng.gen_range(-half..=half),
        rng.gen_range(-half..=half),
    )
}

#[derive(Clone, Debug)]
pub struct Body {
    handle: Option<BodyHandle>,
    pub target_color: Rgb,
    pub display: DampedColor,
    pub material: Material,
}

impl Body {
    /// Create the rigid body and its ball collider at `position`.
    pub fn spawn<W: PhysicsWorld + ?Sized>(world: &mut W, spec: &BodySpec, position: Vec3) -> Self {
        let handle = world.create_body(&BodyDesc {
            kind: BodyKind::Dynamic,
            position,
            linear_damping: LINEAR_DAMPING,
            angular_damping: ANGULAR_DAMPING,
            friction: FRICTION,
            collider: BodyShape::Ball {
                radius: BODY_RADIUS,
            },
        });
        Self::attached(Some(handle), spec)
    }

    /// A body bound to `handle`, or not yet bound when `None`.
    pub fn attached(handle: Option<BodyHandle>, spec: &BodySpec) -> Self {
        Self {
            handle,
            target_color: spec.color,
            // materials start out white and ease towards their colour
            display: DampedColor::new(Rgb::WHITE.linear()),
            material: spec.material,
        }
    }

    #[inline]
    pub fn handle(&self) -> Option<BodyHandle> {
        self.handle
    }

    pub fn despawn<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W) {
        if let Some(h) = self.handle.take() {
            world.remove_body(h);
        }
    }

    /// Per-frame correction, run after the physics step.
    ///
    /// Does nothing until the body is attached to the world.
    pub fn update<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W, dt: f32) {
        let dt = clamp_dt(dt);
        let Some(handle) = self.handle else {
            return;
        };
        let Some(position) = world.translation(handle) else {
            return;
        };
        world.apply_impulse(handle, attraction_impulse(position));
        self.display
            .step(self.target_color.linear(), COLOR_SMOOTH_TIME, dt);
    }

    pub fn position<W: PhysicsWorld + ?Sized>(&self, world: &W) -> Option<Vec3> {
        self.handle.and_then(|h| world.translation(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn impulse_points_at_origin() {
        let p = Vec3::new(3.0, -4.0, 1.5);
        let i = attraction_impulse(p);
        assert!((i - Vec3::new(-0.6, 0.8, -0.3)).length() < 1e-6);
        assert!(i.dot(p) < 0.0);
    }

    #[test]
    fn spawn_positions_stay_in_cube() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let p = random_spawn_position(&mut rng);
            assert!(p.abs().max_element() <= SPAWN_SPREAD * 0.5);
        }
    }
}
