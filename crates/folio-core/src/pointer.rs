//! Kinematic body that follows the pointer.

use crate::constants::POINTER_RADIUS;
use crate::physics::{BodyDesc, BodyHandle, BodyKind, BodyShape, PhysicsWorld};
use glam::{Vec2, Vec3};

/// Visible extent of the scene at the focal plane, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Map normalized pointer coordinates (`[-1, 1]`, +y up) onto the z = 0 plane.
#[inline]
pub fn pointer_to_scene(ndc: Vec2, viewport: Viewport) -> Vec3 {
    Vec3::new(
        ndc.x * viewport.width / 2.0,
        ndc.y * viewport.height / 2.0,
        0.0,
    )
}

#[derive(Clone, Debug)]
pub struct PointerProxy {
    handle: BodyHandle,
    pub target: Vec3,
}

impl PointerProxy {
    /// Kinematic ball at the origin. No mass response, no gravity.
    pub fn spawn<W: PhysicsWorld + ?Sized>(world: &mut W) -> Self {
        let handle = world.create_body(&BodyDesc {
            kind: BodyKind::KinematicPosition,
            position: Vec3::ZERO,
            linear_damping: 0.0,
            angular_damping: 0.0,
            friction: 0.0,
            collider: BodyShape::Ball {
                radius: POINTER_RADIUS,
            },
        });
        Self {
            handle,
            target: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    pub fn update<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W, ndc: Vec2, viewport: Viewport) {
        self.target = pointer_to_scene(ndc, viewport);
        world.set_kinematic_target(self.handle, self.target);
    }
}
