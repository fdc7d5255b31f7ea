//! Physics abstraction and the Rapier backend.
//!
//! The scene only needs a handful of rigid-body operations, so they are
//! expressed as the [`PhysicsWorld`] trait. [`RapierWorld`] implements it on top
//! of `rapier3d` with zero gravity and variable time-stepping: each call to
//! [`PhysicsWorld::step`] advances the simulation by exactly the given delta.

use fnv::FnvHashMap;
use glam::Vec3;
use rapier3d::prelude::*;

/// Opaque, backend-neutral body identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Moved by forces, impulses and contacts.
    Dynamic,
    /// Moved only by explicit position targets; pushes but is never pushed.
    KinematicPosition,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    Ball { radius: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDesc {
    pub kind: BodyKind,
    pub position: Vec3,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub friction: f32,
    pub collider: BodyShape,
}

/// Rigid-body operations the scene relies on.
pub trait PhysicsWorld {
    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle;
    fn remove_body(&mut self, handle: BodyHandle);
    /// Current translation, or `None` for unknown handles.
    fn translation(&self, handle: BodyHandle) -> Option<Vec3>;
    fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec3);
    /// Position a kinematic body will reach by the end of the next step.
    fn set_kinematic_target(&mut self, handle: BodyHandle, target: Vec3);
    fn step(&mut self, dt: f32);
    fn body_count(&self) -> usize;
}

#[inline]
fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

pub struct RapierWorld {
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    gravity: Vector<Real>,

    handles: FnvHashMap<BodyHandle, RigidBodyHandle>,
    next_handle: u64,
}

impl RapierWorld {
    /// A world without gravity.
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: vector![0.0, 0.0, 0.0],
            handles: FnvHashMap::default(),
            next_handle: 1,
        }
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        let h = *self.handles.get(&handle)?;
        self.rigid_body_set.get_mut(h)
    }
}

impl Default for RapierWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld for RapierWorld {
    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        let builder = match desc.kind {
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
            BodyKind::KinematicPosition => RigidBodyBuilder::kinematic_position_based(),
        };
        let body = builder
            .translation(to_vector(desc.position))
            .linear_damping(desc.linear_damping)
            .angular_damping(desc.angular_damping)
            .build();
        let rapier_handle = self.rigid_body_set.insert(body);

        let shape = match desc.collider {
            BodyShape::Ball { radius } => ColliderBuilder::ball(radius),
        };
        let collider = shape.friction(desc.friction).build();
        self.collider_set
            .insert_with_parent(collider, rapier_handle, &mut self.rigid_body_set);

        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.handles.insert(handle, rapier_handle);
        handle
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        if let Some(rapier_handle) = self.handles.remove(&handle) {
            self.rigid_body_set.remove(
                rapier_handle,
                &mut self.island_manager,
                &mut self.collider_set,
                &mut self.impulse_joint_set,
                &mut self.multibody_joint_set,
                true,
            );
        }
    }

    fn translation(&self, handle: BodyHandle) -> Option<Vec3> {
        self.handles
            .get(&handle)
            .and_then(|h| self.rigid_body_set.get(*h))
            .map(|body| {
                let t = body.translation();
                Vec3::new(t.x, t.y, t.z)
            })
    }

    fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec3) {
        if let Some(body) = self.body_mut(handle) {
            body.apply_impulse(to_vector(impulse), true);
        }
    }

    fn set_kinematic_target(&mut self, handle: BodyHandle, target: Vec3) {
        if let Some(body) = self.body_mut(handle) {
            body.set_next_kinematic_translation(to_vector(target));
        }
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    fn body_count(&self) -> usize {
        self.handles.len()
    }
}
