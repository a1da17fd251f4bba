//! Physics component for bodies that move their transform
//!
//! Integrates velocity into the linked transform each tick. There is no
//! collision response here; the component only moves things.
//!
//! A body may also be linked to the collider of an entity. The link is a
//! reference like the transform handle: it is never serialized and a
//! detached clone starts without one.

use crate::ecs::component::{ComponentError, Persistent};
use crate::ecs::hierarchy::{TransformHandle, TransformHierarchy};
use crate::ecs::Entity;
use crate::physics::Collider;
use crate::foundation::math::{Vector2, Vector2Ext};
use serde::{Deserialize, Serialize};

/// How a body reacts to velocity and forces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyKind {
    /// Never moves; velocity is forced to zero
    Static,
    /// Moved by velocity set from game logic
    #[default]
    Kinematic,
    /// Moved by velocity and accumulated forces
    Rigid,
}

/// Physics state attached to one transform
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsComponent {
    transform: TransformHandle,

    collider: Option<Entity>,

    /// Body kind
    pub kind: BodyKind,

    /// Linear velocity in units per second
    pub velocity: Vector2,

    /// Angular velocity in radians per second
    pub angular_velocity: f64,

    /// Mass used by force and torque
    pub mass: f64,

    /// Surface friction coefficient
    pub friction: f64,

    /// Bounciness
    pub restitution: f64,

    /// Fraction of linear velocity removed per second
    pub linear_damping: f64,

    /// Fraction of angular velocity removed per second
    pub angular_damping: f64,

    /// Whether the component is updated
    pub active: bool,
}

/// Serialized part of a [`PhysicsComponent`]
///
/// The transform handle and collider link are references and are re-linked
/// by the owner after loading, so they are not part of the state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsState {
    /// Body kind
    pub kind: BodyKind,
    /// Linear velocity
    pub velocity: Vector2,
    /// Angular velocity
    pub angular_velocity: f64,
    /// Mass
    pub mass: f64,
    /// Friction
    pub friction: f64,
    /// Restitution
    pub restitution: f64,
    /// Linear damping
    pub linear_damping: f64,
    /// Angular damping
    pub angular_damping: f64,
    /// Active flag
    pub active: bool,
}

impl PhysicsComponent {
    /// Create a component bound to a transform
    pub fn new(kind: BodyKind, transform: TransformHandle) -> Self {
        Self {
            transform,
            collider: None,
            kind,
            velocity: Vector2::zeros(),
            angular_velocity: 0.0,
            mass: 1.0,
            friction: 0.5,
            restitution: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            active: true,
        }
    }

    /// Handle of the transform this body moves
    pub fn transform(&self) -> TransformHandle {
        self.transform
    }

    /// Re-link to another transform
    pub fn set_transform(&mut self, transform: TransformHandle) {
        self.transform = transform;
    }

    /// Entity whose collider follows this body
    pub fn collider(&self) -> Option<Entity> {
        self.collider
    }

    /// Link the collider owned by `entity`
    pub fn link_collider(&mut self, entity: Entity) {
        self.collider = Some(entity);
    }

    /// Drop the collider link, returning the previous one
    pub fn unlink_collider(&mut self) -> Option<Entity> {
        self.collider.take()
    }

    /// Builder pattern: set mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Builder pattern: set damping
    pub fn with_damping(mut self, linear: f64, angular: f64) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    fn check_transform(&self, hierarchy: &TransformHierarchy) -> Result<(), ComponentError> {
        if hierarchy.contains(self.transform) {
            Ok(())
        } else {
            Err(ComponentError::MissingTransform)
        }
    }

    /// Activate the component; the transform must exist
    pub fn start(&mut self, hierarchy: &TransformHierarchy) -> Result<(), ComponentError> {
        self.check_transform(hierarchy)?;
        self.active = true;
        Ok(())
    }

    /// Integrate one tick into the linked transform
    pub fn update(&mut self, hierarchy: &mut TransformHierarchy, dt: f64) -> Result<(), ComponentError> {
        if !self.active {
            return Ok(());
        }
        let transform = hierarchy
            .get_mut(self.transform)
            .ok_or(ComponentError::MissingTransform)?;

        if self.kind == BodyKind::Static {
            self.velocity = Vector2::zeros();
            self.angular_velocity = 0.0;
            return Ok(());
        }

        if self.linear_damping > 0.0 {
            self.velocity *= (1.0 - self.linear_damping * dt).max(0.0);
        }
        if self.angular_damping > 0.0 {
            self.angular_velocity *= (1.0 - self.angular_damping * dt).max(0.0);
        }

        transform.translate_vector(&(self.velocity * dt));
        if self.angular_velocity != 0.0 {
            transform.rotate(self.angular_velocity * dt);
        }
        Ok(())
    }

    /// Apply an instantaneous force (`v += f / m`)
    ///
    /// Static bodies ignore forces; a zero mass adds nothing.
    pub fn add_force(&mut self, force: &Vector2) {
        if self.kind == BodyKind::Static {
            return;
        }
        self.velocity += force.divide(self.mass);
    }

    /// Apply an instantaneous torque
    pub fn add_torque(&mut self, torque: f64) {
        if self.kind == BodyKind::Static || self.mass == 0.0 {
            return;
        }
        self.angular_velocity += torque / self.mass;
    }

    /// Set linear velocity; ignored by static bodies
    pub fn set_velocity(&mut self, velocity: Vector2) {
        if self.kind != BodyKind::Static {
            self.velocity = velocity;
        }
    }

    /// Set angular velocity; ignored by static bodies
    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        if self.kind != BodyKind::Static {
            self.angular_velocity = angular_velocity;
        }
    }

    /// Place `collider` at the world pose of the linked transform
    ///
    /// Run after [`PhysicsComponent::update`] so the collider tests against
    /// this tick's position.
    pub fn sync_collider(&self, hierarchy: &TransformHierarchy, collider: &mut Collider) -> Result<(), ComponentError> {
        let pose = hierarchy
            .world_pose(self.transform)
            .map_err(|_| ComponentError::MissingTransform)?;
        collider.set_pose(pose.position, pose.rotation);
        Ok(())
    }

    /// Stop the body and release its collider link
    pub fn destroy(&mut self) {
        self.velocity = Vector2::zeros();
        self.angular_velocity = 0.0;
        self.active = false;
        self.collider = None;
    }

    /// Stop the body and reset its transform to the identity pose
    pub fn reset(&mut self, hierarchy: &mut TransformHierarchy) -> Result<(), ComponentError> {
        self.velocity = Vector2::zeros();
        self.angular_velocity = 0.0;
        hierarchy
            .get_mut(self.transform)
            .ok_or(ComponentError::MissingTransform)?
            .reset();
        Ok(())
    }

    /// Copy of the physics state bound to another transform, without a
    /// collider link
    pub fn clone_detached(&self, transform: TransformHandle) -> Self {
        Self {
            transform,
            collider: None,
            ..self.clone()
        }
    }
}

impl Persistent for PhysicsComponent {
    type State = PhysicsState;

    fn state(&self) -> PhysicsState {
        PhysicsState {
            kind: self.kind,
            velocity: self.velocity,
            angular_velocity: self.angular_velocity,
            mass: self.mass,
            friction: self.friction,
            restitution: self.restitution,
            linear_damping: self.linear_damping,
            angular_damping: self.angular_damping,
            active: self.active,
        }
    }

    fn apply_state(&mut self, state: PhysicsState) {
        self.kind = state.kind;
        self.velocity = state.velocity;
        self.angular_velocity = state.angular_velocity;
        self.mass = state.mass;
        self.friction = state.friction;
        self.restitution = state.restitution;
        self.linear_damping = state.linear_damping;
        self.angular_damping = state.angular_damping;
        self.active = state.active;
    }
}
