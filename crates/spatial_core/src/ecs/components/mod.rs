//! ECS components module
//!
//! Plain data components the host attaches to entities.

pub mod physics;
pub mod transform;

pub use physics::{BodyKind, PhysicsComponent, PhysicsState};
pub use transform::TransformComponent;
