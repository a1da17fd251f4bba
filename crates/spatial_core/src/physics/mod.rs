//! Physics module for collision detection
//!
//! Shapes, colliders, layer filtering and the narrow-phase check that ties
//! them together.

pub mod collider;
pub mod collision;
pub mod collision_layers;
pub mod collision_system;
pub mod composite;

pub use collider::{Collidable, Collider};
pub use collision::{Bounds, Circle, Contact, Line, Rectangle, Shape, ShapeType};
pub use collision_layers::{CollisionLayers, Layer, LayerError, LayerFilter, LayerMask};
pub use collision_system::{
    check_collision, detect_collisions, CollisionBody, CollisionData, CollisionError, CollisionPair,
    CollisionTracker,
};
pub use composite::{BodyPart, ColliderError, CompositeCollider};
