//! # Spatial Core
//!
//! 2D geometry, transform hierarchy and collision detection for a game
//! server's simulation tick.
//!
//! ## Features
//!
//! - **Shape Algebra**: exact intersection and containment between circles,
//!   rectangles (axis-aligned or oriented) and line segments
//! - **Transform Hierarchy**: arena-backed parent/child transforms with
//!   on-demand world poses and frame interpolation
//! - **Layer Filtering**: typed 32-bit layer and match masks
//! - **Colliders**: single and composite multi-part bodies
//! - **Narrow Phase**: pairwise collision checks with enter/exit tracking
//!
//! ## Quick Start
//!
//! ```rust
//! use spatial_core::prelude::*;
//!
//! let a = Collider::new(Circle::new(point(0.0, 0.0), 5.0)).with_layers(Layer::Player, Layer::Enemy);
//! let b = Collider::new(Circle::new(point(0.0, 0.0), 5.0)).with_layers(Layer::Enemy, Layer::Player);
//!
//! let body_a = CollisionBody::with_collider(Entity::new(1), point(0.0, 0.0), &a);
//! let body_b = CollisionBody::with_collider(Entity::new(2), point(3.0, 0.0), &b);
//!
//! let hit = check_collision(&body_a, &body_b, &SpatialConfig::default())?;
//! assert!(hit.is_some());
//! # Ok::<(), spatial_core::physics::CollisionError>(())
//! ```

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod physics;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SpatialConfig},
        ecs::{
            components::{BodyKind, PhysicsComponent, TransformComponent},
            Component, ComponentError, Entity, HierarchyError, Persistent, TransformHandle,
            TransformHierarchy,
        },
        foundation::math::{point, vector, Point, Pose, Vector2, Vector2Ext},
        physics::{
            check_collision, detect_collisions, BodyPart, Bounds, Circle, Collidable, Collider,
            ColliderError, CollisionBody, CollisionData, CollisionError, CollisionPair,
            CollisionTracker, CompositeCollider, Contact, Layer, LayerError, LayerFilter, LayerMask,
            Line, Rectangle, Shape, ShapeType,
        },
    };
}
