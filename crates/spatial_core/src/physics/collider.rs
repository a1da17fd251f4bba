//! Colliders: shapes plus placement and layer filtering
//!
//! A [`Collider`] keeps its shapes in local space together with its own
//! position and rotation. World-space copies are built on request and never
//! written back, so one collider can be queried any number of times per tick.

use super::collision::{Bounds, Shape};
use super::collision_layers::{CollisionLayers, LayerFilter, LayerMask};
use crate::ecs::Entity;
use crate::foundation::math::{rotate_point, Point, Vector2};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Anything the narrow phase can test
///
/// Implemented by [`Collider`] and
/// [`CompositeCollider`](super::composite::CompositeCollider).
pub trait Collidable: fmt::Debug + Send + Sync {
    /// Flags, masks and placement
    fn collider(&self) -> &Collider;

    /// Shapes placed in the collider's world space
    fn world_space_shapes(&self) -> Vec<Shape>;

    /// Union of the world-space bounds
    fn bounds(&self) -> Bounds {
        union_bounds(&self.world_space_shapes(), self.collider().position)
    }
}

/// Union of shape bounds, or a zero-extent box at `fallback` with no shapes
pub(crate) fn union_bounds(shapes: &[Shape], fallback: Point) -> Bounds {
    shapes
        .iter()
        .map(Shape::bounds)
        .reduce(|acc, bounds| acc.union(&bounds))
        .unwrap_or_else(|| Bounds::from_point(fallback))
}

/// Collider attached to one entity
#[derive(Debug, Clone)]
pub struct Collider {
    /// Shapes in local space
    pub shapes: Vec<Shape>,

    /// World position of the collider origin
    pub position: Point,

    /// World rotation in radians
    pub rotation: f64,

    /// Layers this collider occupies
    pub layer_mask: LayerMask,

    /// Layers this collider is willing to collide with
    pub match_mask: LayerMask,

    /// Report overlaps without physical response
    pub is_trigger: bool,

    /// Disabled colliders never collide
    pub enabled: bool,

    /// Optional label for quick identification
    pub tag: Option<String>,

    /// Owning entity, if registered
    pub entity: Option<Entity>,

    /// Opaque data for the host
    pub user_data: Option<Arc<dyn Any + Send + Sync>>,
}

impl Default for Collider {
    fn default() -> Self {
        Self::with_shapes(Vec::new())
    }
}

impl Collider {
    /// Create an enabled collider with one shape and empty masks
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self::with_shapes(vec![shape.into()])
    }

    /// Create an enabled collider with several shapes
    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            position: Point::origin(),
            rotation: 0.0,
            layer_mask: LayerMask::empty(),
            match_mask: LayerMask::empty(),
            is_trigger: false,
            enabled: true,
            tag: None,
            entity: None,
            user_data: None,
        }
    }

    /// Builder pattern: set layer and match masks
    pub fn with_layers(mut self, layer_mask: impl Into<LayerMask>, match_mask: impl Into<LayerMask>) -> Self {
        self.layer_mask = layer_mask.into();
        self.match_mask = match_mask.into();
        self
    }

    /// Mark this as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Builder pattern: set the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Builder pattern: set the owning entity
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Builder pattern: attach host data
    pub fn with_user_data(mut self, data: Arc<dyn Any + Send + Sync>) -> Self {
        self.user_data = Some(data);
        self
    }

    /// Builder pattern: place the collider
    pub fn at(mut self, position: Point, rotation: f64) -> Self {
        self.set_pose(position, rotation);
        self
    }

    /// Move and turn the collider
    pub fn set_pose(&mut self, position: Point, rotation: f64) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Host data downcast to a concrete type
    pub fn user_data<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.user_data.as_deref().and_then(|data| data.downcast_ref())
    }

    /// Eligibility under the default [`LayerFilter::Either`] rule
    pub fn can_collide_with(&self, other: &Collider) -> bool {
        self.can_collide_with_filter(other, LayerFilter::default())
    }

    /// Both enabled and the masks agree under `filter`
    pub fn can_collide_with_filter(&self, other: &Collider, filter: LayerFilter) -> bool {
        if !self.enabled || !other.enabled {
            return false;
        }
        CollisionLayers::should_collide(
            self.layer_mask,
            self.match_mask,
            other.layer_mask,
            other.match_mask,
            filter,
        )
    }

    /// Shapes placed by the collider's rotation then position
    ///
    /// Each local center is rotated about the collider origin; rectangles
    /// and lines also turn by the same angle.
    pub fn world_space_shapes(&self) -> Vec<Shape> {
        self.shapes
            .iter()
            .map(|shape| place_shape(shape, self.position, Vector2::zeros(), self.rotation))
            .collect()
    }

    /// Union of the world-space bounds
    pub fn bounds(&self) -> Bounds {
        union_bounds(&self.world_space_shapes(), self.position)
    }
}

/// Place a local shape at `origin + pivot + R(angle)·center`, turning its
/// geometry by the same angle
pub(crate) fn place_shape(shape: &Shape, origin: Point, pivot: Vector2, angle: f64) -> Shape {
    let center = origin + pivot + rotate_point(&shape.center(), angle).coords;
    shape.with_center(center).rotated_by(angle)
}

impl Collidable for Collider {
    fn collider(&self) -> &Collider {
        self
    }

    fn world_space_shapes(&self) -> Vec<Shape> {
        Collider::world_space_shapes(self)
    }
}
