//! Composite colliders: one rigid body made of named parts
//!
//! Each [`BodyPart`] carries a shape in part-local space, an offset from the
//! body origin and its own rotation. Placement composes two rotations:
//!
//! - the body rotation turns the offset to find the part's pivot;
//! - body rotation plus part rotation turns the shape's local center and
//!   orients its geometry.
//!
//! Both are then shifted by the body position.

use super::collider::{place_shape, union_bounds, Collidable, Collider};
use super::collision::{Bounds, Shape};
use super::collision_layers::LayerMask;
use crate::foundation::math::{Point, Vector2, Vector2Ext};
use std::collections::BTreeMap;

/// Composite collider errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColliderError {
    /// No body part has the given name
    #[error("body part '{0}' not found")]
    UnknownBodyPart(String),
}

/// One named piece of a composite body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    /// Shape relative to the part pivot
    pub local_shape: Shape,
    /// Offset of the pivot from the body origin
    pub local_offset: Vector2,
    /// Rotation relative to the body
    pub local_rotation: f64,
}

impl BodyPart {
    /// Create a body part
    pub fn new(local_shape: impl Into<Shape>, local_offset: Vector2, local_rotation: f64) -> Self {
        Self {
            local_shape: local_shape.into(),
            local_offset,
            local_rotation,
        }
    }
}

/// Rigid assembly of named shapes
#[derive(Debug, Clone, Default)]
pub struct CompositeCollider {
    base: Collider,
    parts: BTreeMap<String, BodyPart>,
}

impl CompositeCollider {
    /// Create an enabled composite with no parts
    pub fn new(position: Point, rotation: f64) -> Self {
        Self {
            base: Collider::default().at(position, rotation),
            parts: BTreeMap::new(),
        }
    }

    /// Builder pattern: set layer and match masks
    pub fn with_layers(mut self, layer_mask: impl Into<LayerMask>, match_mask: impl Into<LayerMask>) -> Self {
        self.base = self.base.with_layers(layer_mask, match_mask);
        self
    }

    /// Builder pattern: add a part
    pub fn with_body_part(mut self, name: impl Into<String>, part: BodyPart) -> Self {
        self.parts.insert(name.into(), part);
        self
    }

    /// Mutable access to flags, masks and placement
    pub fn collider_mut(&mut self) -> &mut Collider {
        &mut self.base
    }

    /// Move and turn the whole body
    pub fn set_pose(&mut self, position: Point, rotation: f64) {
        self.base.set_pose(position, rotation);
    }

    /// Add or replace a part, returning the previous one with that name
    pub fn add_body_part(&mut self, name: impl Into<String>, part: BodyPart) -> Option<BodyPart> {
        self.parts.insert(name.into(), part)
    }

    /// Remove a part by name
    pub fn remove_body_part(&mut self, name: &str) -> Option<BodyPart> {
        self.parts.remove(name)
    }

    /// Look up a part by name
    pub fn body_part(&self, name: &str) -> Option<&BodyPart> {
        self.parts.get(name)
    }

    /// Parts in name order
    pub fn body_parts(&self) -> impl Iterator<Item = (&str, &BodyPart)> {
        self.parts.iter().map(|(name, part)| (name.as_str(), part))
    }

    /// Number of parts
    pub fn body_part_count(&self) -> usize {
        self.parts.len()
    }

    /// Change a part's offset and/or rotation
    pub fn update_body_part(
        &mut self,
        name: &str,
        offset: Option<Vector2>,
        rotation: Option<f64>,
    ) -> Result<(), ColliderError> {
        let part = self
            .parts
            .get_mut(name)
            .ok_or_else(|| ColliderError::UnknownBodyPart(name.to_owned()))?;
        if let Some(offset) = offset {
            part.local_offset = offset;
        }
        if let Some(rotation) = rotation {
            part.local_rotation = rotation;
        }
        Ok(())
    }

    /// Every part placed in world space, in name order
    pub fn world_space_shapes(&self) -> Vec<Shape> {
        let origin = self.base.position;
        let rotation = self.base.rotation;
        self.parts
            .values()
            .map(|part| {
                let pivot = part.local_offset.rotated(rotation);
                place_shape(&part.local_shape, origin, pivot, rotation + part.local_rotation)
            })
            .collect()
    }

    /// Union of the parts' world bounds; zero extent at the origin with no parts
    pub fn bounds(&self) -> Bounds {
        union_bounds(&self.world_space_shapes(), self.base.position)
    }
}

impl Collidable for CompositeCollider {
    fn collider(&self) -> &Collider {
        &self.base
    }

    fn world_space_shapes(&self) -> Vec<Shape> {
        CompositeCollider::world_space_shapes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use crate::foundation::math::{point, vector};
    use crate::physics::collision::{Circle, Rectangle};
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-9;

    fn two_armed(rotation: f64) -> CompositeCollider {
        CompositeCollider::new(point(0.0, 0.0), rotation)
            .with_body_part("left", BodyPart::new(Circle::new(point(0.0, 0.0), 1.0), vector(-5.0, 0.0), 0.0))
            .with_body_part("right", BodyPart::new(Circle::new(point(0.0, 0.0), 1.0), vector(5.0, 0.0), 0.0))
    }

    #[test]
    fn test_rotated_parts_follow_parent() {
        let composite = two_armed(HALF_PI);
        let shapes = composite.world_space_shapes();
        assert_eq!(shapes.len(), 2);
        // BTreeMap order: "left" then "right"
        assert_relative_eq!(shapes[0].center(), point(0.0, -5.0), epsilon = TOLERANCE);
        assert_relative_eq!(shapes[1].center(), point(0.0, 5.0), epsilon = TOLERANCE);

        let bounds = composite.bounds();
        assert_relative_eq!(bounds.min_x, -1.0, epsilon = TOLERANCE);
        assert_relative_eq!(bounds.max_x, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(bounds.min_y, -6.0, epsilon = TOLERANCE);
        assert_relative_eq!(bounds.max_y, 6.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_part_matches_single_collider_formula() {
        // A part with no offset or own rotation lands where a plain collider would
        let shape = Rectangle::new(point(2.0, 1.0), 2.0, 1.0);
        let composite = CompositeCollider::new(point(3.0, -1.0), 0.8)
            .with_body_part("hull", BodyPart::new(shape, Vector2::zeros(), 0.0));
        let single = Collider::new(shape).at(point(3.0, -1.0), 0.8);
        assert_eq!(composite.world_space_shapes(), single.world_space_shapes());
    }

    #[test]
    fn test_local_rotation_orients_part_geometry() {
        let composite = CompositeCollider::new(point(10.0, 0.0), HALF_PI).with_body_part(
            "wing",
            BodyPart::new(Rectangle::new(point(1.0, 0.0), 2.0, 0.5), vector(2.0, 0.0), HALF_PI),
        );
        let shapes = composite.world_space_shapes();
        // pivot: R(90°)·(2,0) = (0,2); center: R(180°)·(1,0) = (-1,0)
        assert_relative_eq!(shapes[0].center(), point(9.0, 2.0), epsilon = TOLERANCE);
        assert_relative_eq!(shapes[0].rotation().unwrap_or_default(), 2.0 * HALF_PI, epsilon = TOLERANCE);
    }

    #[test]
    fn test_empty_composite_bounds_at_position() {
        let composite = CompositeCollider::new(point(7.0, 3.0), 1.0);
        assert_eq!(composite.bounds(), Bounds::from_point(point(7.0, 3.0)));
        assert!(composite.world_space_shapes().is_empty());
    }

    #[test]
    fn test_body_part_crud() {
        let mut composite = two_armed(0.0);
        assert_eq!(composite.body_part_count(), 2);

        let replaced = composite.add_body_part(
            "left",
            BodyPart::new(Circle::new(point(0.0, 0.0), 2.0), vector(-4.0, 0.0), 0.0),
        );
        assert!(replaced.is_some());
        assert_eq!(composite.body_part_count(), 2);

        composite
            .update_body_part("left", Some(vector(-6.0, 1.0)), None)
            .unwrap();
        let part = composite.body_part("left").unwrap();
        assert_eq!(part.local_offset, vector(-6.0, 1.0));
        assert_eq!(part.local_rotation, 0.0);

        composite.update_body_part("right", None, Some(0.5)).unwrap();
        assert_eq!(composite.body_part("right").map(|p| p.local_rotation), Some(0.5));

        assert!(composite.remove_body_part("right").is_some());
        assert!(composite.remove_body_part("right").is_none());
        assert_eq!(composite.body_parts().map(|(name, _)| name).collect::<Vec<_>>(), vec!["left"]);
    }

    #[test]
    fn test_updating_missing_part_is_an_error() {
        let mut composite = two_armed(0.0);
        let err = composite.update_body_part("tail", Some(vector(1.0, 1.0)), None);
        assert_eq!(err, Err(ColliderError::UnknownBodyPart("tail".to_owned())));
        assert_eq!(err.unwrap_err().to_string(), "body part 'tail' not found");
    }

    #[test]
    fn test_local_shapes_untouched_by_placement() {
        let composite = two_armed(HALF_PI);
        let _ = composite.world_space_shapes();
        let part = composite.body_part("left").unwrap();
        assert_eq!(part.local_shape.center(), point(0.0, 0.0));
    }
}
