//! Narrow-phase collision detection
//!
//! [`check_collision`] is a pure function over two [`CollisionBody`] values:
//! layer eligibility first, then exact shape tests in world space. It keeps
//! no state between calls. [`CollisionTracker`] is the stateful part that
//! turns per-tick results into enter/exit sets.

use super::collider::Collidable;
use super::collision::{Contact, Shape};
use crate::config::SpatialConfig;
use crate::ecs::Entity;
use crate::foundation::math::Point;
use std::collections::HashSet;

/// Collision errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// A body was handed to the detector without a collider
    #[error("collision body {0} has no collider")]
    MissingCollider(Entity),

    /// The collider is registered to another entity than the body
    #[error("collision body {body} carries the collider of {owner}")]
    EntityMismatch {
        /// Entity of the body
        body: Entity,
        /// Entity recorded on the collider
        owner: Entity,
    },
}

/// A collidable entity for one query
///
/// A collider without an entity can back any body. One registered through
/// [`Collider::with_entity`](super::Collider::with_entity) must be paired
/// with a body of that same entity, otherwise every query on the body fails
/// with [`CollisionError::EntityMismatch`].
#[derive(Debug, Clone, Copy)]
pub struct CollisionBody<'a> {
    /// Owning entity
    pub entity: Entity,
    /// World position the collider's shapes are shifted by
    pub position: Point,
    /// Collider, if the entity has one
    pub collider: Option<&'a dyn Collidable>,
}

impl<'a> CollisionBody<'a> {
    /// Create a body; a missing or foreign collider is rejected up front
    pub fn new(
        entity: Entity,
        position: Point,
        collider: Option<&'a dyn Collidable>,
    ) -> Result<Self, CollisionError> {
        let body = Self {
            entity,
            position,
            collider,
        };
        body.require_collider()?;
        Ok(body)
    }

    /// Create a body from a collider reference, checked when queried
    pub fn with_collider(entity: Entity, position: Point, collider: &'a dyn Collidable) -> Self {
        Self {
            entity,
            position,
            collider: Some(collider),
        }
    }

    fn require_collider(&self) -> Result<&'a dyn Collidable, CollisionError> {
        let collider = self.collider.ok_or(CollisionError::MissingCollider(self.entity))?;
        match collider.collider().entity {
            Some(owner) if owner != self.entity => Err(CollisionError::EntityMismatch {
                body: self.entity,
                owner,
            }),
            _ => Ok(collider),
        }
    }

    /// Collider shapes shifted by the body position
    pub fn world_shapes(&self) -> Result<Vec<Shape>, CollisionError> {
        let offset = self.position.coords;
        Ok(self
            .require_collider()?
            .world_space_shapes()
            .into_iter()
            .map(|shape| shape.translated(&offset))
            .collect())
    }
}

/// Result of a positive narrow-phase check
#[derive(Debug, Clone, Copy)]
pub struct CollisionData<'a> {
    /// First entity
    pub entity_a: Entity,
    /// Second entity
    pub entity_b: Entity,
    /// First collider
    pub collider_a: &'a dyn Collidable,
    /// Second collider
    pub collider_b: &'a dyn Collidable,
    /// True if either collider is a trigger
    pub is_trigger: bool,
    /// Contact details, for shape pairs that produce them
    pub contact: Option<Contact>,
}

impl CollisionData<'_> {
    /// Ordered entity pair
    pub fn pair(&self) -> CollisionPair {
        CollisionPair::new(self.entity_a, self.entity_b)
    }
}

/// Test two bodies for collision
///
/// Layer mismatch and disjoint shapes are `Ok(None)`. A body without a
/// collider is an error.
pub fn check_collision<'a>(
    a: &CollisionBody<'a>,
    b: &CollisionBody<'a>,
    config: &SpatialConfig,
) -> Result<Option<CollisionData<'a>>, CollisionError> {
    let collider_a = a.require_collider()?;
    let collider_b = b.require_collider()?;

    if !collider_a
        .collider()
        .can_collide_with_filter(collider_b.collider(), config.layer_filter)
    {
        return Ok(None);
    }

    let shapes_a = a.world_shapes()?;
    let shapes_b = b.world_shapes()?;

    // Keep scanning after a hit only while looking for a pair with a contact
    let mut hit = false;
    let mut contact = None;
    'pairs: for shape_a in &shapes_a {
        for shape_b in shapes_b.iter().filter(|shape_b| shape_a.intersects(shape_b)) {
            hit = true;
            if !config.compute_contacts {
                break 'pairs;
            }
            contact = shape_a.contact(shape_b);
            if contact.is_some() {
                break 'pairs;
            }
        }
    }

    if !hit {
        return Ok(None);
    }

    log::trace!("{} collides with {}", a.entity, b.entity);
    Ok(Some(CollisionData {
        entity_a: a.entity,
        entity_b: b.entity,
        collider_a,
        collider_b,
        is_trigger: collider_a.collider().is_trigger || collider_b.collider().is_trigger,
        contact,
    }))
}

/// Check every pair of bodies once
///
/// A pair that fails is logged and skipped; the pass continues.
pub fn detect_collisions<'a>(bodies: &[CollisionBody<'a>], config: &SpatialConfig) -> Vec<CollisionData<'a>> {
    let mut collisions = Vec::new();
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            match check_collision(a, b, config) {
                Ok(Some(data)) => collisions.push(data),
                Ok(None) => {}
                Err(err) => log::warn!("skipping pair ({}, {}): {err}", a.entity, b.entity),
            }
        }
    }
    collisions
}

/// Collision pair representing two entities that are colliding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollisionPair {
    /// Entity with the smaller id
    pub entity_a: Entity,
    /// Entity with the larger id
    pub entity_b: Entity,
}

impl CollisionPair {
    /// Create a new collision pair (always stores smaller entity ID first for consistency)
    pub fn new(entity_a: Entity, entity_b: Entity) -> Self {
        if entity_a <= entity_b {
            Self { entity_a, entity_b }
        } else {
            Self {
                entity_a: entity_b,
                entity_b: entity_a,
            }
        }
    }

    /// Whether the pair involves `entity`
    pub fn contains(&self, entity: Entity) -> bool {
        self.entity_a == entity || self.entity_b == entity
    }
}

/// Tracks which pairs started and stopped colliding between ticks
#[derive(Debug, Default, Clone)]
pub struct CollisionTracker {
    current_pairs: HashSet<CollisionPair>,
    previous_pairs: HashSet<CollisionPair>,
}

impl CollisionTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's collisions
    pub fn update(&mut self, collisions: &[CollisionData<'_>]) {
        std::mem::swap(&mut self.current_pairs, &mut self.previous_pairs);
        self.current_pairs.clear();
        self.current_pairs
            .extend(collisions.iter().map(CollisionData::pair));
    }

    /// Pairs colliding now but not last tick, sorted
    pub fn entered(&self) -> Vec<CollisionPair> {
        let mut pairs: Vec<_> = self
            .current_pairs
            .difference(&self.previous_pairs)
            .copied()
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Pairs colliding last tick but not now, sorted
    pub fn exited(&self) -> Vec<CollisionPair> {
        let mut pairs: Vec<_> = self
            .previous_pairs
            .difference(&self.current_pairs)
            .copied()
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// All pairs colliding this tick
    pub fn current(&self) -> &HashSet<CollisionPair> {
        &self.current_pairs
    }

    /// Whether two entities collide this tick
    pub fn is_colliding(&self, a: Entity, b: Entity) -> bool {
        self.current_pairs.contains(&CollisionPair::new(a, b))
    }

    /// Forget all pairs
    pub fn clear(&mut self) {
        self.current_pairs.clear();
        self.previous_pairs.clear();
    }
}
