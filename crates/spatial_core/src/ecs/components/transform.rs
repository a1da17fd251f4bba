//! Transform component
//!
//! Position, rotation and uniform scale of one entity plus the pose it had
//! at the start of the current tick. Parent/child links are not stored here;
//! they live in [`TransformHierarchy`](crate::ecs::TransformHierarchy),
//! which owns the transforms in an arena.
//!
//! Rotation is in radians, counter-clockwise, and kept in `[0, 2π)` by
//! every mutator.

use crate::ecs::component::Persistent;
use crate::foundation::math::{
    distance,
    utils::{deg_to_rad, lerp, normalize_angle, rad_to_deg, shortest_arc},
    Point, Pose, Vector2,
};
use serde::{Deserialize, Serialize};

/// 2D transform component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformComponent {
    /// Current position (local to the parent, if any)
    pub position: Point,

    /// Current rotation in radians
    rotation: f64,

    /// Uniform scale factor
    pub scale: f64,

    /// Position snapshotted by the last [`TransformComponent::update`]
    pub previous_position: Point,

    /// Rotation snapshotted by the last [`TransformComponent::update`]
    previous_rotation: f64,

    /// Whether the component participates in updates
    pub active: bool,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self::new(Point::origin(), 0.0, 1.0)
    }
}

impl TransformComponent {
    /// Create a transform; the previous pose starts equal to the current one
    pub fn new(position: Point, rotation: f64, scale: f64) -> Self {
        let rotation = normalize_angle(rotation);
        Self {
            position,
            rotation,
            scale,
            previous_position: position,
            previous_rotation: rotation,
            active: true,
        }
    }

    /// Create an unrotated, unit-scale transform at `position`
    pub fn from_position(position: Point) -> Self {
        Self::new(position, 0.0, 1.0)
    }

    /// Current pose as a value
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation, self.scale)
    }

    /// Set the position directly
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    /// Move by a delta
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Move by a vector
    pub fn translate_vector(&mut self, offset: &Vector2) {
        self.position += offset;
    }

    /// Movement since the last snapshot
    pub fn displacement(&self) -> Vector2 {
        self.position - self.previous_position
    }

    /// Distance between the two transforms' positions
    pub fn distance_to(&self, other: &TransformComponent) -> f64 {
        distance(&self.position, &other.position)
    }

    /// Current rotation in radians, in `[0, 2π)`
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotation at the last snapshot, in `[0, 2π)`
    pub fn previous_rotation(&self) -> f64 {
        self.previous_rotation
    }

    /// Set the rotation in radians
    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation = normalize_angle(radians);
    }

    /// Add to the rotation
    pub fn rotate(&mut self, radians: f64) {
        self.rotation = normalize_angle(self.rotation + radians);
    }

    /// Set the rotation in degrees
    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.set_rotation(deg_to_rad(degrees));
    }

    /// Rotation in degrees
    pub fn rotation_degrees(&self) -> f64 {
        rad_to_deg(self.rotation)
    }

    /// Face a target point
    pub fn look_at(&mut self, target: &Point) {
        let to_target = target - self.position;
        self.set_rotation(to_target.y.atan2(to_target.x));
    }

    /// Set the uniform scale factor
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Multiply the scale factor
    pub fn scale_by(&mut self, factor: f64) {
        self.scale *= factor;
    }

    /// Facing direction from the local rotation
    pub fn forward(&self) -> Vector2 {
        Vector2::new(self.rotation.cos(), self.rotation.sin())
    }

    /// Direction 90° clockwise of forward
    pub fn right(&self) -> Vector2 {
        Vector2::new(self.rotation.sin(), -self.rotation.cos())
    }

    /// Direction 90° counter-clockwise of forward
    pub fn up(&self) -> Vector2 {
        Vector2::new(-self.rotation.sin(), self.rotation.cos())
    }

    /// Local point to parent space (scale → rotation → translation)
    pub fn local_to_world(&self, local: &Point) -> Point {
        self.pose().transform_point(local)
    }

    /// Inverse of [`TransformComponent::local_to_world`]
    pub fn world_to_local(&self, world: &Point) -> Point {
        self.pose().inverse_transform_point(world)
    }

    /// Snapshot the current pose as the previous one
    ///
    /// Must run for every transform before anything moves this tick.
    pub fn update(&mut self, _dt: f64) {
        self.previous_position = self.position;
        self.previous_rotation = self.rotation;
    }

    /// Position between the previous snapshot (`alpha = 0`) and now (`alpha = 1`)
    pub fn lerp(&self, alpha: f64) -> Point {
        Point::new(
            lerp(self.previous_position.x, self.position.x, alpha),
            lerp(self.previous_position.y, self.position.y, alpha),
        )
    }

    /// Rotation interpolated along the shortest arc
    pub fn lerp_rotation(&self, alpha: f64) -> f64 {
        let diff = shortest_arc(self.previous_rotation, self.rotation);
        normalize_angle(self.previous_rotation + diff * alpha)
    }

    /// Back to the identity pose
    pub fn reset(&mut self) {
        *self = Self {
            active: self.active,
            ..Self::default()
        };
    }

    /// Copy of the spatial state with no hierarchy links
    pub fn clone_detached(&self) -> Self {
        self.clone()
    }
}

impl Persistent for TransformComponent {
    type State = TransformComponent;

    fn state(&self) -> Self::State {
        self.clone()
    }

    fn apply_state(&mut self, state: Self::State) {
        *self = state;
        self.rotation = normalize_angle(self.rotation);
        self.previous_rotation = normalize_angle(self.previous_rotation);
    }
}
