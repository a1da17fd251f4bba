//! Math utilities and types
//!
//! Provides the 2D math types used by the geometry and transform code.
//! Points and vectors are nalgebra types in double precision; the guarded
//! operations the collision code depends on live in [`Vector2Ext`].

use serde::{Deserialize, Serialize};

pub use nalgebra::Rotation2;

/// 2D point type (absolute or local position)
pub type Point = nalgebra::Point2<f64>;

/// 2D vector type (displacement, velocity, offset)
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance used by geometric predicates that cannot be exact
pub const EPSILON: f64 = 1e-9;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = std::f64::consts::TAU;

    /// Pi / 2
    pub const HALF_PI: f64 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants::{DEG_TO_RAD, PI, RAD_TO_DEG, TAU};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * RAD_TO_DEG
    }

    /// Linear interpolation
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }

    /// Wrap an angle into `[0, 2π)`
    pub fn normalize_angle(angle: f64) -> f64 {
        let wrapped = angle.rem_euclid(TAU);
        // rem_euclid rounds tiny negative inputs up to exactly TAU
        if wrapped >= TAU {
            0.0
        } else {
            wrapped
        }
    }

    /// Signed angular difference from `from` to `to`, wrapped to `[-π, π]`
    pub fn shortest_arc(from: f64, to: f64) -> f64 {
        let diff = (to - from).rem_euclid(TAU);
        if diff > PI {
            diff - TAU
        } else {
            diff
        }
    }
}

/// Construct a point
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Construct a vector
pub fn vector(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

/// Euclidean distance between two points
pub fn distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(a, b)
}

/// Rotate a point about the origin
pub fn rotate_point(p: &Point, angle: f64) -> Point {
    Rotation2::new(angle) * p
}

/// Rotate a point about a pivot
pub fn rotate_point_about(p: &Point, pivot: &Point, angle: f64) -> Point {
    pivot + Rotation2::new(angle) * (p - pivot)
}

/// Extension trait for Vector2 with the guarded operations used by the
/// geometry code. None of these produce NaN for a zero input.
pub trait Vector2Ext {
    /// Vector length
    fn length(&self) -> f64;

    /// Unit vector in the same direction, or the zero vector when length is 0
    fn normalize_or_zero(&self) -> Vector2;

    /// Divide by a scalar; a zero divisor yields the zero vector
    fn divide(&self, scalar: f64) -> Vector2;

    /// Rotate counter-clockwise by `angle` radians
    fn rotated(&self, angle: f64) -> Vector2;

    /// Translate a point by this vector
    fn translate_point(&self, point: &Point) -> Point;

    /// 2D cross product (z component of the 3D cross product)
    fn perp_dot(&self, other: &Vector2) -> f64;
}

impl Vector2Ext for Vector2 {
    fn length(&self) -> f64 {
        self.norm()
    }

    fn normalize_or_zero(&self) -> Vector2 {
        let length = self.norm();
        if length == 0.0 {
            Vector2::zeros()
        } else {
            self / length
        }
    }

    fn divide(&self, scalar: f64) -> Vector2 {
        if scalar == 0.0 {
            Vector2::zeros()
        } else {
            self / scalar
        }
    }

    fn rotated(&self, angle: f64) -> Vector2 {
        Rotation2::new(angle) * self
    }

    fn translate_point(&self, point: &Point) -> Point {
        point + self
    }

    fn perp_dot(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

/// Position, rotation and uniform scale in 2D
///
/// Applied in scale → rotation → translation order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Translation
    pub position: Point,

    /// Rotation in radians, counter-clockwise
    pub rotation: f64,

    /// Uniform scale factor
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Point::origin(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Pose {
    /// Create a new pose
    pub fn new(position: Point, rotation: f64, scale: f64) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Identity pose
    pub fn identity() -> Self {
        Self::default()
    }

    /// Map a point from this pose's local space into the parent space
    pub fn transform_point(&self, local: &Point) -> Point {
        let scaled = local.coords * self.scale;
        self.position + Rotation2::new(self.rotation) * scaled
    }

    /// Exact inverse of [`Pose::transform_point`]
    ///
    /// A zero scale skips the division instead of producing infinities.
    pub fn inverse_transform_point(&self, world: &Point) -> Point {
        let unrotated = Rotation2::new(-self.rotation) * (world - self.position);
        if self.scale == 0.0 {
            Point::from(unrotated)
        } else {
            Point::from(unrotated / self.scale)
        }
    }

    /// Compose a child pose expressed in this pose's local space
    pub fn combine(&self, child: &Pose) -> Pose {
        Pose {
            position: self.transform_point(&child.position),
            rotation: utils::normalize_angle(self.rotation + child.rotation),
            scale: self.scale * child.scale,
        }
    }
}
