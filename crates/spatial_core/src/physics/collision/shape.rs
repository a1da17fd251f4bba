//! High-level collision shape abstraction
//!
//! Shapes are stored in local space on colliders and transformed to world
//! space on demand. Transforming never mutates the stored shape: every
//! placement method returns a new value, so the same local shape can be
//! queried from several colliders without aliasing.

use super::primitives::{Bounds, Circle, Line, Rectangle};
use crate::foundation::math::{
    rotate_point_about, utils::normalize_angle, Point, Vector2, Vector2Ext,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    /// Circle
    Circle,
    /// Rectangle (axis-aligned or oriented)
    Rectangle,
    /// Line segment
    Line,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Line => "Line",
        };
        f.write_str(name)
    }
}

/// Collision shape variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A circular collision shape
    Circle(Circle),
    /// A rectangular collision shape
    Rectangle(Rectangle),
    /// A line segment collision shape
    Line(Line),
}

/// Contact details for an intersecting pair
///
/// `normal` points from the first shape towards the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit direction from A to B
    pub normal: Vector2,
    /// Overlap depth along the normal
    pub penetration: f64,
    /// Representative contact point in world space
    pub point: Point,
}

impl Contact {
    fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl Shape {
    /// Creates a circle shape
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle(Circle::new(center, radius))
    }

    /// Creates an axis-aligned rectangle shape
    pub fn rectangle(center: Point, width: f64, height: f64) -> Self {
        Self::Rectangle(Rectangle::new(center, width, height))
    }

    /// Creates a line segment shape
    pub fn line(start: Point, end: Point) -> Self {
        Self::Line(Line::new(start, end))
    }

    /// Type tag of this shape
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Circle(_) => ShapeType::Circle,
            Self::Rectangle(_) => ShapeType::Rectangle,
            Self::Line(_) => ShapeType::Line,
        }
    }

    /// Center position (midpoint for lines)
    pub fn center(&self) -> Point {
        match self {
            Self::Circle(c) => c.center,
            Self::Rectangle(r) => r.center,
            Self::Line(l) => l.center(),
        }
    }

    /// Move the shape in place so its center lands on `center`
    pub fn set_center(&mut self, center: Point) {
        match self {
            Self::Circle(c) => c.center = center,
            Self::Rectangle(r) => r.center = center,
            Self::Line(l) => l.set_center(center),
        }
    }

    /// Copy of this shape centered on `center`
    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.set_center(center);
        self
    }

    /// Copy of this shape moved by `offset`
    #[must_use]
    pub fn translated(self, offset: &Vector2) -> Self {
        let center = offset.translate_point(&self.center());
        self.with_center(center)
    }

    /// Orientation, for variants that carry one
    ///
    /// Rectangles report their rotation, lines their direction angle, both
    /// in `[0, 2π)`. Circles are rotation-invariant and report `None`.
    pub fn rotation(&self) -> Option<f64> {
        match self {
            Self::Circle(_) => None,
            Self::Rectangle(r) => Some(r.rotation),
            Self::Line(l) => Some(normalize_angle(l.angle())),
        }
    }

    /// Copy of this shape turned by `angle` about its own center
    #[must_use]
    pub fn rotated_by(self, angle: f64) -> Self {
        match self {
            Self::Circle(_) => self,
            Self::Rectangle(r) => Self::Rectangle(r.with_rotation(normalize_angle(r.rotation + angle))),
            Self::Line(l) => {
                let pivot = l.center();
                Self::Line(Line::new(
                    rotate_point_about(&l.start, &pivot, angle),
                    rotate_point_about(&l.end, &pivot, angle),
                ))
            }
        }
    }

    /// Axis-aligned bounds
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Circle(c) => c.bounds(),
            Self::Rectangle(r) => r.bounds(),
            Self::Line(l) => l.bounds(),
        }
    }

    /// Check whether a point touches the shape
    pub fn intersects_point(&self, point: &Point) -> bool {
        self.contains_point(point)
    }

    /// Check whether a point lies inside or on the shape
    pub fn contains_point(&self, point: &Point) -> bool {
        match self {
            Self::Circle(c) => c.contains_point(point),
            Self::Rectangle(r) => r.contains_point(point),
            Self::Line(l) => l.contains_point(point),
        }
    }

    /// Test if this shape intersects with another shape
    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => a.intersects_circle(b),
            (Self::Circle(c), Self::Rectangle(r)) | (Self::Rectangle(r), Self::Circle(c)) => {
                r.intersects_circle(c)
            }
            (Self::Circle(c), Self::Line(l)) | (Self::Line(l), Self::Circle(c)) => c.intersects_line(l),
            (Self::Rectangle(a), Self::Rectangle(b)) => a.intersects_rectangle(b),
            (Self::Rectangle(r), Self::Line(l)) | (Self::Line(l), Self::Rectangle(r)) => {
                r.intersects_line(l)
            }
            (Self::Line(a), Self::Line(b)) => a.intersects_line(b),
        }
    }

    /// Test if `other` lies entirely inside this shape
    ///
    /// A line has no area and never contains a circle or rectangle.
    pub fn contains(&self, other: &Shape) -> bool {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => a.contains_circle(b),
            (Self::Circle(a), Self::Rectangle(b)) => a.contains_rectangle(b),
            (Self::Circle(a), Self::Line(b)) => a.contains_line(b),
            (Self::Rectangle(a), Self::Circle(b)) => a.contains_circle(b),
            (Self::Rectangle(a), Self::Rectangle(b)) => a.contains_rectangle(b),
            (Self::Rectangle(a), Self::Line(b)) => a.contains_line(b),
            (Self::Line(_), Self::Circle(_) | Self::Rectangle(_)) => false,
            (Self::Line(a), Self::Line(b)) => a.contains_line(b),
        }
    }

    /// Contact details for pairs that support them
    ///
    /// Only circle-circle and circle-rectangle produce a contact; every other
    /// pair, and any pair that does not intersect, returns `None`.
    pub fn contact(&self, other: &Shape) -> Option<Contact> {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => circle_circle_contact(a, b),
            (Self::Circle(c), Self::Rectangle(r)) => circle_rectangle_contact(c, r),
            (Self::Rectangle(r), Self::Circle(c)) => circle_rectangle_contact(c, r).map(Contact::flipped),
            _ => None,
        }
    }
}

fn circle_circle_contact(a: &Circle, b: &Circle) -> Option<Contact> {
    if !a.intersects_circle(b) {
        return None;
    }
    let offset = b.center - a.center;
    let distance = offset.length();
    // Coincident centers have no direction; pick +Y
    let normal = if distance == 0.0 { Vector2::y() } else { offset / distance };
    let penetration = a.radius + b.radius - distance;
    Some(Contact {
        normal,
        penetration,
        point: a.center + normal * (a.radius - penetration * 0.5),
    })
}

fn circle_rectangle_contact(circle: &Circle, rect: &Rectangle) -> Option<Contact> {
    if !rect.intersects_circle(circle) {
        return None;
    }
    let local = rect.to_local(&circle.center);
    let half = rect.half_extents();
    let clamped = Vector2::new(local.x.clamp(-half.x, half.x), local.y.clamp(-half.y, half.y));
    let to_surface = clamped - local;
    let distance = to_surface.length();

    if distance > 0.0 {
        // Center outside: the closest surface point is the contact
        let local_normal = to_surface / distance;
        return Some(Contact {
            normal: rect_axis_to_world(rect, &local_normal),
            penetration: circle.radius - distance,
            point: rect.to_world(&clamped),
        });
    }

    // Center inside: push out through the nearest face
    let gap_x = half.x - local.x.abs();
    let gap_y = half.y - local.y.abs();
    let (outward, face_point, gap) = if gap_x <= gap_y {
        let sign = if local.x < 0.0 { -1.0 } else { 1.0 };
        (Vector2::new(sign, 0.0), Vector2::new(sign * half.x, local.y), gap_x)
    } else {
        let sign = if local.y < 0.0 { -1.0 } else { 1.0 };
        (Vector2::new(0.0, sign), Vector2::new(local.x, sign * half.y), gap_y)
    };
    Some(Contact {
        normal: -rect_axis_to_world(rect, &outward),
        penetration: circle.radius + gap,
        point: rect.to_world(&face_point),
    })
}

fn rect_axis_to_world(rect: &Rectangle, local: &Vector2) -> Vector2 {
    if rect.rotation == 0.0 {
        *local
    } else {
        local.rotated(rect.rotation)
    }
}
