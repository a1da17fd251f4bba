//! Geometric primitives for 2D collision detection
//!
//! Every predicate here is closed: shapes that only touch are reported as
//! intersecting, and a shape on the boundary of another is contained.

use crate::foundation::math::{distance, Point, Rotation2, Vector2, Vector2Ext, EPSILON};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from its extremes
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Zero-extent bounds located at a single point
    pub fn from_point(point: Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    /// Smallest bounds enclosing every point, `None` for an empty set
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |acc, p| acc.union(&Self::from_point(p))))
    }

    /// Width along X
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along Y
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }

    /// Closed-interval overlap test; touching edges intersect
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    /// Check whether a point lies inside or on the bounds
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// Bounds enclosing both
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Axis-aligned rectangle covering the same area
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(self.center(), self.width(), self.height())
    }
}

/// A circle given by center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center position
    pub center: Point,
    /// Radius (non-negative)
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle with the given center and radius
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Axis-aligned bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Point within the radius (edge included)
    pub fn contains_point(&self, point: &Point) -> bool {
        distance(&self.center, point) <= self.radius
    }

    /// Check if this circle intersects with another
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        distance(&self.center, &other.center) <= self.radius + other.radius
    }

    /// Distance from the center to the segment, not the infinite line
    pub fn intersects_line(&self, line: &Line) -> bool {
        line.distance_to_point(&self.center) <= self.radius
    }

    /// Delegates to the rectangle's local-frame test
    pub fn intersects_rectangle(&self, rect: &Rectangle) -> bool {
        rect.intersects_circle(self)
    }

    /// Other circle fully inside this one
    pub fn contains_circle(&self, other: &Circle) -> bool {
        distance(&self.center, &other.center) + other.radius <= self.radius
    }

    /// Both endpoints within the radius
    pub fn contains_line(&self, line: &Line) -> bool {
        self.contains_point(&line.start) && self.contains_point(&line.end)
    }

    /// All four corners within the radius
    pub fn contains_rectangle(&self, rect: &Rectangle) -> bool {
        rect.corners().iter().all(|corner| self.contains_point(corner))
    }

    /// Get the penetration depth if intersecting (0.0 if not intersecting)
    pub fn penetration_depth(&self, other: &Circle) -> f64 {
        let overlap = self.radius + other.radius - distance(&self.center, &other.center);
        overlap.max(0.0)
    }
}

/// A rectangle given by center, size and orientation
///
/// `rotation` is zero for the axis-aligned case. A rotated rectangle is an
/// oriented box: predicates map the other shape into the rectangle's local
/// frame, where the axis-aligned formulas apply unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Center position
    pub center: Point,
    /// Extent along the local X axis
    pub width: f64,
    /// Extent along the local Y axis
    pub height: f64,
    /// Orientation in radians, counter-clockwise
    #[serde(default)]
    pub rotation: f64,
}

impl Rectangle {
    /// Creates an axis-aligned rectangle
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Builder pattern: Set orientation
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Half width and half height
    pub fn half_extents(&self) -> Vector2 {
        Vector2::new(self.width.abs() * 0.5, self.height.abs() * 0.5)
    }

    fn is_axis_aligned(&self) -> bool {
        self.rotation == 0.0
    }

    /// Express a world point relative to the center, in the rectangle's axes
    pub fn to_local(&self, point: &Point) -> Vector2 {
        let offset = point - self.center;
        if self.is_axis_aligned() {
            offset
        } else {
            offset.rotated(-self.rotation)
        }
    }

    /// Map a local offset back into world space
    pub fn to_world(&self, local: &Vector2) -> Point {
        if self.is_axis_aligned() {
            self.center + local
        } else {
            self.center + local.rotated(self.rotation)
        }
    }

    /// Corners in counter-clockwise order starting bottom-left (local frame)
    pub fn corners(&self) -> [Point; 4] {
        let half = self.half_extents();
        [
            self.to_world(&Vector2::new(-half.x, -half.y)),
            self.to_world(&Vector2::new(half.x, -half.y)),
            self.to_world(&Vector2::new(half.x, half.y)),
            self.to_world(&Vector2::new(-half.x, half.y)),
        ]
    }

    /// The rectangle's local X and Y axes in world space
    pub fn axes(&self) -> [Vector2; 2] {
        let rotation = Rotation2::new(self.rotation);
        [rotation * Vector2::x(), rotation * Vector2::y()]
    }

    /// Axis-aligned bounds (of the rotated corners when oriented)
    pub fn bounds(&self) -> Bounds {
        if self.is_axis_aligned() {
            let half = self.half_extents();
            return Bounds::new(
                self.center.x - half.x,
                self.center.y - half.y,
                self.center.x + half.x,
                self.center.y + half.y,
            );
        }
        let [a, b, c, d] = self.corners();
        Bounds::from_point(a)
            .union(&Bounds::from_point(b))
            .union(&Bounds::from_point(c))
            .union(&Bounds::from_point(d))
    }

    fn contains_local(&self, local: &Vector2) -> bool {
        let half = self.half_extents();
        let slack = if self.is_axis_aligned() { 0.0 } else { EPSILON };
        local.x.abs() <= half.x + slack && local.y.abs() <= half.y + slack
    }

    /// Point inside or on the edge
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains_local(&self.to_local(point))
    }

    /// Separating axis test over both rectangles' axes
    pub fn intersects_rectangle(&self, other: &Rectangle) -> bool {
        if self.is_axis_aligned() && other.is_axis_aligned() {
            return self.bounds().intersects(&other.bounds());
        }

        fn project(rect: &Rectangle, axis: &Vector2) -> (f64, f64) {
            rect.corners()
                .iter()
                .map(|corner| corner.coords.dot(axis))
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| (min.min(p), max.max(p)))
        }

        fn intervals_overlap(min1: f64, max1: f64, min2: f64, max2: f64) -> bool {
            max1 + EPSILON >= min2 && max2 + EPSILON >= min1
        }

        // Any axis without overlap separates the two boxes
        self.axes().iter().chain(other.axes().iter()).all(|axis| {
            let (min1, max1) = project(self, axis);
            let (min2, max2) = project(other, axis);
            intervals_overlap(min1, max1, min2, max2)
        })
    }

    /// Every corner of `other` inside or on this rectangle
    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        if self.is_axis_aligned() && other.is_axis_aligned() {
            let outer = self.bounds();
            let inner = other.bounds();
            return inner.min_x >= outer.min_x
                && inner.max_x <= outer.max_x
                && inner.min_y >= outer.min_y
                && inner.max_y <= outer.max_y;
        }
        other.corners().iter().all(|corner| self.contains_point(corner))
    }

    /// Closest point on (or in) the rectangle to `point`, in local coordinates
    fn clamp_local(&self, local: &Vector2) -> Vector2 {
        let half = self.half_extents();
        Vector2::new(local.x.clamp(-half.x, half.x), local.y.clamp(-half.y, half.y))
    }

    /// Closest point on (or in) the rectangle to `point`
    pub fn closest_point(&self, point: &Point) -> Point {
        self.to_world(&self.clamp_local(&self.to_local(point)))
    }

    /// Clamp the circle center to the rectangle and compare with the radius
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        let local = self.to_local(&circle.center);
        let clamped = self.clamp_local(&local);
        (local - clamped).length() <= circle.radius
    }

    /// Circle fully inside, with radius clearance on both axes
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        let local = self.to_local(&circle.center);
        let half = self.half_extents();
        local.x.abs() + circle.radius <= half.x && local.y.abs() + circle.radius <= half.y
    }

    /// Segment against box, clipped in the rectangle's local frame
    ///
    /// Liang-Barsky: the segment parameter range [0, 1] is narrowed by each
    /// slab; an empty range means the segment misses.
    pub fn intersects_line(&self, line: &Line) -> bool {
        let half = self.half_extents();
        let start = self.to_local(&line.start);
        let end = self.to_local(&line.end);
        let delta = end - start;

        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;
        let slabs = [
            (-delta.x, start.x + half.x),
            (delta.x, half.x - start.x),
            (-delta.y, start.y + half.y),
            (delta.y, half.y - start.y),
        ];

        for (p, q) in slabs {
            if p == 0.0 {
                // Parallel to this slab: outside means no hit at all
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t_exit {
                    return false;
                }
                t_enter = t_enter.max(r);
            } else {
                if r < t_enter {
                    return false;
                }
                t_exit = t_exit.min(r);
            }
        }
        true
    }

    /// Both endpoints inside or on the rectangle
    pub fn contains_line(&self, line: &Line) -> bool {
        self.contains_point(&line.start) && self.contains_point(&line.end)
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// First endpoint
    pub start: Point,
    /// Second endpoint
    pub end: Point,
}

impl Line {
    /// Creates a segment from `start` to `end`
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Midpoint of the segment
    pub fn center(&self) -> Point {
        nalgebra::center(&self.start, &self.end)
    }

    /// Move the segment so its midpoint lands on `center`
    pub fn set_center(&mut self, center: Point) {
        let delta = center - self.center();
        self.start += delta;
        self.end += delta;
    }

    /// Returns the direction vector of the segment (from start to end)
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Calculates the length of the segment
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Direction angle in radians (0 for a zero-length segment)
    pub fn angle(&self) -> f64 {
        let direction = self.direction();
        if direction == Vector2::zeros() {
            0.0
        } else {
            direction.y.atan2(direction.x)
        }
    }

    /// Axis-aligned bounds of the endpoints
    pub fn bounds(&self) -> Bounds {
        Bounds::from_point(self.start).union(&Bounds::from_point(self.end))
    }

    /// Finds the point on the segment closest to a given point
    pub fn closest_point(&self, point: &Point) -> Point {
        let segment = self.direction();
        let length_sq = segment.norm_squared();
        if length_sq == 0.0 {
            return self.start;
        }
        let t = ((point - self.start).dot(&segment) / length_sq).clamp(0.0, 1.0);
        self.start + segment * t
    }

    /// Distance from a point to the segment
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        distance(&self.closest_point(point), point)
    }

    /// Point on the segment within [`EPSILON`], parameter range included
    pub fn contains_point(&self, point: &Point) -> bool {
        self.distance_to_point(point) <= EPSILON
    }

    /// Crossing, touching or collinear-overlapping segments
    pub fn intersects_line(&self, other: &Line) -> bool {
        let d1 = self.direction();
        let d2 = other.direction();
        let o1 = d1.perp_dot(&(other.start - self.start));
        let o2 = d1.perp_dot(&(other.end - self.start));
        let o3 = d2.perp_dot(&(self.start - other.start));
        let o4 = d2.perp_dot(&(self.end - other.start));

        // Proper crossing: each segment straddles the other
        if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
            return true;
        }

        self.contains_point(&other.start)
            || self.contains_point(&other.end)
            || other.contains_point(&self.start)
            || other.contains_point(&self.end)
    }

    /// Collinear, with both endpoints of `other` inside this segment
    pub fn contains_line(&self, other: &Line) -> bool {
        self.contains_point(&other.start) && self.contains_point(&other.end)
    }

    /// Delegates to the circle's segment-distance test
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        circle.intersects_line(self)
    }

    /// Delegates to the rectangle's clipping test
    pub fn intersects_rectangle(&self, rect: &Rectangle) -> bool {
        rect.intersects_line(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::{HALF_PI, PI};
    use crate::foundation::math::point;
    use approx::assert_relative_eq;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(point(x, y), r)
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::new(point(x, y), w, h)
    }

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(point(x1, y1), point(x2, y2))
    }

    #[test]
    fn test_bounds_touching_edges_intersect() {
        let a = Bounds::new(0.0, 0.0, 2.0, 2.0);
        let b = Bounds::new(2.0, 0.0, 4.0, 2.0);
        let c = Bounds::new(2.1, 0.0, 4.0, 2.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_bounds_union_and_from_points() {
        let union = Bounds::new(0.0, 0.0, 1.0, 1.0).union(&Bounds::new(-2.0, 0.5, 0.5, 3.0));
        assert_eq!(union, Bounds::new(-2.0, 0.0, 1.0, 3.0));

        assert!(Bounds::from_points(Vec::new()).is_none());
        let from_points = Bounds::from_points([point(1.0, 5.0), point(-1.0, 2.0)]);
        assert_eq!(from_points, Some(Bounds::new(-1.0, 2.0, 1.0, 5.0)));
    }

    #[test]
    fn test_bounds_to_rectangle_covers_same_area() {
        let bounds = Bounds::new(-1.0, 2.0, 3.0, 4.0);
        let rectangle = bounds.to_rectangle();
        assert_eq!(rectangle, rect(1.0, 3.0, 4.0, 2.0));
        assert_eq!(rectangle.bounds(), bounds);
    }

    #[test]
    fn test_rectangle_closest_point() {
        let r = rect(0.0, 0.0, 4.0, 2.0);
        assert_eq!(r.closest_point(&point(5.0, 0.0)), point(2.0, 0.0));
        assert_eq!(r.closest_point(&point(-3.0, 4.0)), point(-2.0, 1.0));
        // Points inside map to themselves
        assert_eq!(r.closest_point(&point(0.5, -0.5)), point(0.5, -0.5));

        let turned = r.with_rotation(HALF_PI);
        assert_relative_eq!(turned.closest_point(&point(0.0, 5.0)), point(0.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn test_circle_circle() {
        // Overlapping, touching, separated
        assert!(circle(0.0, 0.0, 5.0).intersects_circle(&circle(3.0, 0.0, 5.0)));
        assert!(circle(0.0, 0.0, 5.0).intersects_circle(&circle(10.0, 0.0, 5.0)));
        assert!(!circle(0.0, 0.0, 5.0).intersects_circle(&circle(20.0, 0.0, 5.0)));
    }

    #[test]
    fn test_circle_point() {
        let c = circle(0.0, 0.0, 5.0);
        assert!(c.contains_point(&point(0.0, 0.0)));
        assert!(c.contains_point(&point(5.0, 0.0)));
        assert!(!c.contains_point(&point(10.0, 10.0)));
        assert!(circle(5.0, 5.0, 10.0).contains_point(&point(7.0, 7.0)));
    }

    #[test]
    fn test_circle_line_uses_segment_distance() {
        let c = circle(0.0, 0.0, 5.0);
        assert!(c.intersects_line(&line(-10.0, 0.0, 10.0, 0.0)));
        assert!(c.intersects_line(&line(-10.0, 5.0, 10.0, 5.0)));
        assert!(!c.intersects_line(&line(-10.0, 10.0, 10.0, 10.0)));
        assert!(c.intersects_line(&line(0.0, 0.0, 10.0, 10.0)));
        assert!(circle(0.0, 0.0, 10.0).intersects_line(&line(1.0, 1.0, 2.0, 2.0)));

        // The infinite line passes through the circle, the segment does not
        assert!(!c.intersects_line(&line(10.0, 0.0, 20.0, 0.0)));
        // Endpoint exactly on the circle
        assert!(c.intersects_line(&line(5.0, 0.0, 20.0, 0.0)));
    }

    #[test]
    fn test_circle_contains_line() {
        assert!(circle(0.0, 0.0, 10.0).contains_line(&line(1.0, 1.0, 2.0, 2.0)));
        assert!(!circle(0.0, 0.0, 5.0).contains_line(&line(0.0, 0.0, 10.0, 0.0)));
        assert!(!circle(0.0, 0.0, 5.0).contains_line(&line(10.0, 10.0, 20.0, 20.0)));
        assert!(circle(0.0, 0.0, 5.0).contains_line(&line(5.0, 0.0, 0.0, 5.0)));
    }

    #[test]
    fn test_circle_contains_shapes() {
        let big = circle(0.0, 0.0, 10.0);
        assert!(big.contains_circle(&circle(2.0, 0.0, 8.0)));
        assert!(!big.contains_circle(&circle(2.0, 0.0, 8.5)));
        assert!(big.contains_circle(&big));
        assert!(big.contains_rectangle(&rect(0.0, 0.0, 4.0, 4.0)));
        assert!(!big.contains_rectangle(&rect(0.0, 0.0, 16.0, 16.0)));
    }

    #[test]
    fn test_circle_rectangle() {
        assert!(circle(0.0, 0.0, 5.0).intersects_rectangle(&rect(3.0, 0.0, 4.0, 4.0)));
        assert!(!circle(0.0, 0.0, 2.0).intersects_rectangle(&rect(10.0, 10.0, 4.0, 4.0)));
        // Near a corner: bounds overlap, geometry does not
        assert!(!circle(0.0, 0.0, 1.0).intersects_rectangle(&rect(1.8, 1.8, 2.0, 2.0)));
        // Touching an edge
        assert!(circle(0.0, 0.0, 1.0).intersects_rectangle(&rect(2.0, 0.0, 2.0, 2.0)));
    }

    #[test]
    fn test_rectangle_intersects_detailed() {
        let cases = [
            (rect(0.0, 0.0, 4.0, 2.0), rect(0.0, 5.0, 4.0, 2.0), false),
            (rect(0.0, 0.0, 2.0, 4.0), rect(5.0, 0.0, 2.0, 4.0), false),
            (rect(0.0, 10.0, 2.0, 2.0), rect(0.0, 0.0, 2.0, 20.0), true),
            (rect(0.0, 0.0, 2.0, 10.0), rect(0.0, 4.0, 6.0, 2.0), true),
            (rect(0.0, 0.0, 10.0, 10.0), rect(0.0, 3.0, 2.0, 2.0), true),
            // Touching edges and corners count
            (rect(0.0, 0.0, 2.0, 2.0), rect(2.0, 0.0, 2.0, 2.0), true),
            (rect(0.0, 0.0, 2.0, 2.0), rect(2.0, 2.0, 2.0, 2.0), true),
        ];

        for (a, b, expected) in cases {
            assert_eq!(a.intersects_rectangle(&b), expected, "{a:?} vs {b:?}");
            assert_eq!(b.intersects_rectangle(&a), expected, "{b:?} vs {a:?}");
        }
    }

    #[test]
    fn test_rotated_rectangle_sat() {
        // A diamond whose bounds overlap the square but whose edges do not
        let diamond = rect(3.3, 3.3, 2.0, 2.0).with_rotation(PI / 4.0);
        let square = rect(0.0, 0.0, 4.0, 4.0);
        assert!(diamond.bounds().intersects(&square.bounds()));
        assert!(!diamond.intersects_rectangle(&square));
        assert!(!square.intersects_rectangle(&diamond));

        let closer = rect(2.5, 2.5, 2.0, 2.0).with_rotation(PI / 4.0);
        assert!(closer.intersects_rectangle(&square));
    }

    #[test]
    fn test_rectangle_contains() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_rectangle(&rect(0.0, 3.0, 2.0, 2.0)));
        assert!(outer.contains_rectangle(&rect(4.0, 4.0, 2.0, 2.0)));
        assert!(!outer.contains_rectangle(&rect(4.5, 0.0, 2.0, 2.0)));
        assert!(outer.contains_rectangle(&outer));

        assert!(outer.contains_circle(&circle(0.0, 0.0, 5.0)));
        assert!(!outer.contains_circle(&circle(1.0, 0.0, 5.0)));
        assert!(outer.contains_line(&line(-5.0, -5.0, 5.0, 5.0)));
        assert!(!outer.contains_line(&line(-5.0, -5.0, 6.0, 5.0)));
        assert!(outer.contains_point(&point(5.0, -5.0)));
    }

    #[test]
    fn test_rotated_rectangle_reflexive_containment() {
        let tilted = rect(1.0, -2.0, 3.0, 1.5).with_rotation(0.6);
        assert!(tilted.contains_rectangle(&tilted));
    }

    #[test]
    fn test_rectangle_line() {
        let r = rect(0.0, 0.0, 4.0, 4.0);
        assert!(r.intersects_line(&line(-10.0, 0.0, 10.0, 0.0)));
        assert!(!r.intersects_line(&line(10.0, 10.0, 20.0, 20.0)));
        assert!(r.intersects_line(&line(0.0, 0.0, 10.0, 10.0)));
        // Grazing the top edge
        assert!(r.intersects_line(&line(-10.0, 2.0, 10.0, 2.0)));
        // Diagonal that misses the corner
        assert!(!r.intersects_line(&line(1.0, 5.0, 5.0, 1.0)));
        // Degenerate segment inside and outside
        assert!(r.intersects_line(&line(1.0, 1.0, 1.0, 1.0)));
        assert!(!r.intersects_line(&line(3.0, 3.0, 3.0, 3.0)));
    }

    #[test]
    fn test_rotated_rectangle_line() {
        // Square rotated 45°: its corner reaches x = sqrt(2)
        let diamond = rect(0.0, 0.0, 2.0, 2.0).with_rotation(PI / 4.0);
        assert!(diamond.intersects_line(&line(1.4, -5.0, 1.4, 5.0)));
        assert!(!diamond.intersects_line(&line(1.5, -5.0, 1.5, 5.0)));
    }

    #[test]
    fn test_line_basics() {
        let l = line(0.0, 0.0, 10.0, 10.0);
        assert_eq!(l.center(), point(5.0, 5.0));
        assert_eq!(line(-10.0, -10.0, 10.0, 10.0).center(), point(0.0, 0.0));
        assert_relative_eq!(line(0.0, 0.0, 0.0, 10.0).angle(), HALF_PI);
        assert_eq!(line(1.0, 1.0, 1.0, 1.0).angle(), 0.0);

        let mut moved = l;
        moved.set_center(point(0.0, 0.0));
        assert_eq!(moved, line(-5.0, -5.0, 5.0, 5.0));
    }

    #[test]
    fn test_line_point() {
        let l = line(0.0, 0.0, 10.0, 0.0);
        assert!(l.contains_point(&point(5.0, 0.0)));
        assert!(l.contains_point(&point(0.0, 0.0)));
        assert!(l.contains_point(&point(10.0, 0.0)));
        // Collinear but beyond the parameter range
        assert!(!l.contains_point(&point(10.5, 0.0)));
        assert!(!l.contains_point(&point(5.0, 0.1)));

        let degenerate = line(2.0, 2.0, 2.0, 2.0);
        assert!(degenerate.contains_point(&point(2.0, 2.0)));
        assert!(!degenerate.contains_point(&point(2.0, 3.0)));
        assert_relative_eq!(degenerate.distance_to_point(&point(2.0, 3.0)), 1.0);
    }

    #[test]
    fn test_line_line() {
        assert!(line(-1.0, 0.0, 1.0, 0.0).intersects_line(&line(0.0, -1.0, 0.0, 1.0)));
        assert!(!line(0.0, 0.0, 1.0, 0.0).intersects_line(&line(0.0, 1.0, 1.0, 1.0)));
        // T-junction touch
        assert!(line(-1.0, 0.0, 1.0, 0.0).intersects_line(&line(0.0, 0.0, 0.0, 1.0)));
        // Collinear overlap and collinear gap
        assert!(line(0.0, 0.0, 5.0, 0.0).intersects_line(&line(3.0, 0.0, 8.0, 0.0)));
        assert!(!line(0.0, 0.0, 5.0, 0.0).intersects_line(&line(6.0, 0.0, 8.0, 0.0)));
    }

    #[test]
    fn test_line_contains_line() {
        let l = line(0.0, 0.0, 10.0, 10.0);
        assert!(l.contains_line(&line(2.0, 2.0, 4.0, 4.0)));
        assert!(l.contains_line(&l));
        assert!(!l.contains_line(&line(2.0, 2.0, 12.0, 12.0)));
        assert!(!l.contains_line(&line(2.0, 2.5, 4.0, 4.0)));
    }

    #[test]
    fn test_degenerate_shapes_stay_finite() {
        let dot = circle(1.0, 1.0, 0.0);
        assert!(dot.contains_point(&point(1.0, 1.0)));
        assert!(dot.intersects_circle(&circle(1.0, 1.0, 0.0)));
        assert_eq!(dot.penetration_depth(&circle(5.0, 5.0, 0.0)), 0.0);

        let flat = rect(0.0, 0.0, 0.0, 0.0);
        assert!(flat.contains_point(&point(0.0, 0.0)));
        assert!(flat.intersects_circle(&circle(0.0, 1.0, 1.0)));
        assert!(flat.intersects_line(&line(-1.0, 0.0, 1.0, 0.0)));
        assert_eq!(flat.bounds(), Bounds::from_point(point(0.0, 0.0)));
    }
}
