//! Points and segments on the square canvas

use serde::Serialize;

/// A position on the canvas in pixel units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate, growing to the right
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A straight connection between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start of the segment
    pub from: Point,
    /// End of the segment
    pub to: Point,
}

impl Segment {
    /// Create a segment between two points
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Shortest distance from `point` to any point on the segment
    ///
    /// Degenerate segments behave like a single point.
    pub fn distance_to(self, point: Point) -> f64 {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        let length_sq = dx.mul_add(dx, dy * dy);
        if length_sq == 0.0 {
            return self.from.distance(point);
        }

        let t = ((point.x - self.from.x).mul_add(dx, (point.y - self.from.y) * dy) / length_sq)
            .clamp(0.0, 1.0);
        let closest = Point::new(dx.mul_add(t, self.from.x), dy.mul_add(t, self.from.y));
        closest.distance(point)
    }

    /// Axis-aligned bounds `(min, max)` of the segment grown by `margin`
    pub fn bounds(self, margin: f64) -> (Point, Point) {
        (
            Point::new(
                self.from.x.min(self.to.x) - margin,
                self.from.y.min(self.to.y) - margin,
            ),
            Point::new(
                self.from.x.max(self.to.x) + margin,
                self.from.y.max(self.to.y) + margin,
            ),
        )
    }
}
