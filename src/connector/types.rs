//! Core geometric types for connector routing

use serde::Deserialize;

/// A 2D point in drawing space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new(
            self.x + (other.x - self.x) / 2.0,
            self.y + (other.y - self.y) / 2.0,
        )
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move this point along an axis by a signed distance
    pub fn moved(&self, axis: Axis, length: f64) -> Point {
        match axis {
            Axis::Horizontal => Point::new(self.x + length, self.y),
            Axis::Vertical => Point::new(self.x, self.y + length),
        }
    }

    /// Coordinate of this point on the given axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// This point with its coordinate on `axis` replaced by `value`
    pub fn with_coordinate(&self, axis: Axis, value: f64) -> Point {
        match axis {
            Axis::Horizontal => Point::new(value, self.y),
            Axis::Vertical => Point::new(self.x, value),
        }
    }

    /// Both coordinates within `tolerance` of `other`
    pub fn approx_eq(&self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Direction a segment runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn opposite(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Compass edge of an element's box that a line end attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// All sides in lookup-table order
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Position of this side in lookup-table order (N, E, S, W)
    pub fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::East => 1,
            Side::South => 2,
            Side::West => 3,
        }
    }

    /// Axis of a stub leaving this side
    pub fn axis(self) -> Axis {
        match self {
            Side::East | Side::West => Axis::Horizontal,
            Side::North | Side::South => Axis::Vertical,
        }
    }

    /// Outward direction of a stub leaving this side: +1 for East/South, -1 for North/West
    pub fn direction(self) -> f64 {
        match self {
            Side::East | Side::South => 1.0,
            Side::North | Side::West => -1.0,
        }
    }

    /// The side of `bounds` that faces `point`
    ///
    /// The dominant component of the offset from the box center decides:
    /// horizontal offsets win only when strictly larger than vertical ones.
    pub fn facing(point: Point, bounds: &BoundingBox) -> Side {
        let center = bounds.center();
        let rel_x = point.x - center.x;
        let rel_y = point.y - center.y;
        if rel_x.abs() > rel_y.abs() {
            if rel_x > 0.0 {
                Side::East
            } else {
                Side::West
            }
        } else if rel_y > 0.0 {
            Side::South
        } else {
            Side::North
        }
    }
}

/// A bounding box representing the spatial extent of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Zero-sized box located at a point
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Middle of the given side, where a connector attaches
    pub fn attachment_point(&self, side: Side) -> Point {
        match side {
            Side::North => Point::new(self.x + self.width / 2.0, self.y),
            Side::South => Point::new(self.x + self.width / 2.0, self.bottom()),
            Side::West => Point::new(self.x, self.y + self.height / 2.0),
            Side::East => Point::new(self.right(), self.y + self.height / 2.0),
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_coordinate_keeps_the_other_axis() {
        let p = Point::new(0.1, 0.2);
        assert_eq!(p.with_coordinate(Axis::Horizontal, 20.1), Point::new(20.1, 0.2));
        assert_eq!(p.with_coordinate(Axis::Vertical, -50.7), Point::new(0.1, -50.7));
    }

    #[test]
    fn test_approx_eq() {
        let p = Point::new(100.3, -50.7);
        assert!(p.approx_eq(Point::new(100.3 + 1e-12, -50.7), 1e-9));
        assert!(!p.approx_eq(Point::new(100.3, -50.6), 1e-9));
    }

    #[test]
    fn test_attachment_point_north() {
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let point = bounds.attachment_point(Side::North);
        assert_eq!(point, Point::new(50.0, 0.0));
    }

    #[test]
    fn test_attachment_point_south() {
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(bounds.attachment_point(Side::South), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_attachment_point_east_west() {
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(bounds.attachment_point(Side::East), Point::new(100.0, 25.0));
        assert_eq!(bounds.attachment_point(Side::West), Point::new(0.0, 25.0));
    }

    #[test]
    fn test_side_facing() {
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(Side::facing(Point::new(200.0, 60.0), &bounds), Side::East);
        assert_eq!(Side::facing(Point::new(-80.0, 40.0), &bounds), Side::West);
        assert_eq!(Side::facing(Point::new(50.0, 300.0), &bounds), Side::South);
        assert_eq!(Side::facing(Point::new(60.0, -10.0), &bounds), Side::North);
    }

    #[test]
    fn test_side_facing_diagonal_prefers_vertical() {
        // Equal offsets are not strictly horizontal
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(Side::facing(Point::new(15.0, 15.0), &bounds), Side::South);
        assert_eq!(Side::facing(Point::new(15.0, -5.0), &bounds), Side::North);
    }

    #[test]
    fn test_side_axis_and_direction() {
        assert_eq!(Side::East.axis(), Axis::Horizontal);
        assert_eq!(Side::North.axis(), Axis::Vertical);
        assert_eq!(Side::South.direction(), 1.0);
        assert_eq!(Side::West.direction(), -1.0);
    }

    #[test]
    fn test_point_moved() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p.moved(Axis::Horizontal, -3.0), Point::new(-2.0, 2.0));
        assert_eq!(p.moved(Axis::Vertical, 4.0), Point::new(1.0, 6.0));
    }

    #[test]
    fn test_union_and_expand() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, -5.0, 5.0, 5.0);
        assert_eq!(a.union(&b), BoundingBox::new(0.0, -5.0, 25.0, 15.0));
        let c = a.expand_to_include(Point::new(-4.0, 12.0));
        assert_eq!(c, BoundingBox::new(-4.0, 0.0, 14.0, 12.0));
    }
}
