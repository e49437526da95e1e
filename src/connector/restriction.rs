//! The restriction contract a connector is routed against
//!
//! A restriction is a snapshot of everything the router needs to know about
//! one connecting line: where it starts and ends, which side of each element
//! it attaches to, and the segment preferences left behind by the last
//! manual adjustment.

use super::segment::SegmentPreference;
use super::shape::ConnectorShape;
use super::types::{BoundingBox, Point, Side};

/// Input to the connector shapes
pub trait Restriction {
    fn start_point(&self) -> Point;

    fn end_point(&self) -> Point;

    fn start_side(&self) -> Side;

    fn end_side(&self) -> Side;

    /// The user's last accepted route, if any
    fn segment_preferences(&self) -> Option<&[SegmentPreference]>;

    /// Outline of an element the line would cross at `point`
    ///
    /// None of the shipped shapes consult this; it exists so a router can
    /// additionally reshape a route around elements.
    fn obstacle_at(&self, _point: Point) -> Option<BoundingBox> {
        None
    }
}

/// Owned restriction state for one connecting line
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorRestriction {
    pub start: Point,
    pub end: Point,
    pub start_side: Side,
    pub end_side: Side,
    pub preferences: Option<Vec<SegmentPreference>>,
    pub obstacles: Vec<BoundingBox>,
}

impl ConnectorRestriction {
    pub fn new(start: Point, start_side: Side, end: Point, end_side: Side) -> Self {
        Self {
            start,
            end,
            start_side,
            end_side,
            preferences: None,
            obstacles: vec![],
        }
    }

    /// A line between two free points: leaves eastward, arrives from the west
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start, Side::East, end, Side::West)
    }

    /// Attach both ends to element boxes, each on the side facing the other box
    pub fn attach(from: &BoundingBox, to: &BoundingBox) -> Self {
        let start_side = Side::facing(to.center(), from);
        let end_side = Side::facing(from.center(), to);
        Self::new(
            from.attachment_point(start_side),
            start_side,
            to.attachment_point(end_side),
            end_side,
        )
    }

    pub fn with_preferences(mut self, preferences: Vec<SegmentPreference>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn with_obstacles(mut self, obstacles: Vec<BoundingBox>) -> Self {
        self.obstacles = obstacles;
        self
    }

    pub fn move_start(&mut self, start: Point) {
        self.start = start;
    }

    pub fn move_end(&mut self, end: Point) {
        self.end = end;
    }

    /// Drag the handle at `index` by `delta`, storing the resulting preferences
    ///
    /// Returns whether a preference list survived the drag.
    pub fn drag_handle<S: ConnectorShape + ?Sized>(
        &mut self,
        shape: &S,
        index: usize,
        delta: Point,
    ) -> bool {
        self.preferences = super::handles::drag_handle(shape, &*self, index, delta);
        self.preferences.is_some()
    }
}

impl Restriction for ConnectorRestriction {
    fn start_point(&self) -> Point {
        self.start
    }

    fn end_point(&self) -> Point {
        self.end
    }

    fn start_side(&self) -> Side {
        self.start_side
    }

    fn end_side(&self) -> Side {
        self.end_side
    }

    fn segment_preferences(&self) -> Option<&[SegmentPreference]> {
        self.preferences.as_deref()
    }

    fn obstacle_at(&self, point: Point) -> Option<BoundingBox> {
        self.obstacles.iter().copied().find(|b| b.contains(point))
    }
}

/// A restriction seen with a different preference list
pub struct WithPreferences<'a> {
    inner: &'a dyn Restriction,
    preferences: Option<&'a [SegmentPreference]>,
}

impl<'a> WithPreferences<'a> {
    pub fn new(inner: &'a dyn Restriction, preferences: Option<&'a [SegmentPreference]>) -> Self {
        Self { inner, preferences }
    }
}

impl Restriction for WithPreferences<'_> {
    fn start_point(&self) -> Point {
        self.inner.start_point()
    }

    fn end_point(&self) -> Point {
        self.inner.end_point()
    }

    fn start_side(&self) -> Side {
        self.inner.start_side()
    }

    fn end_side(&self) -> Side {
        self.inner.end_side()
    }

    fn segment_preferences(&self) -> Option<&[SegmentPreference]> {
        self.preferences
    }

    fn obstacle_at(&self, point: Point) -> Option<BoundingBox> {
        self.inner.obstacle_at(point)
    }
}
