//! Segments: the straight pieces a connector path is made of

use serde::Deserialize;

use super::types::{Axis, Point};

/// One straight piece of a connector path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Horizontal when the x-coordinates differ, vertical otherwise
    pub fn axis(&self) -> Axis {
        if self.start.x != self.end.x {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Signed extent along [`Segment::axis`]
    pub fn length(&self) -> f64 {
        match self.axis() {
            Axis::Horizontal => self.end.x - self.start.x,
            Axis::Vertical => self.end.y - self.start.y,
        }
    }

    /// Euclidean length, also correct for diagonal segments
    pub fn extent(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// True when start and end differ in at most one coordinate
    pub fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// Point at `t` (0..1) between start and end
    pub fn lerp(&self, t: f64) -> Point {
        Point::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }

    /// Parameter (0..1) of the point on this segment closest to `point`
    pub fn project(&self, point: Point) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return 0.0;
        }
        let t = ((point.x - self.start.x) * dx + (point.y - self.start.y) * dy) / len_sq;
        t.clamp(0.0, 1.0)
    }

    /// Distance from `point` to the closest point of this segment
    pub fn distance_to(&self, point: Point) -> f64 {
        self.lerp(self.project(point)).distance_to(point)
    }

    /// Move the start toward the end by `gap`, never past the end
    pub fn trim_start(&self, gap: f64) -> Segment {
        let extent = self.extent();
        if extent == 0.0 || gap <= 0.0 {
            return *self;
        }
        Segment::new(self.lerp((gap / extent).min(1.0)), self.end)
    }

    /// Move the end toward the start by `gap`, never past the start
    pub fn trim_end(&self, gap: f64) -> Segment {
        let extent = self.extent();
        if extent == 0.0 || gap <= 0.0 {
            return *self;
        }
        Segment::new(self.start, self.lerp(1.0 - (gap / extent).min(1.0)))
    }

    pub fn to_preference(&self) -> SegmentPreference {
        SegmentPreference::new(self.axis(), self.length())
    }
}

/// A persisted (axis, length) move that lets a manually adjusted route
/// survive recomputation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SegmentPreference {
    pub axis: Axis,
    pub length: f64,
}

impl SegmentPreference {
    pub fn new(axis: Axis, length: f64) -> Self {
        Self { axis, length }
    }
}

/// Convert a routed path into the preference list that reproduces it
pub fn to_preferences(segments: &[Segment]) -> Vec<SegmentPreference> {
    segments.iter().map(Segment::to_preference).collect()
}

/// Replay a preference list from `start`, one segment per preference
pub fn replay(start: Point, preferences: &[SegmentPreference]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(preferences.len());
    let mut moving = start;
    for pref in preferences {
        let next = moving.moved(pref.axis, pref.length);
        segments.push(Segment::new(moving, next));
        moving = next;
    }
    segments
}

/// Cut `start_gap` off the first segment and `end_gap` off the last one
pub fn trim_path(segments: &mut [Segment], start_gap: f64, end_gap: f64) {
    if let Some(first) = segments.first_mut() {
        *first = first.trim_start(start_gap);
    }
    if let Some(last) = segments.last_mut() {
        *last = last.trim_end(end_gap);
    }
}

/// Check that consecutive segments share endpoints and the path runs from
/// `start` to `end`
pub fn is_contiguous(segments: &[Segment], start: Point, end: Point) -> bool {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return false;
    };
    first.start == start
        && last.end == end
        && segments.windows(2).all(|pair| pair[0].end == pair[1].start)
}
