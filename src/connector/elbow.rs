//! Orthogonal (elbow) connector routing
//!
//! An elbow connector leaves its start element with a fixed-length stub
//! perpendicular to the attachment side, arrives at its end element the same
//! way, and joins the two stubs with axis-aligned segments. How many turns it
//! takes depends only on the two attachment sides and on where the endpoints
//! lie relative to each other; that relation is a fixed lookup table.
//!
//! A stored preference list (the user's last manual adjustment) is replayed
//! instead whenever it still produces a path of the right shape that lands
//! on the end point. Lengths stored from fractional coordinates rarely add
//! back up bit for bit, so the replayed end only has to come within
//! [`REPLAY_TOLERANCE`] of the real one and is then pinned onto it.

use log::{debug, trace};

use super::config::RoutingConfig;
use super::path::ShapePath;
use super::restriction::Restriction;
use super::segment::{replay, Segment};
use super::shape::{ConnectorShape, ConnectorStyle};
use super::types::{Point, Side};

/// Number of turns for `[left_bottom][left side][right side]`, sides in
/// N, E, S, W order. Empirical; there is no closed-form rule behind it.
const TURNS: [[[u8; 4]; 4]; 2] = [
    // left endpoint below the right one
    [
        [1, 2, 1, 0], // left N
        [2, 0, 1, 1], // left E
        [3, 2, 1, 2], // left S
        [2, 3, 2, 1], // left W
    ],
    // left endpoint level with or above the right one
    [
        [1, 2, 3, 2], // left N
        [0, 1, 2, 1], // left E
        [1, 2, 1, 0], // left S
        [2, 1, 0, 1], // left W
    ],
];

/// Number of turns between the two stubs
pub fn required_turns(start: Point, start_side: Side, end: Point, end_side: Side) -> usize {
    let left_to_right = end.x > start.x;
    let (left, right, left_side, right_side) = if left_to_right {
        (start, end, start_side, end_side)
    } else {
        (end, start, end_side, start_side)
    };
    let left_bottom = left.y > right.y;
    let half = if left_bottom { 0 } else { 1 };
    let turns = TURNS[half][left_side.index()][right_side.index()] as usize;
    trace!(
        "elbow turns: left {:?} right {:?} left_bottom {} -> {}",
        left_side,
        right_side,
        left_bottom,
        turns
    );
    turns
}

/// Total number of segments, stubs included
pub fn required_segments(restriction: &dyn Restriction) -> usize {
    required_turns(
        restriction.start_point(),
        restriction.start_side(),
        restriction.end_point(),
        restriction.end_side(),
    ) + 2
}

/// Slack allowed between a replayed end and the real one, relative to the
/// largest endpoint coordinate (and never below this absolute value)
pub const REPLAY_TOLERANCE: f64 = 1e-9;

fn replay_tolerance(start: Point, end: Point) -> f64 {
    let scale = [start.x, start.y, end.x, end.y]
        .iter()
        .fold(1.0_f64, |scale, v| scale.max(v.abs()));
    REPLAY_TOLERANCE * scale
}

/// Replay the stored preferences if they still form a valid route
fn preferred_segments(restriction: &dyn Restriction) -> Option<Vec<Segment>> {
    let preferences = restriction.segment_preferences()?;
    let required = required_segments(restriction);
    if preferences.len() != required {
        debug!(
            "ignoring {} segment preferences, route needs {}",
            preferences.len(),
            required
        );
        return None;
    }

    let start = restriction.start_point();
    let end = restriction.end_point();
    let mut segments = replay(start, preferences);
    match segments.last_mut() {
        Some(last) if last.end.approx_eq(end, replay_tolerance(start, end)) => {
            last.end = end;
        }
        _ => {
            debug!(
                "ignoring segment preferences that miss the end point ({}, {})",
                end.x, end.y
            );
            return None;
        }
    }
    Some(segments)
}

/// Route automatically, ignoring any stored preferences
pub fn compute_segments(restriction: &dyn Restriction, stub_length: f64) -> Vec<Segment> {
    let start = restriction.start_point();
    let end = restriction.end_point();
    let start_side = restriction.start_side();
    let end_side = restriction.end_side();
    let turns = required_turns(start, start_side, end, end_side);

    let first_axis = start_side.axis();
    let mut first = Segment::new(
        start,
        start.moved(first_axis, stub_length * start_side.direction()),
    );
    let last_axis = end_side.axis();
    let mut last = Segment::new(
        end.moved(last_axis, stub_length * end_side.direction()),
        end,
    );

    match turns {
        1 => {
            /*
             * [S]---
             *      |
             *      ---[S]
             */
            let axis = first_axis.opposite();
            let bend = first.end.with_coordinate(axis, last.start.along(axis));
            let middle = Segment::new(first.end, bend);
            last.start = bend;
            vec![first, middle, last]
        }
        2 => {
            /*
             * [S]---
             *      | [S]
             *      |  |
             *      ----
             */
            let axis = last_axis.opposite();
            let before_last = Segment::new(
                last.start.with_coordinate(axis, first.end.along(axis)),
                last.start,
            );
            let axis = first_axis.opposite();
            let after_first = Segment::new(
                first.end,
                first.end.with_coordinate(axis, before_last.start.along(axis)),
            );
            vec![first, after_first, before_last, last]
        }
        3 => {
            /*  -----
             *  |   |
             * [S]  | [S]
             *      |  |
             *      ----
             */
            // The stubs point away from each other; the middle span runs
            // between them through the midpoint
            let axis = first_axis.opposite();
            let center = start.midpoint(end).along(axis);
            let middle = Segment::new(
                first.end.with_coordinate(axis, center),
                last.start.with_coordinate(axis, center),
            );
            vec![
                first,
                Segment::new(first.end, middle.start),
                middle,
                Segment::new(middle.end, last.start),
                last,
            ]
        }
        _ => {
            /*
             * [S]----
             *       |
             *      [S]
             */
            first.end = first
                .end
                .with_coordinate(first_axis, last.start.along(first_axis));
            last.start = first.end;
            vec![first, last]
        }
    }
}

/// Orthogonal connector with stubs at both ends
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElbowShape {
    config: RoutingConfig,
}

impl ElbowShape {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }
}

impl ConnectorShape for ElbowShape {
    fn style(&self) -> ConnectorStyle {
        ConnectorStyle::Elbow
    }

    fn stub_length(&self) -> f64 {
        self.config.stub_length
    }

    fn route(&self, restriction: &dyn Restriction) -> Vec<Segment> {
        if let Some(segments) = preferred_segments(restriction) {
            trace!("replaying {} preferred segments", segments.len());
            return segments;
        }
        compute_segments(restriction, self.config.stub_length)
    }

    fn outline(&self, segments: &[Segment]) -> ShapePath {
        ShapePath::polyline(segments)
    }

    fn required_segments(&self, restriction: &dyn Restriction) -> usize {
        required_segments(restriction)
    }

    fn preferences_valid(&self, restriction: &dyn Restriction) -> bool {
        preferred_segments(restriction).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::restriction::ConnectorRestriction;
    use crate::connector::segment::{is_contiguous, to_preferences, SegmentPreference};
    use crate::connector::types::Axis;
    use pretty_assertions::assert_eq;

    fn elbow() -> ElbowShape {
        ElbowShape::default()
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_east_to_west_single_turn() {
        let r = ConnectorRestriction::new(
            Point::new(0.0, 0.0),
            Side::East,
            Point::new(100.0, -50.0),
            Side::West,
        );
        let segments = elbow().route(&r);
        assert_eq!(
            segments,
            vec![
                seg(0.0, 0.0, 20.0, 0.0),
                seg(20.0, 0.0, 20.0, -50.0),
                seg(20.0, -50.0, 100.0, -50.0),
            ]
        );
        assert_eq!(segments[1].axis(), Axis::Vertical);
    }

    #[test]
    fn test_table_is_symmetric_for_east_west() {
        // T[E][W] is 1 in both halves of the table
        assert_eq!(
            required_turns(Point::new(0.0, 0.0), Side::East, Point::new(100.0, 50.0), Side::West),
            1
        );
        assert_eq!(
            required_turns(Point::new(0.0, 0.0), Side::East, Point::new(100.0, -50.0), Side::West),
            1
        );
    }

    #[test]
    fn test_direct_elbow() {
        // Left N, right W, left below: no turns between the stubs
        let r = ConnectorRestriction::new(
            Point::new(0.0, 100.0),
            Side::North,
            Point::new(100.0, 0.0),
            Side::West,
        );
        let segments = elbow().route(&r);
        assert_eq!(
            segments,
            vec![seg(0.0, 100.0, 0.0, 0.0), seg(0.0, 0.0, 100.0, 0.0)]
        );
    }

    #[test]
    fn test_two_turns() {
        // Left N, right E, left above: two turns
        let r = ConnectorRestriction::new(
            Point::new(0.0, 0.0),
            Side::North,
            Point::new(100.0, 100.0),
            Side::East,
        );
        let segments = elbow().route(&r);
        assert_eq!(
            segments,
            vec![
                seg(0.0, 0.0, 0.0, -20.0),
                seg(0.0, -20.0, 120.0, -20.0),
                seg(120.0, -20.0, 120.0, 100.0),
                seg(120.0, 100.0, 100.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_three_turns() {
        // Left W, right E, left below: route around both elements
        let r = ConnectorRestriction::new(
            Point::new(0.0, 100.0),
            Side::West,
            Point::new(100.0, 0.0),
            Side::East,
        );
        let segments = elbow().route(&r);
        assert_eq!(
            segments,
            vec![
                seg(0.0, 100.0, -20.0, 100.0),
                seg(-20.0, 100.0, -20.0, 50.0),
                seg(-20.0, 50.0, 120.0, 50.0),
                seg(120.0, 50.0, 120.0, 0.0),
                seg(120.0, 0.0, 100.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_right_to_left_uses_end_as_left() {
        // Start on the right: sides are looked up with the end as left endpoint
        let r = ConnectorRestriction::new(
            Point::new(100.0, 0.0),
            Side::West,
            Point::new(0.0, 0.0),
            Side::East,
        );
        // left E, right W, level
        assert_eq!(elbow().required_segments(&r), 3);
        let segments = elbow().route(&r);
        assert!(is_contiguous(&segments, r.start, r.end));
    }

    #[test]
    fn test_zero_span_turn_is_legal() {
        // Endpoints level: the middle segment collapses to zero length
        let r = ConnectorRestriction::new(
            Point::new(0.0, 0.0),
            Side::East,
            Point::new(100.0, 0.0),
            Side::West,
        );
        let segments = elbow().route(&r);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].length(), 0.0);
        assert!(is_contiguous(&segments, r.start, r.end));
    }

    #[test]
    fn test_valid_preferences_are_replayed() {
        let r = ConnectorRestriction::new(
            Point::new(0.0, 0.0),
            Side::East,
            Point::new(100.0, -50.0),
            Side::West,
        )
        .with_preferences(vec![
            SegmentPreference::new(Axis::Horizontal, 60.0),
            SegmentPreference::new(Axis::Vertical, -50.0),
            SegmentPreference::new(Axis::Horizontal, 40.0),
        ]);
        assert!(elbow().preferences_valid(&r));
        assert_eq!(elbow().route(&r)[1], seg(60.0, 0.0, 60.0, -50.0));
    }

    #[test]
    fn test_preferences_missing_end_are_rejected() {
        let auto = ConnectorRestriction::new(
            Point::new(0.0, 0.0),
            Side::East,
            Point::new(100.0, -50.0),
            Side::West,
        );
        let r = auto.clone().with_preferences(vec![
            SegmentPreference::new(Axis::Horizontal, 60.0),
            SegmentPreference::new(Axis::Vertical, -40.0),
            SegmentPreference::new(Axis::Horizontal, 40.0),
        ]);
        assert!(!elbow().preferences_valid(&r));
        assert_eq!(elbow().route(&r), elbow().route(&auto));
    }

    #[test]
    fn test_preferences_with_wrong_count_are_rejected() {
        let auto = ConnectorRestriction::new(
            Point::new(0.0, 0.0),
            Side::East,
            Point::new(100.0, -50.0),
            Side::West,
        );
        let r = auto.clone().with_preferences(vec![
            SegmentPreference::new(Axis::Horizontal, 100.0),
            SegmentPreference::new(Axis::Vertical, -50.0),
        ]);
        assert!(!elbow().preferences_valid(&r));
        assert_eq!(elbow().route(&r), elbow().route(&auto));
    }

    #[test]
    fn test_custom_stub_length() {
        let shape = ElbowShape::new(RoutingConfig::new().with_stub_length(5.0));
        let r = ConnectorRestriction::new(
            Point::new(0.0, 0.0),
            Side::South,
            Point::new(100.0, 100.0),
            Side::North,
        );
        let segments = shape.route(&r);
        assert_eq!(segments[0], seg(0.0, 0.0, 0.0, 5.0));
        assert_eq!(segments[1], seg(0.0, 5.0, 100.0, 5.0));
    }

    #[test]
    fn test_preference_round_trip() {
        let r = ConnectorRestriction::new(
            Point::new(0.0, 100.0),
            Side::West,
            Point::new(100.0, 0.0),
            Side::East,
        );
        let segments = elbow().route(&r);
        let stored = r.clone().with_preferences(to_preferences(&segments));
        assert!(elbow().preferences_valid(&stored));
        assert_eq!(elbow().route(&stored), segments);
    }

    #[test]
    fn test_fractional_route_is_axis_aligned() {
        let r = ConnectorRestriction::new(
            Point::new(0.1, 0.2),
            Side::East,
            Point::new(100.3, -50.7),
            Side::West,
        );
        let segments = elbow().route(&r);
        assert_eq!(segments[1], seg(20.1, 0.2, 20.1, -50.7));
        assert!(segments.iter().all(|s| s.is_axis_aligned()));
    }

    #[test]
    fn test_fractional_preferences_land_on_the_end() {
        let r = ConnectorRestriction::new(
            Point::new(0.1, 0.2),
            Side::East,
            Point::new(100.3, -50.7),
            Side::West,
        );
        let segments = elbow().route(&r);
        let stored = r.clone().with_preferences(to_preferences(&segments));
        assert!(elbow().preferences_valid(&stored));

        let replayed = elbow().route(&stored);
        assert!(is_contiguous(&replayed, r.start, r.end));
        for (got, want) in replayed.iter().zip(&segments) {
            assert!(got.start.approx_eq(want.start, 1e-9), "{:?} vs {:?}", got, want);
            assert!(got.end.approx_eq(want.end, 1e-9), "{:?} vs {:?}", got, want);
        }
    }

    #[test]
    fn test_replay_tolerance_scales_with_coordinates() {
        assert_eq!(
            replay_tolerance(Point::new(0.1, 0.2), Point::new(0.3, 0.4)),
            REPLAY_TOLERANCE
        );
        assert_eq!(
            replay_tolerance(Point::new(0.0, -5000.0), Point::new(10.0, 0.0)),
            REPLAY_TOLERANCE * 5000.0
        );
    }
}
