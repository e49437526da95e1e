//! Straight connector: a single segment from start to end

use super::path::ShapePath;
use super::restriction::Restriction;
use super::segment::Segment;
use super::shape::{ConnectorShape, ConnectorStyle};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StraightShape;

impl ConnectorShape for StraightShape {
    fn style(&self) -> ConnectorStyle {
        ConnectorStyle::Straight
    }

    fn stub_length(&self) -> f64 {
        0.0
    }

    fn route(&self, restriction: &dyn Restriction) -> Vec<Segment> {
        vec![Segment::new(
            restriction.start_point(),
            restriction.end_point(),
        )]
    }

    fn outline(&self, segments: &[Segment]) -> ShapePath {
        ShapePath::polyline(segments)
    }

    fn required_segments(&self, _restriction: &dyn Restriction) -> usize {
        1
    }

    // A straight line has no turns to adjust
    fn preferences_valid(&self, _restriction: &dyn Restriction) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::restriction::ConnectorRestriction;
    use crate::connector::segment::SegmentPreference;
    use crate::connector::types::{Axis, Point};

    #[test]
    fn test_single_segment() {
        let r = ConnectorRestriction::between(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        let segments = StraightShape.route(&r);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, r.start);
        assert_eq!(segments[0].end, r.end);
    }

    #[test]
    fn test_ignores_preferences() {
        let r = ConnectorRestriction::between(Point::new(0.0, 0.0), Point::new(30.0, 0.0))
            .with_preferences(vec![SegmentPreference::new(Axis::Horizontal, 30.0)]);
        assert!(!StraightShape.preferences_valid(&r));
        assert_eq!(StraightShape.route(&r).len(), 1);
    }

    #[test]
    fn test_linear_parametrization() {
        let r = ConnectorRestriction::between(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        assert_eq!(StraightShape.point_at(&r, 0.5), Point::new(15.0, 20.0));
        assert_eq!(StraightShape.fraction_at(&r, Point::new(15.0, 20.0)), 0.5);
    }

    #[test]
    fn test_no_handles() {
        let r = ConnectorRestriction::between(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        assert!(StraightShape.handles(&r).is_empty());
    }
}
