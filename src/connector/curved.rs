//! Curved connector: the elbow route, smoothed

use super::config::RoutingConfig;
use super::elbow::ElbowShape;
use super::path::ShapePath;
use super::restriction::Restriction;
use super::segment::Segment;
use super::shape::{ConnectorShape, ConnectorStyle};

/// Shares the elbow topology and preferences; only the outline differs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurvedShape {
    elbow: ElbowShape,
}

impl CurvedShape {
    pub fn new(config: RoutingConfig) -> Self {
        Self {
            elbow: ElbowShape::new(config),
        }
    }
}

impl ConnectorShape for CurvedShape {
    fn style(&self) -> ConnectorStyle {
        ConnectorStyle::Curved
    }

    fn stub_length(&self) -> f64 {
        self.elbow.stub_length()
    }

    fn route(&self, restriction: &dyn Restriction) -> Vec<Segment> {
        self.elbow.route(restriction)
    }

    fn outline(&self, segments: &[Segment]) -> ShapePath {
        ShapePath::smoothed(segments)
    }

    fn required_segments(&self, restriction: &dyn Restriction) -> usize {
        self.elbow.required_segments(restriction)
    }

    fn preferences_valid(&self, restriction: &dyn Restriction) -> bool {
        self.elbow.preferences_valid(restriction)
    }
}
