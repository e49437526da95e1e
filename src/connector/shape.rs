//! The connector shape contract and its variants
//!
//! Every style of connecting line (straight, elbow, curved) produces its
//! segments and renderable outline through [`ConnectorShape`]. Hit-testing,
//! drag handles and anchor placement only ever talk to this trait.

use enum_dispatch::enum_dispatch;
use serde::Deserialize;

use super::config::RoutingConfig;
use super::curved::CurvedShape;
use super::elbow::ElbowShape;
use super::handles::{self, Handle};
use super::param;
use super::path::ShapePath;
use super::restriction::Restriction;
use super::segment::{trim_path, Segment};
use super::straight::StraightShape;
use super::types::Point;

/// Named connector style, as stored on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStyle {
    #[default]
    Straight,
    Elbow,
    Curved,
}

impl ConnectorStyle {
    /// Build the shape implementing this style
    pub fn shape(self, config: &RoutingConfig) -> ConnectorShapeKind {
        match self {
            ConnectorStyle::Straight => StraightShape.into(),
            ConnectorStyle::Elbow => ElbowShape::new(config.clone()).into(),
            ConnectorStyle::Curved => CurvedShape::new(config.clone()).into(),
        }
    }
}

/// Path generation for one connector style
#[enum_dispatch]
pub trait ConnectorShape {
    fn style(&self) -> ConnectorStyle;

    /// Stub length the shape routes with, zero for shapes without stubs
    fn stub_length(&self) -> f64;

    /// Ordered segments from the restriction's start to its end
    fn route(&self, restriction: &dyn Restriction) -> Vec<Segment>;

    /// Renderable outline for already routed segments
    fn outline(&self, segments: &[Segment]) -> ShapePath;

    /// Number of segments an automatic route needs
    fn required_segments(&self, restriction: &dyn Restriction) -> usize;

    /// Whether the stored segment preferences can be replayed as they are
    fn preferences_valid(&self, restriction: &dyn Restriction) -> bool;

    fn shape(&self, restriction: &dyn Restriction) -> ShapePath {
        self.outline(&self.route(restriction))
    }

    /// Outline with room left for line endings at both ends
    fn adjusted_shape(
        &self,
        restriction: &dyn Restriction,
        start_gap: f64,
        end_gap: f64,
    ) -> ShapePath {
        let mut segments = self.route(restriction);
        trim_path(&mut segments, start_gap, end_gap);
        self.outline(&segments)
    }

    /// Point at a fractional position (0..1) along the path
    fn point_at(&self, restriction: &dyn Restriction, fraction: f64) -> Point {
        param::point_at(&self.route(restriction), fraction)
            .unwrap_or_else(|| restriction.start_point())
    }

    /// Fractional position (0..1) of the path point closest to `point`
    fn fraction_at(&self, restriction: &dyn Restriction, point: Point) -> f64 {
        param::fraction_at(&self.route(restriction), point)
    }

    /// Drag handles, one per interior segment
    fn handles(&self, restriction: &dyn Restriction) -> Vec<Handle> {
        handles::handles_for(&self.route(restriction))
    }
}

/// The available connector shapes
#[enum_dispatch(ConnectorShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorShapeKind {
    Straight(StraightShape),
    Elbow(ElbowShape),
    Curved(CurvedShape),
}
