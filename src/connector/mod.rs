//! Connector routing
//!
//! This module turns a [`Restriction`] (endpoints, attachment sides and the
//! user's stored segment preferences) into an ordered list of segments and a
//! renderable outline, for each [`ConnectorStyle`].

pub mod cache;
pub mod config;
pub mod curved;
pub mod elbow;
pub mod handles;
pub mod param;
pub mod path;
pub mod restriction;
pub mod segment;
pub mod shape;
pub mod straight;
pub mod types;

pub use cache::RouteCache;
pub use config::RoutingConfig;
pub use curved::CurvedShape;
pub use elbow::ElbowShape;
pub use handles::Handle;
pub use path::{PathCommand, ShapePath};
pub use restriction::{ConnectorRestriction, Restriction};
pub use segment::{Segment, SegmentPreference};
pub use shape::{ConnectorShape, ConnectorShapeKind, ConnectorStyle};
pub use straight::StraightShape;
pub use types::{Axis, BoundingBox, Point, Side};
