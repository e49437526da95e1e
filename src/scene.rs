//! Scene files: element boxes and the connectors between them
//!
//! A scene is a TOML document with `[[node]]` boxes and `[[connector]]`
//! lines. Resolving it picks attachment sides and endpoints for every
//! connector and pairs the result with the shape for its style.

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::connector::handles::{self, Handle};
use crate::connector::segment::trim_path;
use crate::connector::{
    param, BoundingBox, ConnectorRestriction, ConnectorShape, ConnectorShapeKind, ConnectorStyle,
    Point, RouteCache, RoutingConfig, Segment, SegmentPreference, ShapePath, Side,
};
use crate::error::SceneError;

/// An element box connectors attach to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Node {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

/// A connector as written in the scene file
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ConnectorSpec {
    pub id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub from_side: Option<Side>,
    pub to_side: Option<Side>,
    pub style: ConnectorStyle,
    pub start_gap: f64,
    pub end_gap: f64,
    pub anchors: Vec<f64>,
    pub segments: Option<Vec<SegmentPreference>>,
}

/// A parsed scene file
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Scene {
    /// Routing options from the file, overriding the caller's
    pub routing: Option<RoutingConfig>,
    #[serde(default, rename = "node")]
    pub nodes: Vec<Node>,
    #[serde(default, rename = "connector")]
    pub connectors: Vec<ConnectorSpec>,
}

/// One end of a connector before its side is known
#[derive(Clone, Copy)]
enum Endpoint<'a> {
    Node(&'a Node),
    Fixed(Point),
}

impl Endpoint<'_> {
    /// Point the opposite end orients itself towards
    fn reference(&self) -> Point {
        match self {
            Endpoint::Node(node) => node.bounds().center(),
            Endpoint::Fixed(point) => *point,
        }
    }

    /// Attachment side and point, facing `toward` unless a side is given
    fn attach(&self, side: Option<Side>, toward: Point, default_side: Side) -> (Point, Side) {
        match self {
            Endpoint::Node(node) => {
                let bounds = node.bounds();
                let side = side.unwrap_or_else(|| Side::facing(toward, &bounds));
                (bounds.attachment_point(side), side)
            }
            Endpoint::Fixed(point) => (*point, side.unwrap_or(default_side)),
        }
    }
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Box around every node
    pub fn node_bounds(&self) -> Option<BoundingBox> {
        self.nodes
            .iter()
            .map(Node::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Resolve every connector, using `routing` unless the file has its own
    pub fn resolve(&self, routing: &RoutingConfig) -> Result<Vec<RoutedConnector>, SceneError> {
        let routing = self.routing.as_ref().unwrap_or(routing);

        let mut nodes: HashMap<&str, &Node> = HashMap::new();
        for node in &self.nodes {
            if nodes.insert(node.id.as_str(), node).is_some() {
                return Err(SceneError::duplicate_node(&node.id));
            }
        }
        let obstacles: Vec<BoundingBox> = self.nodes.iter().map(Node::bounds).collect();

        self.connectors
            .iter()
            .enumerate()
            .map(|(index, spec)| -> Result<RoutedConnector, SceneError> {
                let id = spec
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("connector-{}", index));
                let endpoint = |node: &Option<String>, point: Option<Point>, end: &str| {
                    match (node, point) {
                        (Some(node_id), _) => nodes
                            .get(node_id.as_str())
                            .copied()
                            .map(Endpoint::Node)
                            .ok_or_else(|| SceneError::unknown_node(&id, node_id)),
                        (None, Some(point)) => Ok(Endpoint::Fixed(point)),
                        (None, None) => Err(SceneError::missing_endpoint(&id, end)),
                    }
                };
                let from = endpoint(&spec.from, spec.start, "start")?;
                let to = endpoint(&spec.to, spec.end, "end")?;

                let (start, start_side) = from.attach(spec.from_side, to.reference(), Side::East);
                let (end, end_side) = to.attach(spec.to_side, from.reference(), Side::West);
                debug!(
                    "connector {}: {:?} at ({}, {}) -> {:?} at ({}, {})",
                    id, start_side, start.x, start.y, end_side, end.x, end.y
                );

                let mut restriction = ConnectorRestriction::new(start, start_side, end, end_side)
                    .with_obstacles(obstacles.clone());
                restriction.preferences = spec.segments.clone();

                Ok(RoutedConnector {
                    id,
                    restriction,
                    shape: spec.style.shape(routing),
                    start_gap: spec.start_gap,
                    end_gap: spec.end_gap,
                    anchors: spec.anchors.clone(),
                    cache: RouteCache::new(),
                })
            })
            .collect()
    }
}

/// A connector with its endpoints resolved, ready to route
#[derive(Debug, Clone)]
pub struct RoutedConnector {
    pub id: String,
    pub restriction: ConnectorRestriction,
    pub shape: ConnectorShapeKind,
    pub start_gap: f64,
    pub end_gap: f64,
    /// Anchor positions as fractions of the path length
    pub anchors: Vec<f64>,
    cache: RouteCache,
}

impl RoutedConnector {
    pub fn segments(&mut self) -> &[Segment] {
        self.cache.segments(&self.shape, &self.restriction)
    }

    /// Outline with the line-ending gaps cut off, from the cached route
    pub fn outline(&mut self) -> ShapePath {
        let mut segments = self.cache.segments(&self.shape, &self.restriction).to_vec();
        trim_path(&mut segments, self.start_gap, self.end_gap);
        self.shape.outline(&segments)
    }

    pub fn anchor_points(&mut self) -> Vec<Point> {
        let fallback = self.restriction.start;
        let anchors = self.anchors.clone();
        let segments = self.segments();
        anchors
            .into_iter()
            .map(|fraction| param::point_at(segments, fraction).unwrap_or(fallback))
            .collect()
    }

    pub fn handles(&mut self) -> Vec<Handle> {
        handles::handles_for(self.segments())
    }

    /// Drag a handle and keep the resulting preferences
    pub fn drag_handle(&mut self, index: usize, delta: Point) -> bool {
        self.restriction.drag_handle(&self.shape, index, delta)
    }
}
