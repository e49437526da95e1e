//! Memoized routing
//!
//! Routing is a pure function of the restriction, but views ask for the
//! same route on every repaint. The cache keeps the last result together
//! with a bit-exact snapshot of the inputs it was computed from.

use log::{debug, trace};

use super::restriction::Restriction;
use super::segment::Segment;
use super::shape::{ConnectorShape, ConnectorStyle};
use super::types::{Axis, Point, Side};

fn point_bits(p: Point) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

/// Snapshot of everything a route depends on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    style: ConnectorStyle,
    stub_length: u64,
    start: (u64, u64),
    end: (u64, u64),
    start_side: Side,
    end_side: Side,
    preferences: Option<Vec<(Axis, u64)>>,
}

impl RouteKey {
    pub fn new<S: ConnectorShape + ?Sized>(shape: &S, restriction: &dyn Restriction) -> Self {
        Self {
            style: shape.style(),
            stub_length: shape.stub_length().to_bits(),
            start: point_bits(restriction.start_point()),
            end: point_bits(restriction.end_point()),
            start_side: restriction.start_side(),
            end_side: restriction.end_side(),
            preferences: restriction
                .segment_preferences()
                .map(|prefs| prefs.iter().map(|p| (p.axis, p.length.to_bits())).collect()),
        }
    }
}

/// Last routed segments of one connector
#[derive(Debug, Clone, Default)]
pub struct RouteCache {
    entry: Option<(RouteKey, Vec<Segment>)>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments for the restriction, routing only when its inputs changed
    pub fn segments<S: ConnectorShape + ?Sized>(
        &mut self,
        shape: &S,
        restriction: &dyn Restriction,
    ) -> &[Segment] {
        let key = RouteKey::new(shape, restriction);
        match &mut self.entry {
            Some((cached, _)) if *cached == key => {
                trace!("route cache hit");
            }
            entry => {
                debug!("routing {:?} connector", key.style);
                let segments = shape.route(restriction);
                *entry = Some((key, segments));
            }
        }
        self.entry
            .as_ref()
            .map(|(_, segments)| segments.as_slice())
            .unwrap_or_default()
    }

    /// Whether the cached route is still current for these inputs
    pub fn is_current<S: ConnectorShape + ?Sized>(
        &self,
        shape: &S,
        restriction: &dyn Restriction,
    ) -> bool {
        matches!(&self.entry, Some((cached, _)) if *cached == RouteKey::new(shape, restriction))
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
