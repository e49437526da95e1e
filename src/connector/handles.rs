//! Drag handles on interior segments and the re-routing they trigger

use log::{debug, warn};

use super::restriction::{Restriction, WithPreferences};
use super::segment::{to_preferences, Segment, SegmentPreference};
use super::shape::ConnectorShape;
use super::types::{Axis, Point};

/// A drag target at the center of an interior segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position among the handles; the handle sits on segment `index + 1`
    pub index: usize,
    /// Axis of the segment the handle sits on; it moves perpendicular to it
    pub axis: Axis,
    pub location: Point,
}

/// One handle per interior segment
pub fn handles_for(segments: &[Segment]) -> Vec<Handle> {
    if segments.len() < 3 {
        return vec![];
    }
    segments[1..segments.len() - 1]
        .iter()
        .enumerate()
        .map(|(index, segment)| Handle {
            index,
            axis: segment.axis(),
            location: segment.center(),
        })
        .collect()
}

/// Preference list after dragging handle `index` by `delta`
///
/// The live segments are frozen into preferences first unless a matching
/// list is already stored. The dragged segment keeps its length; the
/// segments on either side of it absorb the move. Returns `None` when the
/// edited list no longer forms a valid route, so that the next routing
/// falls back to the automatic layout.
pub fn drag_handle<S: ConnectorShape + ?Sized>(
    shape: &S,
    restriction: &dyn Restriction,
    index: usize,
    delta: Point,
) -> Option<Vec<SegmentPreference>> {
    let segments = shape.route(restriction);
    if index >= segments.len().saturating_sub(2) {
        warn!(
            "no handle {} on a {} segment connector, dropping preferences",
            index,
            segments.len()
        );
        return None;
    }
    let dragged = index + 1;

    let mut preferences = match restriction.segment_preferences() {
        Some(stored) if stored.len() == segments.len() => stored.to_vec(),
        _ => to_preferences(&segments),
    };

    let shift = match preferences[dragged].axis {
        Axis::Horizontal => delta.y,
        Axis::Vertical => delta.x,
    };
    preferences[dragged - 1].length += shift;
    preferences[dragged + 1].length -= shift;

    let edited = WithPreferences::new(restriction, Some(preferences.as_slice()));
    if shape.preferences_valid(&edited) {
        Some(preferences)
    } else {
        debug!("drag of handle {} left an invalid route, resetting", index);
        None
    }
}
