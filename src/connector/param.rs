//! Line coordinates: fractional positions (0..1) along a routed path
//!
//! Anchors are stored as a fraction of the total path length so they stay
//! attached to the line when it is re-routed.

use super::segment::Segment;
use super::types::Point;

fn total_length(segments: &[Segment]) -> f64 {
    segments.iter().map(Segment::extent).sum()
}

/// Point at `fraction` of the total path length
///
/// Fractions are clamped to 0..1. Returns `None` for an empty path.
pub fn point_at(segments: &[Segment], fraction: f64) -> Option<Point> {
    let first = segments.first()?;
    let last = segments.last()?;
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction == 0.0 {
        return Some(first.start);
    }
    if fraction == 1.0 {
        return Some(last.end);
    }

    let total = total_length(segments);
    if total == 0.0 {
        return Some(first.start);
    }

    let target = fraction * total;
    let mut covered = 0.0;
    for segment in segments {
        let length = segment.extent();
        if length > 0.0 && target <= covered + length {
            return Some(segment.lerp((target - covered) / length));
        }
        covered += length;
    }
    Some(last.end)
}

/// Fraction of the total path length at which the path comes closest to `point`
///
/// On equal distance the earlier segment wins.
pub fn fraction_at(segments: &[Segment], point: Point) -> f64 {
    let total = total_length(segments);
    if total == 0.0 {
        return 0.0;
    }

    let mut best: Option<(f64, f64)> = None; // (distance, covered length at the closest point)
    let mut covered = 0.0;
    for segment in segments {
        let length = segment.extent();
        let t = segment.project(point);
        let distance = segment.distance_to(point);
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, covered + t * length));
        }
        covered += length;
    }

    best.map_or(0.0, |(_, along)| (along / total).clamp(0.0, 1.0))
}
