//! Renderable connector outlines
//!
//! Converts routed segments into path commands and SVG path `d` strings.

use super::segment::Segment;
use super::types::{BoundingBox, Point};

/// A command in a renderable path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
}

/// A renderable connector path
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapePath {
    pub commands: Vec<PathCommand>,
}

impl ShapePath {
    /// Polyline through the segment endpoints
    pub fn polyline(segments: &[Segment]) -> Self {
        let Some(first) = segments.first() else {
            return Self::default();
        };
        let mut commands = Vec::with_capacity(segments.len() + 1);
        commands.push(PathCommand::MoveTo(first.start));
        commands.extend(segments.iter().map(|s| PathCommand::LineTo(s.end)));
        Self { commands }
    }

    /// Smoothed curve through the interior segment centers
    ///
    /// Each interior segment's center is an on-curve point and the turn
    /// before it is the control point; the last span curves into the end.
    pub fn smoothed(segments: &[Segment]) -> Self {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return Self::default();
        };
        let mut commands = vec![PathCommand::MoveTo(first.start)];
        if segments.len() == 1 {
            commands.push(PathCommand::LineTo(first.end));
            return Self { commands };
        }
        for segment in &segments[1..segments.len() - 1] {
            commands.push(PathCommand::QuadraticTo {
                control: segment.start,
                end: segment.center(),
            });
        }
        commands.push(PathCommand::QuadraticTo {
            control: last.start,
            end: last.end,
        });
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Box around every point of the path, control points included
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut points = self.commands.iter().flat_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => [Some(p), None],
            PathCommand::QuadraticTo { control, end } => [Some(control), Some(end)],
        });
        let first = points.next().flatten()?;
        Some(
            points
                .flatten()
                .fold(BoundingBox::at(first), |b, p| b.expand_to_include(p)),
        )
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();

        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match cmd {
                PathCommand::MoveTo(p) => {
                    d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
                }
                PathCommand::LineTo(p) => {
                    d.push_str(&format!("L{:.2} {:.2}", p.x, p.y));
                }
                PathCommand::QuadraticTo { control, end } => {
                    d.push_str(&format!(
                        "Q{:.2} {:.2} {:.2} {:.2}",
                        control.x, control.y, end.x, end.y
                    ));
                }
            }
        }

        d
    }
}
