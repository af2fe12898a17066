//! Insertion-ordered line storage addressed by stable handles.

use crate::shapes::{CONTAINS_TOLERANCE, Line, LineStyle};
use kurbo::{Line as KurboLine, Point};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a line in a [`LineCollection`].
///
/// Lines are never removed, so a handle stays valid for the life of the
/// collection that issued it, regardless of how its storage grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(usize);

impl LineId {
    /// Position of the line in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A line clipped to the viewport, ready for the renderer.
#[derive(Debug, Clone)]
pub struct LineSegment {
    /// Which line this segment was clipped from.
    pub id: LineId,
    /// Visible part of the line in logical coordinates.
    pub segment: KurboLine,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

/// Ordered set of lines. Collinear and duplicate lines are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineCollection {
    lines: Vec<Line>,
}

impl LineCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a line through `p1` and `p2` and append it.
    pub fn add(&mut self, p1: Point, p2: Point) -> LineId {
        self.push(Line::new(p1, p2))
    }

    /// Append an existing line.
    pub fn push(&mut self, line: Line) -> LineId {
        let id = LineId(self.lines.len());
        log::info!("Line added {id}: {line}");
        self.lines.push(line);
        id
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    pub fn get_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.get_mut(id.0)
    }

    /// Lines with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate().map(|(i, line)| (LineId(i), line))
    }

    /// First line (in insertion order) containing `point`.
    ///
    /// This is a containment test within [`CONTAINS_TOLERANCE`], not a
    /// closest-distance search.
    pub fn find_nearest(&self, point: Point) -> Option<LineId> {
        self.find_nearest_within(point, CONTAINS_TOLERANCE)
    }

    /// First line passing strictly closer than `tolerance` to `point`.
    pub fn find_nearest_within(&self, point: Point, tolerance: f64) -> Option<LineId> {
        self.lines
            .iter()
            .position(|line| line.contains_within(point, tolerance))
            .map(LineId)
    }

    /// Visible segment of every on-screen line, in insertion order.
    pub fn export_for_render(&self, style: &LineStyle) -> Vec<LineSegment> {
        let color = style.stroke();
        self.iter()
            .filter_map(|(id, line)| {
                line.clip_to_viewport().map(|segment| LineSegment {
                    id,
                    segment,
                    color,
                    stroke_width: style.stroke_width,
                })
            })
            .collect()
    }
}
