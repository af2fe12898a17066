//! Insertion-ordered point storage with nearest-point lookup.

use crate::shapes::PointStyle;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Maximum distance at which a stored point can be picked.
pub const CAPTURE_RADIUS: f64 = 1.0;

/// Points ready for the renderer.
#[derive(Debug, Clone)]
pub struct PointBatch {
    /// Positions in logical coordinates, in insertion order.
    pub positions: Vec<Point>,
    /// Fill color.
    pub color: Color,
    /// Point diameter in pixels.
    pub size: f64,
}

/// Ordered set of placed points. Duplicates are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointCollection {
    points: Vec<Point>,
}

impl PointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point.
    pub fn add(&mut self, point: Point) {
        self.points.push(point);
        log::info!("Point added: ({:.2}, {:.2})", point.x, point.y);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Closest stored point within [`CAPTURE_RADIUS`] of `target`.
    pub fn find_nearest(&self, target: Point) -> Option<Point> {
        self.find_nearest_within(target, CAPTURE_RADIUS)
    }

    /// Closest stored point strictly within `radius` of `target`.
    ///
    /// On ties the earliest inserted point wins.
    pub fn find_nearest_within(&self, target: Point, radius: f64) -> Option<Point> {
        let mut best: Option<(Point, f64)> = None;
        for &candidate in &self.points {
            let dist = candidate.distance(target);
            let limit = best.map_or(radius, |(_, d)| d);
            if dist < limit {
                best = Some((candidate, dist));
            }
        }
        best.map(|(point, _)| point)
    }

    /// Snapshot of all points with the given style.
    pub fn export_for_render(&self, style: &PointStyle) -> PointBatch {
        PointBatch {
            positions: self.points.clone(),
            color: style.fill(),
            size: style.size,
        }
    }
}
