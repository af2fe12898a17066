//! Straight line shape.

use kurbo::{Line as KurboLine, Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Perpendicular distance below which a point is considered to lie on a line.
pub const CONTAINS_TOLERANCE: f64 = 0.01;

/// Determinant magnitude below which two lines are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// Half the length of the segment a line is re-anchored to by [`Line::translate`].
pub const TRANSLATE_HALF_LENGTH: f64 = 2.0;

/// Slack allowed when deciding whether a boundary crossing lies on the viewport edge.
const CLIP_EPSILON: f64 = 1e-9;

/// Implicit form of a line: `a·x + b·y = c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImplicitEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl ImplicitEquation {
    /// Length of the normal vector `(a, b)`.
    pub fn normal_length(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// A zero normal means the defining endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Signed residual `a·x + b·y - c` (zero on the line).
    pub fn residual(&self, point: Point) -> f64 {
        self.a * point.x + self.b * point.y - self.c
    }

    /// Perpendicular distance from `point`, or `None` for a degenerate equation.
    pub fn distance_to(&self, point: Point) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(self.residual(point).abs() / self.normal_length())
    }
}

/// An infinite line defined by two endpoints.
///
/// The endpoints are the only stored state. The implicit coefficients are
/// derived from them on demand, so every mutation of the endpoints keeps
/// `a = p2.y - p1.y`, `b = p1.x - p2.x`, `c = a·p1.x + b·p1.y` in sync.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    /// Create a line through two points. Equal points give a degenerate line.
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// First defining endpoint.
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Second defining endpoint.
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Implicit coefficients for the current endpoints.
    pub fn equation(&self) -> ImplicitEquation {
        let a = self.p2.y - self.p1.y;
        let b = self.p1.x - self.p2.x;
        ImplicitEquation {
            a,
            b,
            c: a * self.p1.x + b * self.p1.y,
        }
    }

    /// Direction vector `p2 - p1` (not normalized).
    pub fn direction(&self) -> Vec2 {
        self.p2 - self.p1
    }

    /// Unit direction, or `None` when the endpoints coincide.
    pub fn unit_direction(&self) -> Option<Vec2> {
        let dir = self.direction();
        if dir.hypot2() == 0.0 {
            None
        } else {
            Some(dir.normalize())
        }
    }

    /// Whether the two endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Perpendicular distance from `point` to the infinite line.
    pub fn distance_to(&self, point: Point) -> Option<f64> {
        self.equation().distance_to(point)
    }

    /// Whether `point` lies within [`CONTAINS_TOLERANCE`] of the line.
    pub fn contains(&self, point: Point) -> bool {
        self.contains_within(point, CONTAINS_TOLERANCE)
    }

    /// Whether `point` lies strictly closer than `tolerance` to the line.
    ///
    /// A degenerate line contains nothing.
    pub fn contains_within(&self, point: Point, tolerance: f64) -> bool {
        self.distance_to(point)
            .is_some_and(|distance| distance < tolerance)
    }

    /// Intersection point with `other`, or `None` if the lines are parallel
    /// or coincident.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        self.intersection_within(other, PARALLEL_EPSILON)
    }

    /// Intersection via Cramer's rule, treating `|det| < epsilon` as parallel.
    pub fn intersection_within(&self, other: &Line, epsilon: f64) -> Option<Point> {
        let l1 = self.equation();
        let l2 = other.equation();

        let det = l1.a * l2.b - l2.a * l1.b;
        if det.abs() < epsilon {
            return None;
        }

        Some(Point::new(
            (l2.b * l1.c - l1.b * l2.c) / det,
            (l1.a * l2.c - l2.a * l1.c) / det,
        ))
    }

    /// Move the line so it passes through `anchor`, keeping its direction.
    ///
    /// The endpoints become `anchor ∓ dir·`[`TRANSLATE_HALF_LENGTH`].
    pub fn translate(&mut self, anchor: Point) {
        self.translate_with_half_length(anchor, TRANSLATE_HALF_LENGTH);
    }

    /// Move the line through `anchor` with endpoints `half_length` away on either side.
    pub fn translate_with_half_length(&mut self, anchor: Point, half_length: f64) {
        match self.unit_direction() {
            Some(dir) => {
                self.p1 = anchor - dir * half_length;
                self.p2 = anchor + dir * half_length;
            }
            // No direction to preserve; collapse onto the anchor.
            None => {
                self.p1 = anchor;
                self.p2 = anchor;
            }
        }
    }

    /// Clip the infinite line to the `[-1, 1] × [-1, 1]` viewport.
    ///
    /// Returns `None` when fewer than two distinct boundary crossings exist,
    /// i.e. the line misses the viewport or is degenerate.
    pub fn clip_to_viewport(&self) -> Option<KurboLine> {
        let dir = self.direction();
        let in_range = |v: f64| (-1.0 - CLIP_EPSILON..=1.0 + CLIP_EPSILON).contains(&v);

        let mut crossings: Vec<Point> = Vec::with_capacity(4);
        let mut push_unique = |p: Point| {
            if !crossings.iter().any(|q| q.distance(p) < CLIP_EPSILON) {
                crossings.push(p);
            }
        };

        if dir.x != 0.0 {
            for bound in [-1.0, 1.0] {
                let t = (bound - self.p1.x) / dir.x;
                let y = self.p1.y + t * dir.y;
                if in_range(y) {
                    push_unique(Point::new(bound, y.clamp(-1.0, 1.0)));
                }
            }
        }

        if dir.y != 0.0 {
            for bound in [-1.0, 1.0] {
                let t = (bound - self.p1.y) / dir.y;
                let x = self.p1.x + t * dir.x;
                if in_range(x) {
                    push_unique(Point::new(x.clamp(-1.0, 1.0), bound));
                }
            }
        }

        match crossings.as_slice() {
            [a, b, ..] => Some(KurboLine::new(*a, *b)),
            _ => None,
        }
    }

    /// Get as a kurbo Line segment between the defining endpoints.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.p1, self.p2)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eq = self.equation();
        let dir = self.direction();
        write!(
            f,
            "implicit: {:.2} x + {:.2} y = {:.2}, parametric: r(t) = ({:.2}, {:.2}) + ({:.2}, {:.2})t",
            eq.a, eq.b, eq.c, self.p1.x, self.p1.y, dir.x, dir.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_equation_from_endpoints() {
        let line = Line::new(Point::new(1.0, 2.0), Point::new(4.0, 6.0));
        let eq = line.equation();
        assert_eq!(eq.a, 4.0);
        assert_eq!(eq.b, -3.0);
        assert_eq!(eq.c, 4.0 * 1.0 - 3.0 * 2.0);
    }

    #[test]
    fn test_contains_endpoints() {
        let cases = [
            (Point::new(-0.7, 0.3), Point::new(0.4, -0.9)),
            (Point::new(0.0, 0.0), Point::new(0.0, 1.0)),
            (Point::new(-1.0, 0.5), Point::new(1.0, 0.5)),
            (Point::new(3.0, -2.0), Point::new(-5.0, 7.0)),
        ];
        for (p1, p2) in cases {
            let line = Line::new(p1, p2);
            assert!(line.contains(p1), "{line} should contain {p1:?}");
            assert!(line.contains(p2), "{line} should contain {p2:?}");
        }
    }

    #[test]
    fn test_contains_tolerance_band() {
        let line = Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
        assert!(line.contains(Point::new(0.3, 0.0)));
        assert!(line.contains(Point::new(0.3, 0.005)));
        assert!(!line.contains(Point::new(0.3, 0.02)));
        assert!(!line.contains(Point::new(0.3, -0.02)));
    }

    #[test]
    fn test_contains_is_scale_independent() {
        // Same line, very different endpoint spacing.
        let short = Line::new(Point::new(0.0, 0.0), Point::new(0.001, 0.001));
        let long = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let off = Point::new(0.5, 0.5 + 0.02);
        assert!(!short.contains(off));
        assert!(!long.contains(off));
        let near = Point::new(0.5, 0.505);
        assert!(short.contains(near));
        assert!(long.contains(near));
    }

    #[test]
    fn test_degenerate_line_contains_nothing() {
        let p = Point::new(0.25, 0.25);
        let line = Line::new(p, p);
        assert!(line.is_degenerate());
        assert!(!line.contains(p));
        assert!(!line.contains(Point::new(0.0, 0.0)));
        assert!(line.distance_to(p).is_none());
    }

    #[test]
    fn test_intersection_at_origin() {
        let l1 = Line::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        let l2 = Line::new(Point::new(-1.0, 1.0), Point::new(1.0, -1.0));
        let p = l1.intersection(&l2).expect("lines cross");
        assert!(approx(p.x, 0.0, 1e-4));
        assert!(approx(p.y, 0.0, 1e-4));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let l1 = Line::new(Point::new(-0.8, 0.1), Point::new(0.6, 0.7));
        let l2 = Line::new(Point::new(0.2, -0.9), Point::new(-0.3, 0.9));
        let a = l1.intersection(&l2).expect("lines cross");
        let b = l2.intersection(&l1).expect("lines cross");
        assert!(approx(a.x, b.x, 1e-9));
        assert!(approx(a.y, b.y, 1e-9));
        assert!(l1.contains(a));
        assert!(l2.contains(a));
    }

    #[test]
    fn test_parallel_lines_do_not_intersect() {
        let l1 = Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
        let l2 = Line::new(Point::new(-1.0, 1.0), Point::new(1.0, 1.0));
        assert!(l1.intersection(&l2).is_none());
        // Coincident lines are also rejected.
        let l3 = Line::new(Point::new(-0.5, 0.0), Point::new(0.5, 0.0));
        assert!(l1.intersection(&l3).is_none());
    }

    #[test]
    fn test_degenerate_line_never_intersects() {
        let p = Point::new(0.1, 0.1);
        let degenerate = Line::new(p, p);
        let other = Line::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert!(degenerate.intersection(&other).is_none());
        assert!(other.intersection(&degenerate).is_none());
    }

    #[test]
    fn test_translate_preserves_direction() {
        let mut line = Line::new(Point::new(-0.5, -0.2), Point::new(0.3, 0.4));
        let before = line.unit_direction().unwrap();
        let anchor = Point::new(0.7, -0.6);

        line.translate(anchor);

        let after = line.unit_direction().unwrap();
        assert!(approx(before.x, after.x, 1e-9));
        assert!(approx(before.y, after.y, 1e-9));
        assert!(line.contains(anchor));
        assert!(approx(line.p1().distance(anchor), TRANSLATE_HALF_LENGTH, 1e-9));
        assert!(approx(line.p2().distance(anchor), TRANSLATE_HALF_LENGTH, 1e-9));
    }

    #[test]
    fn test_translate_keeps_equation_consistent() {
        let mut line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        line.translate(Point::new(0.0, 0.5));
        let eq = line.equation();
        assert!(approx(eq.residual(line.p1()), 0.0, 1e-9));
        assert!(approx(eq.residual(line.p2()), 0.0, 1e-9));
        assert!(line.contains(Point::new(-0.9, 0.5)));
        assert!(!line.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_translate_degenerate_collapses_to_anchor() {
        let p = Point::new(0.2, 0.2);
        let mut line = Line::new(p, p);
        let anchor = Point::new(-0.4, 0.1);
        line.translate(anchor);
        assert_eq!(line.p1(), anchor);
        assert_eq!(line.p2(), anchor);
    }

    #[test]
    fn test_clip_horizontal() {
        let line = Line::new(Point::new(-0.5, 0.25), Point::new(0.5, 0.25));
        let seg = line.clip_to_viewport().expect("visible");
        assert_eq!(seg.p0, Point::new(-1.0, 0.25));
        assert_eq!(seg.p1, Point::new(1.0, 0.25));
    }

    #[test]
    fn test_clip_vertical() {
        let line = Line::new(Point::new(0.1, 0.0), Point::new(0.1, 0.2));
        let seg = line.clip_to_viewport().expect("visible");
        assert_eq!(seg.p0, Point::new(0.1, -1.0));
        assert_eq!(seg.p1, Point::new(0.1, 1.0));
    }

    #[test]
    fn test_clip_through_corners_has_distinct_endpoints() {
        let line = Line::new(Point::new(-0.5, -0.5), Point::new(0.5, 0.5));
        let seg = line.clip_to_viewport().expect("visible");
        assert!(seg.p0.distance(seg.p1) > 2.8);
    }

    #[test]
    fn test_clip_off_screen() {
        let line = Line::new(Point::new(-1.0, 2.0), Point::new(1.0, 2.0));
        assert!(line.clip_to_viewport().is_none());
        let p = Point::new(0.0, 0.0);
        assert!(Line::new(p, p).clip_to_viewport().is_none());
    }

    #[test]
    fn test_clip_endpoints_lie_on_line_and_border() {
        let line = Line::new(Point::new(-0.2, 0.9), Point::new(0.4, -0.3));
        let seg = line.clip_to_viewport().expect("visible");
        for p in [seg.p0, seg.p1] {
            assert!(line.contains(p));
            let on_border = approx(p.x.abs(), 1.0, 1e-9) || approx(p.y.abs(), 1.0, 1e-9);
            assert!(on_border, "{p:?} not on the viewport border");
        }
    }

    #[test]
    fn test_display_shows_equations() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let text = line.to_string();
        assert!(text.contains("implicit: 1.00 x + -1.00 y = 0.00"));
        assert!(text.contains("r(t) = (0.00, 0.00) + (1.00, 1.00)t"));
    }
}
