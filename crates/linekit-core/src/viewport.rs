//! Mapping between window pixels and logical coordinates.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Default window edge length in pixels.
pub const DEFAULT_VIEWPORT_SIZE: f64 = 600.0;

/// Viewport maps window pixels (origin top-left, y down) onto the logical
/// square `[-1, 1] × [-1, 1]` (origin centre, y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Window size in physical pixels.
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(DEFAULT_VIEWPORT_SIZE, DEFAULT_VIEWPORT_SIZE),
        }
    }
}

impl Viewport {
    /// Create a viewport for a window of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        let mut viewport = Self::default();
        viewport.resize(width, height);
        viewport
    }

    /// Update the window size. Zero or negative sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.size = Size::new(width, height);
        }
    }

    /// Transform from logical coordinates to window pixels.
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(self.size.width / 2.0, self.size.height / 2.0))
            * Affine::scale_non_uniform(self.size.width / 2.0, -self.size.height / 2.0)
    }

    /// Transform from window pixels to logical coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::translate(Vec2::new(-1.0, 1.0))
            * Affine::scale_non_uniform(2.0 / self.size.width, -2.0 / self.size.height)
    }

    /// Convert a pixel position to logical coordinates.
    pub fn screen_to_logical(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a logical position to pixels.
    pub fn logical_to_screen(&self, logical_point: Point) -> Point {
        self.transform() * logical_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-10, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-10, "{a:?} != {b:?}");
    }

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::default();
        assert_eq!(viewport.size, Size::new(600.0, 600.0));
    }

    #[test]
    fn test_corners_and_centre() {
        let viewport = Viewport::new(600.0, 600.0);
        assert_close(viewport.screen_to_logical(Point::new(0.0, 0.0)), Point::new(-1.0, 1.0));
        assert_close(viewport.screen_to_logical(Point::new(600.0, 600.0)), Point::new(1.0, -1.0));
        assert_close(viewport.screen_to_logical(Point::new(300.0, 300.0)), Point::ZERO);
        assert_close(viewport.screen_to_logical(Point::new(150.0, 450.0)), Point::new(-0.5, -0.5));
    }

    #[test]
    fn test_non_square_window() {
        let viewport = Viewport::new(800.0, 400.0);
        assert_close(viewport.screen_to_logical(Point::new(600.0, 100.0)), Point::new(0.5, 0.5));
    }

    #[test]
    fn test_roundtrip_conversion() {
        let viewport = Viewport::new(1280.0, 800.0);
        let original = Point::new(123.0, 456.0);
        let logical = viewport.screen_to_logical(original);
        assert_close(viewport.logical_to_screen(logical), original);
    }

    #[test]
    fn test_resize_ignores_zero() {
        let mut viewport = Viewport::new(1024.0, 768.0);
        viewport.resize(0.0, 0.0);
        assert_eq!(viewport.size, Size::new(1024.0, 768.0));
    }
}
