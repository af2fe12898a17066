//! Renderer trait abstraction.

use linekit_core::canvas::Canvas;
use linekit_core::viewport::Viewport;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The editor to draw.
    pub canvas: &'a Canvas,
    /// Maps logical coordinates to window pixels.
    pub viewport: Viewport,
    /// Device pixel ratio (for HiDPI). Stroke widths and point sizes are scaled by it.
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas, viewport: Viewport) -> Self {
        Self {
            canvas,
            viewport,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(51, 51, 51, 255),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene for a frame from the canvas' current render export.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builders() {
        let canvas = Canvas::new();
        let ctx = RenderContext::new(&canvas, Viewport::default())
            .with_scale_factor(2.0)
            .with_background(Color::from_rgba8(0, 0, 0, 255));
        assert_eq!(ctx.scale_factor, 2.0);
        assert_eq!(ctx.background_color.to_rgba8().r, 0);
    }

    #[test]
    fn test_error_messages() {
        let err = RendererError::RenderFailed("lost device".into());
        assert_eq!(err.to_string(), "Render failed: lost device");
    }
}
