//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{Affine, Circle, Line, Stroke};
use linekit_core::collections::{LineSegment, PointBatch};
use peniko::{Color, Fill};
use vello::wgpu;
use vello::{AaConfig, RenderParams, RendererOptions, Scene};

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (for rendering).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Stroke one exported segment. The segment is mapped to pixels first so
    /// the stroke width stays in pixels rather than logical units.
    fn render_segment(&mut self, segment: &LineSegment, transform: Affine, scale: f64) {
        let screen = Line::new(transform * segment.segment.p0, transform * segment.segment.p1);
        let stroke = Stroke::new(segment.stroke_width * scale);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, segment.color, None, &screen);
    }

    /// Fill a round dot of the batch size at every point.
    fn render_points(&mut self, batch: &PointBatch, transform: Affine, scale: f64) {
        let radius = batch.size * scale / 2.0;
        for &position in &batch.positions {
            let dot = Circle::new(transform * position, radius);
            self.scene
                .fill(Fill::NonZero, Affine::IDENTITY, batch.color, None, &dot);
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();

        let transform = ctx.viewport.transform();
        let list = ctx.canvas.export_for_render();

        // Points draw over lines.
        for segment in &list.lines {
            self.render_segment(segment, transform, ctx.scale_factor);
        }
        self.render_points(&list.points, transform, ctx.scale_factor);

        log::trace!(
            "Built scene: {} lines, {} points",
            list.lines.len(),
            list.points.positions.len()
        );
    }
}

/// Draws Vello scenes onto a window surface.
///
/// Vello's compute shaders need a storage-bindable `Rgba8Unorm` target, while
/// surfaces are often `Bgra8Unorm`, so each frame renders into an intermediate
/// texture and blits it onto the surface.
pub struct SurfacePresenter {
    renderer: vello::Renderer,
    blitter: wgpu::util::TextureBlitter,
}

impl SurfacePresenter {
    /// Create a presenter for a surface with the given texture format.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> RenderResult<Self> {
        let renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{:?}", e)))?;
        let blitter = wgpu::util::TextureBlitter::new(device, surface_format);
        Ok(Self { renderer, blitter })
    }

    /// Render `scene` into `target`, clearing to `base_color` first.
    #[allow(clippy::too_many_arguments)]
    pub fn present(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
        target: &wgpu::TextureView,
        width: u32,
        height: u32,
        base_color: Color,
    ) -> RenderResult<()> {
        let render_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("linekit render texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::STORAGE_BINDING
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_view = render_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };
        self.renderer
            .render_to_texture(device, queue, scene, &render_view, &params)
            .map_err(|e| RendererError::RenderFailed(format!("{:?}", e)))?;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("linekit blit encoder"),
        });
        self.blitter.copy(device, &mut encoder, &render_view, target);
        queue.submit(std::iter::once(encoder.finish()));
        Ok(())
    }
}
