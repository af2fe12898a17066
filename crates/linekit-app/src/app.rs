//! Main application: window, GPU surface and event plumbing.

use kurbo::Point;
use linekit_core::config::ConfigError;
use linekit_core::{Canvas, EditorConfig, KeyEvent, PointerEvent, Viewport};
use linekit_render::{RenderContext, Renderer, RendererError, SurfacePresenter, VelloRenderer};
use peniko::Color;
use std::sync::Arc;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Errors that stop the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("Failed to create surface: {0}")]
    Surface(String),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub editor: EditorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "LineKit".to_string(),
            width: 600,
            height: 600,
            background_color: Color::from_rgba8(51, 51, 51, 255),
            editor: EditorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Replace the editor settings.
    pub fn with_editor(mut self, editor: EditorConfig) -> Self {
        self.editor = editor;
        self
    }

    fn window_title(&self, canvas: &Canvas) -> String {
        format!("{} - {}", self.title, canvas.mode())
    }
}

/// Runtime state for the application.
struct AppState {
    window: Arc<Window>,
    surface: RenderSurface<'static>,
    presenter: SurfacePresenter,
    renderer: VelloRenderer,
    canvas: Canvas,
    viewport: Viewport,
    /// Last pointer position, in logical coordinates.
    cursor: Point,
}

impl AppState {
    fn dispatch(&mut self, event: PointerEvent) {
        let outcome = self.canvas.handle_pointer_event(event);
        log::debug!("{:?} -> {:?}", event, outcome);
        if outcome.changes_scene() {
            self.window.request_redraw();
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// First fatal error hit inside the event loop.
    error: Option<AppError>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            error: None,
        }
    }

    /// Run the application until the window closes.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        let mut app = App::with_config(config);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<AppState, AppError> {
        log::info!("Creating window...");
        let canvas = Canvas::with_config(self.config.editor);
        let window_attrs = Window::default_attributes()
            .with_title(self.config.window_title(&canvas))
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);
        let surface: RenderSurface<'static> = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| AppError::Surface(format!("{:?}", e)))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let presenter = SurfacePresenter::new(device, surface.config.format)?;

        Ok(AppState {
            window,
            surface,
            presenter,
            renderer: VelloRenderer::new(),
            canvas,
            viewport: Viewport::new(width as f64, height as f64),
            cursor: Point::ORIGIN,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }
}

/// Map a winit button onto the editor's buttons.
fn pointer_button(button: MouseButton) -> Option<linekit_core::MouseButton> {
    match button {
        MouseButton::Left => Some(linekit_core::MouseButton::Left),
        MouseButton::Right => Some(linekit_core::MouseButton::Right),
        MouseButton::Middle => Some(linekit_core::MouseButton::Middle),
        _ => None,
    }
}

/// Map a winit key onto an editor key event.
fn key_event(key: &Key) -> Option<KeyEvent> {
    match key {
        Key::Character(c) => Some(KeyEvent::Character(c.to_string())),
        Key::Named(NamedKey::Escape) => Some(KeyEvent::Escape),
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.init(event_loop) {
            Ok(state) => {
                log::info!("Mode: {}", state.canvas.mode());
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                state.viewport.resize(size.width as f64, size.height as f64);

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let ctx = RenderContext::new(&state.canvas, state.viewport)
                    .with_scale_factor(state.window.scale_factor())
                    .with_background(self.config.background_color);
                state.renderer.build_scene(&ctx);
                let base_color = state.renderer.background_color(&ctx);
                let scene = state.renderer.take_scene();

                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                let device_handle = &render_cx.devices[state.surface.dev_id];

                let surface_texture = match state.surface.surface.get_current_texture() {
                    Ok(t) => t,
                    Err(e) => {
                        log::warn!("Failed to get surface texture: {:?}", e);
                        return;
                    }
                };
                let surface_view = surface_texture
                    .texture
                    .create_view(&vello::wgpu::TextureViewDescriptor::default());

                if let Err(e) = state.presenter.present(
                    &device_handle.device,
                    &device_handle.queue,
                    &scene,
                    &surface_view,
                    state.surface.config.width,
                    state.surface.config.height,
                    base_color,
                ) {
                    log::error!("{}", e);
                    return;
                }
                surface_texture.present();
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.cursor = state
                    .viewport
                    .screen_to_logical(Point::new(position.x, position.y));
                let event = PointerEvent::Move {
                    position: state.cursor,
                };
                state.dispatch(event);
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let Some(button) = pointer_button(button) else {
                    return;
                };
                let position = state.cursor;
                let event = match btn_state {
                    ElementState::Pressed => PointerEvent::Down { position, button },
                    ElementState::Released => PointerEvent::Up { position, button },
                };
                state.dispatch(event);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let Some(key) = key_event(&event.logical_key) else {
                    return;
                };
                if state.canvas.handle_key(&key) {
                    state.window.set_title(&self.config.window_title(&state.canvas));
                    state.window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
