use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Fullscreen, Window, WindowId};

use crate::config::ViewerConfig;
use crate::debug::DebugStats;
use crate::game::FrameContext;
use crate::render::Renderer;

const WINDOW_TITLE: &str = "Orb";

/// Pixel-precise scroll (touchpads) per wheel line.
const PIXELS_PER_SCROLL_LINE: f64 = 20.0;

pub struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    frame: FrameContext,
    debug_stats: DebugStats,
    fullscreen: bool,
    startup_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        let frame = FrameContext::new(config.camera_start, config.mouse_sensitivity);
        Self {
            config,
            window: None,
            renderer: None,
            frame,
            debug_stats: DebugStats::new(),
            fullscreen: false,
            startup_error: None,
        }
    }

    /// Surfaces a failure that stopped the event loop during start-up.
    pub fn finish(self) -> anyhow::Result<()> {
        match self.startup_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn set_cursor_captured(&mut self, captured: bool) {
        self.frame.set_camera_control(captured);

        let Some(window) = &self.window else { return };

        if captured {
            let _ = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            window.set_cursor_visible(false);
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
    }

    fn toggle_fullscreen(&mut self) {
        let Some(window) = &self.window else { return };

        self.fullscreen = !self.fullscreen;
        window.set_fullscreen(self.fullscreen.then(|| Fullscreen::Borderless(None)));
    }

    fn handle_key(&mut self, event: KeyEvent, event_loop: &ActiveEventLoop) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;

        if pressed && !event.repeat {
            match key {
                KeyCode::Escape => {
                    event_loop.exit();
                    return;
                }
                KeyCode::Digit1 => {
                    let captured = self.frame.is_camera_controlled();
                    self.set_cursor_captured(!captured);
                    log::debug!("Camera control {}", if captured { "released" } else { "captured" });
                    return;
                }
                KeyCode::F11 => {
                    self.toggle_fullscreen();
                    return;
                }
                _ => {}
            }
        }

        self.frame.input.set_key(key, pressed);
    }

    fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_SCROLL_LINE) as f32,
        };
        self.frame.input.accumulate_scroll(lines);
    }

    fn handle_resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(size);
        }
    }

    fn handle_redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        let dt = self.frame.update();
        self.debug_stats.record_frame(dt);

        match renderer.render(&self.frame.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(renderer.size)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::error!("Render error: {:?}", e),
        }

        if let Some(window) = &self.window {
            if self.debug_stats.window_complete() {
                window.set_title(&format!("{} - {:.0} fps", WINDOW_TITLE, self.debug_stats.fps()));
            }
            window.request_redraw();
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(attrs)?);
        self.window = Some(window.clone());
        log::info!(
            "Window created at {}x{}",
            self.config.window_width,
            self.config.window_height
        );

        let rt = tokio::runtime::Runtime::new()?;
        let renderer = rt.block_on(Renderer::new(window.clone(), &self.config))?;
        self.renderer = Some(renderer);

        self.set_cursor_captured(true);
        window.request_redraw();
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            log::error!("Failed to start viewer: {e:#}");
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event, event_loop),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if !self.frame.is_camera_controlled() {
                    self.set_cursor_captured(true);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => self.handle_scroll(delta),
            WindowEvent::RedrawRequested => self.handle_redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.frame.input.accumulate_mouse_delta(delta);
        }
    }
}
