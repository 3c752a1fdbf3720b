mod input;

use std::time::Instant;

use glam::Vec3;
use orb::FlyCamera;

pub use input::{Input, Movement};

/// Longest frame step fed to the camera, so a stall doesn't teleport it.
const MAX_FRAME_DT: f32 = 0.1;

/// Per-frame state owned by the app: held input, the camera and frame timing.
pub struct FrameContext {
    pub input: Input,
    pub camera: FlyCamera,
    mouse_sensitivity: f32,
    last_frame_time: Option<Instant>,
}

impl FrameContext {
    pub fn new(camera_start: Vec3, mouse_sensitivity: f32) -> Self {
        Self {
            input: Input::default(),
            camera: FlyCamera::new(camera_start),
            mouse_sensitivity,
            last_frame_time: None,
        }
    }

    pub fn update(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_frame_time
            .map(|t| now.duration_since(t).as_secs_f32())
            .unwrap_or(0.0)
            .min(MAX_FRAME_DT);
        self.last_frame_time = Some(now);

        self.step(dt);

        dt
    }

    /// Applies the input gathered since the last frame over `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.process_mouse_look();
        self.process_zoom();
        self.process_movement(dt);
    }

    pub fn is_camera_controlled(&self) -> bool {
        self.input.cursor_captured
    }

    /// Captured cursor drives the camera; a released cursor freezes it.
    pub fn set_camera_control(&mut self, enabled: bool) {
        self.input.cursor_captured = enabled;
        self.camera.set_enabled(enabled);
        if !enabled {
            self.input.release_all();
        }
    }

    fn process_mouse_look(&mut self) {
        if !self.input.cursor_captured {
            self.input.consume_mouse_delta();
            return;
        }

        let (dx, dy) = self.input.consume_mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            let sensitivity = self.mouse_sensitivity;
            self.camera
                .rotate(dx as f32 * sensitivity, -dy as f32 * sensitivity);
        }
    }

    fn process_zoom(&mut self) {
        let scroll = self.input.consume_scroll();
        if scroll != 0.0 {
            self.camera.zoom(scroll);
        }
    }

    fn process_movement(&mut self, dt: f32) {
        let held = self.input.held();
        if held.is_empty() || dt <= 0.0 {
            return;
        }

        if held.contains(Movement::FORWARD) {
            self.camera.move_forward(dt);
        }
        if held.contains(Movement::BACKWARD) {
            self.camera.move_backward(dt);
        }
        if held.contains(Movement::LEFT) {
            self.camera.move_left(dt);
        }
        if held.contains(Movement::RIGHT) {
            self.camera.move_right(dt);
        }
        if held.contains(Movement::UP) {
            self.camera.move_up(dt);
        }
        if held.contains(Movement::DOWN) {
            self.camera.move_down(dt);
        }
    }
}
