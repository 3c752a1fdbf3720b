use bitflags::bitflags;
use winit::keyboard::KeyCode;

bitflags! {
    /// Camera movement directions currently held down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Movement: u8 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
    }
}

impl Movement {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(Self::FORWARD),
            KeyCode::KeyS => Some(Self::BACKWARD),
            KeyCode::KeyA => Some(Self::LEFT),
            KeyCode::KeyD => Some(Self::RIGHT),
            KeyCode::Space => Some(Self::UP),
            KeyCode::ShiftLeft => Some(Self::DOWN),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct Input {
    held: Movement,
    mouse_delta: (f64, f64),
    scroll_delta: f32,
    pub cursor_captured: bool,
}

impl Input {
    /// Returns false for keys that don't drive the camera.
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(direction) = Movement::from_key(key) else {
            return false;
        };
        self.held.set(direction, pressed);
        true
    }

    pub fn held(&self) -> Movement {
        self.held
    }

    pub fn release_all(&mut self) {
        self.held = Movement::empty();
    }

    pub fn accumulate_mouse_delta(&mut self, delta: (f64, f64)) {
        self.mouse_delta.0 += delta.0;
        self.mouse_delta.1 += delta.1;
    }

    pub fn consume_mouse_delta(&mut self) -> (f64, f64) {
        std::mem::take(&mut self.mouse_delta)
    }

    pub fn accumulate_scroll(&mut self, lines: f32) {
        self.scroll_delta += lines;
    }

    pub fn consume_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_map_to_directions() {
        assert_eq!(Movement::from_key(KeyCode::KeyW), Some(Movement::FORWARD));
        assert_eq!(Movement::from_key(KeyCode::KeyS), Some(Movement::BACKWARD));
        assert_eq!(Movement::from_key(KeyCode::KeyA), Some(Movement::LEFT));
        assert_eq!(Movement::from_key(KeyCode::KeyD), Some(Movement::RIGHT));
        assert_eq!(Movement::from_key(KeyCode::Space), Some(Movement::UP));
        assert_eq!(Movement::from_key(KeyCode::ShiftLeft), Some(Movement::DOWN));
        assert_eq!(Movement::from_key(KeyCode::ShiftRight), None);
        assert_eq!(Movement::from_key(KeyCode::Digit1), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut input = Input::default();
        assert!(input.set_key(KeyCode::KeyW, true));
        assert!(input.set_key(KeyCode::Space, true));
        assert_eq!(input.held(), Movement::FORWARD | Movement::UP);

        input.set_key(KeyCode::KeyW, false);
        assert_eq!(input.held(), Movement::UP);

        input.release_all();
        assert!(input.held().is_empty());
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut input = Input::default();
        assert!(!input.set_key(KeyCode::KeyQ, true));
        assert!(input.held().is_empty());
    }

    #[test]
    fn test_mouse_delta_accumulates_until_consumed() {
        let mut input = Input::default();
        input.accumulate_mouse_delta((1.5, -2.0));
        input.accumulate_mouse_delta((0.5, 1.0));
        assert_eq!(input.consume_mouse_delta(), (2.0, -1.0));
        assert_eq!(input.consume_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_scroll_accumulates_until_consumed() {
        let mut input = Input::default();
        input.accumulate_scroll(1.0);
        input.accumulate_scroll(2.0);
        assert_eq!(input.consume_scroll(), 3.0);
        assert_eq!(input.consume_scroll(), 0.0);
    }
}
