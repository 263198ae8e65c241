use winit::dpi::PhysicalPosition;
use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::KeyCode;

use crate::core::{Key, MouseButton};

/// Bridges winit input to the observer-facing input types.
///
/// winit reports mouse buttons without a position, so the last cursor
/// position is tracked here and attached to button events.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    cursor: (i32, i32),
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move and return the new position in whole pixels
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> (i32, i32) {
        self.cursor = (position.x as i32, position.y as i32);
        self.cursor
    }

    /// Last known cursor position
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Map winit KeyCode to Key. Escape maps to `None`; it is handled as
    /// quit before mapping.
    pub fn map_key(keycode: KeyCode) -> Option<Key> {
        match keycode {
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyA => Some(Key::A),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::KeyD => Some(Key::D),
            KeyCode::KeyP => Some(Key::P),
            KeyCode::KeyR => Some(Key::R),
            KeyCode::Space => Some(Key::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Key::Shift),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(Key::Enter),
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::ArrowLeft => Some(Key::Left),
            KeyCode::ArrowRight => Some(Key::Right),
            _ => None,
        }
    }

    /// Map winit MouseButton to MouseButton
    pub fn map_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
        match button {
            WinitMouseButton::Left => Some(MouseButton::Left),
            WinitMouseButton::Right => Some(MouseButton::Right),
            WinitMouseButton::Middle => Some(MouseButton::Middle),
            _ => None,
        }
    }
}
