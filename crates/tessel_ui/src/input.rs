//! Raw input for one frame.
//!
//! The windowing layer feeds events in before the frame's widget calls.
//! Held state (buttons, keys, cursor) persists; edges (pressed, released),
//! wheel delta and typed text are cleared at the end of every frame.

use crate::layout::Vec2;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Keyboard key the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Shift modifier.
    Shift,
    /// Control modifier.
    Ctrl,
    /// Alt modifier.
    Alt,
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Return,
    /// Escape key.
    Escape,
    /// Tab key.
    Tab,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current mouse position.
    pub mouse_pos: Vec2,
    /// Mouse position at the end of the previous frame.
    pub last_mouse_pos: Vec2,
    /// Mouse buttons pressed this frame.
    buttons_pressed: u8,
    /// Mouse buttons released this frame.
    buttons_released: u8,
    /// Mouse buttons currently held.
    buttons_down: u8,
    /// Mouse scroll delta.
    pub scroll_delta: Vec2,
    /// Keys pressed this frame.
    keys_pressed: u8,
    /// Keys currently held.
    keys_down: u8,
    /// Text input this frame.
    text_input: String,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text_input: String::with_capacity(64),
            ..Self::default()
        }
    }

    /// Clears per-frame edges once the frame's widgets have seen them.
    pub fn end_frame(&mut self) {
        self.last_mouse_pos = self.mouse_pos;
        self.buttons_pressed = 0;
        self.buttons_released = 0;
        self.scroll_delta = Vec2::ZERO;
        self.keys_pressed = 0;
        self.text_input.clear();
    }

    /// Updates mouse position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_pos = Vec2::new(x, y);
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_released |= mask;
        self.buttons_down &= !mask;
    }

    /// Records scroll input.
    pub fn scroll(&mut self, dx: f32, dy: f32) {
        self.scroll_delta.x += dx;
        self.scroll_delta.y += dy;
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        let mask = Self::key_mask(key);
        self.keys_pressed |= mask;
        self.keys_down |= mask;
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Key) {
        self.keys_down &= !Self::key_mask(key);
    }

    /// Records text input.
    pub fn text(&mut self, text: &str) {
        self.text_input.push_str(text);
    }

    /// Text typed this frame.
    #[must_use]
    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    /// Returns true if the mouse button was pressed this frame.
    #[must_use]
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    /// Returns true if any mouse button was pressed this frame.
    #[must_use]
    pub fn any_mouse_pressed(&self) -> bool {
        self.buttons_pressed != 0
    }

    /// Returns true if the mouse button was released this frame.
    #[must_use]
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        (self.buttons_released & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Returns true if any mouse button is currently held.
    #[must_use]
    pub fn any_mouse_down(&self) -> bool {
        self.buttons_down != 0
    }

    /// Returns true if the key was pressed this frame.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        (self.keys_pressed & Self::key_mask(key)) != 0
    }

    /// Returns true if the key is currently held.
    #[must_use]
    pub fn key_held(&self, key: Key) -> bool {
        (self.keys_down & Self::key_mask(key)) != 0
    }

    /// Returns the mouse movement since the previous frame.
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        Vec2::new(
            self.mouse_pos.x - self.last_mouse_pos.x,
            self.mouse_pos.y - self.last_mouse_pos.y,
        )
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }

    /// Returns the bit mask for a key.
    const fn key_mask(key: Key) -> u8 {
        match key {
            Key::Shift => 1,
            Key::Ctrl => 2,
            Key::Alt => 4,
            Key::Backspace => 8,
            Key::Return => 16,
            Key::Escape => 32,
            Key::Tab => 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_click() {
        let mut input = InputState::new();

        input.mouse_button_down(MouseButton::Left);
        assert!(input.mouse_pressed(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.end_frame();
        assert!(!input.mouse_pressed(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.mouse_button_up(MouseButton::Left);
        assert!(input.mouse_released(MouseButton::Left));
        assert!(!input.mouse_down(MouseButton::Left));
        assert!(!input.any_mouse_down());
    }

    #[test]
    fn test_keys_and_text_cleared_at_frame_end() {
        let mut input = InputState::new();
        input.key_down(Key::Shift);
        input.key_down(Key::Return);
        input.text("hi");
        input.scroll(0.0, -3.0);

        assert!(input.key_pressed(Key::Return));
        assert_eq!(input.text_input(), "hi");

        input.end_frame();
        assert!(!input.key_pressed(Key::Return));
        assert!(input.key_held(Key::Shift));
        assert_eq!(input.text_input(), "");
        assert_eq!(input.scroll_delta, Vec2::ZERO);
    }

    #[test]
    fn test_mouse_delta() {
        let mut input = InputState::new();
        input.set_mouse_pos(10.0, 10.0);
        input.end_frame();
        input.set_mouse_pos(15.0, 7.0);
        assert_eq!(input.mouse_delta(), Vec2::new(5.0, -3.0));
    }
}
