//! Scripted input.
//!
//! Each entry of [`SCRIPT`] is the list of events delivered before one frame.

use tessel_ui::{Context, Key, MouseButton};

/// One input event.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Cursor moved.
    Move(f32, f32),
    /// Left button pressed at a position.
    Press(f32, f32),
    /// Left button released at a position.
    Release(f32, f32),
    /// Wheel scrolled.
    Scroll(f32),
    /// Key pressed.
    KeyDown(Key),
    /// Key released.
    KeyUp(Key),
    /// Text typed.
    Type(&'static str),
}

impl Event {
    /// Feeds the event into `ctx`.
    pub fn apply(self, ctx: &mut Context) {
        match self {
            Self::Move(x, y) => ctx.input_mousemove(x, y),
            Self::Press(x, y) => ctx.input_mousedown(x, y, MouseButton::Left),
            Self::Release(x, y) => ctx.input_mouseup(x, y, MouseButton::Left),
            Self::Scroll(dy) => ctx.input_scroll(0.0, dy),
            Self::KeyDown(key) => ctx.input_keydown(key),
            Self::KeyUp(key) => ctx.input_keyup(key),
            Self::Type(text) => ctx.input_text(text),
        }
    }
}

/// Button 1 in the "Test Buttons" section of the demo window.
const BUTTON_1: (f32, f32) = (180.0, 118.0);
/// The log window's input field.
const INPUT: (f32, f32) = (420.0, 225.0);
/// Title bar of the log window.
const LOG_TITLE: (f32, f32) = (450.0, 50.0);

/// Events per frame. Frames past the end receive no input.
pub const SCRIPT: &[&[Event]] = &[
    &[],
    &[Event::Move(BUTTON_1.0, BUTTON_1.1)],
    &[Event::Press(BUTTON_1.0, BUTTON_1.1)],
    &[Event::Release(BUTTON_1.0, BUTTON_1.1)],
    &[Event::Move(INPUT.0, INPUT.1)],
    &[Event::Press(INPUT.0, INPUT.1)],
    &[Event::Release(INPUT.0, INPUT.1), Event::Type("hello from the script")],
    &[Event::KeyDown(Key::Return)],
    &[Event::KeyUp(Key::Return)],
    &[Event::Move(LOG_TITLE.0, LOG_TITLE.1)],
    &[Event::Press(LOG_TITLE.0, LOG_TITLE.1)],
    &[Event::Move(LOG_TITLE.0 + 40.0, LOG_TITLE.1 + 30.0)],
    &[Event::Release(LOG_TITLE.0 + 40.0, LOG_TITLE.1 + 30.0)],
    &[Event::Move(200.0, 300.0), Event::Scroll(40.0)],
    &[Event::Scroll(-40.0)],
];
