//! Single-line text field over a fixed-capacity [`TextBuffer`].

use crate::context::Context;
use crate::id::Id;
use crate::input::Key;
use crate::layout::{Rect, Vec2};
use crate::style::ColorId;
use crate::text::TextBuffer;

use super::core::{Options, Response};

impl Context {
    /// A text field in the next cell. `label` keys the widget's id and is not drawn.
    pub fn textbox(&mut self, label: &str, buf: &mut TextBuffer) -> Response {
        self.textbox_ex(label, buf, Options::NONE)
    }

    /// A text field with options.
    pub fn textbox_ex(&mut self, label: &str, buf: &mut TextBuffer, opts: Options) -> Response {
        let id = self.get_id(label.as_bytes());
        let rect = self.layout_next();
        self.textbox_raw(buf, id, rect, opts)
    }

    /// A text field at an explicit rectangle with a caller-chosen id.
    ///
    /// While focused it drains the frame's typed text into `buf` (whole
    /// characters only, up to the buffer's capacity), deletes one character
    /// per Backspace and reports [`Response::SUBMIT`] on Return.
    pub fn textbox_raw(&mut self, buf: &mut TextBuffer, id: Id, rect: Rect, opts: Options) -> Response {
        self.update_control(id, rect, opts | Options::HOLD_FOCUS);
        let mut res = self.control_response(id);

        if self.focus_id() == id {
            let typed = self.input.text_input();
            if !typed.is_empty() && buf.push_str(typed) > 0 {
                res |= Response::CHANGE;
            }
            if self.input.key_pressed(Key::Backspace) && buf.pop_char().is_some() {
                res |= Response::CHANGE;
            }
            if self.input.key_pressed(Key::Return) {
                self.set_focus(Id::NONE);
                res |= Response::SUBMIT;
            }
        }

        self.draw_control_frame(id, rect, ColorId::Base, opts);
        if self.focus_id() == id {
            let color = self.style().color(ColorId::Text);
            let padding = self.style().padding;
            let text_width = self.text_width(buf.as_str());
            let text_height = self.text_height();
            // Long text scrolls left so the caret stays visible.
            let overflow = rect.width - padding - text_width - 1.0;
            let x = rect.x + overflow.min(padding);
            let y = rect.y + (rect.height - text_height) / 2.0;
            self.push_clip_rect(rect);
            self.draw_text(buf.as_str(), Vec2::new(x, y), color);
            self.draw_rect(Rect::new(x + text_width, y, 1.0, text_height), color);
            self.pop_clip_rect();
        } else {
            self.draw_control_text(buf.as_str(), rect, ColorId::Text, opts);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    const WINDOW: Rect = Rect::new(0.0, 0.0, 300.0, 200.0);

    fn run(ctx: &mut Context, buf: &mut TextBuffer) -> Response {
        ctx.begin().unwrap();
        let mut res = Response::NONE;
        ctx.window("Edit", WINDOW, Options::NO_TITLE, |ctx| {
            res = ctx.textbox("name", buf);
        });
        ctx.end().unwrap();
        res
    }

    fn focus(ctx: &mut Context, buf: &mut TextBuffer) {
        ctx.input_mousemove(10.0, 10.0);
        run(ctx, buf);
        run(ctx, buf);
        ctx.input_mousedown(10.0, 10.0, MouseButton::Left);
        run(ctx, buf);
        ctx.input_mouseup(10.0, 10.0, MouseButton::Left);
        run(ctx, buf);
    }

    #[test]
    fn test_typing_requires_focus() {
        let mut ctx = Context::new();
        let mut buf = TextBuffer::new(32).unwrap();
        ctx.input_text("ignored");
        run(&mut ctx, &mut buf);
        assert!(buf.is_empty());

        focus(&mut ctx, &mut buf);
        ctx.input_text("hello");
        assert!(run(&mut ctx, &mut buf).changed());
        assert_eq!(buf.as_str(), "hello");
    }

    #[test]
    fn test_overflow_truncates_and_return_submits() {
        let mut ctx = Context::new();
        let mut buf = TextBuffer::new(8).unwrap();
        focus(&mut ctx, &mut buf);
        ctx.input_text("ABCDEFGHIJKLMNOPQRST");
        run(&mut ctx, &mut buf);
        assert_eq!(buf.as_str(), "ABCDEFG");

        ctx.input_keydown(Key::Backspace);
        run(&mut ctx, &mut buf);
        ctx.input_keyup(Key::Backspace);
        assert_eq!(buf.as_str(), "ABCDEF");

        ctx.input_keydown(Key::Return);
        let res = run(&mut ctx, &mut buf);
        assert!(res.submitted());
        assert!(ctx.focus_id().is_none());
    }

    #[test]
    fn test_focus_survives_skipped_frame() {
        let mut ctx = Context::new();
        let mut buf = TextBuffer::new(32).unwrap();
        focus(&mut ctx, &mut buf);
        let id = ctx.focus_id();
        assert!(!id.is_none());

        ctx.begin().unwrap();
        ctx.window("Edit", WINDOW, Options::NO_TITLE, |ctx| ctx.label("elsewhere"));
        ctx.end().unwrap();
        assert_eq!(ctx.focus_id(), id);

        ctx.input_text("hi");
        run(&mut ctx, &mut buf);
        assert_eq!(buf.as_str(), "hi");
    }

    fn assert_key_drops_focus(key: Key) {
        let mut ctx = Context::new();
        let mut buf = TextBuffer::new(32).unwrap();
        focus(&mut ctx, &mut buf);
        assert!(!ctx.focus_id().is_none());

        ctx.input_keydown(key);
        run(&mut ctx, &mut buf);
        ctx.input_keyup(key);
        assert!(ctx.focus_id().is_none());

        ctx.input_text("late");
        assert!(!run(&mut ctx, &mut buf).changed());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_escape_drops_focus() {
        assert_key_drops_focus(Key::Escape);
    }

    #[test]
    fn test_tab_drops_focus() {
        assert_key_drops_focus(Key::Tab);
    }
}
