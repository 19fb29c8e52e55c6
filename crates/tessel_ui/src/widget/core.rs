//! Core widget types: option and result flags, and the shared control
//! drawing helpers every widget builds on.

use std::ops::{BitOr, BitOrAssign};

use crate::context::Context;
use crate::id::Id;
use crate::layout::{Rect, Vec2};
use crate::style::ColorId;

/// Widget and container option flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options(u32);

impl Options {
    /// No options.
    pub const NONE: Self = Self(0);
    /// Center text horizontally.
    pub const ALIGN_CENTER: Self = Self(1 << 0);
    /// Right-align text.
    pub const ALIGN_RIGHT: Self = Self(1 << 1);
    /// Control ignores the mouse.
    pub const NO_INTERACT: Self = Self(1 << 2);
    /// Don't draw the control or container frame.
    pub const NO_FRAME: Self = Self(1 << 3);
    /// Window has no resize handle.
    pub const NO_RESIZE: Self = Self(1 << 4);
    /// Container has no scrollbars.
    pub const NO_SCROLL: Self = Self(1 << 5);
    /// Window has no close button.
    pub const NO_CLOSE: Self = Self(1 << 6);
    /// Window has no title bar.
    pub const NO_TITLE: Self = Self(1 << 7);
    /// Control keeps focus after the mouse button is released.
    pub const HOLD_FOCUS: Self = Self(1 << 8);
    /// Window resizes itself to its content.
    pub const AUTO_SIZE: Self = Self(1 << 9);
    /// Window is a popup.
    pub const POPUP: Self = Self(1 << 10);
    /// Window starts closed.
    pub const CLOSED: Self = Self(1 << 11);
    /// Header / tree node starts expanded.
    pub const EXPANDED: Self = Self(1 << 12);
    /// Window cannot be dragged by its title bar.
    pub const NO_MOVE: Self = Self(1 << 13);

    /// Returns true if every flag in `other` is set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for Options {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// What happened to a widget this frame (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Response(u8);

impl Response {
    /// Nothing happened.
    pub const NONE: Self = Self(0);
    /// The pointer is over the widget.
    pub const HOVER: Self = Self(1 << 0);
    /// The widget holds focus, or a container / tree node is open.
    pub const ACTIVE: Self = Self(1 << 1);
    /// The widget's value changed this frame.
    pub const CHANGE: Self = Self(1 << 2);
    /// The widget was committed: a completed click or Enter.
    pub const SUBMIT: Self = Self(1 << 3);

    /// Returns true if every flag in `other` is set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Shorthand for `contains(Response::SUBMIT)`.
    #[must_use]
    pub const fn submitted(self) -> bool {
        self.contains(Self::SUBMIT)
    }

    /// Shorthand for `contains(Response::CHANGE)`.
    #[must_use]
    pub const fn changed(self) -> bool {
        self.contains(Self::CHANGE)
    }
}

impl BitOr for Response {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Response {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Context {
    /// Draws a filled frame with a border, unless the color is borderless.
    pub fn draw_frame(&mut self, rect: Rect, color: ColorId) {
        let fill = self.style().color(color);
        self.draw_rect(rect, fill);
        if color.is_borderless() {
            return;
        }
        let border = self.style().color(ColorId::Border);
        if border.a > 0 {
            self.draw_box(rect.expand(1.0), border);
        }
    }

    /// Draws a control's frame in its rest, hover or focus color.
    pub fn draw_control_frame(&mut self, id: Id, rect: Rect, color: ColorId, opts: Options) {
        if opts.contains(Options::NO_FRAME) {
            return;
        }
        let color = if self.focus_id() == id {
            color.focused()
        } else if self.hover_id() == id {
            color.hovered()
        } else {
            color
        };
        self.draw_frame(rect, color);
    }

    /// Draws one line of text inside `rect`, vertically centered and
    /// aligned per `opts`, clipped to `rect`.
    pub fn draw_control_text(&mut self, text: &str, rect: Rect, color: ColorId, opts: Options) {
        let width = self.text_width(text);
        let height = self.text_height();
        let padding = self.style().padding;
        let x = if opts.contains(Options::ALIGN_CENTER) {
            rect.x + (rect.width - width) / 2.0
        } else if opts.contains(Options::ALIGN_RIGHT) {
            rect.right() - width - padding
        } else {
            rect.x + padding
        };
        let y = rect.y + (rect.height - height) / 2.0;
        let color = self.style().color(color);
        self.push_clip_rect(rect);
        self.draw_text(text, Vec2::new(x, y), color);
        self.pop_clip_rect();
    }

    /// Hover and focus bits for `id`.
    #[must_use]
    pub fn control_response(&self, id: Id) -> Response {
        let mut res = Response::NONE;
        if self.hover_id() == id {
            res |= Response::HOVER;
        }
        if self.focus_id() == id {
            res |= Response::ACTIVE;
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine() {
        let opts = Options::NO_TITLE | Options::NO_CLOSE;
        assert!(opts.contains(Options::NO_TITLE));
        assert!(!opts.contains(Options::POPUP));
        assert!(opts.contains(Options::NONE));

        let mut res = Response::HOVER;
        res |= Response::SUBMIT;
        assert!(res.submitted());
        assert!(!res.changed());
        assert!(Response::NONE.is_empty());
    }
}
