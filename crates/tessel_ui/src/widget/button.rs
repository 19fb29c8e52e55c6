//! Labels, wrapped text, buttons and checkboxes.

use crate::context::Context;
use crate::layout::Rect;
use crate::render::Icon;
use crate::style::ColorId;

use super::core::{Options, Response};

impl Context {
    /// One line of text in the next cell.
    pub fn label(&mut self, text: &str) {
        let rect = self.layout_next();
        self.draw_control_text(text, rect, ColorId::Text, Options::NONE);
    }

    /// A paragraph wrapped at spaces to the current column width.
    ///
    /// Newlines force a break. Each line takes one layout row.
    pub fn text(&mut self, text: &str) {
        let color = self.style().color(ColorId::Text);
        let line_height = self.text_height();
        self.layout_begin_column();
        self.layout_row(&[-1.0], line_height);
        for paragraph in text.split('\n') {
            let mut rect = self.layout_next();
            let mut start = 0;
            let mut end = 0;
            let mut offset = 0;
            for word in paragraph.split(' ') {
                let word_end = offset + word.len();
                if end > start && self.text_width(&paragraph[start..word_end]) > rect.width {
                    self.draw_text(&paragraph[start..end], rect.origin(), color);
                    rect = self.layout_next();
                    start = offset;
                }
                end = word_end;
                offset = word_end + 1;
            }
            self.draw_text(&paragraph[start..end], rect.origin(), color);
        }
        self.layout_end_column();
    }

    /// A centered push button. Reports [`Response::SUBMIT`] on the frame the
    /// click completes.
    pub fn button(&mut self, label: &str) -> Response {
        self.button_ex(label, None, Options::ALIGN_CENTER)
    }

    /// A push button with an optional icon.
    ///
    /// The id comes from `label`, or from the icon when the label is empty.
    pub fn button_ex(&mut self, label: &str, icon: Option<Icon>, opts: Options) -> Response {
        let id = match icon {
            Some(icon) if label.is_empty() => self.get_id(&icon.id().to_le_bytes()),
            _ => self.get_id(label.as_bytes()),
        };
        let rect = self.layout_next();
        let had_focus = self.focus_id() == id;
        let over = self.update_control(id, rect, opts);

        let mut res = self.control_response(id);
        if self.clicked(id, had_focus, over) {
            res |= Response::SUBMIT;
        }

        self.draw_control_frame(id, rect, ColorId::Button, opts);
        if !label.is_empty() {
            self.draw_control_text(label, rect, ColorId::Text, opts);
        }
        if let Some(icon) = icon {
            let color = self.style().color(ColorId::Text);
            self.draw_icon(icon, rect, color);
        }
        res
    }

    /// A labelled checkbox. A completed click flips `state` and reports
    /// [`Response::CHANGE`].
    pub fn checkbox(&mut self, label: &str, state: &mut bool) -> Response {
        let id = self.get_id(label.as_bytes());
        let rect = self.layout_next();
        let check = Rect::new(rect.x, rect.y, rect.height, rect.height);
        let had_focus = self.focus_id() == id;
        let over = self.update_control(id, rect, Options::NONE);

        let mut res = self.control_response(id);
        if self.clicked(id, had_focus, over) {
            *state = !*state;
            res |= Response::CHANGE;
        }

        self.draw_control_frame(id, check, ColorId::Base, Options::NONE);
        if *state {
            let color = self.style().color(ColorId::Text);
            self.draw_icon(Icon::Check, check, color);
        }
        let text = Rect::new(rect.x + check.width, rect.y, rect.width - check.width, rect.height);
        self.draw_control_text(label, text.clamped(), ColorId::Text, Options::NONE);
        res
    }
}
