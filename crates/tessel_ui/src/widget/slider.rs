//! Sliders and number drag fields.
//!
//! Both switch to an inline text field on shift-click; the typed value is
//! committed on Enter or when the field loses focus. Text that does not parse
//! as a number leaves the value unchanged.

use std::fmt::Write;

use crate::context::Context;
use crate::id::Id;
use crate::input::{Key, MouseButton};
use crate::layout::Rect;
use crate::style::ColorId;

use super::core::{Options, Response};

/// Clamps `value` into the range spanned by `low` and `high`, in either order.
///
/// NaN maps to the lower bound.
#[must_use]
pub fn clamp_to_range(value: f32, low: f32, high: f32) -> f32 {
    let (min, max) = if low <= high { (low, high) } else { (high, low) };
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

impl Context {
    /// A horizontal slider over `[low, high]` with two decimals of value text.
    ///
    /// `label` keys the widget's id and is not drawn.
    pub fn slider(&mut self, label: &str, value: &mut f32, low: f32, high: f32) -> Response {
        self.slider_ex(label, value, low, high, 0.0, 2, Options::ALIGN_CENTER)
    }

    /// A slider with step snapping (`step == 0` disables it) and a custom
    /// number of decimals in the value text.
    #[allow(clippy::too_many_arguments)]
    pub fn slider_ex(
        &mut self,
        label: &str,
        value: &mut f32,
        low: f32,
        high: f32,
        step: f32,
        precision: usize,
        opts: Options,
    ) -> Response {
        let id = self.get_id(label.as_bytes());
        let base = self.layout_next();
        let last = *value;
        let mut res = Response::NONE;

        if let Some(edit) = self.number_textbox(id, base, value) {
            // Even typed values stay inside the range.
            *value = clamp_to_range(*value, low, high);
            return edit;
        }

        self.update_control(id, base, opts);
        let mut v = *value;
        let range = high - low;
        if self.focus_id() == id
            && (self.input.mouse_down(MouseButton::Left) || self.input.mouse_pressed(MouseButton::Left))
            && base.width > 0.0
        {
            v = low + (self.input.mouse_pos.x - base.x) * range / base.width;
            if step > 0.0 {
                v = (v / step).round() * step;
            }
        }
        v = clamp_to_range(v, low, high);
        *value = v;
        if v.to_bits() != last.to_bits() {
            res |= Response::CHANGE;
        }
        res |= self.control_response(id);

        self.draw_control_frame(id, base, ColorId::Base, opts);
        let thumb_width = self.style().thumb_size;
        let x = if range == 0.0 {
            0.0
        } else {
            (v - low) * (base.width - thumb_width) / range
        };
        let thumb = Rect::new(base.x + x, base.y, thumb_width, base.height);
        self.draw_control_frame(id, thumb, ColorId::Button, opts);
        self.draw_value_text(v, precision, base, opts);
        res
    }

    /// A number field changed by dragging horizontally, `step` per pixel.
    pub fn number(&mut self, label: &str, value: &mut f32, step: f32) -> Response {
        self.number_ex(label, value, step, 2, Options::ALIGN_CENTER)
    }

    /// A number field with a custom number of decimals.
    pub fn number_ex(
        &mut self,
        label: &str,
        value: &mut f32,
        step: f32,
        precision: usize,
        opts: Options,
    ) -> Response {
        let id = self.get_id(label.as_bytes());
        let base = self.layout_next();
        let last = *value;
        let mut res = Response::NONE;

        if let Some(edit) = self.number_textbox(id, base, value) {
            return edit;
        }

        self.update_control(id, base, opts);
        if self.focus_id() == id && self.input.mouse_down(MouseButton::Left) {
            *value += self.input.mouse_delta().x * step;
        }
        if value.to_bits() != last.to_bits() {
            res |= Response::CHANGE;
        }
        res |= self.control_response(id);

        self.draw_control_frame(id, base, ColorId::Base, opts);
        self.draw_value_text(*value, precision, base, opts);
        res
    }

    /// Draws `value` with `precision` decimals, formatted in the reused
    /// scratch string.
    fn draw_value_text(&mut self, value: f32, precision: usize, rect: Rect, opts: Options) {
        let mut text = std::mem::take(&mut self.scratch);
        text.clear();
        let _ = write!(text, "{value:.precision$}");
        self.draw_control_text(&text, rect, ColorId::Text, opts);
        self.scratch = text;
    }

    /// Runs the inline edit field of a slider or number field.
    ///
    /// Returns `Some` while the field is being edited, `None` when the caller
    /// should draw its regular control.
    fn number_textbox(&mut self, id: Id, rect: Rect, value: &mut f32) -> Option<Response> {
        if self.input.mouse_pressed(MouseButton::Left)
            && self.input.key_held(Key::Shift)
            && self.hover_id() == id
        {
            self.number_edit = Some(id);
            let mut text = std::mem::take(&mut self.scratch);
            text.clear();
            // Writing into a String cannot fail.
            let _ = write!(text, "{value}");
            if let Some(buf) = self.number_buf.as_mut() {
                buf.set(&text);
            }
            self.scratch = text;
        }
        if self.number_edit != Some(id) {
            return None;
        }

        let mut buf = self.number_buf.take()?;
        let res = self.textbox_raw(&mut buf, id, rect, Options::NONE);
        let committed = res.submitted() || self.focus_id() != id;
        if committed {
            match buf.as_str().trim().parse::<f32>() {
                Ok(parsed) if parsed.is_finite() => *value = parsed,
                _ => tracing::debug!(text = buf.as_str(), "number edit ignored"),
            }
            self.number_edit = None;
        }
        self.number_buf = Some(buf);
        if committed {
            None
        } else {
            Some(res)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WINDOW: Rect = Rect::new(0.0, 0.0, 300.0, 200.0);

    fn slider_frame(ctx: &mut Context, value: &mut f32, low: f32, high: f32) -> Response {
        ctx.begin().unwrap();
        let mut res = Response::NONE;
        ctx.window("Slider", WINDOW, Options::NO_TITLE, |ctx| {
            ctx.layout_row(&[200.0], 0.0);
            res = ctx.slider("value", value, low, high);
        });
        ctx.end().unwrap();
        res
    }

    #[test]
    fn test_degenerate_range_returns_bound() {
        let mut ctx = Context::new();
        let mut value = 42.0;
        slider_frame(&mut ctx, &mut value, 7.0, 7.0);
        assert_eq!(value, 7.0);
    }

    #[test]
    fn test_drag_sets_proportional_value() {
        let mut ctx = Context::new();
        let mut value = 0.0;
        // Slider cell spans x 5..205.
        ctx.input_mousemove(105.0, 10.0);
        slider_frame(&mut ctx, &mut value, 0.0, 100.0);
        slider_frame(&mut ctx, &mut value, 0.0, 100.0);
        ctx.input_mousedown(105.0, 10.0, MouseButton::Left);
        let res = slider_frame(&mut ctx, &mut value, 0.0, 100.0);
        assert!(res.changed());
        assert_eq!(value, 50.0);

        ctx.input_mousemove(1000.0, 10.0);
        slider_frame(&mut ctx, &mut value, 0.0, 100.0);
        assert_eq!(value, 100.0);
    }

    #[test]
    fn test_shift_click_edits_number() {
        let mut ctx = Context::new();
        let mut value = 1.0;
        let run = |ctx: &mut Context, value: &mut f32| {
            ctx.begin().unwrap();
            ctx.window("Num", WINDOW, Options::NO_TITLE, |ctx| {
                ctx.number("n", value, 1.0);
            });
            ctx.end().unwrap();
        };
        ctx.input_mousemove(10.0, 10.0);
        run(&mut ctx, &mut value);
        run(&mut ctx, &mut value);
        ctx.input_keydown(Key::Shift);
        ctx.input_mousedown(10.0, 10.0, MouseButton::Left);
        run(&mut ctx, &mut value);
        ctx.input_keyup(Key::Shift);
        ctx.input_mouseup(10.0, 10.0, MouseButton::Left);
        run(&mut ctx, &mut value);

        ctx.input_keydown(Key::Backspace);
        run(&mut ctx, &mut value);
        ctx.input_keyup(Key::Backspace);
        ctx.input_text("2.5");
        run(&mut ctx, &mut value);
        assert_eq!(value, 1.0);
        ctx.input_keydown(Key::Return);
        run(&mut ctx, &mut value);
        assert_eq!(value, 2.5);
    }

    #[test]
    fn test_value_text_reuses_scratch() {
        let mut ctx = Context::new();
        let mut value = 12.345;
        slider_frame(&mut ctx, &mut value, 0.0, 100.0);
        let texts: Vec<String> = ctx
            .commands()
            .unwrap()
            .filter_map(|c| match c {
                crate::render::Command::Text { text, .. } => Some(text.to_owned()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["12.35"]);

        let storage = ctx.scratch.as_ptr();
        for _ in 0..10 {
            slider_frame(&mut ctx, &mut value, 0.0, 100.0);
        }
        assert_eq!(ctx.scratch.as_ptr(), storage);
    }

    proptest! {
        #[test]
        fn prop_clamped_into_range(value in proptest::num::f32::ANY, low in -1e6f32..1e6, span in 0.0f32..1e6) {
            let high = low + span;
            let clamped = clamp_to_range(value, low, high);
            prop_assert!(clamped >= low && clamped <= high);
        }
    }
}
