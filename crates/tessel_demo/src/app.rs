//! The demo application: a widget showcase, a log window and a style editor.
//!
//! All state the windows edit lives here; the engine only keeps what it
//! derives from ids.

use tessel_ui::{Color, ColorId, Context, Options, Rect, Response, TextBuffer, UiResult};

/// Capacity of the log window's input field.
const INPUT_CAPACITY: usize = 128;

/// Application state.
pub struct DemoApp {
    log: String,
    log_updated: bool,
    input: TextBuffer,
    background: [f32; 3],
    checks: [bool; 3],
}

impl DemoApp {
    /// Creates the demo with its initial state.
    ///
    /// # Errors
    ///
    /// Fails only if the input field capacity is invalid.
    pub fn new() -> UiResult<Self> {
        Ok(Self {
            log: String::new(),
            log_updated: false,
            input: TextBuffer::new(INPUT_CAPACITY)?,
            background: [90.0, 95.0, 100.0],
            checks: [true, false, true],
        })
    }

    /// Lines written to the log window so far.
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Background color picked with the sliders.
    pub fn background(&self) -> Color {
        let [r, g, b] = self.background.map(channel);
        Color::rgb(r, g, b)
    }

    fn write_log(&mut self, line: &str) {
        if !self.log.is_empty() {
            self.log.push('\n');
        }
        self.log.push_str(line);
        self.log_updated = true;
        tracing::info!(line, "log");
    }

    /// Declares every window for one frame.
    pub fn frame(&mut self, ctx: &mut Context) {
        self.demo_window(ctx);
        self.log_window(ctx);
        style_window(ctx);
    }

    fn demo_window(&mut self, ctx: &mut Context) {
        ctx.window("Demo Window", Rect::new(40.0, 40.0, 300.0, 450.0), Options::NONE, |ctx| {
            if let Some(window) = ctx.current_container_mut() {
                window.rect.width = window.rect.width.max(240.0);
                window.rect.height = window.rect.height.max(300.0);
            }

            if ctx.header("Window Info", Options::NONE).contains(Response::ACTIVE) {
                let rect = ctx.current_container().map_or(Rect::ZERO, |c| c.rect);
                ctx.layout_row(&[54.0, -1.0], 0.0);
                ctx.label("Position:");
                ctx.label(&format!("{}, {}", rect.x, rect.y));
                ctx.label("Size:");
                ctx.label(&format!("{}, {}", rect.width, rect.height));
            }

            if ctx.header("Test Buttons", Options::EXPANDED).contains(Response::ACTIVE) {
                ctx.layout_row(&[86.0, -110.0, -1.0], 0.0);
                ctx.label("Test buttons 1:");
                if ctx.button("Button 1").submitted() {
                    self.write_log("Pressed button 1");
                }
                if ctx.button("Button 2").submitted() {
                    self.write_log("Pressed button 2");
                }
                ctx.label("Test buttons 2:");
                if ctx.button("Button 3").submitted() {
                    self.write_log("Pressed button 3");
                }
                if ctx.button("Popup").submitted() {
                    ctx.open_popup("Test Popup");
                }
                if ctx.begin_popup("Test Popup") {
                    ctx.button("Hello");
                    ctx.button("World");
                }
                ctx.end_popup();
            }

            if ctx.header("Tree and Text", Options::EXPANDED).contains(Response::ACTIVE) {
                ctx.layout_row(&[140.0, -1.0], 0.0);
                ctx.layout_begin_column();
                self.tree(ctx);
                ctx.layout_end_column();

                ctx.layout_begin_column();
                ctx.layout_row(&[-1.0], 0.0);
                ctx.text(
                    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Maecenas lacinia, \
                     sem eu lacinia molestie, mi risus faucibus ipsum, eu varius magna felis a nulla.",
                );
                ctx.layout_end_column();
            }

            if ctx.header("Background Color", Options::EXPANDED).contains(Response::ACTIVE) {
                ctx.layout_row(&[-78.0, -1.0], 74.0);
                ctx.layout_begin_column();
                ctx.layout_row(&[46.0, -1.0], 0.0);
                for (name, value) in ["Red:", "Green:", "Blue:"].into_iter().zip(&mut self.background) {
                    ctx.label(name);
                    ctx.slider(name, value, 0.0, 255.0);
                }
                ctx.layout_end_column();

                let preview = ctx.layout_next();
                ctx.draw_rect(preview, self.background());
                let [r, g, b] = self.background.map(channel);
                let hex = format!("#{r:02X}{g:02X}{b:02X}");
                ctx.draw_control_text(&hex, preview, ColorId::Text, Options::ALIGN_CENTER);
            }
        });
    }

    fn tree(&mut self, ctx: &mut Context) {
        if ctx.begin_treenode("Test 1", Options::NONE).contains(Response::ACTIVE) {
            if ctx.begin_treenode("Test 1a", Options::NONE).contains(Response::ACTIVE) {
                ctx.label("Hello");
                ctx.label("World");
                ctx.end_treenode();
            }
            if ctx.begin_treenode("Test 1b", Options::NONE).contains(Response::ACTIVE) {
                if ctx.button("Button 1").submitted() {
                    self.write_log("Pressed button 1");
                }
                if ctx.button("Button 2").submitted() {
                    self.write_log("Pressed button 2");
                }
                ctx.end_treenode();
            }
            ctx.end_treenode();
        }
        if ctx.begin_treenode("Test 2", Options::NONE).contains(Response::ACTIVE) {
            ctx.layout_row(&[54.0, 54.0], 0.0);
            for n in 3..=6 {
                if ctx.button(&format!("Button {n}")).submitted() {
                    self.write_log(&format!("Pressed button {n}"));
                }
            }
            ctx.end_treenode();
        }
        if ctx.begin_treenode("Test 3", Options::NONE).contains(Response::ACTIVE) {
            for (i, checked) in self.checks.iter_mut().enumerate() {
                ctx.checkbox(&format!("Checkbox {}", i + 1), checked);
            }
            ctx.end_treenode();
        }
    }

    fn log_window(&mut self, ctx: &mut Context) {
        ctx.window("Log Window", Rect::new(350.0, 40.0, 300.0, 200.0), Options::NONE, |ctx| {
            ctx.layout_row(&[-1.0], -25.0);
            ctx.panel("Log Output", Options::NONE, |ctx| {
                ctx.layout_row(&[-1.0], -1.0);
                ctx.text(&self.log);
            });
            if self.log_updated {
                if let Some(panel) = ctx.container_mut("Log Output") {
                    panel.scroll.y = panel.content_size.y;
                }
                self.log_updated = false;
            }

            let mut submitted = false;
            ctx.layout_row(&[-70.0, -1.0], 0.0);
            if ctx.textbox("input", &mut self.input).submitted() {
                let id = ctx.last_id();
                ctx.set_focus(id);
                submitted = true;
            }
            if ctx.button("Submit").submitted() {
                submitted = true;
            }
            if submitted && !self.input.is_empty() {
                let line = self.input.as_str().to_owned();
                self.write_log(&line);
                self.input.clear();
            }
        });
    }
}

/// One slider per channel of every palette entry.
fn style_window(ctx: &mut Context) {
    ctx.window("Style Editor", Rect::new(350.0, 250.0, 300.0, 240.0), Options::NONE, |ctx| {
        let width = ctx.current_container().map_or(0.0, |c| c.body.width) * 0.14;
        ctx.layout_row(&[80.0, width, width, width, width, -1.0], 0.0);
        for id in ColorId::ALL {
            ctx.label(id.name());
            let color = ctx.style().color(id);
            let mut channels = [color.r, color.g, color.b, color.a].map(f32::from);
            ctx.push_id(id.name().as_bytes());
            for (label, value) in ["r", "g", "b", "a"].into_iter().zip(&mut channels) {
                ctx.slider_ex(label, value, 0.0, 255.0, 1.0, 0, Options::ALIGN_CENTER);
            }
            ctx.pop_id();
            let [r, g, b, a] = channels.map(channel);
            ctx.style_mut().set_color(id, Color::rgba(r, g, b, a));
            let swatch = ctx.layout_next();
            ctx.draw_rect(swatch, Color::rgba(r, g, b, a));
        }
    });
}

/// Rounds a slider value to a color channel.
fn channel(value: f32) -> u8 {
    // Sliders keep values inside 0..=255.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = value.round().clamp(0.0, 255.0) as u8;
    byte
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_stay_balanced() {
        let mut app = DemoApp::new().unwrap();
        let mut ctx = Context::new();
        for _ in 0..5 {
            ctx.begin().unwrap();
            app.frame(&mut ctx);
            ctx.end().unwrap();
        }
        assert!(ctx.commands().unwrap().count() > 0);
    }

    #[test]
    fn test_channel_rounding() {
        assert_eq!(channel(254.6), 255);
        assert_eq!(channel(-3.0), 0);
        assert_eq!(channel(f32::NAN), 0);
    }
}
