//! Windows, popups and panels.
//!
//! A window is a root container: its commands form one contiguous range that
//! `end()` orders against the other roots by z-index. Popups are windows that
//! always paint above regular windows and close when the user clicks
//! elsewhere. Panels are non-root scroll regions nested in the current window.
//!
//! Every `begin_window` must be matched by an `end_window`, whether or not it
//! returned true.

use crate::context::{Context, StackedContainer};
use crate::id::Id;
use crate::input::MouseButton;
use crate::layout::{Layout, Rect, Vec2};
use crate::render::Icon;
use crate::style::ColorId;
use crate::error::{StackKind, UiError};
use crate::widget::Options;

/// Smallest size a window can be resized to.
const MIN_WINDOW_SIZE: Vec2 = Vec2::new(96.0, 64.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Context {
    /// Opens a window.
    ///
    /// Returns false if the window is closed; nothing should be placed in it
    /// then, but [`Context::end_window`] must still be called.
    pub fn begin_window(&mut self, title: &str, rect: Rect, opts: Options) -> bool {
        let id = self.get_id(title.as_bytes());
        let open = self
            .containers
            .get(id)
            .map_or(!opts.contains(Options::CLOSED), |c| c.open);
        if !open {
            self.window_stack.push(false);
            return false;
        }

        let frame = self.frame();
        let container = self.containers.get_or_create(id);
        container.last_frame = frame;
        container.popup = opts.contains(Options::POPUP);
        if container.rect.width == 0.0 {
            container.rect = rect;
        }
        let mut rect = container.rect;

        self.window_stack.push(true);
        self.push_id_raw(id);
        self.begin_root_container(id);

        let mut body = rect;
        if !opts.contains(Options::NO_FRAME) {
            self.draw_frame(rect, ColorId::WindowBg);
        }

        if !opts.contains(Options::NO_TITLE) {
            let title_rect = Rect::new(rect.x, rect.y, rect.width, self.style().title_height);
            self.draw_frame(title_rect, ColorId::TitleBg);

            let title_id = self.get_id(b"!title");
            self.update_control(title_id, title_rect, opts);
            self.draw_control_text(title, title_rect, ColorId::TitleText, opts);
            if title_id == self.focus_id()
                && self.input.mouse_down(MouseButton::Left)
                && !opts.contains(Options::NO_MOVE)
            {
                let delta = self.input.mouse_delta();
                rect.x += delta.x;
                rect.y += delta.y;
                body.x += delta.x;
                body.y += delta.y;
                if let Some(container) = self.containers.get_mut(id) {
                    container.rect = rect;
                }
            }
            body.y += title_rect.height;
            body.height = (body.height - title_rect.height).max(0.0);

            if !opts.contains(Options::NO_CLOSE) {
                let close_id = self.get_id(b"!close");
                let size = title_rect.height;
                let close_rect = Rect::new(title_rect.right() - size, title_rect.y, size, size);
                let color = self.style().color(ColorId::TitleText);
                self.draw_icon(Icon::Close, close_rect, color);
                self.update_control(close_id, close_rect, opts);
                if self.input.mouse_pressed(MouseButton::Left) && close_id == self.focus_id() {
                    self.set_open(id, false);
                }
            }
        }

        self.push_container_body(id, body, opts);

        if !opts.contains(Options::NO_RESIZE) {
            let size = self.style().title_height;
            let resize_id = self.get_id(b"!resize");
            let handle = Rect::new(rect.right() - size, rect.bottom() - size, size, size);
            self.update_control(resize_id, handle, opts);
            let color = self.style().color(ColorId::Text);
            self.draw_icon(Icon::Resize, handle, color);
            if resize_id == self.focus_id() && self.input.mouse_down(MouseButton::Left) {
                let delta = self.input.mouse_delta();
                if let Some(container) = self.containers.get_mut(id) {
                    container.rect.width = (container.rect.width + delta.x).max(MIN_WINDOW_SIZE.x);
                    container.rect.height =
                        (container.rect.height + delta.y).max(MIN_WINDOW_SIZE.y);
                }
            }
        }

        if opts.contains(Options::AUTO_SIZE) {
            let layout_body = self.layout_stack.last().map_or(rect, |l| l.body);
            if let Some(container) = self.containers.get_mut(id) {
                container.rect.width = container.content_size.x + (rect.width - layout_body.width);
                container.rect.height =
                    container.content_size.y + (rect.height - layout_body.height);
            }
        }

        // Resizing and auto-sizing change the rect after the body was laid out.
        if let Some(container) = self.containers.get_mut(id) {
            container.body = container.body.clamp_to(&container.rect);
        }

        if opts.contains(Options::POPUP)
            && self.input.any_mouse_pressed()
            && self.hover_root != Some(id)
        {
            self.set_open(id, false);
        }

        let body = self.containers.get(id).map_or(body, |c| c.body);
        self.push_clip_rect(body);
        true
    }

    /// Closes the window opened by the matching [`Context::begin_window`].
    pub fn end_window(&mut self) {
        match self.window_stack.pop() {
            None => self.fail(UiError::StackUnderflow(StackKind::Container)),
            Some(false) => {}
            Some(true) => {
                self.pop_clip_rect();
                self.end_root_container();
            }
        }
    }

    /// Runs `build` inside a window and always balances the window stack.
    ///
    /// Returns `None` if the window is closed.
    pub fn window<R>(
        &mut self,
        title: &str,
        rect: Rect,
        opts: Options,
        build: impl FnOnce(&mut Self) -> R,
    ) -> Option<R> {
        let result = if self.begin_window(title, rect, opts) {
            Some(build(self))
        } else {
            None
        };
        self.end_window();
        result
    }

    /// Opens the popup `name` at the cursor, on top of everything.
    pub fn open_popup(&mut self, name: &str) {
        let id = self.get_id(name.as_bytes());
        let mouse = self.input.mouse_pos;
        let container = self.containers.get_or_create(id);
        container.rect = Rect::new(mouse.x, mouse.y, 1.0, 1.0);
        container.open = true;
        container.popup = true;
        self.hover_root = Some(id);
        self.next_hover_root = Some(id);
        self.containers.bring_to_front(id);
        tracing::debug!(id = id.raw(), "popup opened");
    }

    /// Begins the popup `name`. Returns true while it is open.
    ///
    /// Like windows, must be matched by [`Context::end_popup`] either way.
    pub fn begin_popup(&mut self, name: &str) -> bool {
        let opts = Options::POPUP
            | Options::AUTO_SIZE
            | Options::NO_RESIZE
            | Options::NO_SCROLL
            | Options::NO_TITLE
            | Options::CLOSED;
        self.begin_window(name, Rect::ZERO, opts)
    }

    /// Ends the popup begun by [`Context::begin_popup`].
    pub fn end_popup(&mut self) {
        self.end_window();
    }

    /// Begins a scrollable panel in the next layout cell.
    pub fn begin_panel(&mut self, name: &str, opts: Options) {
        self.push_id(name.as_bytes());
        let id = self.last_id();
        let rect = self.layout_next();
        let frame = self.frame();
        let container = self.containers.get_or_create(id);
        container.rect = rect;
        container.last_frame = frame;
        if !opts.contains(Options::NO_FRAME) {
            self.draw_frame(rect, ColorId::PanelBg);
        }
        self.container_stack.push(StackedContainer { id, root: false });
        self.push_container_body(id, rect, opts);
        let body = self.containers.get(id).map_or(rect, |c| c.body);
        self.push_clip_rect(body);
    }

    /// Ends the panel begun by [`Context::begin_panel`].
    pub fn end_panel(&mut self) {
        self.pop_clip_rect();
        self.pop_container();
    }

    /// Runs `build` inside a panel.
    pub fn panel<R>(&mut self, name: &str, opts: Options, build: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_panel(name, opts);
        let result = build(self);
        self.end_panel();
        result
    }

    fn set_open(&mut self, id: Id, open: bool) {
        if let Some(container) = self.containers.get_mut(id) {
            if container.open != open {
                container.open = open;
                tracing::debug!(id = id.raw(), open, "container visibility changed");
            }
        }
    }

    fn begin_root_container(&mut self, id: Id) {
        self.container_stack.push(StackedContainer { id, root: true });
        self.root_list.push(id);
        let head = self.commands.push_jump();
        // Roots never inherit the clip rect of whatever was open before them.
        self.push_unclipped();
        let mouse = self.input.mouse_pos;

        let Some(container) = self.containers.get_mut(id) else {
            return;
        };
        container.head = head;
        let rank = (container.popup, container.zindex);
        if container.rect.contains(mouse) {
            let beats_current = self
                .next_hover_root
                .and_then(|current| self.containers.get(current))
                .map_or(true, |current| rank > (current.popup, current.zindex));
            if beats_current {
                self.next_hover_root = Some(id);
            }
        }
    }

    fn end_root_container(&mut self) {
        let tail = self.commands.push_jump();
        let end = self.commands.len();
        if let Some(top) = self.container_stack.last().copied() {
            if let Some(container) = self.containers.get_mut(top.id) {
                container.tail = tail;
                // Linear iteration skips the range; `end()` links it in z-order.
                let head = container.head;
                self.commands.set_jump(head, end);
            }
        }
        self.pop_clip_rect();
        self.pop_container();
    }

    fn pop_container(&mut self) {
        let Some(top) = self.container_stack.pop() else {
            self.fail(UiError::StackUnderflow(StackKind::Container));
            return;
        };
        match self.layout_stack.pop() {
            Some(layout) => {
                if let Some(container) = self.containers.get_mut(top.id) {
                    container.content_size = layout.content_size();
                }
            }
            None => self.fail(UiError::StackUnderflow(StackKind::Layout)),
        }
        self.pop_id();
    }

    /// Reserves scrollbars, opens the container's root layout and records its body.
    fn push_container_body(&mut self, id: Id, body: Rect, opts: Options) {
        let mut body = body.clamped();
        if !opts.contains(Options::NO_SCROLL) {
            self.scrollbars(id, &mut body);
        }
        let padding = self.style().padding;
        let Some(container) = self.containers.get_mut(id) else {
            return;
        };
        container.body = body.clamp_to(&container.rect);
        let scroll = container.scroll;
        let layout = Layout::new(body.shrink(padding), scroll, self.style());
        self.layout_stack.push(layout);
    }

    fn scrollbars(&mut self, id: Id, body: &mut Rect) {
        let Some(container) = self.containers.get(id) else {
            return;
        };
        let padding = self.style().padding;
        let size = self.style().scrollbar_size;
        let content = Vec2::new(
            container.content_size.x + padding * 2.0,
            container.content_size.y + padding * 2.0,
        );
        let previous = container.body;

        self.push_clip_rect(*body);
        if content.y > previous.height {
            body.width = (body.width - size).max(0.0);
        }
        if content.x > previous.width {
            body.height = (body.height - size).max(0.0);
        }
        self.scrollbar(id, *body, content, Axis::Vertical);
        self.scrollbar(id, *body, content, Axis::Horizontal);
        self.pop_clip_rect();
    }

    fn scrollbar(&mut self, id: Id, body: Rect, content: Vec2, axis: Axis) {
        let size = self.style().scrollbar_size;
        let thumb_size = self.style().thumb_size;
        let (content_len, body_len) = match axis {
            Axis::Vertical => (content.y, body.height),
            Axis::Horizontal => (content.x, body.width),
        };
        let max_scroll = content_len - body_len;

        if max_scroll <= 0.0 || body_len <= 0.0 {
            if let Some(container) = self.containers.get_mut(id) {
                match axis {
                    Axis::Vertical => container.scroll.y = 0.0,
                    Axis::Horizontal => container.scroll.x = 0.0,
                }
            }
            return;
        }

        let (bar_id, base) = match axis {
            Axis::Vertical => (
                self.get_id(b"!scrollbary"),
                Rect::new(body.right(), body.y, size, body.height),
            ),
            Axis::Horizontal => (
                self.get_id(b"!scrollbarx"),
                Rect::new(body.x, body.bottom(), body.width, size),
            ),
        };
        self.update_control(bar_id, base, Options::NONE);

        let dragging = self.focus_id() == bar_id && self.input.mouse_down(MouseButton::Left);
        let delta = self.input.mouse_delta();
        let Some(container) = self.containers.get_mut(id) else {
            return;
        };
        let scroll = match axis {
            Axis::Vertical => &mut container.scroll.y,
            Axis::Horizontal => &mut container.scroll.x,
        };
        if dragging {
            let moved = match axis {
                Axis::Vertical => delta.y,
                Axis::Horizontal => delta.x,
            };
            *scroll += moved * content_len / body_len;
        }
        *scroll = scroll.clamp(0.0, max_scroll);
        let offset = *scroll;

        self.draw_frame(base, ColorId::ScrollBase);
        let thumb_len = thumb_size.max(body_len * body_len / content_len);
        let travel = (body_len - thumb_len) * offset / max_scroll;
        let thumb = match axis {
            Axis::Vertical => Rect::new(base.x, base.y + travel, size, thumb_len),
            Axis::Horizontal => Rect::new(base.x + travel, base.y, thumb_len, size),
        };
        self.draw_frame(thumb, ColorId::ScrollThumb);

        if self.mouse_over(body) {
            self.scroll_target = Some(id);
        }
    }
}
