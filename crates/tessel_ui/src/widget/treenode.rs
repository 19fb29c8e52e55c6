//! Collapsible headers and tree nodes.
//!
//! Expansion state lives in the context's set of toggled ids, so it survives
//! frames in which the node is not drawn.

use crate::context::Context;
use crate::id::Id;
use crate::layout::Rect;
use crate::render::Icon;
use crate::style::ColorId;

use super::core::{Options, Response};

impl Context {
    /// A full-width collapsible header. Returns [`Response::ACTIVE`] while expanded.
    pub fn header(&mut self, label: &str, opts: Options) -> Response {
        self.header_impl(label, false, opts).0
    }

    /// A tree node. While it reports [`Response::ACTIVE`], following rows are
    /// indented and ids are scoped to the node; close it with
    /// [`Context::end_treenode`] in that case only.
    pub fn begin_treenode(&mut self, label: &str, opts: Options) -> Response {
        let (res, id) = self.header_impl(label, true, opts);
        if res.contains(Response::ACTIVE) {
            let indent = self.style().indent;
            self.indent(indent);
            self.push_id_raw(id);
        }
        res
    }

    /// Closes a tree node opened by [`Context::begin_treenode`].
    pub fn end_treenode(&mut self) {
        let indent = self.style().indent;
        self.indent(-indent);
        self.pop_id();
    }

    fn header_impl(&mut self, label: &str, treenode: bool, opts: Options) -> (Response, Id) {
        let id = self.get_id(label.as_bytes());
        self.layout_row(&[-1.0], 0.0);
        let rect = self.layout_next();
        let had_focus = self.focus_id() == id;
        let over = self.update_control(id, rect, Options::NONE);

        if self.clicked(id, had_focus, over) && !self.toggled_nodes.remove(&id) {
            self.toggled_nodes.insert(id);
        }
        let toggled = self.toggled_nodes.contains(&id);
        let expanded = toggled != opts.contains(Options::EXPANDED);

        if treenode {
            if self.hover_id() == id {
                self.draw_frame(rect, ColorId::ButtonHover);
            }
        } else {
            self.draw_control_frame(id, rect, ColorId::Button, Options::NONE);
        }
        let icon = if expanded { Icon::Expanded } else { Icon::Collapsed };
        let color = self.style().color(ColorId::Text);
        self.draw_icon(icon, Rect::new(rect.x, rect.y, rect.height, rect.height), color);

        let shift = rect.height - self.style().padding;
        let text = Rect::new(rect.x + shift, rect.y, rect.width - shift, rect.height).clamped();
        self.draw_control_text(label, text, ColorId::Text, Options::NONE);

        let res = if expanded {
            Response::ACTIVE
        } else {
            Response::NONE
        };
        (res, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    const WINDOW: Rect = Rect::new(0.0, 0.0, 300.0, 300.0);

    #[test]
    fn test_expanded_option_inverts_default() {
        let mut ctx = Context::new();
        ctx.begin().unwrap();
        ctx.window("Tree", WINDOW, Options::NO_TITLE, |ctx| {
            assert!(ctx.header("Closed", Options::NONE).is_empty());
            assert!(ctx
                .header("Open", Options::EXPANDED)
                .contains(Response::ACTIVE));
        });
        ctx.end().unwrap();
    }

    #[test]
    fn test_treenode_indents_and_scopes_children() {
        let mut ctx = Context::new();
        ctx.begin().unwrap();
        ctx.window("Tree", WINDOW, Options::NO_TITLE, |ctx| {
            let outside = ctx.get_id(b"child");
            let root_rect = ctx.layout_next();
            if ctx.begin_treenode("Node", Options::EXPANDED).contains(Response::ACTIVE) {
                let inside = ctx.get_id(b"child");
                assert_ne!(inside, outside);
                let child = ctx.layout_next();
                assert_eq!(child.x, root_rect.x + ctx.style().indent);
                ctx.end_treenode();
            }
        });
        ctx.end().unwrap();
    }

    #[test]
    fn test_click_toggles_header() {
        let mut ctx = Context::new();
        let run = |ctx: &mut Context| {
            ctx.begin().unwrap();
            let mut res = Response::NONE;
            ctx.window("Tree", WINDOW, Options::NO_TITLE, |ctx| {
                res = ctx.header("Section", Options::NONE);
            });
            ctx.end().unwrap();
            res
        };
        ctx.input_mousemove(20.0, 10.0);
        run(&mut ctx);
        run(&mut ctx);
        ctx.input_mousedown(20.0, 10.0, MouseButton::Left);
        assert!(run(&mut ctx).is_empty());
        ctx.input_mouseup(20.0, 10.0, MouseButton::Left);
        assert!(run(&mut ctx).contains(Response::ACTIVE));
        assert!(run(&mut ctx).contains(Response::ACTIVE));
    }
}
