//! # Context
//!
//! The single root object of one UI surface. `begin()` and `end()` bracket
//! every frame; between them the caller issues window and widget calls,
//! each of which consults the id, clip, layout and container stacks, the
//! input snapshot and the style, and appends to the command buffer.
//!
//! ## Frame lifecycle
//!
//! ```text
//! input_*()  ->  begin()  ->  begin_window() .. widgets .. end_window()  ->  end()  ->  commands()
//! ```
//!
//! `end()` verifies that every stack is back to depth zero, applies wheel
//! scrolling, raises the clicked window and links the root containers'
//! command ranges in z-order.
//!
//! Focus is only changed by controls: a click elsewhere, Escape or Tab, or
//! an explicit [`Context::set_focus`]. A focused control that is skipped for
//! a frame keeps its focus.
//!
//! ## Usage errors
//!
//! Misuse (unbalanced stacks, widgets outside a window) is latched when
//! detected and reported by `end()`. A context that reported a usage error
//! is poisoned and refuses further frames.

use std::collections::HashSet;

use crate::container::{Container, ContainerRegistry};
use crate::error::{StackKind, UiError, UiResult};
use crate::id::{Id, IdStack};
use crate::input::{InputState, Key, MouseButton};
use crate::layout::{Layout, Rect, Vec2};
use crate::render::{Command, CommandBuffer, Commands, Icon};
use crate::style::{Color, Style};
use crate::text::{MonospaceMetrics, TextBuffer, TextMetrics};
use crate::widget::Options;

/// Capacity of the inline number editing buffer.
const NUMBER_EDIT_CAPACITY: usize = 128;
/// Initial capacity of the scratch string used to format widget values.
const SCRATCH_CAPACITY: usize = 64;

/// How much of a rectangle the current clip rect hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clipped {
    /// Fully visible.
    None,
    /// Partially visible.
    Part,
    /// Fully hidden.
    All,
}

/// Where the context is in the frame cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No frame has run yet.
    Idle,
    /// Between `begin()` and `end()`.
    Building,
    /// `end()` succeeded; the command list is readable.
    Finished,
}

/// Entry of the container stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StackedContainer {
    pub(crate) id: Id,
    /// Windows and popups are roots; panels are not.
    pub(crate) root: bool,
}

/// The UI context.
pub struct Context {
    style: Style,
    metrics: Box<dyn TextMetrics>,
    pub(crate) input: InputState,
    pub(crate) commands: CommandBuffer,
    pub(crate) containers: ContainerRegistry,

    pub(crate) container_stack: Vec<StackedContainer>,
    /// Open flag of every `begin_window` awaiting its `end_window`.
    pub(crate) window_stack: Vec<bool>,
    pub(crate) root_list: Vec<Id>,
    clip_stack: Vec<Rect>,
    id_stack: IdStack,
    pub(crate) layout_stack: Vec<Layout>,

    /// Tree nodes and headers whose state differs from their default.
    pub(crate) toggled_nodes: HashSet<Id>,

    hover: Id,
    focus: Id,
    last_id: Id,
    pub(crate) hover_root: Option<Id>,
    pub(crate) next_hover_root: Option<Id>,
    pub(crate) scroll_target: Option<Id>,
    pub(crate) number_edit: Option<Id>,
    pub(crate) number_buf: Option<TextBuffer>,
    /// Reused for value text so steady-state frames do not allocate.
    pub(crate) scratch: String,
    last_rect: Rect,

    frame: u64,
    phase: Phase,
    fault: Option<UiError>,
    poisoned: bool,
    cursor: Option<(u64, usize)>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("frame", &self.frame)
            .field("phase", &self.phase)
            .field("hover", &self.hover)
            .field("focus", &self.focus)
            .field("containers", &self.containers.len())
            .field("commands", &self.commands.len())
            .field("poisoned", &self.poisoned)
            .finish_non_exhaustive()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the default style and monospace metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(Style::default())
    }

    /// Creates a context with a custom style.
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            metrics: Box::new(MonospaceMetrics::default()),
            input: InputState::new(),
            commands: CommandBuffer::new(),
            containers: ContainerRegistry::new(),
            container_stack: Vec::with_capacity(32),
            window_stack: Vec::with_capacity(32),
            root_list: Vec::with_capacity(32),
            clip_stack: Vec::with_capacity(32),
            id_stack: IdStack::new(),
            layout_stack: Vec::with_capacity(16),
            toggled_nodes: HashSet::new(),
            hover: Id::NONE,
            focus: Id::NONE,
            last_id: Id::NONE,
            hover_root: None,
            next_hover_root: None,
            scroll_target: None,
            number_edit: None,
            number_buf: TextBuffer::new(NUMBER_EDIT_CAPACITY).ok(),
            scratch: String::with_capacity(SCRATCH_CAPACITY),
            last_rect: Rect::ZERO,
            frame: 0,
            phase: Phase::Idle,
            fault: None,
            poisoned: false,
            cursor: None,
        }
    }

    /// Installs the metrics used to measure text.
    pub fn set_text_metrics(&mut self, metrics: impl TextMetrics + 'static) {
        self.metrics = Box::new(metrics);
    }

    /// The style table.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Mutable style table. Meant to be edited between frames.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Width of `text` per the installed metrics.
    #[must_use]
    pub fn text_width(&self, text: &str) -> f32 {
        self.metrics.text_width(text)
    }

    /// Line height per the installed metrics.
    #[must_use]
    pub fn text_height(&self) -> f32 {
        self.metrics.text_height()
    }

    // ------------------------------------------------------------------
    // Frame controller
    // ------------------------------------------------------------------

    /// Starts a frame.
    ///
    /// # Errors
    ///
    /// [`UiError::Poisoned`] after a failed frame, [`UiError::FrameInProgress`]
    /// if the previous frame was not ended.
    pub fn begin(&mut self) -> UiResult<()> {
        if self.poisoned {
            return Err(UiError::Poisoned);
        }
        if self.phase == Phase::Building {
            return Err(UiError::FrameInProgress);
        }
        self.commands.clear();
        // Entry 0 heads the paint chain; `end()` points it at the lowest root.
        self.commands.push_jump();
        self.root_list.clear();
        self.scroll_target = None;
        self.hover_root = self.next_hover_root.take();
        self.cursor = None;
        self.frame += 1;
        self.phase = Phase::Building;
        tracing::trace!(frame = self.frame, "frame begin");
        Ok(())
    }

    /// Ends the frame and makes its command list readable.
    ///
    /// # Errors
    ///
    /// [`UiError::NoFrame`] without a matching `begin()`. Otherwise the first
    /// usage error of the frame, such as [`UiError::StackImbalance`]; the
    /// context is then poisoned.
    pub fn end(&mut self) -> UiResult<()> {
        if self.phase != Phase::Building {
            return Err(UiError::NoFrame);
        }
        self.phase = Phase::Finished;

        let depths = [
            (
                StackKind::Container,
                self.container_stack.len().max(self.window_stack.len()),
            ),
            (StackKind::Clip, self.clip_stack.len()),
            (StackKind::Id, self.id_stack.depth()),
            (StackKind::Layout, self.layout_stack.len()),
        ];
        for (stack, depth) in depths {
            if depth != 0 {
                self.fail(UiError::StackImbalance { stack, depth });
            }
        }
        if let Some(err) = self.fault.take() {
            // The half-linked command list of a failed frame is never readable.
            self.phase = Phase::Idle;
            self.poisoned = true;
            self.input.end_frame();
            return Err(err);
        }

        if let Some(target) = self.scroll_target {
            let delta = self.input.scroll_delta;
            if let Some(container) = self.containers.get_mut(target) {
                container.scroll.x += delta.x;
                container.scroll.y += delta.y;
            }
        }

        if self.input.any_mouse_pressed() {
            if let Some(id) = self.next_hover_root {
                let below_top = self
                    .containers
                    .get(id)
                    .is_some_and(|c| c.zindex < self.containers.top_zindex());
                if below_top {
                    self.containers.bring_to_front(id);
                }
            }
        }

        self.input.end_frame();
        self.link_roots();
        tracing::trace!(
            frame = self.frame,
            commands = self.commands.len(),
            "frame end"
        );
        Ok(())
    }

    /// Sorts root containers into paint order and chains their command ranges.
    fn link_roots(&mut self) {
        let containers = &self.containers;
        self.root_list.sort_by_key(|id| {
            containers
                .get(*id)
                .map_or((false, 0), |c| (c.popup, c.zindex))
        });
        // A window begun twice in one frame paints its last range once.
        self.root_list.dedup();

        let end = self.commands.len();
        let mut previous_tail = 0;
        for id in &self.root_list {
            if let Some(container) = self.containers.get(*id) {
                self.commands.set_jump(previous_tail, container.head + 1);
                previous_tail = container.tail;
            }
        }
        self.commands.set_jump(previous_tail, end);
    }

    /// Records a usage error; the first one of the frame is reported by `end()`.
    pub(crate) fn fail(&mut self, err: UiError) {
        tracing::error!(error = %err, frame = self.frame, "usage error");
        if self.fault.is_none() {
            self.fault = Some(err);
        }
    }

    /// Frames started so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Returns true while a frame is being built.
    #[must_use]
    pub fn in_frame(&self) -> bool {
        self.phase == Phase::Building
    }

    /// Returns true once a usage error has poisoned the context.
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    // ------------------------------------------------------------------
    // Command access
    // ------------------------------------------------------------------

    /// Iterates the last finished frame's commands in paint order.
    ///
    /// # Errors
    ///
    /// [`UiError::CommandsUnavailable`] while a frame is being built,
    /// [`UiError::NoFrame`] before the first frame has ended.
    pub fn commands(&self) -> UiResult<Commands<'_>> {
        match self.phase {
            Phase::Finished => Ok(self.commands.iter()),
            Phase::Building => Err(UiError::CommandsUnavailable),
            Phase::Idle => Err(UiError::NoFrame),
        }
    }

    /// Rewinds the command cursor to the start of the last finished frame.
    ///
    /// # Errors
    ///
    /// Same as [`Context::commands`].
    pub fn reset_command_iterator(&mut self) -> UiResult<()> {
        self.commands()?;
        self.cursor = Some((self.frame, 0));
        Ok(())
    }

    /// Advances the command cursor. Yields nothing once a new frame has begun.
    pub fn next_command(&mut self) -> Option<Command<'_>> {
        if self.phase != Phase::Finished {
            return None;
        }
        let (frame, at) = self.cursor?;
        if frame != self.frame {
            return None;
        }
        let (command, next) = self.commands.read(at)?;
        self.cursor = Some((frame, next));
        Some(command)
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// Derives the id of `bytes` in the current scope and records it as `last_id`.
    pub fn get_id(&mut self, bytes: &[u8]) -> Id {
        let id = self.id_stack.derive(bytes);
        self.last_id = id;
        id
    }

    /// Opens an id scope keyed by `bytes`.
    pub fn push_id(&mut self, bytes: &[u8]) {
        let id = self.get_id(bytes);
        self.id_stack.push(id);
    }

    /// Opens an id scope keyed by a loop index.
    pub fn push_id_index(&mut self, index: usize) {
        self.push_id(&(index as u64).to_le_bytes());
    }

    /// Closes the innermost id scope.
    pub fn pop_id(&mut self) {
        if self.id_stack.pop().is_none() {
            self.fail(UiError::StackUnderflow(StackKind::Id));
        }
    }

    pub(crate) fn push_id_raw(&mut self, id: Id) {
        self.id_stack.push(id);
    }

    /// The id most recently derived.
    #[must_use]
    pub fn last_id(&self) -> Id {
        self.last_id
    }

    /// The hovered control, or [`Id::NONE`].
    #[must_use]
    pub fn hover_id(&self) -> Id {
        self.hover
    }

    /// The focused control, or [`Id::NONE`].
    #[must_use]
    pub fn focus_id(&self) -> Id {
        self.focus
    }

    /// Gives keyboard focus to `id` (or clears it with [`Id::NONE`]).
    pub fn set_focus(&mut self, id: Id) {
        self.focus = id;
    }

    // ------------------------------------------------------------------
    // Clipping
    // ------------------------------------------------------------------

    /// Pushes `rect` intersected with the current clip rect.
    pub fn push_clip_rect(&mut self, rect: Rect) {
        let last = self.clip_rect();
        self.clip_stack.push(rect.intersect(&last));
    }

    pub(crate) fn push_unclipped(&mut self) {
        self.clip_stack.push(Rect::UNCLIPPED);
    }

    /// Restores the previous clip rect.
    pub fn pop_clip_rect(&mut self) {
        if self.clip_stack.pop().is_none() {
            self.fail(UiError::StackUnderflow(StackKind::Clip));
        }
    }

    /// The current clip rect.
    #[must_use]
    pub fn clip_rect(&self) -> Rect {
        self.clip_stack.last().copied().unwrap_or(Rect::UNCLIPPED)
    }

    /// Classifies `rect` against the current clip rect.
    #[must_use]
    pub fn check_clip(&self, rect: Rect) -> Clipped {
        let clip = self.clip_rect();
        if clip.is_empty()
            || rect.x > clip.right()
            || rect.right() < clip.x
            || rect.y > clip.bottom()
            || rect.bottom() < clip.y
        {
            return Clipped::All;
        }
        if rect.x >= clip.x
            && rect.right() <= clip.right()
            && rect.y >= clip.y
            && rect.bottom() <= clip.bottom()
        {
            return Clipped::None;
        }
        Clipped::Part
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    /// Draws a filled rectangle, cut to the clip rect. Empty results are dropped.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.intersect(&self.clip_rect());
        if !rect.is_empty() {
            self.commands.push_rect(rect, color);
        }
    }

    /// Draws a one-pixel outline.
    pub fn draw_box(&mut self, rect: Rect, color: Color) {
        self.draw_rect(Rect::new(rect.x + 1.0, rect.y, rect.width - 2.0, 1.0), color);
        self.draw_rect(
            Rect::new(rect.x + 1.0, rect.bottom() - 1.0, rect.width - 2.0, 1.0),
            color,
        );
        self.draw_rect(Rect::new(rect.x, rect.y, 1.0, rect.height), color);
        self.draw_rect(Rect::new(rect.right() - 1.0, rect.y, 1.0, rect.height), color);
    }

    /// Draws one line of text with its top-left at `pos`.
    pub fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        let rect = Rect::new(pos.x, pos.y, self.text_width(text), self.text_height());
        let clipped = self.check_clip(rect);
        if clipped == Clipped::All {
            return;
        }
        if clipped == Clipped::Part {
            self.commands.push_clip(self.clip_rect());
        }
        self.commands.push_text(text, pos, color);
        if clipped == Clipped::Part {
            self.commands.push_clip(Rect::UNCLIPPED);
        }
    }

    /// Draws an icon centered in `rect`.
    pub fn draw_icon(&mut self, icon: Icon, rect: Rect, color: Color) {
        let clipped = self.check_clip(rect);
        if clipped == Clipped::All {
            return;
        }
        if clipped == Clipped::Part {
            self.commands.push_clip(self.clip_rect());
        }
        self.commands.push_icon(icon, rect, color);
        if clipped == Clipped::Part {
            self.commands.push_clip(Rect::UNCLIPPED);
        }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    fn layout_mut(&mut self) -> Option<&mut Layout> {
        if self.layout_stack.is_empty() {
            self.fail(UiError::NoLayout);
        }
        self.layout_stack.last_mut()
    }

    /// Declares a row of columns in the current layout.
    pub fn layout_row(&mut self, widths: &[f32], height: f32) {
        match self.layout_stack.last_mut() {
            Some(layout) => layout.row(widths, height, &self.style),
            None => self.fail(UiError::NoLayout),
        }
    }

    /// Overrides the width of the next item.
    pub fn layout_width(&mut self, width: f32) {
        if let Some(layout) = self.layout_mut() {
            layout.set_width(width);
        }
    }

    /// Overrides the height of the next item.
    pub fn layout_height(&mut self, height: f32) {
        if let Some(layout) = self.layout_mut() {
            layout.set_height(height);
        }
    }

    /// Places the next item at an explicit rectangle, relative to the
    /// cursor or to the body origin.
    pub fn layout_set_next(&mut self, rect: Rect, relative: bool) {
        if let Some(layout) = self.layout_mut() {
            layout.set_next(rect, relative);
        }
    }

    /// Returns the next cell of the current layout.
    ///
    /// Outside any container this is a usage error and yields an empty rect.
    pub fn layout_next(&mut self) -> Rect {
        let rect = match self.layout_stack.last_mut() {
            Some(layout) => layout.next(&self.style),
            None => {
                self.fail(UiError::NoLayout);
                Rect::ZERO
            }
        };
        self.last_rect = rect;
        rect
    }

    /// The cell most recently returned by [`Context::layout_next`].
    #[must_use]
    pub fn last_rect(&self) -> Rect {
        self.last_rect
    }

    /// Opens a nested column in the next cell.
    pub fn layout_begin_column(&mut self) {
        let cell = self.layout_next();
        let layout = Layout::new(cell, Vec2::ZERO, &self.style);
        self.layout_stack.push(layout);
    }

    /// Closes the innermost column, folding its extent into the parent row.
    pub fn layout_end_column(&mut self) {
        if self.layout_stack.len() < 2 {
            self.fail(UiError::StackUnderflow(StackKind::Layout));
            return;
        }
        if let Some(column) = self.layout_stack.pop() {
            if let Some(parent) = self.layout_stack.last_mut() {
                parent.absorb_column(&column);
            }
        }
    }

    pub(crate) fn indent(&mut self, amount: f32) {
        if let Some(layout) = self.layout_mut() {
            layout.indent(amount);
        }
    }

    // ------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------

    /// The container widgets are currently being placed in.
    #[must_use]
    pub fn current_container(&self) -> Option<&Container> {
        let top = self.container_stack.last()?;
        self.containers.get(top.id)
    }

    /// Mutable access to the current container.
    pub fn current_container_mut(&mut self) -> Option<&mut Container> {
        let top = *self.container_stack.last()?;
        self.containers.get_mut(top.id)
    }

    /// Looks up a container by name in the current id scope.
    #[must_use]
    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.get(self.id_stack.derive(name.as_bytes()))
    }

    /// Mutable lookup by name in the current id scope.
    pub fn container_mut(&mut self, name: &str) -> Option<&mut Container> {
        let id = self.id_stack.derive(name.as_bytes());
        self.containers.get_mut(id)
    }

    /// Looks up a container by id.
    #[must_use]
    pub fn container_by_id(&self, id: Id) -> Option<&Container> {
        self.containers.get(id)
    }

    /// Raises a container above every other.
    pub fn bring_to_front(&mut self, id: Id) {
        self.containers.bring_to_front(id);
    }

    // ------------------------------------------------------------------
    // Input feed
    // ------------------------------------------------------------------

    /// Moves the cursor.
    pub fn input_mousemove(&mut self, x: f32, y: f32) {
        self.input.set_mouse_pos(x, y);
    }

    /// Presses a mouse button at a position.
    pub fn input_mousedown(&mut self, x: f32, y: f32, button: MouseButton) {
        self.input.set_mouse_pos(x, y);
        self.input.mouse_button_down(button);
    }

    /// Releases a mouse button at a position.
    pub fn input_mouseup(&mut self, x: f32, y: f32, button: MouseButton) {
        self.input.set_mouse_pos(x, y);
        self.input.mouse_button_up(button);
    }

    /// Adds wheel movement.
    pub fn input_scroll(&mut self, dx: f32, dy: f32) {
        self.input.scroll(dx, dy);
    }

    /// Presses a key.
    pub fn input_keydown(&mut self, key: Key) {
        self.input.key_down(key);
    }

    /// Releases a key.
    pub fn input_keyup(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Queues typed text for the focused text box.
    pub fn input_text(&mut self, text: &str) {
        self.input.text(text);
    }

    /// Queues raw typed bytes; invalid UTF-8 is replaced, not rejected.
    pub fn input_text_bytes(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        self.input.text(&text);
    }

    /// The raw input snapshot.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    // ------------------------------------------------------------------
    // Input state machine
    // ------------------------------------------------------------------

    fn in_hover_root(&self) -> bool {
        for entry in self.container_stack.iter().rev() {
            if Some(entry.id) == self.hover_root {
                return true;
            }
            // Only a root's own range is ordered against other roots.
            if entry.root {
                break;
            }
        }
        false
    }

    /// Returns true if the cursor is over `rect`, inside the clip rect and
    /// inside the top-most container under the cursor.
    #[must_use]
    pub fn mouse_over(&self, rect: Rect) -> bool {
        let pos = self.input.mouse_pos;
        rect.contains(pos) && self.clip_rect().contains(pos) && self.in_hover_root()
    }

    /// Runs the hover/focus state machine for one control.
    ///
    /// Returns whether the cursor is over the control.
    pub fn update_control(&mut self, id: Id, rect: Rect, opts: Options) -> bool {
        let mouse_over = self.mouse_over(rect);
        if opts.contains(Options::NO_INTERACT) {
            return mouse_over;
        }
        let pressed = self.input.any_mouse_pressed();
        if mouse_over && (!self.input.any_mouse_down() || pressed) {
            self.hover = id;
        }
        if self.focus == id {
            if pressed && !mouse_over {
                self.set_focus(Id::NONE);
            }
            if !self.input.any_mouse_down() && !opts.contains(Options::HOLD_FOCUS) {
                self.set_focus(Id::NONE);
            }
            if self.input.key_pressed(Key::Escape) || self.input.key_pressed(Key::Tab) {
                self.set_focus(Id::NONE);
            }
        }
        if self.hover == id {
            if pressed {
                self.set_focus(id);
            } else if !mouse_over {
                self.hover = Id::NONE;
            }
        }
        mouse_over
    }

    /// Reports a completed left click on a control: pressed while over it and
    /// released over it. Call with the focus state from before `update_control`.
    pub(crate) fn clicked(&self, id: Id, had_focus: bool, mouse_over: bool) -> bool {
        if !mouse_over || !self.input.mouse_released(MouseButton::Left) {
            return false;
        }
        // Press and release can land in the same frame.
        had_focus || (self.focus == id && self.input.mouse_pressed(MouseButton::Left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_has_no_commands() {
        let mut ctx = Context::new();
        ctx.begin().unwrap();
        ctx.end().unwrap();
        assert_eq!(ctx.commands().unwrap().count(), 0);
    }

    #[test]
    fn test_nested_begin_rejected() {
        let mut ctx = Context::new();
        assert!(!ctx.in_frame());
        ctx.begin().unwrap();
        assert!(ctx.in_frame());
        assert_eq!(ctx.begin(), Err(UiError::FrameInProgress));
        ctx.end().unwrap();
        assert!(!ctx.in_frame());
        assert_eq!(ctx.end(), Err(UiError::NoFrame));
    }

    #[test]
    fn test_unbalanced_id_stack_poisons() {
        let mut ctx = Context::new();
        ctx.begin().unwrap();
        ctx.push_id(b"scope");
        assert_eq!(
            ctx.end(),
            Err(UiError::StackImbalance {
                stack: StackKind::Id,
                depth: 1
            })
        );
        assert!(ctx.is_poisoned());
        assert_eq!(ctx.begin(), Err(UiError::Poisoned));
        assert_eq!(ctx.commands().err(), Some(UiError::NoFrame));
    }

    #[test]
    fn test_underflow_reported_at_end() {
        let mut ctx = Context::new();
        ctx.begin().unwrap();
        ctx.pop_clip_rect();
        assert_eq!(ctx.end(), Err(UiError::StackUnderflow(StackKind::Clip)));
    }

    #[test]
    fn test_commands_unavailable_during_frame() {
        let mut ctx = Context::new();
        assert_eq!(ctx.commands().err(), Some(UiError::NoFrame));
        ctx.begin().unwrap();
        assert_eq!(ctx.commands().err(), Some(UiError::CommandsUnavailable));
        assert!(ctx.next_command().is_none());
        ctx.end().unwrap();
        assert!(ctx.commands().is_ok());
    }

    #[test]
    fn test_clip_intersection() {
        let mut ctx = Context::new();
        ctx.begin().unwrap();
        ctx.push_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        ctx.push_clip_rect(Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(ctx.clip_rect(), Rect::new(50.0, 50.0, 50.0, 50.0));
        assert_eq!(ctx.check_clip(Rect::new(60.0, 60.0, 10.0, 10.0)), Clipped::None);
        assert_eq!(ctx.check_clip(Rect::new(40.0, 60.0, 20.0, 10.0)), Clipped::Part);
        assert_eq!(ctx.check_clip(Rect::new(0.0, 0.0, 10.0, 10.0)), Clipped::All);
        ctx.pop_clip_rect();
        ctx.pop_clip_rect();
        ctx.end().unwrap();
    }

    #[test]
    fn test_empty_clip_hides_text() {
        let mut ctx = Context::new();
        ctx.begin().unwrap();
        ctx.push_clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        ctx.push_clip_rect(Rect::new(500.0, 500.0, 10.0, 10.0));
        assert!(ctx.clip_rect().is_empty());
        ctx.draw_text("hidden", Vec2::new(500.0, 500.0), Color::WHITE);
        ctx.draw_rect(Rect::new(500.0, 500.0, 5.0, 5.0), Color::WHITE);
        ctx.pop_clip_rect();
        ctx.pop_clip_rect();
        ctx.end().unwrap();
        assert_eq!(ctx.commands().unwrap().count(), 0);
    }

    #[test]
    fn test_widget_outside_window_is_usage_error() {
        let mut ctx = Context::new();
        ctx.begin().unwrap();
        assert_eq!(ctx.layout_next(), Rect::ZERO);
        assert_eq!(ctx.end(), Err(UiError::NoLayout));
    }

    #[test]
    fn test_lossy_text_input() {
        let mut ctx = Context::new();
        ctx.input_text_bytes(b"ok\xFF");
        assert_eq!(ctx.input().text_input(), "ok\u{FFFD}");
    }
}
