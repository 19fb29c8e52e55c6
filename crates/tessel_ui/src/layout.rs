//! Layout system for UI positioning.
//!
//! A [`Layout`] is one frame of the layout stack: a row cursor over a body
//! rectangle. Rows declare column widths once and then hand out cells with
//! [`Layout::next`], wrapping onto a new row with the same column spec after
//! the last column.
//!
//! Column widths:
//! - positive: absolute pixels,
//! - zero: the style's default control width,
//! - negative: share of the width left after the fixed columns, split evenly
//!   between all negative columns (the magnitude is ignored).
//!
//! Row height zero means the default control height; the row advances by the
//! tallest item actually placed in it.

use serde::{Deserialize, Serialize};

use crate::style::Style;

/// Maximum number of columns a single row may declare.
pub const MAX_ROW_ITEMS: usize = 16;

/// A 2D point or size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// A rect large enough to never clip anything.
    pub const UNCLIPPED: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 16_777_216.0,
        height: 16_777_216.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns true if the two rectangles share any area.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns true if the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns the overlap of two rectangles.
    ///
    /// Disjoint rectangles yield a zero-sized rect, never a negative one.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right()).max(x);
        let bottom = self.bottom().min(other.bottom()).max(y);
        Self::new(x, y, right - x, bottom - y)
    }

    /// Moves and shrinks the rectangle until it lies inside `outer`.
    #[must_use]
    pub fn clamp_to(&self, outer: &Self) -> Self {
        let x = self.x.clamp(outer.x, outer.right().max(outer.x));
        let y = self.y.clamp(outer.y, outer.bottom().max(outer.y));
        let width = self.width.min(outer.right() - x).max(0.0);
        let height = self.height.min(outer.bottom() - y).max(0.0);
        Self::new(x, y, width, height)
    }

    /// Expands the rectangle by the given amount on all sides.
    ///
    /// Negative amounts shrink; the size is clamped at zero.
    #[must_use]
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            (self.width + amount * 2.0).max(0.0),
            (self.height + amount * 2.0).max(0.0),
        )
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        self.expand(-amount)
    }

    /// Returns a copy with width and height clamped to be non-negative.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.x, self.y, self.width.max(0.0), self.height.max(0.0))
    }
}

/// A single frame of the layout stack.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Body the cursor moves over, already offset by the container scroll.
    pub body: Rect,
    /// Bottom-right-most extent of every placed item.
    pub max: Vec2,
    /// Cursor, relative to the body.
    position: Vec2,
    /// Declared widths, as given by the caller.
    widths: [f32; MAX_ROW_ITEMS],
    /// Widths with negative columns resolved.
    resolved: [f32; MAX_ROW_ITEMS],
    items: usize,
    item_index: usize,
    row_height: f32,
    next_row: f32,
    indent: f32,
    width_override: Option<f32>,
    height_override: Option<f32>,
    next_rect: Option<(Rect, bool)>,
}

impl Layout {
    /// Opens a layout over `body`, scrolled by `scroll`, with one default-width column.
    #[must_use]
    pub fn new(body: Rect, scroll: Vec2, style: &Style) -> Self {
        let body = Rect::new(body.x - scroll.x, body.y - scroll.y, body.width, body.height);
        let mut layout = Self {
            body,
            max: body.origin(),
            position: Vec2::ZERO,
            widths: [0.0; MAX_ROW_ITEMS],
            resolved: [0.0; MAX_ROW_ITEMS],
            items: 0,
            item_index: 0,
            row_height: 0.0,
            next_row: 0.0,
            indent: 0.0,
            width_override: None,
            height_override: None,
            next_rect: None,
        };
        layout.row(&[0.0], 0.0, style);
        layout
    }

    /// Declares a new row of columns.
    ///
    /// Widths beyond [`MAX_ROW_ITEMS`] are ignored. An empty width list keeps
    /// the previous column spec.
    pub fn row(&mut self, widths: &[f32], height: f32, style: &Style) {
        if !widths.is_empty() {
            let count = widths.len().min(MAX_ROW_ITEMS);
            self.widths[..count].copy_from_slice(&widths[..count]);
            self.items = count;
        }
        self.row_height = height;
        self.start_row(style);
    }

    /// Moves the cursor to the start of the next row and re-resolves widths.
    fn start_row(&mut self, style: &Style) {
        self.position = Vec2::new(self.indent, self.next_row);
        self.item_index = 0;
        self.resolve_widths(style);
    }

    fn resolve_widths(&mut self, style: &Style) {
        let default_width = style.default_control_width();
        let mut fixed = 0.0;
        let mut flexible = 0u16;
        for &width in &self.widths[..self.items] {
            if width < 0.0 {
                flexible += 1;
            } else if width == 0.0 {
                fixed += default_width;
            } else {
                fixed += width;
            }
        }
        let gaps = style.spacing * self.items.saturating_sub(1) as f32;
        let available = self.body.width - self.indent - fixed - gaps;
        let share = if flexible > 0 {
            (available / f32::from(flexible)).max(0.0)
        } else {
            0.0
        };
        for index in 0..self.items {
            let width = self.widths[index];
            self.resolved[index] = if width < 0.0 {
                share
            } else if width == 0.0 {
                default_width
            } else {
                width
            };
        }
    }

    /// Overrides the width of the next item only.
    pub fn set_width(&mut self, width: f32) {
        self.width_override = Some(width);
    }

    /// Overrides the height of the next item only.
    pub fn set_height(&mut self, height: f32) {
        self.height_override = Some(height);
    }

    /// Places the next item at `rect`, relative to the cursor if `relative`
    /// or to the body origin otherwise.
    pub fn set_next(&mut self, rect: Rect, relative: bool) {
        self.next_rect = Some((rect, relative));
    }

    /// Adds `amount` to the indentation applied at the start of each row.
    pub fn indent(&mut self, amount: f32) {
        self.indent += amount;
    }

    /// Returns the rectangle for the next cell and advances the cursor.
    pub fn next(&mut self, style: &Style) -> Rect {
        let mut res = if let Some((rect, relative)) = self.next_rect.take() {
            if relative {
                Rect::new(
                    rect.x + self.position.x,
                    rect.y + self.position.y,
                    rect.width,
                    rect.height,
                )
            } else {
                rect
            }
        } else {
            if self.item_index >= self.items {
                self.start_row(style);
            }
            let width = self
                .width_override
                .take()
                .unwrap_or(self.resolved[self.item_index]);
            let mut height = self.height_override.take().unwrap_or(self.row_height);
            if height == 0.0 {
                height = style.default_control_height();
            } else if height < 0.0 {
                height += self.body.height - self.position.y + 1.0;
            }
            let width = if width == 0.0 {
                style.default_control_width()
            } else if width < 0.0 {
                width + self.body.width - self.position.x + 1.0
            } else {
                width
            };
            self.item_index += 1;
            Rect::new(self.position.x, self.position.y, width, height)
        };
        res = res.clamped();

        self.position.x += res.width + style.spacing;
        self.next_row = self.next_row.max(res.y + res.height + style.spacing);

        res.x += self.body.x;
        res.y += self.body.y;

        self.max.x = self.max.x.max(res.right());
        self.max.y = self.max.y.max(res.bottom());
        res
    }

    /// Folds a finished nested column back into this layout.
    pub fn absorb_column(&mut self, column: &Self) {
        self.position.x = self
            .position
            .x
            .max(column.position.x + column.body.x - self.body.x);
        self.next_row = self
            .next_row
            .max(column.next_row + column.body.y - self.body.y);
        self.max.x = self.max.x.max(column.max.x);
        self.max.y = self.max.y.max(column.max.y);
    }

    /// Size of everything placed so far, measured from the body origin.
    #[must_use]
    pub fn content_size(&self) -> Vec2 {
        Vec2::new(
            (self.max.x - self.body.x).max(0.0),
            (self.max.y - self.body.y).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tight_style() -> Style {
        Style {
            spacing: 0.0,
            ..Style::default()
        }
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 30.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 80.0)));
    }

    #[test]
    fn test_disjoint_intersection_is_empty_not_negative() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        let overlap = a.intersect(&b);
        assert!(overlap.is_empty());
        assert!(overlap.width >= 0.0 && overlap.height >= 0.0);
    }

    #[test]
    fn test_overlap_and_clamp() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.overlaps(&Rect::new(90.0, 90.0, 20.0, 20.0)));
        assert!(!outer.overlaps(&Rect::new(100.0, 0.0, 20.0, 20.0)));

        let inner = Rect::new(-10.0, 50.0, 300.0, 80.0).clamp_to(&outer);
        assert_eq!(inner, Rect::new(0.0, 50.0, 100.0, 50.0));
    }

    #[test]
    fn test_fixed_and_flexible_columns() {
        let style = tight_style();
        let mut layout = Layout::new(Rect::new(0.0, 0.0, 300.0, 400.0), Vec2::ZERO, &style);
        layout.row(&[100.0, -1.0], 0.0, &style);

        let first = layout.next(&style);
        let second = layout.next(&style);
        assert_eq!(first.width, 100.0);
        assert_eq!(second.width, 200.0);
        assert_eq!(second.x, 100.0);

        let third = layout.next(&style);
        assert_eq!(third.width, 100.0);
        assert_eq!(third.x, 0.0);
        assert!(third.y >= first.bottom());
    }

    #[test]
    fn test_spacing_is_taken_from_flexible_share() {
        let style = Style::default();
        let mut layout = Layout::new(Rect::new(0.0, 0.0, 300.0, 400.0), Vec2::ZERO, &style);
        layout.row(&[100.0, -1.0], 0.0, &style);
        layout.next(&style);
        let second = layout.next(&style);
        assert_eq!(second.width, 300.0 - 100.0 - style.spacing);
        assert_eq!(second.right(), 300.0);
    }

    #[test]
    fn test_negative_columns_share_evenly() {
        let style = tight_style();
        let mut layout = Layout::new(Rect::new(0.0, 0.0, 300.0, 100.0), Vec2::ZERO, &style);
        layout.row(&[60.0, -110.0, -1.0], 0.0, &style);
        layout.next(&style);
        assert_eq!(layout.next(&style).width, 120.0);
        assert_eq!(layout.next(&style).width, 120.0);
    }

    #[test]
    fn test_row_advances_by_tallest_item() {
        let style = tight_style();
        let mut layout = Layout::new(Rect::new(0.0, 0.0, 200.0, 400.0), Vec2::ZERO, &style);
        layout.row(&[100.0, 100.0], 0.0, &style);
        layout.next(&style);
        layout.set_height(50.0);
        let tall = layout.next(&style);
        assert_eq!(tall.height, 50.0);
        let wrapped = layout.next(&style);
        assert_eq!(wrapped.y, 50.0);
    }

    #[test]
    fn test_width_override_is_one_shot() {
        let style = tight_style();
        let mut layout = Layout::new(Rect::new(0.0, 0.0, 200.0, 400.0), Vec2::ZERO, &style);
        layout.row(&[80.0], 0.0, &style);
        layout.set_width(30.0);
        assert_eq!(layout.next(&style).width, 30.0);
        assert_eq!(layout.next(&style).width, 80.0);
    }

    #[test]
    fn test_negative_height_fills_remaining() {
        let style = tight_style();
        let mut layout = Layout::new(Rect::new(0.0, 0.0, 200.0, 100.0), Vec2::ZERO, &style);
        layout.row(&[-1.0], -1.0, &style);
        assert_eq!(layout.next(&style).height, 100.0);
    }

    #[test]
    fn test_scroll_offsets_cells() {
        let style = tight_style();
        let mut layout = Layout::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            Vec2::new(0.0, 30.0),
            &style,
        );
        assert_eq!(layout.next(&style).y, -30.0);
    }

    #[test]
    fn test_content_size_tracks_extent() {
        let style = tight_style();
        let mut layout = Layout::new(Rect::new(10.0, 10.0, 200.0, 100.0), Vec2::ZERO, &style);
        layout.row(&[150.0], 40.0, &style);
        layout.next(&style);
        layout.next(&style);
        assert_eq!(layout.content_size(), Vec2::new(150.0, 80.0));
    }

    proptest! {
        #[test]
        fn prop_cells_never_negative(
            body_w in -50.0f32..400.0,
            body_h in -50.0f32..400.0,
            widths in proptest::collection::vec(-500.0f32..500.0, 1..6),
            height in -500.0f32..500.0,
        ) {
            let style = Style::default();
            let mut layout = Layout::new(Rect::new(0.0, 0.0, body_w, body_h), Vec2::ZERO, &style);
            layout.row(&widths, height, &style);
            for _ in 0..(widths.len() * 2) {
                let cell = layout.next(&style);
                prop_assert!(cell.width >= 0.0);
                prop_assert!(cell.height >= 0.0);
            }
        }
    }
}
