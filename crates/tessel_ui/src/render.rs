//! Command buffer.
//!
//! Draw calls append to a flat buffer. Each root container's range is
//! bracketed by two jumps; at the end of the frame the jumps are linked so
//! that iteration visits containers in ascending z-order without moving any
//! command. Text payloads live in one per-frame string arena.

use crate::layout::{Rect, Vec2};
use crate::style::Color;

/// Built-in icons, plus an escape hatch for renderer-defined ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Window close cross.
    Close,
    /// Checkbox tick.
    Check,
    /// Collapsed tree node / header.
    Collapsed,
    /// Expanded tree node / header.
    Expanded,
    /// Window resize grip.
    Resize,
    /// Renderer-defined icon.
    Custom(u32),
}

impl Icon {
    /// Stable numeric id, for renderers that index an atlas.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::Close => 1,
            Self::Check => 2,
            Self::Collapsed => 3,
            Self::Expanded => 4,
            Self::Resize => 5,
            Self::Custom(id) => id,
        }
    }
}

/// A draw command handed to the render backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    /// Restrict subsequent draws to `rect`.
    Clip {
        /// Clip bounds.
        rect: Rect,
    },
    /// Filled rectangle, already intersected with the clip rect.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Single line of text.
    Text {
        /// Top-left of the text.
        pos: Vec2,
        /// Text color.
        color: Color,
        /// Text content.
        text: &'a str,
    },
    /// Icon centered in `rect`.
    Icon {
        /// Which icon.
        icon: Icon,
        /// Bounds.
        rect: Rect,
        /// Tint color.
        color: Color,
    },
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Clip(Rect),
    Rect(Rect, Color),
    Text {
        pos: Vec2,
        color: Color,
        start: usize,
        end: usize,
    },
    Icon(Icon, Rect, Color),
    Jump(usize),
}

/// Append-only command storage for one frame.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    entries: Vec<Entry>,
    text: String,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(4096),
            text: String::with_capacity(16 * 1024),
        }
    }

    /// Drops every command, keeping the allocations.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.text.clear();
    }

    /// Number of stored entries, jumps included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a clip command.
    pub fn push_clip(&mut self, rect: Rect) {
        self.entries.push(Entry::Clip(rect));
    }

    /// Appends a filled rectangle.
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        self.entries.push(Entry::Rect(rect, color));
    }

    /// Appends a text command, copying `text` into the arena.
    pub fn push_text(&mut self, text: &str, pos: Vec2, color: Color) {
        let start = self.text.len();
        self.text.push_str(text);
        self.entries.push(Entry::Text {
            pos,
            color,
            start,
            end: self.text.len(),
        });
    }

    /// Appends an icon.
    pub fn push_icon(&mut self, icon: Icon, rect: Rect, color: Color) {
        self.entries.push(Entry::Icon(icon, rect, color));
    }

    /// Appends a jump that initially falls through to the next entry.
    /// Returns its index for [`CommandBuffer::set_jump`].
    pub fn push_jump(&mut self) -> usize {
        let index = self.entries.len();
        self.entries.push(Entry::Jump(index + 1));
        index
    }

    /// Re-targets the jump at `index` to continue at `target`.
    pub fn set_jump(&mut self, index: usize, target: usize) {
        if let Some(Entry::Jump(dst)) = self.entries.get_mut(index) {
            *dst = target;
        }
    }

    /// Iterates the commands in paint order, following jumps.
    #[must_use]
    pub fn iter(&self) -> Commands<'_> {
        Commands {
            buffer: self,
            cursor: 0,
        }
    }

    /// Reads the command at or after `cursor`, following jumps.
    ///
    /// Returns the command and the cursor of the one after it.
    pub(crate) fn read(&self, mut cursor: usize) -> Option<(Command<'_>, usize)> {
        // A well-formed chain visits each jump at most once.
        let mut hops = 0;
        loop {
            let entry = *self.entries.get(cursor)?;
            let command = match entry {
                Entry::Jump(dst) => {
                    hops += 1;
                    if hops > self.entries.len() {
                        return None;
                    }
                    cursor = dst;
                    continue;
                }
                Entry::Clip(rect) => Command::Clip { rect },
                Entry::Rect(rect, color) => Command::Rect { rect, color },
                Entry::Text {
                    pos,
                    color,
                    start,
                    end,
                } => Command::Text {
                    pos,
                    color,
                    text: self.text.get(start..end).unwrap_or_default(),
                },
                Entry::Icon(icon, rect, color) => Command::Icon { icon, rect, color },
            };
            return Some((command, cursor + 1));
        }
    }
}

/// Paint-order iterator over a finished frame's commands.
#[derive(Debug, Clone)]
pub struct Commands<'a> {
    buffer: &'a CommandBuffer,
    cursor: usize,
}

impl<'a> Iterator for Commands<'a> {
    type Item = Command<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (command, next) = self.buffer.read(self.cursor)?;
        self.cursor = next;
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_in_order() {
        let mut buffer = CommandBuffer::new();
        buffer.push_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::WHITE);
        buffer.push_text("hello", Vec2::new(1.0, 2.0), Color::BLACK);

        let commands: Vec<_> = buffer.iter().collect();
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[1],
            Command::Text {
                pos: Vec2::new(1.0, 2.0),
                color: Color::BLACK,
                text: "hello",
            }
        );
    }

    #[test]
    fn test_jump_reorders_ranges() {
        let mut buffer = CommandBuffer::new();
        let root = buffer.push_jump();
        // Range A: entries 1..=2, tail at 3.
        let head_a = buffer.push_jump();
        buffer.push_text("a", Vec2::ZERO, Color::WHITE);
        let tail_a = buffer.push_jump();
        // Range B: entries 4..=5, tail at 6.
        let head_b = buffer.push_jump();
        buffer.push_text("b", Vec2::ZERO, Color::WHITE);
        let tail_b = buffer.push_jump();
        let end = buffer.len();

        // Paint B first, then A.
        buffer.set_jump(root, head_b + 1);
        buffer.set_jump(tail_b, head_a + 1);
        buffer.set_jump(tail_a, end);

        let texts: Vec<_> = buffer
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["b", "a"]);
    }

    #[test]
    fn test_clear_empties() {
        let mut buffer = CommandBuffer::new();
        buffer.push_clip(Rect::UNCLIPPED);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.iter().count(), 0);
    }
}
