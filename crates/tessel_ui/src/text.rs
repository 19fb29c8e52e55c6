//! Text measurement and fixed-capacity text storage.

use crate::error::{UiError, UiResult};

/// Measures text for layout and alignment.
///
/// The engine never rasterizes; the renderer that will draw the glyphs
/// supplies the metrics so that alignment matches what ends up on screen.
pub trait TextMetrics {
    /// Width of `text` in pixels.
    fn text_width(&self, text: &str) -> f32;
    /// Height of one line in pixels.
    fn text_height(&self) -> f32;
}

/// Fixed-pitch metrics (monospace: 8px per character, 16px line height by default).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of every character.
    pub char_width: f32,
    /// Line height.
    pub line_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn text_height(&self) -> f32 {
        self.line_height
    }
}

/// An owned, fixed-capacity UTF-8 buffer for text boxes.
///
/// `capacity` counts a reserved terminator slot, so at most `capacity - 1`
/// bytes of text are ever stored. Writes are whole-character: a character
/// that would not fit is rejected entirely, and the stored bytes are always
/// valid UTF-8 followed by a zero byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    bytes: Box<[u8]>,
    len: usize,
}

impl TextBuffer {
    /// Creates an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidCapacity`] when `capacity <= 1`, since such a
    /// buffer could only ever hold the terminator.
    pub fn new(capacity: usize) -> UiResult<Self> {
        if capacity <= 1 {
            return Err(UiError::InvalidCapacity(capacity));
        }
        Ok(Self {
            bytes: vec![0; capacity].into_boxed_slice(),
            len: 0,
        })
    }

    /// Creates a buffer holding as much of `text` as fits.
    ///
    /// # Errors
    ///
    /// Same as [`TextBuffer::new`].
    pub fn with_text(capacity: usize, text: &str) -> UiResult<Self> {
        let mut buffer = Self::new(capacity)?;
        buffer.push_str(text);
        Ok(buffer)
    }

    /// Declared capacity, terminator included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Largest number of text bytes the buffer can hold.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Stored length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Stored length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.as_str().chars().count()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only whole characters are ever written, so this never fails.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    /// The stored bytes followed by the terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// Appends as many leading characters of `text` as fit.
    ///
    /// Stops at the first character that would not fit. Returns the number
    /// of bytes written.
    pub fn push_str(&mut self, text: &str) -> usize {
        let start = self.len;
        for ch in text.chars() {
            let width = ch.len_utf8();
            if self.len + width > self.max_len() {
                break;
            }
            ch.encode_utf8(&mut self.bytes[self.len..self.len + width]);
            self.len += width;
        }
        self.bytes[self.len] = 0;
        let written = self.len - start;
        if written < text.len() {
            tracing::debug!(
                capacity = self.capacity(),
                dropped = text.len() - written,
                "text buffer full, input truncated"
            );
        }
        written
    }

    /// Removes the last character, never splitting a multi-byte sequence.
    pub fn pop_char(&mut self) -> Option<char> {
        let ch = self.as_str().chars().next_back()?;
        self.len -= ch.len_utf8();
        self.bytes[self.len] = 0;
        Some(ch)
    }

    /// Replaces the contents with as much of `text` as fits.
    pub fn set(&mut self, text: &str) -> usize {
        self.clear();
        self.push_str(text)
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.len = 0;
        self.bytes[0] = 0;
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_capacity_must_leave_room() {
        assert_eq!(TextBuffer::new(0), Err(UiError::InvalidCapacity(0)));
        assert_eq!(TextBuffer::new(1), Err(UiError::InvalidCapacity(1)));
        assert!(TextBuffer::new(2).is_ok());
    }

    #[test]
    fn test_truncates_ascii_to_capacity_minus_one() {
        let mut buffer = TextBuffer::new(8).unwrap();
        let written = buffer.push_str("ABCDEFGHIJKLMNOPQRST");
        assert_eq!(written, 7);
        assert_eq!(buffer.as_str(), "ABCDEFG");
        assert_eq!(buffer.as_bytes_with_nul(), b"ABCDEFG\0");
    }

    #[test]
    fn test_rejects_split_multibyte_character() {
        // "aé" is 3 bytes; "€" needs 3 more but only 2 remain.
        let mut buffer = TextBuffer::new(6).unwrap();
        buffer.push_str("aé€");
        assert_eq!(buffer.as_str(), "aé");
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.char_count(), 2);
    }

    #[test]
    fn test_backspace_removes_whole_character() {
        let mut buffer = TextBuffer::with_text(16, "h€").unwrap();
        assert_eq!(buffer.pop_char(), Some('€'));
        assert_eq!(buffer.as_str(), "h");
        assert_eq!(buffer.pop_char(), Some('h'));
        assert_eq!(buffer.pop_char(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_repeated_overflow_attempts() {
        let mut buffer = TextBuffer::new(4).unwrap();
        for _ in 0..100 {
            buffer.push_str("xyz€");
        }
        assert_eq!(buffer.as_str(), "xyz");
        assert_eq!(buffer.capacity(), 4);
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_capacity(capacity in 2usize..64, chunks in proptest::collection::vec(".{0,10}", 0..10)) {
            let mut buffer = TextBuffer::new(capacity).unwrap();
            for chunk in &chunks {
                buffer.push_str(chunk);
                prop_assert!(buffer.len() < capacity);
                prop_assert!(std::str::from_utf8(&buffer.as_bytes_with_nul()[..buffer.len()]).is_ok());
                prop_assert_eq!(buffer.as_bytes_with_nul()[buffer.len()], 0);
            }
        }
    }
}
