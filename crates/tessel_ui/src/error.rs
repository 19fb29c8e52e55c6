//! # UI Error Types
//!
//! Usage errors are latched on the [`Context`](crate::Context) and reported by
//! `end()`. Data and capacity problems never surface here; they are recovered
//! where they happen.

use std::fmt;

use thiserror::Error;

/// The four scoped stacks whose depth is verified at the end of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackKind {
    /// Containers (windows, popups, panels).
    Container,
    /// Clip rectangles.
    Clip,
    /// Id scopes.
    Id,
    /// Layout frames.
    Layout,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Container => "container",
            Self::Clip => "clip",
            Self::Id => "id",
            Self::Layout => "layout",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while driving a [`Context`](crate::Context).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// `begin()` was called while a frame was already open.
    #[error("frame already in progress")]
    FrameInProgress,

    /// A frame operation was attempted with no frame open.
    #[error("no frame in progress")]
    NoFrame,

    /// A stack was left non-empty at the end of the frame.
    #[error("{stack} stack unbalanced at end of frame: depth {depth}")]
    StackImbalance {
        /// The offending stack.
        stack: StackKind,
        /// Depth left over.
        depth: usize,
    },

    /// A pop was issued on an empty stack.
    #[error("pop on empty {0} stack")]
    StackUnderflow(StackKind),

    /// A widget or layout call was issued outside any container.
    #[error("no enclosing container or layout")]
    NoLayout,

    /// The command list was read while a frame was being built.
    #[error("command list read while a frame is being built")]
    CommandsUnavailable,

    /// An earlier frame failed; the context must be recreated.
    #[error("context poisoned by an earlier usage error")]
    Poisoned,

    /// A text buffer was declared with no room for content.
    #[error("text buffer capacity must be at least 2, got {0}")]
    InvalidCapacity(usize),

    /// A style document could not be parsed or serialized.
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_stack() {
        let err = UiError::StackImbalance {
            stack: StackKind::Layout,
            depth: 2,
        };
        assert_eq!(
            err.to_string(),
            "layout stack unbalanced at end of frame: depth 2"
        );
        assert_eq!(
            UiError::StackUnderflow(StackKind::Id).to_string(),
            "pop on empty id stack"
        );
    }
}
