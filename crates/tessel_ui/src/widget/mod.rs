//! Widgets.
//!
//! Each widget is a method on [`Context`](crate::Context): it takes the next
//! layout cell, runs the hover/focus state machine for its id and appends its
//! draw commands.

mod button;
mod core;
mod slider;
mod textbox;
mod treenode;

pub use self::core::{Options, Response};
pub use slider::clamp_to_range;
