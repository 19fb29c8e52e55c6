//! # Tessel UI
//!
//! Immediate-mode GUI engine. Widgets are plain function calls re-issued every
//! frame; there is no retained widget tree. Hover and focus are derived from
//! the previous frame's state plus this frame's raw input, and the output is
//! a flat, render-backend-agnostic list of draw commands.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      FRAME PIPELINE                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  Input Feed → begin() → Windows/Widgets → end() → Commands │
//! │       ↓                      ↓              ↓          ↓   │
//! │  Edge State        Id/Layout/Clip Stacks  Z-Order   Backend│
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use tessel_ui::{Context, Options, Rect};
//!
//! let mut ctx = Context::new();
//! ctx.begin()?;
//! ctx.window("Hello", Rect::new(10.0, 10.0, 240.0, 160.0), Options::NONE, |ctx| {
//!     ctx.layout_row(&[80.0, -1.0], 0.0);
//!     ctx.label("Name:");
//!     if ctx.button("Greet").submitted() {
//!         // react to the click
//!     }
//! });
//! ctx.end()?;
//!
//! for command in ctx.commands()? {
//!     // hand `command` to the renderer
//!     let _ = command;
//! }
//! # Ok::<(), tessel_ui::UiError>(())
//! ```
//!
//! ## Design Philosophy
//!
//! - One `Context` owns all state; no globals
//! - Ids are hashes of the call path, never addresses
//! - Misuse is reported once, at `end()`, and poisons the context

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::module_name_repetitions)]

pub mod container;
pub mod context;
pub mod error;
pub mod id;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod text;
pub mod widget;
mod window;

pub use container::{Container, ContainerRegistry};
pub use context::{Clipped, Context};
pub use error::{StackKind, UiError, UiResult};
pub use id::{Id, IdStack};
pub use input::{InputState, Key, MouseButton};
pub use layout::{Layout, Rect, Vec2, MAX_ROW_ITEMS};
pub use render::{Command, CommandBuffer, Commands, Icon};
pub use style::{Color, ColorId, Palette, Style};
pub use text::{MonospaceMetrics, TextBuffer, TextMetrics};
pub use widget::{clamp_to_range, Options, Response};
