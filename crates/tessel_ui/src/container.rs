//! Container registry.
//!
//! Windows, popups and panels keep their rectangle, scroll offset and open
//! flag across frames. They are created lazily on first reference and never
//! destroyed: a container that is not referenced in a frame is dormant and
//! resumes with its old state the next time it is.

use std::collections::HashMap;

use crate::id::Id;
use crate::layout::{Rect, Vec2};

/// Persistent state of a window, popup or panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Id derived from the container's name.
    pub id: Id,
    /// Outer rectangle, chrome included.
    pub rect: Rect,
    /// Content area: `rect` minus title bar and scrollbars. Always inside `rect`.
    pub body: Rect,
    /// Extent of everything laid out inside the body last time it was visited.
    pub content_size: Vec2,
    /// Scroll offset of the body.
    pub scroll: Vec2,
    /// Paint order rank; higher is on top.
    pub zindex: u32,
    /// Whether the container is shown.
    pub open: bool,
    /// Frame in which the container was last visited.
    pub last_frame: u64,
    /// Set for popups, which always paint above regular windows.
    pub popup: bool,
    /// Jump entry opening this container's command range.
    pub(crate) head: usize,
    /// Jump entry closing this container's command range.
    pub(crate) tail: usize,
}

impl Container {
    /// Creates a fresh, open container.
    #[must_use]
    pub fn new(id: Id) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            body: Rect::ZERO,
            content_size: Vec2::ZERO,
            scroll: Vec2::ZERO,
            zindex: 0,
            open: true,
            last_frame: 0,
            popup: false,
            head: 0,
            tail: 0,
        }
    }
}

/// All containers ever referenced, keyed by id.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: HashMap<Id, Container>,
    last_zindex: u32,
}

impl ContainerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            containers: HashMap::with_capacity(64),
            last_zindex: 0,
        }
    }

    /// Looks up a container.
    #[must_use]
    pub fn get(&self, id: Id) -> Option<&Container> {
        self.containers.get(&id)
    }

    /// Looks up a container mutably.
    pub fn get_mut(&mut self, id: Id) -> Option<&mut Container> {
        self.containers.get_mut(&id)
    }

    /// Returns the container for `id`, creating it on top of every other
    /// container if it does not exist yet.
    pub fn get_or_create(&mut self, id: Id) -> &mut Container {
        if !self.containers.contains_key(&id) {
            self.last_zindex += 1;
            let mut container = Container::new(id);
            container.zindex = self.last_zindex;
            tracing::debug!(id = id.raw(), zindex = container.zindex, "container created");
            self.containers.insert(id, container);
        }
        self.containers.entry(id).or_insert_with(|| Container::new(id))
    }

    /// Raises a container above all others.
    pub fn bring_to_front(&mut self, id: Id) {
        if let Some(container) = self.containers.get_mut(&id) {
            self.last_zindex += 1;
            container.zindex = self.last_zindex;
            tracing::debug!(id = id.raw(), zindex = container.zindex, "container raised");
        }
    }

    /// Highest z-index handed out so far.
    #[must_use]
    pub fn top_zindex(&self) -> u32 {
        self.last_zindex
    }

    /// Number of registered containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns true if no container was ever referenced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
