//! Widget identity.
//!
//! Ids are pure functions of their scope path: the FNV-1a hash of the bytes
//! of every pushed scope followed by the widget's own label. Nothing is
//! allocated or freed, so the same call sequence yields the same ids on
//! every frame.

/// FNV-1a offset basis, the hash of the empty root scope.
const HASH_INITIAL: u32 = 2_166_136_261;
/// FNV-1a prime.
const HASH_PRIME: u32 = 16_777_619;

/// Stable identifier of a widget or container.
///
/// `Id::NONE` (zero) never names a widget in practice and is used for
/// "nothing hovered / nothing focused".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Id(pub u32);

impl Id {
    /// The empty id.
    pub const NONE: Self = Self(0);

    /// The id of the root scope.
    pub const ROOT: Self = Self(HASH_INITIAL);

    /// Derives a child id by hashing `bytes` into this scope.
    #[inline]
    #[must_use]
    pub fn child(self, bytes: &[u8]) -> Self {
        let mut hash = self.0;
        for &byte in bytes {
            hash = (hash ^ u32::from(byte)).wrapping_mul(HASH_PRIME);
        }
        Self(hash)
    }

    /// Derives a child id from a string label.
    #[inline]
    #[must_use]
    pub fn child_str(self, label: &str) -> Self {
        self.child(label.as_bytes())
    }

    /// Derives a child id from a loop index or other integer key.
    #[inline]
    #[must_use]
    pub fn child_index(self, index: usize) -> Self {
        self.child(&(index as u64).to_le_bytes())
    }

    /// Returns the raw hash value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns true for [`Id::NONE`].
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// The scoped id stack.
#[derive(Debug, Clone, Default)]
pub struct IdStack {
    scopes: Vec<Id>,
}

impl IdStack {
    /// Creates an empty stack rooted at [`Id::ROOT`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: Vec::with_capacity(32),
        }
    }

    /// The id of the innermost scope.
    #[inline]
    #[must_use]
    pub fn top(&self) -> Id {
        self.scopes.last().copied().unwrap_or(Id::ROOT)
    }

    /// Computes the id of `bytes` in the current scope without pushing it.
    #[inline]
    #[must_use]
    pub fn derive(&self, bytes: &[u8]) -> Id {
        self.top().child(bytes)
    }

    /// Pushes an already-derived id as the new innermost scope.
    pub fn push(&mut self, id: Id) {
        self.scopes.push(id);
    }

    /// Pops the innermost scope. Returns `None` if the stack was empty.
    pub fn pop(&mut self) -> Option<Id> {
        self.scopes.pop()
    }

    /// Number of pushed scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fnv1a_reference_values() {
        // Published FNV-1a 32-bit vectors.
        assert_eq!(Id::ROOT.child(b"").raw(), 0x811c_9dc5);
        assert_eq!(Id::ROOT.child(b"a").raw(), 0xe40c_292c);
        assert_eq!(Id::ROOT.child(b"foobar").raw(), 0xbf9c_f968);
    }

    #[test]
    fn test_scope_changes_id() {
        let mut stack = IdStack::new();
        let bare = stack.derive(b"Button");

        stack.push(stack.derive(b"Window"));
        let scoped = stack.derive(b"Button");
        assert_ne!(bare, scoped);

        assert!(stack.pop().is_some());
        assert_eq!(stack.derive(b"Button"), bare);
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_order_sensitive() {
        let ab = Id::ROOT.child_str("a").child_str("b");
        let ba = Id::ROOT.child_str("b").child_str("a");
        assert_ne!(ab, ba);
    }

    proptest! {
        #[test]
        fn prop_same_path_same_id(path in proptest::collection::vec(".{0,12}", 1..6)) {
            let first = path.iter().fold(Id::ROOT, |id, s| id.child_str(s));
            let second = path.iter().fold(Id::ROOT, |id, s| id.child_str(s));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_index_disambiguates(label in "[a-z]{1,8}", a in 0usize..1000, b in 0usize..1000) {
            prop_assume!(a != b);
            let base = Id::ROOT.child_str(&label);
            prop_assert_ne!(base.child_index(a), base.child_index(b));
        }
    }
}
