//! Block state machine and list kinds.

use crate::markers::{ORDERED_LIST_TAG, ORDERED_MARKER, UNORDERED_LIST_TAG, UNORDERED_MARKER};

/// Whether a grouping stage is currently inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    /// Not inside any block.
    #[default]
    Outside,
    /// Inside an open block whose closing tag is still owed.
    Inside,
}

impl BlockState {
    /// Move inside a block. Returns `true` if this opened a new one.
    #[inline]
    pub fn enter(&mut self) -> bool {
        let opened = *self == Self::Outside;
        *self = Self::Inside;
        opened
    }

    /// Move outside. Returns `true` if an open block was closed.
    #[inline]
    pub fn leave(&mut self) -> bool {
        let closed = *self == Self::Inside;
        *self = Self::Outside;
        closed
    }
}

/// List type (ordered or unordered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Bullet list introduced by `- `.
    Unordered,
    /// Numbered list introduced by `* `.
    Ordered,
}

impl ListKind {
    /// Line-leading marker character.
    pub fn marker(self) -> char {
        match self {
            Self::Unordered => UNORDERED_MARKER,
            Self::Ordered => ORDERED_MARKER,
        }
    }

    /// Container tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => UNORDERED_LIST_TAG,
            Self::Ordered => ORDERED_LIST_TAG,
        }
    }
}
