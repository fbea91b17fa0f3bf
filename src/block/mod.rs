//! Line-level block stages.
//!
//! Each stage is a single forward pass over a Line Sequence:
//! - Headings (`#` through `######`)
//! - Unordered lists (`- `)
//! - Ordered lists (`* `)
//! - Paragraphs with `<br/>` soft breaks
//!
//! Stages classify lines only by their leading characters, so they must
//! run in the order of [`Stage::ALL`].

mod heading;
mod list;
mod paragraph;
mod state;

pub use heading::{heading_level, rewrite_headings};
pub use list::{group_list, list_item_content};
pub use paragraph::{group_paragraphs, is_plain};
pub use state::{BlockState, ListKind};

/// One transformation in the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Rewrite `#`-prefixed lines into `<hN>` elements.
    Headings,
    /// Group `- ` lines into `<ul>` blocks.
    UnorderedLists,
    /// Group `* ` lines into `<ol>` blocks.
    OrderedLists,
    /// Group plain lines into `<p>` blocks.
    Paragraphs,
}

impl Stage {
    /// Every stage, in the order they must run.
    pub const ALL: [Stage; 4] = [
        Self::Headings,
        Self::UnorderedLists,
        Self::OrderedLists,
        Self::Paragraphs,
    ];

    /// Short name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Headings => "headings",
            Self::UnorderedLists => "unordered_lists",
            Self::OrderedLists => "ordered_lists",
            Self::Paragraphs => "paragraphs",
        }
    }

    /// Run this stage over a Line Sequence.
    pub fn apply(self, lines: Vec<String>) -> Vec<String> {
        match self {
            Self::Headings => rewrite_headings(lines),
            Self::UnorderedLists => group_list(lines, ListKind::Unordered),
            Self::OrderedLists => group_list(lines, ListKind::Ordered),
            Self::Paragraphs => group_paragraphs(lines),
        }
    }
}
