//! List grouping for both list kinds.

use tracing::trace;

use super::state::{BlockState, ListKind};
use crate::markers::{LIST_ITEM_INDENT, LIST_ITEM_TAG, SEPARATOR};
use crate::render::LineWriter;

/// Text after a list marker and its separator, if `line` is an item of `kind`.
///
/// # Example
/// ```
/// use linemark::block::{list_item_content, ListKind};
///
/// assert_eq!(list_item_content("- milk\n", ListKind::Unordered), Some("milk\n"));
/// assert_eq!(list_item_content("- milk\n", ListKind::Ordered), None);
/// assert_eq!(list_item_content("-milk\n", ListKind::Unordered), None);
/// ```
pub fn list_item_content(line: &str, kind: ListKind) -> Option<&str> {
    line.strip_prefix(kind.marker())?.strip_prefix(SEPARATOR)
}

/// Wrap each run of `kind` items in a list container.
///
/// Any line that is not an item closes the open block before being passed
/// through unchanged. A block still open at end of input is closed.
pub fn group_list(lines: Vec<String>, kind: ListKind) -> Vec<String> {
    let mut out = LineWriter::with_capacity_for(lines.len());
    let mut state = BlockState::Outside;

    for line in lines {
        match list_item_content(&line, kind) {
            Some(content) => {
                if state.enter() {
                    trace!(tag = kind.tag(), "open list");
                    out.open_tag(kind.tag());
                }
                out.element(LIST_ITEM_INDENT, LIST_ITEM_TAG, content.trim());
            }
            None => {
                close_list(&mut out, &mut state, kind);
                out.passthrough(line);
            }
        }
    }

    close_list(&mut out, &mut state, kind);
    out.into_lines()
}

fn close_list(out: &mut LineWriter, state: &mut BlockState, kind: ListKind) {
    if state.leave() {
        trace!(tag = kind.tag(), "close list");
        out.close_tag(kind.tag());
    }
}
