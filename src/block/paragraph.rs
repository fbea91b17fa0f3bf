//! Paragraph grouping with soft line breaks.

use tracing::trace;

use super::state::BlockState;
use crate::markers::{BLOCK_MARKERS, PARAGRAPH_INDENT, PARAGRAPH_TAG, SOFT_BREAK};
use crate::render::LineWriter;

/// Whether a line is paragraph content.
///
/// A line is plain if its trimmed form is non-empty and does not start with
/// a heading or list marker. Lines already rewritten into tags by earlier
/// stages start with `<` and so count as plain.
#[inline]
pub fn is_plain(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(BLOCK_MARKERS)
}

/// Wrap each run of plain lines in a paragraph.
///
/// Every content line ends with `<br/>` except the last of its paragraph.
pub fn group_paragraphs(lines: Vec<String>) -> Vec<String> {
    let mut out = LineWriter::with_capacity_for(lines.len());
    let mut state = BlockState::Outside;

    for line in lines {
        if is_plain(&line) {
            if state.enter() {
                trace!("open paragraph");
                out.open_tag(PARAGRAPH_TAG);
            }
            out.text(PARAGRAPH_INDENT, line.trim(), SOFT_BREAK);
        } else {
            close_paragraph(&mut out, &mut state);
            out.passthrough(line);
        }
    }

    close_paragraph(&mut out, &mut state);
    out.into_lines()
}

fn close_paragraph(out: &mut LineWriter, state: &mut BlockState) {
    if state.leave() {
        // The last emitted line is this paragraph's final content line
        out.strip_last_suffix(SOFT_BREAK);
        trace!("close paragraph");
        out.close_tag(PARAGRAPH_TAG);
    }
}
