//! Heading rewriter.

use tracing::trace;

use crate::markers::{HEADING_MARKER, MAX_HEADING_LEVEL, SEPARATOR};
use crate::render::LineWriter;

/// Classify a line as a heading.
///
/// Returns the level and the raw text after the marker run and its
/// separator, or `None` if the line is not a heading. A heading has
/// exactly 1-6 markers followed by a single space; the longest marker run
/// decides the level, so `"## x"` is level 2 and never level 1.
///
/// # Example
/// ```
/// use linemark::block::heading_level;
///
/// assert_eq!(heading_level("### Title\n"), Some((3, "Title\n")));
/// assert_eq!(heading_level("####### x\n"), None);
/// assert_eq!(heading_level("#tag\n"), None);
/// ```
pub fn heading_level(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == HEADING_MARKER).count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    // Markers are ASCII, so `level` is also the byte offset
    line[level..]
        .strip_prefix(SEPARATOR)
        .map(|rest| (level, rest))
}

/// Rewrite heading lines into `<hN>text</hN>` elements.
///
/// Output has the same number of lines as the input. Non-heading lines are
/// passed through untouched, terminator included.
pub fn rewrite_headings(lines: Vec<String>) -> Vec<String> {
    let mut out = LineWriter::with_capacity_for(lines.len());

    for line in lines {
        match heading_level(&line) {
            Some((level, rest)) => {
                trace!(level, "heading");
                out.element("", &format!("h{level}"), rest.trim());
            }
            None => out.passthrough(line),
        }
    }

    out.into_lines()
}
