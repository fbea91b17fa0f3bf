//! Line-oriented HTML output buffer.
//!
//! Each stage owns one `LineWriter` for the duration of its pass and
//! emits whole lines into it.

use crate::markers::NEWLINE;

/// Output Line Sequence with helpers for emitting tags.
///
/// # Example
/// ```
/// use linemark::LineWriter;
///
/// let mut writer = LineWriter::with_capacity_for(2);
/// writer.open_tag("ul");
/// writer.element("   ", "li", "item");
/// writer.close_tag("ul");
///
/// assert_eq!(writer.into_lines(), ["<ul>\n", "   <li>item</li>\n", "</ul>\n"]);
/// ```
#[derive(Debug, Default)]
pub struct LineWriter {
    lines: Vec<String>,
}

impl LineWriter {
    /// Create an empty writer.
    #[inline]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a writer sized for a stage consuming `input_lines` lines.
    ///
    /// Block wrapping adds container lines; reserve a quarter extra.
    #[inline]
    pub fn with_capacity_for(input_lines: usize) -> Self {
        Self {
            lines: Vec::with_capacity(input_lines + input_lines / 4 + 2),
        }
    }

    /// Emit a line unchanged, terminator included.
    #[inline]
    pub fn passthrough(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Emit `<tag>` on its own line.
    #[inline]
    pub fn open_tag(&mut self, tag: &str) {
        self.lines.push(format!("<{tag}>{NEWLINE}"));
    }

    /// Emit `</tag>` on its own line.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.lines.push(format!("</{tag}>{NEWLINE}"));
    }

    /// Emit `{indent}<tag>{content}</tag>` as one line.
    #[inline]
    pub fn element(&mut self, indent: &str, tag: &str, content: &str) {
        self.lines
            .push(format!("{indent}<{tag}>{content}</{tag}>{NEWLINE}"));
    }

    /// Emit `{indent}{content}{suffix}` as one line.
    #[inline]
    pub fn text(&mut self, indent: &str, content: &str, suffix: &str) {
        self.lines.push(format!("{indent}{content}{suffix}{NEWLINE}"));
    }

    /// Remove `suffix` from just before the last line's terminator.
    ///
    /// Returns `false` (leaving the buffer untouched) if the last line does
    /// not end with `suffix` followed by a newline.
    pub fn strip_last_suffix(&mut self, suffix: &str) -> bool {
        let Some(last) = self.lines.last_mut() else {
            return false;
        };
        let Some(body) = last.strip_suffix(NEWLINE) else {
            return false;
        };
        if !body.ends_with(suffix) {
            return false;
        }
        let keep = body.len() - suffix.len();
        last.truncate(keep);
        last.push_str(NEWLINE);
        true
    }

    /// Consume the writer, returning the emitted Line Sequence.
    #[inline]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
