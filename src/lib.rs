//! linemark: line-oriented Markdown subset to HTML fragment converter
//!
//! Input is processed as a sequence of lines through four stages, each a
//! single forward pass:
//!
//! 1. Headings: `### Title` becomes `<h3>Title</h3>`
//! 2. Unordered lists: runs of `- item` become `<ul>` blocks
//! 3. Ordered lists: runs of `* item` become `<ol>` blocks
//! 4. Paragraphs: runs of plain lines become `<p>` blocks joined by `<br/>`
//!
//! Only whole-line prefixes are recognized. There is no inline markup, no
//! nesting and no escaping; the output is a fragment, not a document.
//!
//! Lines produced by the earlier stages do not start with a marker
//! character, so the paragraph stage treats them as plain text. Feeding
//! converted output back in therefore wraps the tags in paragraphs.

pub mod block;
pub mod error;
pub mod fs;
pub mod lines;
pub mod markers;
pub mod pipeline;
pub mod render;

use std::path::Path;

// Re-export primary types
pub use block::{ListKind, Stage};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use render::LineWriter;

/// Which stages run during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Rewrite `#` headings.
    pub headings: bool,
    /// Group `- ` items into `<ul>` blocks.
    pub unordered_lists: bool,
    /// Group `* ` items into `<ol>` blocks.
    pub ordered_lists: bool,
    /// Group plain lines into `<p>` blocks.
    pub paragraphs: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            headings: true,
            unordered_lists: true,
            ordered_lists: true,
            paragraphs: true,
        }
    }
}

impl Options {
    /// Whether `stage` is enabled.
    pub fn enables(&self, stage: Stage) -> bool {
        match stage {
            Stage::Headings => self.headings,
            Stage::UnorderedLists => self.unordered_lists,
            Stage::OrderedLists => self.ordered_lists,
            Stage::Paragraphs => self.paragraphs,
        }
    }
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = linemark::to_html("- one\n- two\n\nWorld\n");
/// assert_eq!(
///     html,
///     "<p>\n    <ul><br/>\n    <li>one</li><br/>\n    <li>two</li><br/>\n    </ul>\n</p>\n\n<p>\n    World\n</p>\n"
/// );
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let lines = lines::split_lines(input);
    lines::join_lines(&convert_lines_with_options(lines, options))
}

/// Convert a Line Sequence with every stage enabled.
pub fn convert_lines(lines: Vec<String>) -> Vec<String> {
    Pipeline::new().run(lines)
}

/// Convert a Line Sequence with options.
pub fn convert_lines_with_options(lines: Vec<String>, options: &Options) -> Vec<String> {
    Pipeline::from_options(options).run(lines)
}

/// Convert the file at `source` and write the result to `destination`.
///
/// Returns the number of lines written.
pub fn convert_file(source: &Path, destination: &Path, options: &Options) -> Result<usize> {
    let lines = fs::read_source(source)?;
    let html = convert_lines_with_options(lines, options);
    fs::write_output(destination, &html)?;
    Ok(html.len())
}
