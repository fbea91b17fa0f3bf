//! Marker characters, separators and emitted tag fragments.
//!
//! Every stage classifies lines by whole-line prefixes built from these
//! constants, and emits output built from the fragments below.

/// Heading marker, repeated once per level.
pub const HEADING_MARKER: char = '#';

/// Bullet marker for unordered list items.
pub const UNORDERED_MARKER: char = '-';

/// Bullet marker for ordered list items.
pub const ORDERED_MARKER: char = '*';

/// The single character that must follow a marker run.
pub const SEPARATOR: char = ' ';

/// Deepest heading level recognized (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Leading indentation of a list item line.
pub const LIST_ITEM_INDENT: &str = "   ";

/// Leading indentation of a paragraph content line.
pub const PARAGRAPH_INDENT: &str = "    ";

/// Soft line break appended to all but the last line of a paragraph.
pub const SOFT_BREAK: &str = "<br/>";

/// Tag wrapping each list item.
pub const LIST_ITEM_TAG: &str = "li";

/// Container tag for unordered lists.
pub const UNORDERED_LIST_TAG: &str = "ul";

/// Container tag for ordered lists.
pub const ORDERED_LIST_TAG: &str = "ol";

/// Container tag for paragraphs.
pub const PARAGRAPH_TAG: &str = "p";

/// Line terminator used for every emitted line.
pub const NEWLINE: &str = "\n";

/// Characters that keep a line out of a paragraph when its trimmed form
/// starts with one of them.
pub const BLOCK_MARKERS: [char; 3] = [HEADING_MARKER, UNORDERED_MARKER, ORDERED_MARKER];
