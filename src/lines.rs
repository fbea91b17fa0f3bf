//! Line Sequence helpers.
//!
//! A Line Sequence is an ordered `Vec<String>` where each line keeps its
//! `\n` terminator. Only the final line of a text may lack one.

use std::borrow::Cow;

use memchr::{memchr, memchr_iter};

/// Split text into lines, keeping each line's terminator.
///
/// # Example
/// ```
/// let lines = linemark::lines::split_lines("a\nb\n\nc");
/// assert_eq!(lines, ["a\n", "b\n", "\n", "c"]);
/// ```
pub fn split_lines(input: &str) -> Vec<String> {
    let bytes = input.as_bytes();
    let mut lines = Vec::with_capacity(bytes.len() / 32 + 1);
    let mut start = 0;

    for end in memchr_iter(b'\n', bytes) {
        // '\n' is ASCII, so end + 1 is always a char boundary
        lines.push(input[start..=end].to_owned());
        start = end + 1;
    }

    if start < bytes.len() {
        lines.push(input[start..].to_owned());
    }

    lines
}

/// Concatenate a Line Sequence back into a single string.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let len = lines.iter().map(|l| l.as_ref().len()).sum();
    let mut out = String::with_capacity(len);
    for line in lines {
        out.push_str(line.as_ref());
    }
    out
}

/// Rewrite `\r\n` and lone `\r` terminators to `\n`.
///
/// Borrows the input unchanged when it contains no carriage return.
pub fn normalize_newlines(input: &str) -> Cow<'_, str> {
    if memchr(b'\r', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
}
