use linemark::block::rewrite_headings;
use linemark::{Options, to_html_with_options};

fn lines(input: &[&str]) -> Vec<String> {
    input.iter().map(|s| s.to_string()).collect()
}

fn headings_only(input: &str) -> String {
    let options = Options {
        headings: true,
        unordered_lists: false,
        ordered_lists: false,
        paragraphs: false,
    };
    to_html_with_options(input, &options)
}

#[test]
fn heading_level_three() {
    assert_eq!(rewrite_headings(lines(&["### Title\n"])), ["<h3>Title</h3>\n"]);
}

#[test]
fn heading_seven_markers_unchanged() {
    assert_eq!(rewrite_headings(lines(&["####### x\n"])), ["####### x\n"]);
}

#[test]
fn heading_line_count_preserved() {
    let input = lines(&["# a\n", "text\n", "\n", "###### f\n", "####### g\n"]);
    let out = rewrite_headings(input.clone());
    assert_eq!(out.len(), input.len());
    assert_eq!(out, ["<h1>a</h1>\n", "text\n", "\n", "<h6>f</h6>\n", "####### g\n"]);
}

#[test]
fn heading_mixed_document() {
    let html = headings_only("# One\nbody\n## Two\n#not a heading\n");
    assert_eq!(html, "<h1>One</h1>\nbody\n<h2>Two</h2>\n#not a heading\n");
}

#[test]
fn heading_unicode_content() {
    let html = headings_only("## Héllo Wörld  \n");
    assert_eq!(html, "<h2>Héllo Wörld</h2>\n");
}

#[test]
fn heading_content_not_escaped() {
    let html = headings_only("# a < b & c\n");
    assert_eq!(html, "<h1>a < b & c</h1>\n");
}

#[test]
fn heading_without_trailing_newline() {
    assert_eq!(headings_only("#### last"), "<h4>last</h4>\n");
}
