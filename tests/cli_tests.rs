use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn converts_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("README.md");
    let destination = dir.path().join("README.html");
    fs::write(&source, "- a\n- b\n\nline1\nline2\n").unwrap();

    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.arg(&source).arg(&destination);
    cmd.assert().success().stderr(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "<p>\n    <ul><br/>\n    <li>a</li><br/>\n    <li>b</li><br/>\n    </ul>\n</p>\n\n<p>\n    line1<br/>\n    line2\n</p>\n"
    );
}

#[test]
fn no_arguments_prints_usage() {
    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: linemark README.md README.html"));
}

#[test]
fn one_argument_prints_usage_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("README.md");
    fs::write(&source, "# x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.arg(&source);
    cmd.assert().code(1).stderr(predicate::str::contains("Usage:"));

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the source should exist");
}

#[test]
fn three_arguments_prints_usage() {
    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.args(["a.md", "b.html", "extra"]);
    cmd.assert().code(1).stderr(predicate::str::contains("Usage:"));
}

#[test]
fn missing_source_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("absent.md");
    let destination = dir.path().join("out.html");

    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.arg(&source).arg(&destination);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains(format!("Missing {}", source.display())));

    assert!(!destination.exists());
}

#[test]
fn unwritable_destination_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("in.md");
    fs::write(&source, "text\n").unwrap();
    let destination = dir.path().join("missing-dir").join("out.html");

    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.arg(&source).arg(&destination);
    cmd.assert().failure().stderr(predicate::str::contains("failed to write"));
}

#[test]
fn overwrites_existing_destination() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("in.md");
    let destination = dir.path().join("out.html");
    fs::write(&source, "## Done\n").unwrap();
    fs::write(&destination, "stale stale stale\n").unwrap();

    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.arg(&source).arg(&destination);
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "<p>\n    <h2>Done</h2>\n</p>\n"
    );
}

#[test]
fn help_flag_is_a_usage_error() {
    for flag in ["--help", "-h", "--version", "-V"] {
        let mut cmd = cargo_bin_cmd!("linemark");
        cmd.arg(flag);
        cmd.assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Usage: linemark README.md README.html"));
    }
}

#[test]
fn converts_file_named_with_leading_hyphen() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-notes.md"), "* step\n").unwrap();

    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.current_dir(dir.path()).args(["-notes.md", "-out.html"]);
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("-out.html")).unwrap(),
        "<p>\n    <ol><br/>\n    <li>step</li><br/>\n    </ol>\n</p>\n"
    );
}

#[test]
fn lone_carriage_returns_split_lines() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("mac.md");
    let destination = dir.path().join("mac.html");
    fs::write(&source, "a\rb\n").unwrap();

    let mut cmd = cargo_bin_cmd!("linemark");
    cmd.arg(&source).arg(&destination);
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "<p>\n    a<br/>\n    b\n</p>\n"
    );
}
