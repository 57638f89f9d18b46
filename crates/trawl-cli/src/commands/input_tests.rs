use std::io::Write;
use std::path::Path;

use super::input::{is_stdin, load, require};

#[test]
fn inline_text_wins() {
    let loaded = load(Some("<b>x</b>"), Some(Path::new("ignored.html"))).unwrap();

    assert_eq!(loaded.as_deref(), Some("<b>x</b>"));
}

#[test]
fn nothing_given() {
    assert_eq!(load(None, None).unwrap(), None);

    let err = require(None, None, "pattern").unwrap_err();
    assert!(err.starts_with("pattern is required"));
}

#[test]
fn reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<p>${{x}}</p>").unwrap();

    let loaded = require(None, Some(file.path()), "pattern").unwrap();
    assert_eq!(loaded, "<p>${x}</p>");
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.html");

    let err = require(None, Some(&path), "document").unwrap_err();
    assert!(err.starts_with("cannot read"));
    assert!(err.contains("nope.html"));
}

#[test]
fn dash_is_stdin() {
    assert!(is_stdin(Some(Path::new("-"))));
    assert!(!is_stdin(Some(Path::new("page.html"))));
    assert!(!is_stdin(None));
}
