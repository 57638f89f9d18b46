use crate::{Delimiter, Validator};

#[test]
fn delimiter_is_a_regex() {
    let dot = Delimiter::new("a.c");
    assert!(!dot.is_literal());
    assert_eq!(dot.find_at("xxabcx", 0), Some(2..5));
}

#[test]
fn delimiter_dollar_anchors() {
    let cost = Delimiter::new("Cost: $");
    assert_eq!(cost.find_at("Cost: $10", 0), None);
    assert_eq!(cost.find_at("Cost: ", 0), Some(0..6));
}

#[test]
fn invalid_delimiter_is_searched_literally() {
    let paren = Delimiter::new("(");
    assert!(paren.is_literal());
    assert_eq!(paren.find_at("a(b", 0), Some(1..2));
    assert_eq!(paren.find_at("a(b", 2), None);
}

#[test]
fn delimiter_search_starts_at_offset() {
    let b = Delimiter::new("b");
    assert_eq!(b.find_at("abab", 0), Some(1..2));
    assert_eq!(b.find_at("abab", 2), Some(3..4));
}

#[test]
fn empty_delimiter_matches_in_place() {
    let empty = Delimiter::new("");
    assert!(empty.is_empty());
    assert_eq!(empty.find_at("abc", 1), Some(1..1));
}

#[test]
fn validator_matches_anywhere() {
    let digits = Validator::new(r"\d+", "");
    assert!(digits.is_match(Some("age 42")));
    assert!(!digits.is_match(Some("no digits")));
}

#[test]
fn validator_rejects_absent_text() {
    assert!(!Validator::new(".*", "").is_match(None));
    assert!(!Validator::new("(", "").is_match(None));
}

#[test]
fn validator_case_insensitive_flag() {
    let strict = Validator::new("^john$", "");
    let relaxed = Validator::new("^john$", "i");
    assert!(!strict.is_match(Some("JOHN")));
    assert!(relaxed.is_match(Some("JOHN")));
}

#[test]
fn malformed_validator_fails_open() {
    let broken = Validator::new("(", "");
    assert!(broken.error().is_some());
    assert!(broken.is_match(Some("anything")));
}

#[test]
fn unknown_flag_is_malformed() {
    let odd = Validator::new("a", "q");
    assert_eq!(odd.error(), Some("unknown regex flag 'q'"));
    assert!(odd.is_match(Some("zzz")));
}

#[test]
fn global_flag_is_accepted() {
    let global = Validator::new("a", "gd");
    assert!(global.error().is_none());
    assert!(!global.is_match(Some("zzz")));
}

#[test]
fn sticky_flag_anchors_at_start() {
    assert!(Validator::new("b", "").is_match(Some("ab")));
    assert!(!Validator::new("b", "y").is_match(Some("ab")));
    assert!(Validator::new("b", "y").is_match(Some("ba")));
}
