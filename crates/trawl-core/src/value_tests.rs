use serde_json::json;

use crate::{Colors, Record, Value, assign};

fn sample() -> Record {
    let mut record = Record::new();
    assign(&mut record, "name", "Jo \"J\"".into());
    assign(&mut record, "marks[]", "18".into());
    assign(&mut record, "marks[]", "19".into());
    record
}

#[test]
fn compact_format_matches_serde() {
    let record = sample();
    let formatted = record.format(false, Colors::OFF);
    let expected = serde_json::to_string(&record).unwrap();
    assert_eq!(formatted, expected);
}

#[test]
fn pretty_format_matches_serde() {
    let record = sample();
    let formatted = record.format(true, Colors::OFF);
    let expected = serde_json::to_string_pretty(&record).unwrap();
    assert_eq!(formatted, expected);
}

#[test]
fn empty_containers_format() {
    let mut record = Record::new();
    record.insert("list", Value::Array(Vec::new()));
    record.insert("obj", Value::Object(Record::new()));

    assert_eq!(record.format(true, Colors::OFF), "{\n  \"list\": [],\n  \"obj\": {}\n}");
}

#[test]
fn colored_format_wraps_keys_and_strings() {
    let mut record = Record::new();
    record.insert("k", "v".into());

    let out = record.format(false, Colors::ON);
    assert!(out.contains("\x1b[34m\"k\"\x1b[0m"));
    assert!(out.contains("\x1b[32m\"v\"\x1b[0m"));
}

#[test]
fn merge_concatenates_lists_and_overwrites_scalars() {
    let mut first = Record::new();
    assign(&mut first, "title", "a".into());
    assign(&mut first, "marks[]", "1".into());
    assign(&mut first, "meta.lang", "en".into());

    let mut second = Record::new();
    assign(&mut second, "title", "b".into());
    assign(&mut second, "marks[]", "2".into());
    assign(&mut second, "meta.size", "3".into());

    first.merge(second);

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        json!({
            "title": "b",
            "marks": ["1", "2"],
            "meta": { "lang": "en", "size": "3" },
        })
    );
}

#[test]
fn accessors() {
    let record = sample();
    assert_eq!(record.get("name").and_then(Value::as_str), Some("Jo \"J\""));
    assert_eq!(record.get("marks").and_then(Value::as_array).map(<[Value]>::len), Some(2));
    assert!(record.get("name").and_then(Value::as_object).is_none());
}
