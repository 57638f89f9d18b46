//! Field path assembly.
//!
//! A field path is a `.`-separated list of segments. A segment ending in
//! `[]` appends instead of overwriting:
//!
//! - `name` sets a field (later writes win)
//! - `marks[]` appends to a list of values
//! - `people[].name` appends a new record to `people` and sets `name` in it
//! - `address.city` descends into (or creates) a nested record
//!
//! A `_` segment (with or without `[]`) is the wildcard: a path containing
//! one never writes anything.

use crate::{Record, Value};

/// Path that matches but never writes.
pub const WILDCARD: &str = "_";

/// Segment suffix that turns an overwrite into an append.
pub const APPEND_SUFFIX: &str = "[]";

/// Write `value` into `record` at `path`, creating records and lists on
/// demand. Existing values of the wrong shape along the way are replaced.
pub fn assign(record: &mut Record, path: &str, value: Value) {
    if path.split('.').any(is_wildcard) {
        return;
    }

    let (parents, terminal) = match path.rsplit_once('.') {
        Some((parents, terminal)) => (Some(parents), terminal),
        None => (None, path),
    };

    let mut target = record;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        target = descend(target, segment);
    }

    match terminal.strip_suffix(APPEND_SUFFIX) {
        Some(key) => list_at(target, key).push(value),
        None => {
            target.insert(terminal, value);
        }
    }
}

fn is_wildcard(segment: &str) -> bool {
    segment.strip_suffix(APPEND_SUFFIX).unwrap_or(segment) == WILDCARD
}

fn descend<'r>(record: &'r mut Record, segment: &str) -> &'r mut Record {
    match segment.strip_suffix(APPEND_SUFFIX) {
        Some(key) => {
            let items = list_at(record, key);
            items.push(Value::Object(Record::new()));
            match items.last_mut() {
                Some(Value::Object(fresh)) => fresh,
                _ => unreachable!("a record was just appended"),
            }
        }
        None => {
            let slot = record.slot_or_insert(segment, || Value::Object(Record::new()));
            if !matches!(slot, Value::Object(_)) {
                *slot = Value::Object(Record::new());
            }
            match slot {
                Value::Object(nested) => nested,
                _ => unreachable!("slot was just reset to a record"),
            }
        }
    }
}

fn list_at<'r>(record: &'r mut Record, key: &str) -> &'r mut Vec<Value> {
    let slot = record.slot_or_insert(key, || Value::Array(Vec::new()));
    if !matches!(slot, Value::Array(_)) {
        *slot = Value::Array(Vec::new());
    }
    match slot {
        Value::Array(items) => items,
        _ => unreachable!("slot was just reset to a list"),
    }
}
