//! Extraction output: a schema-less tree of records, lists and strings.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::Colors;

/// One extracted value.
///
/// The shape is driven entirely by the field paths in the pattern, so there
/// is no fixed schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    String(String),
    Array(Vec<Value>),
    Object(Record),
}

/// Ordered string-keyed map of values. Keys keep first-insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert or overwrite a field, keeping the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn slot(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub(crate) fn slot_or_insert(&mut self, key: &str, default: impl FnOnce() -> Value) -> &mut Value {
        self.0.entry(key.to_owned()).or_insert_with(default)
    }

    /// Fold `other` into `self`.
    ///
    /// Records merge key by key, lists are concatenated, anything else is
    /// overwritten by `other`. This is what assigning `other`'s paths one by
    /// one into `self` would produce.
    pub fn merge(&mut self, other: Record) {
        for (key, incoming) in other.0 {
            match self.slot(&key) {
                Some(existing) => existing.merge(incoming),
                None => {
                    self.0.insert(key, incoming);
                }
            }
        }
    }

    /// Format as JSON, optionally pretty-printed and colored.
    pub fn format(&self, pretty: bool, colors: Colors) -> String {
        let mut out = String::new();
        format_object(&mut out, self, &colors, pretty, 0);
        out
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    fn merge(&mut self, incoming: Value) {
        match (self, incoming) {
            (Value::Object(existing), Value::Object(incoming)) => existing.merge(incoming),
            (Value::Array(existing), Value::Array(incoming)) => existing.extend(incoming),
            (slot, incoming) => *slot = incoming,
        }
    }

    /// Format as JSON, optionally pretty-printed and colored.
    ///
    /// Color scheme (jq-inspired):
    /// - Keys: Blue
    /// - String values: Green
    /// - Structure `{}[]:,`: Dim
    pub fn format(&self, pretty: bool, colors: Colors) -> String {
        let mut out = String::new();
        format_value(&mut out, self, &colors, pretty, 0);
        out
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn format_value(out: &mut String, value: &Value, c: &Colors, pretty: bool, indent: usize) {
    match value {
        Value::String(s) => format_string(out, s, c.green, c),
        Value::Array(arr) => format_array(out, arr, c, pretty, indent),
        Value::Object(record) => format_object(out, record, c, pretty, indent),
    }
}

fn format_string(out: &mut String, s: &str, color: &str, c: &Colors) {
    out.push_str(color);
    out.push('"');
    out.push_str(&escape_json_string(s));
    out.push('"');
    out.push_str(c.reset);
}

fn format_punct(out: &mut String, punct: char, c: &Colors) {
    out.push_str(c.dim);
    out.push(punct);
    out.push_str(c.reset);
}

fn newline(out: &mut String, pretty: bool, indent: usize) {
    if pretty {
        out.push('\n');
        out.push_str(&" ".repeat(indent));
    }
}

fn format_array(out: &mut String, arr: &[Value], c: &Colors, pretty: bool, indent: usize) {
    format_punct(out, '[', c);

    if arr.is_empty() {
        format_punct(out, ']', c);
        return;
    }

    let elem_indent = if pretty { indent + 2 } else { 0 };

    for (i, item) in arr.iter().enumerate() {
        if i > 0 {
            format_punct(out, ',', c);
        }
        newline(out, pretty, elem_indent);
        format_value(out, item, c, pretty, elem_indent);
    }

    newline(out, pretty, indent);
    format_punct(out, ']', c);
}

fn format_object(out: &mut String, record: &Record, c: &Colors, pretty: bool, indent: usize) {
    format_punct(out, '{', c);

    if record.is_empty() {
        format_punct(out, '}', c);
        return;
    }

    let field_indent = if pretty { indent + 2 } else { 0 };

    for (i, (key, value)) in record.iter().enumerate() {
        if i > 0 {
            format_punct(out, ',', c);
        }
        newline(out, pretty, field_indent);

        format_string(out, key, c.blue, c);
        format_punct(out, ':', c);
        if pretty {
            out.push(' ');
        }

        format_value(out, value, c, pretty, field_indent);
    }

    newline(out, pretty, indent);
    format_punct(out, '}', c);
}

fn escape_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}
