//! trawl compiler: turns a parsed pattern tree into an immutable [`Pattern`].
//!
//! - `tokenizer` - `${name}` / `${/regex/flags}` placeholder scanning
//! - `modifiers` - the `datatype` attribute (`block`, `repeatable`, `optional`)
//! - `search` - compiled delimiters and inline validators
//! - `pattern` - the node arena consumed by the matcher
//! - `compiler` - the single pass from element tree to [`Pattern`]

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod compiler;
mod dump;
mod modifiers;
mod pattern;
mod search;
pub mod tokenizer;

#[cfg(test)]
mod search_tests;

pub use compiler::{Compiler, compile};
pub use dump::Dump;
pub use modifiers::Modifiers;
pub use pattern::{
    CheckerFramer, ExtractionFramer, FramerSet, NodeId, Pattern, PatternNode, Warning, WarningKind,
};
pub use search::{Delimiter, Validator};
pub use tokenizer::{FieldSpec, Framer, Scan, scan, tokenize};

/// Attribute holding whitespace-separated modifier flags.
pub const DATATYPE_ATTR: &str = "datatype";

/// Attribute holding the destination path of a block.
pub const KEY_ATTR: &str = "key";
