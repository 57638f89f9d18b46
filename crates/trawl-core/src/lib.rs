#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the trawl compiler, VM and library.
//!
//! - [`Element`]: the minimal capability set the engine needs from a parsed
//!   markup tree (tag, attributes, element children, shallow text).
//! - [`Value`] / [`Record`]: the schema-less output of an extraction.
//! - [`path`]: folding dotted/bracketed field paths into a record.

mod colors;
mod element;
pub mod path;
mod value;

#[cfg(test)]
mod element_tests;
#[cfg(test)]
mod value_tests;

pub use colors::Colors;
pub use element::{Element, ElementNode};
pub use path::{APPEND_SUFFIX, WILDCARD, assign};
pub use value::{Record, Value};
