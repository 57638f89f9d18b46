//! trawl: extract structured records from HTML by example.
//!
//! A pattern is ordinary HTML whose text and attribute values carry
//! `${field}` placeholders. Matching it against a document yields a nested
//! record:
//!
//! ```
//! use trawl_lib::Query;
//!
//! let query = Query::new(r#"<ul class="marks"><li datatype="repeatable">${marks[]}</li></ul>"#)
//!     .expect("pattern has a root element");
//! let record = query
//!     .extract(r#"<body><ul class="marks"><li>18</li><li>19</li></ul></body>"#)
//!     .expect("document matches");
//! assert_eq!(record.format(false, Default::default()), r#"{"marks":["18","19"]}"#);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod markup;
pub mod options;
pub mod query;

#[cfg(test)]
mod query_tests;

use std::path::PathBuf;

pub use markup::{Document, HtmlElement};
pub use options::MatchOptions;
pub use query::Query;

pub use trawl_compiler::{Dump, Pattern, Warning, WarningKind};
pub use trawl_core::{Colors, Record, Value};

/// Errors raised at the edges of matching. Matching itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pattern markup contains no element to compile.
    #[error("pattern has no root element")]
    NoRootElement,

    /// The pattern root does not translate into a valid CSS selector.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for trawl operations.
pub type Result<T> = std::result::Result<T, Error>;
