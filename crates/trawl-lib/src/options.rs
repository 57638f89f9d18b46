//! Match configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use trawl_vm::MatchLimits;

use crate::{Error, Result};

/// How a [`Query`](crate::Query) locates and matches candidates.
///
/// Every field has a default, so a configuration file only needs the keys
/// it changes:
///
/// ```json
/// { "strict": true, "recursion_limit": 64 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    /// Match the pattern root against the document root only, instead of
    /// scanning the document for every element like the pattern root.
    pub strict: bool,
    /// Strip leading and trailing whitespace of element text, in both the
    /// pattern and the document.
    pub trim_text: bool,
    /// Maximum pattern depth followed during a match.
    pub recursion_limit: u32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strict: false,
            trim_text: true,
            recursion_limit: MatchLimits::default().get_recursion_limit(),
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn limits(&self) -> MatchLimits {
        MatchLimits::new().recursion_limit(self.recursion_limit)
    }
}
