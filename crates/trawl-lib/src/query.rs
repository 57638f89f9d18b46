//! Compiled pattern plus the strategy for finding candidates.

use scraper::Selector;
use trawl_compiler::{Compiler, Pattern};
use trawl_core::Record;
use trawl_vm::Matcher;

use crate::markup::Document;
use crate::{Error, MatchOptions, Result};

/// A compiled pattern ready to run against documents.
///
/// In strict mode the pattern root is matched against the document root.
/// Otherwise the document is scanned for elements with the pattern root's
/// tag and literal classes, and each hit is matched on its own.
#[derive(Debug)]
pub struct Query {
    pattern: Pattern,
    options: MatchOptions,
    /// Candidate selector, built only for non-strict matching.
    selector: Option<Selector>,
}

impl Query {
    pub fn new(source: &str) -> Result<Self> {
        Self::with_options(source, MatchOptions::default())
    }

    pub fn with_options(source: &str, options: MatchOptions) -> Result<Self> {
        let document = Document::parse(source);
        let root = document.root().ok_or(Error::NoRootElement)?;
        let pattern = Compiler::new()
            .trim_text(options.trim_text)
            .compile(&root);
        for warning in pattern.warnings() {
            tracing::debug!(warning = %pattern.describe(warning), "pattern warning");
        }

        let selector = if options.strict {
            None
        } else {
            Some(root_selector(&pattern)?)
        };
        Ok(Self {
            pattern,
            options,
            selector,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Match `source` and fold every accepted record into one.
    ///
    /// Returns `None` when nothing matched.
    pub fn extract(&self, source: &str) -> Option<Record> {
        let mut records = self.extract_all(source).into_iter();
        let mut folded = records.next()?;
        for record in records {
            folded.merge(record);
        }
        Some(folded)
    }

    /// Match `source` and return one record per accepted candidate, in
    /// document order.
    pub fn extract_all(&self, source: &str) -> Vec<Record> {
        let matcher = Matcher::new(&self.pattern)
            .limits(self.options.limits())
            .trim_text(self.options.trim_text);

        let Some(selector) = &self.selector else {
            let document = Document::parse(source);
            return document
                .root()
                .and_then(|root| matcher.match_root(&root))
                .into_iter()
                .collect();
        };

        let document = Document::parse_document(source);
        let mut hits = 0usize;
        let records: Vec<Record> = document
            .select(selector)
            .inspect(|_| hits += 1)
            .filter_map(|hit| matcher.match_root(&hit))
            .collect();
        tracing::debug!(hits, accepted = records.len(), "document scanned");
        records
    }
}

impl TryFrom<&str> for Query {
    type Error = Error;

    fn try_from(source: &str) -> Result<Self> {
        Self::new(source)
    }
}

/// `tag.class1.class2` from the pattern root.
fn root_selector(pattern: &Pattern) -> Result<Selector> {
    let root = pattern.node(pattern.root());
    let mut css = root.tag.clone();
    if let Some(class) = root.literal_attributes.get("class") {
        for term in class.split_whitespace() {
            css.push('.');
            css.push_str(term);
        }
    }
    Selector::parse(&css).map_err(|err| Error::InvalidSelector {
        selector: css.clone(),
        reason: err.to_string(),
    })
}
