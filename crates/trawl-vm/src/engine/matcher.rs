//! Pattern node against candidate element.

use trawl_compiler::{CheckerFramer, ExtractionFramer, FramerSet, NodeId, Pattern, PatternNode};
use trawl_core::{Element, Record, Value, assign};

use super::error::MatchError;
use super::extract::extract;
use super::limits::MatchLimits;

/// Matches a compiled pattern against element trees.
///
/// A `Matcher` only borrows the pattern, so any number of matchers can run
/// over the same [`Pattern`] at once.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'p> {
    pattern: &'p Pattern,
    limits: MatchLimits,
    trim_text: bool,
}

impl<'p> Matcher<'p> {
    pub fn new(pattern: &'p Pattern) -> Self {
        Self {
            pattern,
            limits: MatchLimits::default(),
            trim_text: true,
        }
    }

    pub fn limits(mut self, limits: MatchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Strip leading and trailing whitespace from candidate shallow text.
    /// Enabled by default.
    pub fn trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }

    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// Match the pattern root against `element` into a fresh record.
    pub fn match_root<E: Element>(&self, element: &E) -> Option<Record> {
        let mut record = Record::new();
        self.matches(self.pattern.root(), element, &mut record)
            .then_some(record)
    }

    /// Match node `id` against `element`, writing extracted values into
    /// `target` on success.
    ///
    /// Hitting the recursion limit counts as no match.
    pub fn matches<E: Element>(&self, id: NodeId, element: &E, target: &mut Record) -> bool {
        match self.try_matches(id, element, target) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(%err, pattern = %self.pattern.path_of(id), "giving up on candidate");
                false
            }
        }
    }

    /// Like [`Matcher::matches`], but reports the recursion limit.
    pub fn try_matches<E: Element>(
        &self,
        id: NodeId,
        element: &E,
        target: &mut Record,
    ) -> Result<bool, MatchError> {
        self.visit(id, element, target, 1)
    }

    fn visit<E: Element>(
        &self,
        id: NodeId,
        element: &E,
        target: &mut Record,
        depth: u32,
    ) -> Result<bool, MatchError> {
        if depth > self.limits.recursion_limit {
            return Err(MatchError::RecursionLimitExceeded(self.limits.recursion_limit));
        }

        let node = self.pattern.node(id);
        if !element.tag_name().eq_ignore_ascii_case(&node.tag) {
            return Ok(false);
        }
        if let Some(name) = self.literal_mismatch(node, element) {
            tracing::trace!(pattern = %self.pattern.path_of(id), attribute = name, "literal attribute differs");
            return Ok(false);
        }

        let text = self.own_text(node, element);
        if !checkers_pass(&node.checkers, element, text.as_deref()) {
            tracing::trace!(pattern = %self.pattern.path_of(id), "checker rejected");
            return Ok(false);
        }

        let mut block = node.modifiers.block.then(Record::new);
        let scope = match block.as_mut() {
            Some(sub) => sub,
            None => &mut *target,
        };
        if !self.align_children(node, element, scope, depth)? {
            tracing::trace!(pattern = %self.pattern.path_of(id), "children not aligned");
            return Ok(false);
        }
        if !extract_into(&node.extraction, element, text.as_deref(), scope) {
            tracing::trace!(pattern = %self.pattern.path_of(id), "nothing extracted");
            return Ok(false);
        }

        tracing::trace!(pattern = %self.pattern.path_of(id), "matched");
        if let Some(sub) = block
            && !sub.is_empty()
        {
            match &node.block_key {
                Some(key) => assign(target, key, Value::Object(sub)),
                None => target.merge(sub),
            }
        }
        Ok(true)
    }

    fn literal_mismatch<'n, E: Element>(
        &self,
        node: &'n PatternNode,
        element: &E,
    ) -> Option<&'n str> {
        node.literal_attributes
            .iter()
            .find(|(name, value)| element.attribute(name) != Some(value.as_str()))
            .map(|(name, _)| name.as_str())
    }

    /// Shallow text, computed only when some framer reads it.
    fn own_text<E: Element>(&self, node: &PatternNode, element: &E) -> Option<String> {
        if node.extraction.text.is_empty() && node.checkers.text.is_empty() {
            return None;
        }
        let text = element.shallow_text();
        Some(if self.trim_text {
            text.trim().to_owned()
        } else {
            text
        })
    }

    /// Align pattern children with candidate children in one forward scan.
    fn align_children<E: Element>(
        &self,
        node: &PatternNode,
        element: &E,
        target: &mut Record,
        depth: u32,
    ) -> Result<bool, MatchError> {
        if node.children.is_empty() {
            return Ok(true);
        }
        let candidates = element.child_elements();
        if candidates.len() < node.children.len() {
            return Ok(false);
        }

        let mut satisfied = vec![false; node.children.len()];
        for candidate in &candidates {
            for (slot, &child) in node.children.iter().enumerate() {
                if satisfied[slot] && !self.pattern.node(child).modifiers.is_reusable() {
                    continue;
                }
                if self.visit(child, candidate, target, depth + 1)? {
                    satisfied[slot] = true;
                    break;
                }
            }
        }

        Ok(node
            .children
            .iter()
            .zip(&satisfied)
            .all(|(&child, &done)| done || self.pattern.node(child).modifiers.optional))
    }
}

fn source_text<'e, E: Element>(
    element: &'e E,
    attribute: Option<&str>,
    text: Option<&'e str>,
) -> Option<&'e str> {
    match attribute {
        Some(name) => element.attribute(name),
        None => text,
    }
}

fn checkers_pass<E: Element>(
    checkers: &FramerSet<CheckerFramer>,
    element: &E,
    text: Option<&str>,
) -> bool {
    let by_attribute = checkers
        .attributes
        .iter()
        .flat_map(|(name, framers)| framers.iter().map(move |f| (Some(name.as_str()), f)));
    let by_text = checkers.text.iter().map(|f| (None, f));

    by_attribute.chain(by_text).all(|(attribute, framer)| {
        let value = source_text(element, attribute, text)
            .and_then(|source| extract(&framer.start, &framer.end, source));
        framer.validator.is_match(value)
    })
}

/// Run every extraction framer. Passes when there are none or when at
/// least one finds its text.
fn extract_into<E: Element>(
    extraction: &FramerSet<ExtractionFramer>,
    element: &E,
    text: Option<&str>,
    target: &mut Record,
) -> bool {
    if extraction.is_empty() {
        return true;
    }

    let by_attribute = extraction
        .attributes
        .iter()
        .flat_map(|(name, framers)| framers.iter().map(move |f| (Some(name.as_str()), f)));
    let by_text = extraction.text.iter().map(|f| (None, f));

    let mut found = false;
    for (attribute, framer) in by_attribute.chain(by_text) {
        let Some(source) = source_text(element, attribute, text) else {
            continue;
        };
        if let Some(value) = extract(&framer.start, &framer.end, source) {
            assign(target, &framer.path, Value::from(value));
            found = true;
        }
    }
    found
}
