//! Compiled pattern: an arena of immutable nodes.
//!
//! Nodes refer to each other by [`NodeId`]. The root is always the first
//! node. Parent links are indices and are only used to describe a node's
//! position (`div > ul > li`), never during matching.

use std::fmt;

use indexmap::IndexMap;

use crate::{Delimiter, Modifiers, Validator};

/// Index of a node in its [`Pattern`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Placeholder that writes the text between its delimiters to `path`.
#[derive(Clone, Debug)]
pub struct ExtractionFramer {
    pub start: Delimiter,
    pub end: Delimiter,
    pub path: String,
}

/// Placeholder that only validates the text between its delimiters.
#[derive(Clone, Debug)]
pub struct CheckerFramer {
    pub start: Delimiter,
    pub end: Delimiter,
    pub validator: Validator,
}

/// Framers of one kind, grouped by source: attribute values and own text.
#[derive(Clone, Debug)]
pub struct FramerSet<F> {
    pub attributes: IndexMap<String, Vec<F>>,
    pub text: Vec<F>,
}

impl<F> Default for FramerSet<F> {
    fn default() -> Self {
        Self {
            attributes: IndexMap::new(),
            text: Vec::new(),
        }
    }
}

impl<F> FramerSet<F> {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.attributes.values().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.text.len() + self.attributes.values().map(Vec::len).sum::<usize>()
    }
}

/// One compiled pattern element.
#[derive(Clone, Debug)]
pub struct PatternNode {
    /// Lower-cased tag name.
    pub tag: String,
    /// Placeholder-free attributes; candidates must carry them verbatim.
    pub literal_attributes: IndexMap<String, String>,
    pub extraction: FramerSet<ExtractionFramer>,
    pub checkers: FramerSet<CheckerFramer>,
    pub modifiers: Modifiers,
    /// Destination of a block's sub-record.
    pub block_key: Option<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl PatternNode {
    pub(crate) fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            literal_attributes: IndexMap::new(),
            extraction: FramerSet::default(),
            checkers: FramerSet::default(),
            modifiers: Modifiers::default(),
            block_key: None,
            children: Vec::new(),
            parent,
        }
    }
}

/// Non-fatal finding produced while compiling. Never changes matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    pub node: NodeId,
    pub kind: WarningKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WarningKind {
    /// A `datatype` flag other than `block`, `repeatable` or `optional`.
    UnknownModifier(String),
    /// A `key` attribute on a node that is not a block.
    KeyWithoutBlock(String),
    /// A validator that does not compile and therefore accepts anything.
    MalformedValidator { source: String, reason: String },
    /// A delimiter that is not a valid regex and is searched literally.
    LiteralDelimiter(String),
    /// A `${` never closed; it and everything after it stay literal text.
    UnterminatedPlaceholder(String),
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::UnknownModifier(flag) => write!(f, "unknown datatype flag '{flag}'"),
            WarningKind::KeyWithoutBlock(key) => {
                write!(f, "key '{key}' has no effect without the block flag")
            }
            WarningKind::MalformedValidator { source, reason } => {
                write!(f, "validator {source} never rejects: {reason}")
            }
            WarningKind::LiteralDelimiter(delimiter) => {
                write!(f, "delimiter '{delimiter}' is not a valid regex, searched literally")
            }
            WarningKind::UnterminatedPlaceholder(raw) => {
                write!(f, "unterminated placeholder '{raw}' kept as literal text")
            }
        }
    }
}

/// Compiled, immutable pattern tree.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub(crate) nodes: Vec<PatternNode>,
    pub(crate) warnings: Vec<Warning>,
}

impl Pattern {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &PatternNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Tag path from the root, e.g. `div > ul > li`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut tags = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            tags.push(node.tag.as_str());
            current = node.parent;
        }
        tags.reverse();
        tags.join(" > ")
    }

    /// Warning message prefixed with the node's path.
    pub fn describe(&self, warning: &Warning) -> String {
        format!("{}: {}", self.path_of(warning.node), warning.kind)
    }
}
