//! Single pass from a parsed pattern tree to a [`Pattern`].

use trawl_core::Element;

use crate::pattern::{
    CheckerFramer, ExtractionFramer, FramerSet, NodeId, Pattern, PatternNode, Warning, WarningKind,
};
use crate::tokenizer::{FieldSpec, Framer, scan};
use crate::{DATATYPE_ATTR, Delimiter, KEY_ATTR, Modifiers, Validator};

/// Pattern compiler configuration.
#[derive(Clone, Copy, Debug)]
pub struct Compiler {
    trim_text: bool,
}

impl Default for Compiler {
    fn default() -> Self {
        Self { trim_text: true }
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip leading and trailing whitespace from shallow text before
    /// tokenizing. Enabled by default.
    pub fn trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }

    /// Compile the tree rooted at `root`.
    pub fn compile<E: Element>(&self, root: &E) -> Pattern {
        let mut lowering = Lowering {
            trim_text: self.trim_text,
            nodes: Vec::new(),
            warnings: Vec::new(),
        };
        lowering.lower_tree(root);
        tracing::debug!(
            nodes = lowering.nodes.len(),
            warnings = lowering.warnings.len(),
            "pattern compiled"
        );
        Pattern {
            nodes: lowering.nodes,
            warnings: lowering.warnings,
        }
    }
}

/// Compile with default settings.
pub fn compile<E: Element>(root: &E) -> Pattern {
    Compiler::new().compile(root)
}

struct Lowering {
    trim_text: bool,
    nodes: Vec<PatternNode>,
    warnings: Vec<Warning>,
}

impl Lowering {
    /// Pre-order walk on an explicit work stack. Ids follow document order.
    fn lower_tree<E: Element>(&mut self, root: &E) {
        let root_id = self.lower(root, None);
        let mut pending: Vec<(E, NodeId)> = Vec::new();
        pending.extend(root.child_elements().into_iter().rev().map(|child| (child, root_id)));

        while let Some((element, parent)) = pending.pop() {
            let id = self.lower(&element, Some(parent));
            self.nodes[parent.index()].children.push(id);
            pending.extend(element.child_elements().into_iter().rev().map(|child| (child, id)));
        }
    }

    fn lower<E: Element>(&mut self, element: &E, parent: Option<NodeId>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        let mut node = PatternNode::new(element.tag_name(), parent);

        let text = element.shallow_text();
        let text = if self.trim_text { text.trim() } else { &text };
        let framers = self.scan(id, text);
        let (extraction, checkers) = self.partition(id, framers);
        node.extraction.text = extraction;
        node.checkers.text = checkers;

        for (name, value) in element.attributes() {
            match name {
                DATATYPE_ATTR => {
                    let (modifiers, unknown) = Modifiers::parse(value);
                    for flag in unknown {
                        tracing::debug!(flag, tag = %node.tag, "ignoring unknown datatype flag");
                        self.warn(id, WarningKind::UnknownModifier(flag.to_owned()));
                    }
                    node.modifiers = node.modifiers.union(modifiers);
                }
                KEY_ATTR => {
                    node.block_key = Some(value.to_owned()).filter(|key| !key.is_empty());
                }
                _ => {
                    let framers = self.scan(id, value);
                    if framers.is_empty() {
                        node.literal_attributes
                            .insert(name.to_owned(), value.to_owned());
                        continue;
                    }
                    let (extraction, checkers) = self.partition(id, framers);
                    insert_nonempty(&mut node.extraction, name, extraction);
                    insert_nonempty(&mut node.checkers, name, checkers);
                }
            }
        }

        if let Some(key) = &node.block_key
            && !node.modifiers.block
        {
            self.warn(id, WarningKind::KeyWithoutBlock(key.clone()));
        }

        self.nodes.push(node);
        id
    }

    fn partition(
        &mut self,
        node: NodeId,
        framers: Vec<Framer>,
    ) -> (Vec<ExtractionFramer>, Vec<CheckerFramer>) {
        let mut extraction = Vec::new();
        let mut checkers = Vec::new();
        for framer in framers {
            let start = self.delimiter(node, &framer.start);
            let end = self.delimiter(node, &framer.end);
            match framer.field {
                FieldSpec::Path(path) => extraction.push(ExtractionFramer { start, end, path }),
                FieldSpec::Validator { pattern, flags } => {
                    let validator = Validator::new(&pattern, &flags);
                    if let Some(reason) = validator.error() {
                        self.warn(
                            node,
                            WarningKind::MalformedValidator {
                                source: format!("/{pattern}/{flags}"),
                                reason: reason.to_owned(),
                            },
                        );
                    }
                    checkers.push(CheckerFramer {
                        start,
                        end,
                        validator,
                    });
                }
            }
        }
        (extraction, checkers)
    }

    fn scan(&mut self, node: NodeId, text: &str) -> Vec<Framer> {
        let scanned = scan(text);
        if let Some(raw) = scanned.unterminated {
            self.warn(node, WarningKind::UnterminatedPlaceholder(raw));
        }
        scanned.framers
    }

    fn delimiter(&mut self, node: NodeId, source: &str) -> Delimiter {
        let delimiter = Delimiter::new(source);
        if delimiter.is_literal() {
            self.warn(node, WarningKind::LiteralDelimiter(source.to_owned()));
        }
        delimiter
    }

    /// Record a warning once per node.
    fn warn(&mut self, node: NodeId, kind: WarningKind) {
        let warning = Warning { node, kind };
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }
}

fn insert_nonempty<F>(set: &mut FramerSet<F>, name: &str, framers: Vec<F>) {
    if !framers.is_empty() {
        set.attributes.insert(name.to_owned(), framers);
    }
}
