//! Human-readable pattern dump for debugging.
//!
//! One line per node, children indented under their parent, followed by
//! one line per constraint:
//!
//! ```text
//! div [block repeatable] -> people[]
//!   @class = "person"
//!   #text "Name: " ${name} ""
//!   @title "" ${/^\d+$/} ""
//! ```

use std::fmt;

use trawl_core::Colors;

use crate::pattern::{NodeId, Pattern};

/// Display adapter printing a [`Pattern`] tree.
pub struct Dump<'p> {
    pattern: &'p Pattern,
    colors: Colors,
}

impl<'p> Dump<'p> {
    pub fn new(pattern: &'p Pattern) -> Self {
        Self {
            pattern,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    fn node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let c = self.colors;
        let node = self.pattern.node(id);
        let indent = "  ".repeat(depth);

        write!(f, "{indent}{}{}{}", c.blue, node.tag, c.reset)?;
        if !node.modifiers.is_empty() {
            write!(f, " {}[{}]{}", c.dim, node.modifiers.names().join(" "), c.reset)?;
        }
        if let Some(key) = &node.block_key {
            write!(f, " -> {key}")?;
        }
        writeln!(f)?;

        for (name, value) in &node.literal_attributes {
            writeln!(f, "{indent}  @{name} = {value:?}")?;
        }
        for framer in &node.extraction.text {
            self.framer(f, &indent, "#text", framer.start.source(), &framer.path, framer.end.source())?;
        }
        for (name, framers) in &node.extraction.attributes {
            for framer in framers {
                let source = format!("@{name}");
                self.framer(f, &indent, &source, framer.start.source(), &framer.path, framer.end.source())?;
            }
        }
        for framer in &node.checkers.text {
            let field = checker_field(framer.validator.pattern(), framer.validator.flags());
            self.framer(f, &indent, "#text", framer.start.source(), &field, framer.end.source())?;
        }
        for (name, framers) in &node.checkers.attributes {
            for framer in framers {
                let source = format!("@{name}");
                let field = checker_field(framer.validator.pattern(), framer.validator.flags());
                self.framer(f, &indent, &source, framer.start.source(), &field, framer.end.source())?;
            }
        }
        Ok(())
    }

    fn framer(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: &str,
        source: &str,
        start: &str,
        field: &str,
        end: &str,
    ) -> fmt::Result {
        let c = self.colors;
        writeln!(
            f,
            "{indent}  {source} {start:?} {}${{{field}}}{} {end:?}",
            c.green, c.reset
        )
    }
}

fn checker_field(pattern: &str, flags: &str) -> String {
    format!("/{pattern}/{flags}")
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pattern.is_empty() {
            return Ok(());
        }
        let mut pending = vec![(self.pattern.root(), 0)];
        while let Some((id, depth)) = pending.pop() {
            self.node(f, id, depth)?;
            let children = &self.pattern.node(id).children;
            pending.extend(children.iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}

impl Pattern {
    /// Dump adapter for this pattern.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(self)
    }
}
