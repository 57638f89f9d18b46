//! Per-node modifiers from the `datatype` attribute.

/// Flags changing how a pattern node takes part in child alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Extraction is isolated in a sub-record folded in at the node's `key`.
    pub block: bool,
    /// May consume more than one candidate sibling.
    pub repeatable: bool,
    /// May stay unmatched without failing the parent.
    pub optional: bool,
}

impl Modifiers {
    pub const BLOCK: &'static str = "block";
    pub const REPEATABLE: &'static str = "repeatable";
    pub const OPTIONAL: &'static str = "optional";

    /// Parse a whitespace-separated flag list.
    ///
    /// Returns the parsed flags and the tokens that were not recognized.
    pub fn parse(value: &str) -> (Self, Vec<&str>) {
        let mut modifiers = Self::default();
        let mut unknown = Vec::new();
        for flag in value.split_whitespace() {
            match flag {
                Self::BLOCK => modifiers.block = true,
                Self::REPEATABLE => modifiers.repeatable = true,
                Self::OPTIONAL => modifiers.optional = true,
                other => unknown.push(other),
            }
        }
        (modifiers, unknown)
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            block: self.block || other.block,
            repeatable: self.repeatable || other.repeatable,
            optional: self.optional || other.optional,
        }
    }

    /// Whether an already-satisfied node may be tried again on a later sibling.
    pub fn is_reusable(self) -> bool {
        self.block || self.repeatable
    }

    pub fn is_empty(self) -> bool {
        self == Self::default()
    }

    /// Flag names in canonical order.
    pub fn names(self) -> Vec<&'static str> {
        [
            (self.block, Self::BLOCK),
            (self.repeatable, Self::REPEATABLE),
            (self.optional, Self::OPTIONAL),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}
