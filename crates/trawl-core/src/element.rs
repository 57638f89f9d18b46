//! The element capability set required by the engine.
//!
//! Markup parsing is not done here. Any parser can feed the engine by
//! implementing [`Element`] for a cheap handle type (typically a reference
//! or a `Copy` wrapper around one).

/// Read-only view of one element of a parsed markup tree.
pub trait Element: Sized {
    /// Tag name as produced by the parser.
    fn tag_name(&self) -> &str;

    /// Value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// All attributes in parser order.
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Element children in document order (text and comments excluded).
    fn child_elements(&self) -> Vec<Self>;

    /// The element's own text with descendant markup stripped.
    fn shallow_text(&self) -> String;
}

/// Owned element tree.
///
/// Useful for callers whose parser output is not directly navigable, and
/// for building trees by hand:
///
/// ```
/// use trawl_core::ElementNode;
///
/// let div = ElementNode::new("div")
///     .attr("class", "people")
///     .child(ElementNode::new("span").text("John"));
/// assert_eq!(div.children().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementNode {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add an attribute. A repeated name replaces the earlier value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Append to the element's own text.
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.text.push_str(text.as_ref());
        self
    }

    pub fn child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[ElementNode] {
        &self.children
    }
}

impl<'a> Element for &'a ElementNode {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect()
    }

    fn child_elements(&self) -> Vec<Self> {
        let node: &'a ElementNode = *self;
        node.children.iter().collect()
    }

    fn shallow_text(&self) -> String {
        self.text.clone()
    }
}
