//! HTML parsing and the [`Element`] view over `scraper` trees.

use scraper::{ElementRef, Html, Selector};
use trawl_core::Element;

/// Tags that only make sense in a full document.
const DOCUMENT_TAGS: [&str; 3] = ["html", "head", "body"];

/// Parsed markup plus the rule for locating its root element.
pub struct Document {
    html: Html,
    /// Tag of the root in a full document; `None` for fragments.
    root_tag: Option<String>,
}

impl Document {
    /// Parse `source`, choosing full-document or fragment parsing by its
    /// first tag.
    ///
    /// A source starting with `<html>`, `<head>` or `<body>` is a document and
    /// that element is its root. Anything else is a fragment whose first
    /// element is the root.
    pub fn parse(source: &str) -> Self {
        match leading_tag(source) {
            Some(tag) if DOCUMENT_TAGS.contains(&tag.as_str()) => {
                Self::new(Html::parse_document(source), Some(tag))
            }
            _ => Self::new(Html::parse_fragment(source), None),
        }
    }

    /// Parse `source` as a full document regardless of its first tag.
    pub fn parse_document(source: &str) -> Self {
        let tag = leading_tag(source)
            .filter(|tag| DOCUMENT_TAGS.contains(&tag.as_str()))
            .unwrap_or_else(|| "html".to_owned());
        Self::new(Html::parse_document(source), Some(tag))
    }

    fn new(html: Html, root_tag: Option<String>) -> Self {
        if !html.errors.is_empty() {
            tracing::debug!(errors = html.errors.len(), "markup parsed with recoverable errors");
        }
        Self { html, root_tag }
    }

    pub fn root(&self) -> Option<HtmlElement<'_>> {
        let top = self.html.root_element();
        let root = match &self.root_tag {
            Some(tag) => top
                .descendants()
                .filter_map(ElementRef::wrap)
                .find(|element| element.value().name() == tag),
            None => top.children().find_map(ElementRef::wrap),
        };
        root.map(HtmlElement)
    }

    /// Every element matching `selector`, in document order.
    pub fn select<'a>(
        &'a self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = HtmlElement<'a>> + 'a {
        self.html.select(selector).map(HtmlElement)
    }
}

/// One element of a parsed [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl Element for HtmlElement<'_> {
    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.0.value().attrs().collect()
    }

    fn child_elements(&self) -> Vec<Self> {
        self.0.children().filter_map(ElementRef::wrap).map(HtmlElement).collect()
    }

    fn shallow_text(&self) -> String {
        self.0
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .collect()
    }
}

/// Lower-cased name of the first tag in `source`, skipping comments,
/// doctypes and processing instructions.
fn leading_tag(source: &str) -> Option<String> {
    let mut rest = source;
    while let Some(at) = rest.find('<') {
        rest = &rest[at + 1..];
        if let Some(comment) = rest.strip_prefix("!--") {
            let close = comment.find("-->")?;
            rest = &comment[close + 3..];
            continue;
        }
        let name: String = rest
            .chars()
            .take_while(char::is_ascii_alphanumeric)
            .collect();
        if name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Some(name.to_ascii_lowercase());
        }
    }
    None
}
