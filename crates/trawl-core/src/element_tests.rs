use crate::{Element, ElementNode};

#[test]
fn attr_replaces_repeated_name() {
    let node = ElementNode::new("a").attr("href", "/x").attr("href", "/y");
    let el = &node;

    assert_eq!(el.attribute("href"), Some("/y"));
    assert_eq!(el.attributes(), vec![("href", "/y")]);
}

#[test]
fn children_keep_document_order() {
    let node = ElementNode::new("ul")
        .child(ElementNode::new("li").text("1"))
        .child(ElementNode::new("li").text("2"));

    let texts: Vec<String> = (&node)
        .child_elements()
        .iter()
        .map(|c| c.shallow_text())
        .collect();
    assert_eq!(texts, ["1", "2"]);
}

#[test]
fn missing_attribute_is_none() {
    let node = ElementNode::new("div");
    assert_eq!((&node).attribute("id"), None);
    assert_eq!((&node).tag_name(), "div");
}
