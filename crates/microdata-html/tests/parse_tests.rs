//! Integration tests for converting parsed HTML into the node tree.

use microdata_dom::{DomTree, NodeId, NodeType};
use microdata_html::{format_tree, parse_document};

/// Helper to get the first element with the given tag.
fn find(tree: &DomTree, tag: &str) -> NodeId {
    tree.element_by_tag(tag)
        .unwrap_or_else(|| panic!("no <{tag}> in tree"))
}

#[test]
fn test_document_structure() {
    let tree = parse_document("<!DOCTYPE html><html><head></head><body></body></html>");

    let root = tree.get(NodeId::ROOT).expect("root");
    assert!(matches!(root.node_type, NodeType::Document));

    let html = tree.document_element().expect("html element");
    assert!(tree.as_element(html).unwrap().is("html"));
    let head = find(&tree, "head");
    let body = find(&tree, "body");
    assert_eq!(tree.parent(head), Some(html));
    assert_eq!(tree.parent(body), Some(html));
    assert_eq!(tree.next_sibling(head), Some(body));
}

#[test]
fn test_implied_elements_are_created() {
    let tree = parse_document("<div itemscope><span itemprop=name>x</span></div>");

    let body = find(&tree, "body");
    let div = find(&tree, "div");
    assert_eq!(tree.parent(div), Some(body));
}

#[test]
fn test_attributes_are_copied() {
    let tree = parse_document(r#"<div itemscope itemtype="http://example.com/T" id="x"></div>"#);
    let div = tree.as_element(find(&tree, "div")).unwrap();

    assert!(div.has_attr("itemscope"));
    assert_eq!(div.attr("itemscope"), Some(""));
    assert_eq!(div.attr("itemtype"), Some("http://example.com/T"));
    assert_eq!(div.id(), Some("x"));
}

#[test]
fn test_duplicate_attribute_keeps_first_value() {
    let tree = parse_document(r#"<span itemprop="a" itemprop="b">x</span>"#);
    let span = tree.as_element(find(&tree, "span")).unwrap();

    assert_eq!(span.attr("itemprop"), Some("a"));
}

#[test]
fn test_tag_and_attribute_names_are_lower_case() {
    let tree = parse_document(r#"<META ItemProp="length" CONTENT="1.70">"#);
    let meta = tree.as_element(find(&tree, "meta")).unwrap();

    assert_eq!(meta.tag_name, "meta");
    assert_eq!(meta.attr("itemprop"), Some("length"));
    assert_eq!(meta.attr("content"), Some("1.70"));
}

#[test]
fn test_text_and_entities() {
    let tree = parse_document("<p>Fish &amp; <b>Chips</b></p>");
    let p = find(&tree, "p");

    assert_eq!(tree.text_content(p), "Fish & Chips");
}

#[test]
fn test_comments_are_kept_but_not_text() {
    let tree = parse_document("<p>a<!-- note -->b</p>");
    let p = find(&tree, "p");

    let has_comment = tree
        .children(p)
        .iter()
        .any(|&c| matches!(tree.get(c).map(|n| &n.node_type), Some(NodeType::Comment(s)) if s == " note "));
    assert!(has_comment);
    assert_eq!(tree.text_content(p), "ab");
}

#[test]
fn test_template_contents_are_children() {
    let tree = parse_document(
        "<template><div itemscope><span itemprop=name>x</span></div></template>",
    );

    let template = find(&tree, "template");
    let div = find(&tree, "div");
    assert_eq!(tree.parent(div), Some(template));
    assert!(tree.as_element(div).unwrap().has_attr("itemscope"));
    assert_eq!(tree.text_content(template), "x");
}

#[test]
fn test_format_tree_shows_attributes_and_text() {
    let tree = parse_document(r#"<div itemscope><span itemprop="name">Pen elope</span></div>"#);
    let out = format_tree(&tree, find(&tree, "div"));

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "<div itemscope>");
    assert_eq!(lines[1], "  <span itemprop=\"name\">");
    assert_eq!(lines[2], "    \"Pen\u{00B7}elope\"");
}
