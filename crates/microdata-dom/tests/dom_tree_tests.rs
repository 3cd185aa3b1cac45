//! Tests for tree construction, traversal and attribute lookup.

use microdata_dom::{DomTree, ElementData, NodeId, split_tokens};

/// Helper to append an element without attributes.
fn element(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
    tree.append_element(parent, ElementData::new(tag))
}

// ========== attributes ==========

#[test]
fn test_duplicate_attribute_first_wins() {
    let data = ElementData::with_attrs("div", [("id", "first"), ("class", "x"), ("id", "second")]);

    assert_eq!(data.attr("id"), Some("first"));
    assert_eq!(data.attrs().len(), 2);
    assert_eq!(data.attrs()[0].name, "id");
    assert_eq!(data.attrs()[1].name, "class");
}

#[test]
fn test_push_attr_reports_duplicates() {
    let mut data = ElementData::new("span");
    assert!(data.push_attr("itemprop", "name"));
    assert!(!data.push_attr("itemprop", "other"));
    assert_eq!(data.attr("itemprop"), Some("name"));
}

#[test]
fn test_boolean_attribute_is_present_with_empty_value() {
    let data = ElementData::with_attrs("div", [("itemscope", "")]);
    assert!(data.has_attr("itemscope"));
    assert_eq!(data.attr("itemscope"), Some(""));
    assert!(!data.has_attr("itemprop"));
}

#[test]
fn test_tag_comparison_ignores_case() {
    let data = ElementData::new("META");
    assert!(data.is("meta"));
    assert!(!data.is("link"));
}

// ========== tokens ==========

#[test]
fn test_split_tokens_discards_empty_tokens() {
    let tokens: Vec<&str> = split_tokens("  a  b\tc\n").collect();
    assert_eq!(tokens, ["a", "b", "c"]);
}

#[test]
fn test_split_tokens_keeps_duplicates_in_order() {
    let tokens: Vec<&str> = split_tokens("B A B").collect();
    assert_eq!(tokens, ["B", "A", "B"]);
}

#[test]
fn test_split_tokens_empty_input() {
    assert_eq!(split_tokens("   ").count(), 0);
}

// ========== links ==========

#[test]
fn test_append_sets_parent_and_siblings() {
    let mut tree = DomTree::new();
    let parent = element(&mut tree, NodeId::ROOT, "ul");
    let a = element(&mut tree, parent, "li");
    let b = element(&mut tree, parent, "li");

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(b));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.prev_sibling(a), None);
}

#[test]
fn test_ancestors_and_descendant_check() {
    let mut tree = DomTree::new();
    let html = element(&mut tree, NodeId::ROOT, "html");
    let body = element(&mut tree, html, "body");
    let p = element(&mut tree, body, "p");

    let ancestors: Vec<NodeId> = tree.ancestors(p).collect();
    assert_eq!(ancestors, vec![body, html, NodeId::ROOT]);
    assert!(tree.is_descendant_of(p, html));
    assert!(!tree.is_descendant_of(html, p));
    assert_eq!(tree.document_element(), Some(html));
}

// ========== traversal ==========

#[test]
fn test_descendants_are_in_tree_order() {
    let mut tree = DomTree::new();
    let div = element(&mut tree, NodeId::ROOT, "div");
    let p1 = element(&mut tree, div, "p");
    let t1 = tree.append_text(p1, "one");
    let p2 = element(&mut tree, div, "p");
    let t2 = tree.append_text(p2, "two");

    let order: Vec<NodeId> = tree.descendants(div).collect();
    assert_eq!(order, vec![div, p1, t1, p2, t2]);

    let all: Vec<NodeId> = tree.iter_all().collect();
    assert_eq!(all.len(), tree.len());
    assert_eq!(all[0], NodeId::ROOT);
}

#[test]
fn test_descendants_of_missing_node_is_empty() {
    let tree = DomTree::new();
    assert_eq!(tree.descendants(NodeId(42)).count(), 0);
}

#[test]
fn test_text_content_concatenates_nested_text() {
    let mut tree = DomTree::new();
    let p = element(&mut tree, NodeId::ROOT, "p");
    let _ = tree.append_text(p, "My name is ");
    let span = element(&mut tree, p, "span");
    let _ = tree.append_text(span, "Penelope");
    let _ = tree.append_text(p, ".");

    assert_eq!(tree.text_content(p), "My name is Penelope.");
    assert_eq!(tree.text_content(span), "Penelope");
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let mut tree = DomTree::new();
    let mut parent = NodeId::ROOT;
    for _ in 0..100_000 {
        parent = element(&mut tree, parent, "div");
    }
    let _ = tree.append_text(parent, "leaf");

    assert_eq!(tree.text_content(NodeId::ROOT), "leaf");
}

#[test]
fn test_element_by_tag_finds_first_match() {
    let mut tree = DomTree::new();
    let head = element(&mut tree, NodeId::ROOT, "head");
    let first = tree.append_element(head, ElementData::with_attrs("base", [("href", "/a/")]));
    let _second = tree.append_element(head, ElementData::with_attrs("base", [("href", "/b/")]));

    assert_eq!(tree.element_by_tag("base"), Some(first));
    assert_eq!(tree.element_by_tag("title"), None);
}
