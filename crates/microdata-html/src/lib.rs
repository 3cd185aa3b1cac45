//! HTML front end for the microdata extractor.
//!
//! # Scope
//!
//! This crate turns HTML source into a [`DomTree`]:
//! - **Parsing** ([WHATWG § 13.2](https://html.spec.whatwg.org/multipage/parsing.html))
//!   is delegated to html5ever through `scraper`, which handles tokenization,
//!   tree construction and error recovery.
//! - **Tree conversion** copies the parsed document into the arena tree, keeping
//!   element names, attributes (first occurrence wins, in the order the parser
//!   reports them), text and comments.
//! - **Debug output** via [`format_tree`].
//!
//! `<template>` contents stay in place as ordinary children of the
//! template element.
//!
//! # Not Yet Implemented
//!
//! - Namespace information for SVG and MathML elements

use std::collections::HashMap;
use std::fmt::{self, Write};

use microdata_dom::{DomTree, ElementData, NodeId, NodeType};
use scraper::Html;

/// Parse an HTML document into a [`DomTree`].
///
/// Parsing never fails: malformed markup is recovered the way a browser
/// would recover it. Recovered errors are logged at `debug` level.
#[must_use]
pub fn parse_document(html: &str) -> DomTree {
    let document = Html::parse_document(html);
    for error in &document.errors {
        log::debug!("html parse error: {error}");
    }

    let mut tree = DomTree::new();
    let root = document.tree.root();
    let mut ids = HashMap::new();
    let _ = ids.insert(root.id(), NodeId::ROOT);

    // Pre-order, so every parent is mapped before its children.
    for node in root.descendants().skip(1) {
        let Some(parent) = node.parent().and_then(|p| ids.get(&p.id()).copied()) else {
            continue;
        };

        let node_type = match node.value() {
            scraper::Node::Element(element) => {
                NodeType::Element(ElementData::with_attrs(element.name(), element.attrs()))
            }
            scraper::Node::Text(text) => NodeType::Text(String::from(&**text)),
            scraper::Node::Comment(comment) => NodeType::Comment(String::from(&**comment)),
            _ => continue,
        };

        let id = tree.alloc(node_type);
        tree.append_child(parent, id);
        let _ = ids.insert(node.id(), id);
    }

    tree
}

/// Render a tree as indented text, one node per line.
///
/// Attributes are shown in list order; whitespace in text nodes is made
/// visible so that text extraction issues are easy to spot.
#[must_use]
pub fn format_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, tree, id);
    out
}

/// Write the subtree rooted at `id` to `out`, see [`format_tree`].
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_tree(out: &mut impl Write, tree: &DomTree, id: NodeId) -> fmt::Result {
    let mut stack = vec![(id, 0usize)];
    while let Some((id, indent)) = stack.pop() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        let prefix = "  ".repeat(indent);
        match &node.node_type {
            NodeType::Document => writeln!(out, "{prefix}Document")?,
            NodeType::Element(data) => {
                write!(out, "{prefix}<{}", data.tag_name)?;
                for attr in data.attrs() {
                    if attr.value.is_empty() {
                        write!(out, " {}", attr.name)?;
                    } else {
                        write!(out, " {}=\"{}\"", attr.name, attr.value)?;
                    }
                }
                writeln!(out, ">")?;
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                writeln!(out, "{prefix}\"{display}\"")?;
            }
            NodeType::Comment(data) => writeln!(out, "{prefix}<!-- {data} -->")?,
        }
        stack.extend(tree.children(id).iter().rev().map(|&c| (c, indent + 1)));
    }
    Ok(())
}
