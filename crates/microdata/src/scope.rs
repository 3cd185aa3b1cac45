//! Construction of one item from its scope root.
//!
//! [§ 5.2.5 Associating names with items](https://html.spec.whatwg.org/multipage/microdata.html#associating-names-with-items)
//!
//! The walk visits the elements named by the root's `itemref` tokens, in
//! token order, then the root's children, depth first. At each node:
//!
//! | itemscope | itemprop | action |
//! |---|---|---|
//! | yes | yes | build a nested item, add it under every name, do not descend |
//! | no  | yes | add the element's value under every name, then descend |
//! | yes | no  | unrelated item, do not descend |
//! | no  | no  | descend |
//!
//! The root itself is never a visited node, so reaching it again through a
//! cyclic `itemref` falls into the "unrelated item" row. An `itemref` naming
//! the root or one of its ancestors therefore never adds the root's
//! properties a second time: each is recorded once.

use microdata_common::url::resolve_url;
use microdata_dom::{DomTree, ElementData, NodeId, split_tokens};
use url::Url;

use crate::attrs;
use crate::id_index::IdIndex;
use crate::model::{Item, Value};
use crate::options::ParseOptions;
use crate::value::property_value;

/// Builds items for one document.
///
/// Holds the read-only inputs shared by every item of the document plus
/// the chain of scope roots currently under construction.
pub struct ScopeBuilder<'a> {
    tree: &'a DomTree,
    index: &'a IdIndex,
    base: &'a Url,
    options: &'a ParseOptions,
    /// Roots of the items being built, outermost first.
    building: Vec<NodeId>,
}

impl<'a> ScopeBuilder<'a> {
    /// Create a builder over `tree`, resolving ids through `index` and URLs
    /// against `base`.
    #[must_use]
    pub const fn new(
        tree: &'a DomTree,
        index: &'a IdIndex,
        base: &'a Url,
        options: &'a ParseOptions,
    ) -> Self {
        Self {
            tree,
            index,
            base,
            options,
            building: Vec::new(),
        }
    }

    /// Build the item whose scope root is `root`.
    ///
    /// The returned item is complete: nested items have been built and
    /// every reachable property has been added.
    pub fn build_item(&mut self, root: NodeId) -> Item {
        self.building.push(root);
        let item = self.populate(root);
        let _ = self.building.pop();
        item
    }

    fn populate(&mut self, root: NodeId) -> Item {
        let tree = self.tree;
        let mut item = Item::new();
        let Some(element) = tree.as_element(root) else {
            return item;
        };

        if let Some(types) = element.attr(attrs::ITEMTYPE) {
            for item_type in split_tokens(types) {
                item.add_type(item_type);
            }
        }

        if let Some(raw) = element.attr(attrs::ITEMID) {
            if item.types().is_empty() && !self.options.id_without_type {
                log::debug!("ignoring itemid {raw:?} on untyped item {root:?}");
            } else if let Some(id) = resolve_url(raw, self.base) {
                item.set_id(id);
            }
        }

        // Work stack in reverse visiting order: references first, then children.
        let mut stack: Vec<NodeId> = tree.children(root).iter().rev().copied().collect();
        stack.extend(self.references(element, root).into_iter().rev());

        while let Some(node) = stack.pop() {
            if self.visit(node, &mut item) {
                stack.extend(tree.children(node).iter().rev().copied());
            }
        }

        item
    }

    /// Elements named by the root's `itemref` tokens, in token order.
    fn references(&self, element: &ElementData, root: NodeId) -> Vec<NodeId> {
        let Some(refs) = element.attr(attrs::ITEMREF) else {
            return Vec::new();
        };

        split_tokens(refs)
            .filter_map(|token| match self.index.get(token) {
                Some(node) if node == root => {
                    log::debug!("itemref {token:?} points at its own item");
                    None
                }
                Some(node) => Some(node),
                None => {
                    log::debug!("itemref {token:?} matches no element");
                    None
                }
            })
            .collect()
    }

    /// Apply the decision table to `node`. Returns whether to descend.
    fn visit(&mut self, node: NodeId, item: &mut Item) -> bool {
        let tree = self.tree;
        let Some(element) = tree.as_element(node) else {
            return true;
        };
        let is_scope = element.has_attr(attrs::ITEMSCOPE);

        match (is_scope, element.attr(attrs::ITEMPROP)) {
            (true, Some(names)) => {
                if let Some(nested) = self.nested_item(node) {
                    add_under_each(item, names, Value::Item(nested));
                }
                false
            }
            (false, Some(names)) => {
                if let Some(value) = property_value(tree, node, self.base) {
                    add_under_each(item, names, Value::Text(value));
                }
                true
            }
            (true, None) => false,
            (false, None) => true,
        }
    }

    /// Build the item rooted at `node` as a property value, unless that
    /// would loop or exceed the depth bound.
    fn nested_item(&mut self, node: NodeId) -> Option<Item> {
        if self.building.contains(&node) {
            log::debug!("item {node:?} references itself through itemref, skipped");
            return None;
        }
        if self.building.len() > self.options.max_depth {
            log::warn!(
                "item {node:?} nested deeper than {} levels, skipped",
                self.options.max_depth
            );
            return None;
        }
        Some(self.build_item(node))
    }
}

/// Add `value` under every name in the `itemprop` token list.
fn add_under_each(item: &mut Item, names: &str, value: Value) {
    let mut names = split_tokens(names).peekable();
    while let Some(name) = names.next() {
        if names.peek().is_some() {
            item.add_value(name, value.clone());
        } else {
            item.add_value(name, value);
            break;
        }
    }
}
