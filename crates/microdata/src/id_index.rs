//! Lookup table from `id` attribute values to elements.

use std::collections::HashMap;

use microdata_dom::{DomTree, NodeId};

use crate::attrs;

/// Maps `id` values to the element carrying them.
///
/// Built with one pass over the whole document, so `itemref` tokens can
/// reach elements anywhere, inside or outside the referencing item. When
/// two elements share an id the one later in tree order wins.
#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    ids: HashMap<String, NodeId>,
}

impl IdIndex {
    /// Index every element of `tree` that has a non-empty `id`.
    #[must_use]
    pub fn build(tree: &DomTree) -> Self {
        let mut ids = HashMap::new();
        for node in tree.iter_all() {
            let Some(id) = tree.as_element(node).and_then(|e| e.attr(attrs::ID)) else {
                continue;
            };
            if id.is_empty() {
                continue;
            }
            if let Some(previous) = ids.insert(id.to_string(), node) {
                log::debug!("duplicate id {id:?}: {previous:?} replaced by {node:?}");
            }
        }
        Self { ids }
    }

    /// The element with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Number of distinct ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the document has no ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
