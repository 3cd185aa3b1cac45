//! Discovery of top-level items.
//!
//! [§ 5.2.2 Items](https://html.spec.whatwg.org/multipage/microdata.html#top-level-microdata-item)
//!
//! "An item is a top-level microdata item if its element does not have an
//! itemprop attribute."
//!
//! The `itemtype` attribute plays no part in the test: an untyped scope is
//! still a top-level item.

use microdata_dom::{DomTree, ElementData, NodeId};

use crate::attrs;

/// Every top-level item root of `tree`, in tree order.
#[must_use]
pub fn collect_top_level(tree: &DomTree) -> Vec<NodeId> {
    tree.iter_all()
        .filter(|&id| tree.as_element(id).is_some_and(is_top_level_scope))
        .collect()
}

/// An element that starts an item and is not itself a property value.
#[must_use]
pub fn is_top_level_scope(element: &ElementData) -> bool {
    element.has_attr(attrs::ITEMSCOPE) && !element.has_attr(attrs::ITEMPROP)
}
