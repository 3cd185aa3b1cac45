//! Attribute names read by the extractor.
//!
//! [§ 5.2 Encoding microdata](https://html.spec.whatwg.org/multipage/microdata.html#encoding-microdata)

/// Marks an element as the root of an item. The value is ignored.
pub const ITEMSCOPE: &str = "itemscope";
/// Space-separated item types.
pub const ITEMTYPE: &str = "itemtype";
/// Space-separated property names the element contributes to its item.
pub const ITEMPROP: &str = "itemprop";
/// Global identifier of an item, a URL.
pub const ITEMID: &str = "itemid";
/// Space-separated ids of elements that add properties to an item.
pub const ITEMREF: &str = "itemref";
/// Element identifier, the target of `itemref` tokens.
pub const ID: &str = "id";
