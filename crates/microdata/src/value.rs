//! Property values of non-item elements.
//!
//! [§ 5.2.4 Values](https://html.spec.whatwg.org/multipage/microdata.html#values)
//!
//! The element's local name selects where the value comes from. Values
//! read from an attribute are kept even when empty; a value read from text
//! content is dropped when it is empty. A missing attribute, or a URL that
//! cannot be resolved, yields no value at all.

use microdata_common::url::resolve_url;
use microdata_dom::{DomTree, NodeId};
use url::Url;

/// Where an element's property value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// `meta`: the `content` attribute.
    Content,
    /// Embedded content (`audio embed iframe img source track video`): the
    /// `src` attribute, resolved to an absolute URL.
    Src,
    /// Links (`a area link`): the `href` attribute, resolved to an absolute URL.
    Href,
    /// `data` and `meter`: the `value` attribute.
    Value,
    /// `time`: the `datetime` attribute.
    Datetime,
    /// Anything else: the element's descendant text content.
    Text,
}

impl ValueSource {
    /// The rule for an element with the given local name.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "meta" => Self::Content,
            "audio" | "embed" | "iframe" | "img" | "source" | "track" | "video" => Self::Src,
            "a" | "area" | "link" => Self::Href,
            "data" | "meter" => Self::Value,
            "time" => Self::Datetime,
            _ => Self::Text,
        }
    }

    /// The attribute holding the value, or `None` for text content.
    #[must_use]
    pub const fn attribute(self) -> Option<&'static str> {
        match self {
            Self::Content => Some("content"),
            Self::Src => Some("src"),
            Self::Href => Some("href"),
            Self::Value => Some("value"),
            Self::Datetime => Some("datetime"),
            Self::Text => None,
        }
    }

    /// Whether the attribute value is a URL to resolve against the base.
    #[must_use]
    pub const fn is_url(self) -> bool {
        matches!(self, Self::Src | Self::Href)
    }
}

/// The property value of `node`, or `None` when it contributes nothing.
///
/// `node` must be an element; other nodes have no value.
#[must_use]
pub fn property_value(tree: &DomTree, node: NodeId, base: &Url) -> Option<String> {
    let element = tree.as_element(node)?;
    let source = ValueSource::for_tag(&element.tag_name);

    let Some(name) = source.attribute() else {
        let text = tree.text_content(node);
        return (!text.is_empty()).then_some(text);
    };

    let Some(raw) = element.attr(name) else {
        log::debug!("<{}> property without {name} attribute", element.tag_name);
        return None;
    };

    if source.is_url() {
        resolve_url(raw, base)
    } else {
        Some(raw.to_string())
    }
}
