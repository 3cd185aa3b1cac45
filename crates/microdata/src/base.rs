//! Document base URL.
//!
//! [§ 4.2.3 The base element](https://html.spec.whatwg.org/multipage/semantics.html#the-base-element)
//!
//! "The frozen base URL is the result of parsing the value of the first
//! base element in tree order that has an href content attribute, relative
//! to the document's fallback base URL."

use microdata_dom::DomTree;
use url::Url;

/// The URL that relative URLs in `tree` resolve against.
///
/// `fallback` is the document's own URL. It is returned unchanged when the
/// document has no usable `<base href>`.
#[must_use]
pub fn document_base_url(tree: &DomTree, fallback: &Url) -> Url {
    let href = tree.iter_all().find_map(|id| {
        tree.as_element(id)
            .filter(|e| e.is("base"))
            .and_then(|e| e.attr("href"))
    });

    let Some(href) = href else {
        return fallback.clone();
    };

    match fallback.join(href) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("ignoring <base href={href:?}>: {e}");
            fallback.clone()
        }
    }
}
