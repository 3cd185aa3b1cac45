//! URL resolution utilities.
//!
//! [§ 2.4 URLs](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#resolving-urls)
//! [URL Standard](https://url.spec.whatwg.org/)

use ::url::{ParseError, Url};

/// [§ 2.4.2 Parsing URLs](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#encoding-parsing-a-url)
///
/// Resolve a potentially relative URL against a base URL.
///
/// Returns `None` when the URL parser rejects the input; callers drop the
/// value instead of failing. Leading and trailing C0 controls and spaces
/// are stripped by the parser, as the URL Standard requires.
#[must_use]
pub fn resolve_url(href: &str, base: &Url) -> Option<String> {
    match base.join(href) {
        Ok(url) => Some(url.into()),
        Err(e) => {
            log::debug!("cannot resolve {href:?} against {base}: {e}");
            None
        }
    }
}

/// Parse an absolute URL to be used as a document base.
///
/// # Errors
///
/// Returns the parser error if `input` is not an absolute URL.
pub fn parse_base_url(input: &str) -> Result<Url, ParseError> {
    Url::parse(input.trim())
}

/// Whether `input` names a network resource the fetcher can retrieve.
#[must_use]
pub fn is_fetchable(input: &str) -> bool {
    Url::parse(input).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}
