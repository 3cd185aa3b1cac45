//! HTML microdata extraction.
//!
//! [§ 5 Microdata](https://html.spec.whatwg.org/multipage/microdata.html)
//!
//! # Scope
//!
//! This crate implements the microdata model over a parsed document:
//! - **Item discovery** - top-level `itemscope` elements ([`collect_top_level`])
//! - **Id lookup** - `itemref` resolution anywhere in the document ([`IdIndex`])
//! - **Property values** - element-specific value rules ([`property_value`])
//! - **Item construction** - nested scopes and property association ([`ScopeBuilder`])
//! - **Model** - [`Microdata`], [`Item`] and [`Value`], serializable to the JSON projection
//!
//! HTML parsing is done by `microdata-html`, fetching by `microdata-common`.
//!
//! # Example
//!
//! ```
//! use microdata::{ParseOptions, parse_html};
//!
//! let html = r#"<div itemscope itemtype="http://example.com/Person">
//!     <span itemprop="name">Penelope</span>
//! </div>"#;
//! let data = parse_html(html, "http://example.com", &ParseOptions::default())?;
//!
//! let person = &data.items()[0];
//! assert_eq!(person.types(), ["http://example.com/Person"]);
//! assert_eq!(person.texts("name").collect::<Vec<_>>(), ["Penelope"]);
//! # Ok::<(), microdata::Error>(())
//! ```

pub mod attrs;
mod base;
mod collect;
mod error;
mod id_index;
mod model;
mod options;
mod scope;
mod value;

pub use base::document_base_url;
pub use collect::{collect_top_level, is_top_level_scope};
pub use error::{Error, Result};
pub use id_index::IdIndex;
pub use model::{Item, Microdata, Properties, Value};
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
pub use scope::ScopeBuilder;
pub use value::{ValueSource, property_value};

use microdata_common::net::fetch_document;
use microdata_common::url::parse_base_url;
use microdata_dom::DomTree;
use url::Url;

/// Extract the microdata of a parsed document.
///
/// `base` is the document URL. Unless disabled in `options`, a `<base href>`
/// in the document takes precedence over it.
#[must_use]
pub fn parse_tree(tree: &DomTree, base: &Url, options: &ParseOptions) -> Microdata {
    let base = if options.honor_base_element {
        document_base_url(tree, base)
    } else {
        base.clone()
    };

    let index = IdIndex::build(tree);
    let roots = collect_top_level(tree);
    log::debug!(
        "{} top-level item(s), {} indexed id(s), base {base}",
        roots.len(),
        index.len()
    );

    let mut builder = ScopeBuilder::new(tree, &index, &base, options);
    let mut data = Microdata::new();
    for root in roots {
        log::trace!("building top-level item {root:?}");
        data.push(builder.build_item(root));
    }
    data
}

/// Parse an HTML string and extract its microdata.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] if `base_url` is not an absolute URL.
pub fn parse_html(html: &str, base_url: &str, options: &ParseOptions) -> Result<Microdata> {
    let base = parse_base_url(base_url).map_err(|source| Error::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;
    let tree = microdata_html::parse_document(html);
    Ok(parse_tree(&tree, &base, options))
}

/// Fetch a document over HTTP and extract its microdata.
///
/// Relative URLs resolve against the final response URL.
///
/// # Errors
///
/// Returns [`Error::Fetch`] if the document cannot be retrieved.
pub fn parse_url(url: &str, options: &ParseOptions) -> Result<Microdata> {
    let document = fetch_document(url)?;
    let tree = microdata_html::parse_document(&document.body);
    Ok(parse_tree(&tree, &document.url, options))
}
