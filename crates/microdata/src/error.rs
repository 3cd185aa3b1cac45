//! Error types for the extraction entry points.
//!
//! The tree walk itself never fails; malformed markup only loses values.
//! Errors come from the collaborators around it: base URL parsing, fetching
//! and JSON conversion.

use microdata_common::net::FetchError;
use thiserror::Error;

/// Errors returned by [`crate::parse_html`], [`crate::parse_url`] and the
/// JSON helpers on [`crate::Microdata`].
#[derive(Debug, Error)]
pub enum Error {
    /// The base URL is not an absolute URL.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected input.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// The document could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
