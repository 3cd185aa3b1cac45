//! HTTP fetch utilities.
//!
//! Provides the blocking HTTP GET wrapper used to load documents by URL.
//! Character decoding follows the response `Content-Type` charset and
//! defaults to UTF-8.
use std::time::Duration;

use ::url::Url;
use thiserror::Error;

/// User-Agent header sent with all requests.
const USER_AGENT: &str = concat!("microdata/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while retrieving a document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request could not be sent or no response arrived.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status.
        status: reqwest::StatusCode,
    },
    /// The response body could not be read or decoded.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// Requested URL.
        url: String,
        /// Underlying read error.
        #[source]
        source: reqwest::Error,
    },
}

/// A document retrieved over HTTP.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// URL of the final response, after redirects. Relative URLs in the
    /// document resolve against it.
    pub url: Url,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Decoded body text.
    pub body: String,
}

/// Fetch a URL and return its body as text together with the final URL.
///
/// # Errors
///
/// Returns a [`FetchError`] if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be decoded.
pub fn fetch_document(url: &str) -> Result<FetchedDocument, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Client)?;

    log::debug!("fetching {url}");
    let response = client.get(url).send().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.text().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchedDocument {
        url: final_url,
        content_type,
        body,
    })
}
