//! Common utilities for the microdata extractor.
//!
//! This crate provides the infrastructure that surrounds the extraction
//! algorithm:
//! - **URL resolution** - resolving attribute values against a base URL
//! - **Fetching** - blocking HTTP retrieval of documents

pub mod net;
pub mod url;
