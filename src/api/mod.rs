//! OMDb API client layer.
//!
//! Thin wrappers over the one external service the plugin consumes. The layer
//! owns the URL shapes, the wire models, and the success/failure mapping; the
//! transport is the plugin shim's `web_request` call, so nothing here performs
//! I/O.
//!
//! # Modules
//!
//! - [`client`]: URL builders, response parsers, page math
//! - [`models`]: serde envelopes matching OMDb's wire format

pub mod client;
pub mod models;

pub use client::{
    details_url, parse_details_response, parse_search_response, search_url, total_pages,
    SearchResults, OMDB_ENDPOINT, PAGE_SIZE,
};
