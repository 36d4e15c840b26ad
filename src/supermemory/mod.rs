//! Hosted memory-store integration.
//!
//! A thin reqwest wrapper around the two endpoints the bridge consumes:
//! semantic search and document creation. Backend responses are decoded into
//! typed structs once at this boundary; absent fields stay `None`, and
//! defaults are substituted where the output is rendered.

mod client;
mod types;

pub use client::SupermemoryService;
pub use types::{
    AddDocumentResponse, NewDocument, SearchChunk, SearchResponse, SearchResult, SupermemoryError,
};
