//! Shared types used by the memory-store client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors returned while talking to the hosted memory store.
#[derive(Debug, Error)]
pub enum SupermemoryError {
    /// Base URL failed to parse or normalize.
    #[error("Invalid memory store URL: {0}")]
    InvalidUrl(String),
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The store responded with an unexpected status code.
    #[error("Unexpected memory store response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the store.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
}

/// Document submitted to the store by `add_memory`.
///
/// Optional members are left out of the serialized payload entirely rather
/// than sent as null or empty values.
#[derive(Debug, Clone, Serialize)]
pub struct NewDocument {
    /// Text content to store.
    pub content: String,
    /// Optional document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional key-value metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Response returned by the document-create endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AddDocumentResponse {
    /// Identifier assigned by the store.
    #[serde(default)]
    pub id: Option<String>,
    /// Ingestion status reported by the store.
    #[serde(default)]
    pub status: Option<String>,
}

/// Response returned by the search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// Ranked documents, in the order the store returned them.
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One ranked document from a search response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResult {
    /// Document title, when the store recorded one.
    #[serde(default)]
    pub title: Option<String>,
    /// Relevance score assigned by the store.
    #[serde(default)]
    pub score: Option<f32>,
    /// Store-generated summary of the document.
    #[serde(default)]
    pub summary: Option<String>,
    /// Content chunks matched for this document.
    #[serde(default)]
    pub chunks: Vec<SearchChunk>,
    /// Metadata recorded with the document.
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// A backend-defined sub-span of a document's content.
#[derive(Debug, Default, Deserialize)]
pub struct SearchChunk {
    /// Chunk text, possibly absent.
    #[serde(default)]
    pub content: Option<String>,
}
