//! HTTP client wrapper for the hosted memory store.

use crate::config::get_config;
use crate::supermemory::types::{
    AddDocumentResponse, NewDocument, SearchResponse, SupermemoryError,
};
use reqwest::{Client, Method};
use serde_json::json;

/// Lightweight HTTP client for the store's search and ingestion endpoints.
///
/// Constructed once at process start and shared across invocations; it holds
/// no mutable state of its own.
pub struct SupermemoryService {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

impl SupermemoryService {
    /// Construct a new client using configuration derived from the environment.
    pub fn new() -> Result<Self, SupermemoryError> {
        let config = get_config();
        let client = Client::builder().user_agent("membridge/0.1").build()?;

        let base_url =
            normalize_base_url(&config.base_url).map_err(SupermemoryError::InvalidUrl)?;
        tracing::debug!(url = %base_url, "Initialized memory store HTTP client");

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Run a semantic search across stored memories.
    ///
    /// Ranking is entirely the store's; results come back in the order
    /// received and are never re-sorted here.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SupermemoryError> {
        let response = self
            .request(Method::POST, "v3/search")
            .json(&json!({ "q": query }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = SupermemoryError::UnexpectedStatus { status, body };
            tracing::error!(error = %error, "Memory store search failed");
            return Err(error);
        }

        Ok(response.json().await?)
    }

    /// Create a new document in the store, returning its assigned identity.
    pub async fn add_document(
        &self,
        document: &NewDocument,
    ) -> Result<AddDocumentResponse, SupermemoryError> {
        let response = self
            .request(Method::POST, "v3/documents")
            .json(document)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = SupermemoryError::UnexpectedStatus { status, body };
            tracing::error!(error = %error, "Memory store document create failed");
            return Err(error);
        }

        Ok(response.json().await?)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format_endpoint(&self.base_url, path);
        self.client.request(method, url).bearer_auth(&self.api_key)
    }
}

fn normalize_base_url(url: &str) -> Result<String, String> {
    let mut parsed = reqwest::Url::parse(url).map_err(|err| err.to_string())?;
    let path = parsed.path().trim_end_matches('/').to_string();
    parsed.set_path(&path);
    Ok(parsed.to_string())
}

fn format_endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::POST, MockServer};
    use reqwest::Client;
    use serde_json::json;

    fn test_service(base_url: String) -> SupermemoryService {
        SupermemoryService {
            client: Client::builder()
                .user_agent("membridge-test")
                .build()
                .expect("client"),
            base_url,
            api_key: "test-key".into(),
        }
    }

    #[tokio::test]
    async fn search_emits_expected_request() {
        let server = MockServer::start_async().await;

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v3/search")
                    .header("authorization", "Bearer test-key")
                    .json_body(json!({ "q": "release checklist" }));
                then.status(200).json_body(json!({
                    "results": [
                        {
                            "title": "Release notes",
                            "score": 0.87,
                            "chunks": [{ "content": "Step one" }]
                        }
                    ],
                    "total": 1
                }));
            })
            .await;

        let service = test_service(server.base_url());
        let response = service
            .search("release checklist")
            .await
            .expect("search request");

        mock.assert();

        assert_eq!(response.results.len(), 1);
        let result = &response.results[0];
        assert_eq!(result.title.as_deref(), Some("Release notes"));
        assert!((result.score.expect("score") - 0.87).abs() < f32::EPSILON);
        assert_eq!(result.chunks.len(), 1);
        assert_eq!(result.chunks[0].content.as_deref(), Some("Step one"));
    }

    #[tokio::test]
    async fn add_document_omits_absent_fields() {
        let server = MockServer::start_async().await;

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v3/documents")
                    .json_body(json!({ "content": "Prefer rustls over openssl" }));
                then.status(200).json_body(json!({
                    "id": "doc-42",
                    "status": "queued"
                }));
            })
            .await;

        let service = test_service(server.base_url());
        let document = NewDocument {
            content: "Prefer rustls over openssl".into(),
            title: None,
            metadata: None,
        };
        let response = service.add_document(&document).await.expect("add request");

        mock.assert();

        assert_eq!(response.id.as_deref(), Some("doc-42"));
        assert_eq!(response.status.as_deref(), Some("queued"));
    }

    #[tokio::test]
    async fn add_document_surfaces_unexpected_status() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST).path("/v3/documents");
                then.status(503).body("maintenance");
            })
            .await;

        let service = test_service(server.base_url());
        let document = NewDocument {
            content: "anything".into(),
            title: None,
            metadata: None,
        };
        let error = service
            .add_document(&document)
            .await
            .expect_err("add should fail");

        match error {
            SupermemoryError::UnexpectedStatus { status, body } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
