//! Handler for the `search_memories` tool.

use std::sync::Arc;

use crate::{
    config::get_config,
    mcp::format::{NO_RESULTS_MESSAGE, render_search_results},
    supermemory::SupermemoryService,
};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::Deserialize;

use super::parse_arguments;

/// Request payload accepted by the `search_memories` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchToolRequest {
    /// Free-text query forwarded to the store.
    pub(crate) query: String,
    /// Optional cap on the number of rendered results.
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

/// Handle `search_memories` by querying the store and rendering text blocks.
///
/// Remote failures become a descriptive text result; they never escape this
/// handler as protocol errors.
pub(crate) async fn handle_search(
    memory: &Arc<SupermemoryService>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: SearchToolRequest = parse_arguments(arguments)?;
    if args.query.trim().is_empty() {
        return Err(McpError::invalid_params("`query` must not be empty", None));
    }
    let limit = args
        .limit
        .unwrap_or_else(|| get_config().search_default_limit);

    let text = match memory.search(&args.query).await {
        Ok(response) if response.results.is_empty() => NO_RESULTS_MESSAGE.to_string(),
        Ok(response) => render_search_results(&response.results, limit),
        Err(err) => format!("Error searching memories: {err}"),
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::handlers::tests::{ensure_test_config, first_text, test_service};
    use httpmock::{Method::POST, MockServer};
    use serde_json::json;

    fn arguments(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[tokio::test]
    async fn renders_blocks_for_remote_results() {
        ensure_test_config();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v3/search");
                then.status(200).json_body(json!({
                    "results": [
                        { "title": "One", "score": 0.9 },
                        { "title": "Two", "score": 0.8 },
                        { "title": "Three", "score": 0.7 }
                    ]
                }));
            })
            .await;

        let memory = test_service(server.base_url());
        let result = handle_search(&memory, arguments(json!({ "query": "demo", "limit": 2 })))
            .await
            .expect("search handler");

        let text = first_text(&result);
        assert!(text.starts_with("Found 3 memories (showing top 2):"));
        assert!(text.contains("Result 1: One"));
        assert!(!text.contains("Result 3"));
    }

    #[tokio::test]
    async fn empty_result_set_reports_no_matches() {
        ensure_test_config();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v3/search");
                then.status(200).json_body(json!({ "results": [] }));
            })
            .await;

        let memory = test_service(server.base_url());
        let result = handle_search(&memory, arguments(json!({ "query": "demo" })))
            .await
            .expect("search handler");

        assert_eq!(first_text(&result), "No memories found matching your query.");
    }

    #[tokio::test]
    async fn remote_failure_becomes_text_result() {
        ensure_test_config();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v3/search");
                then.status(500).body("backend exploded");
            })
            .await;

        let memory = test_service(server.base_url());
        let result = handle_search(&memory, arguments(json!({ "query": "demo" })))
            .await
            .expect("search handler must not raise");

        let text = first_text(&result);
        assert!(text.starts_with("Error searching memories:"));
        assert!(text.contains("backend exploded"));
    }

    #[tokio::test]
    async fn blank_query_is_rejected() {
        ensure_test_config();
        let memory = test_service("http://127.0.0.1:9".into());
        let error = handle_search(&memory, arguments(json!({ "query": "   " })))
            .await
            .expect_err("blank query");
        assert_eq!(error.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn missing_query_is_rejected() {
        ensure_test_config();
        let memory = test_service("http://127.0.0.1:9".into());
        let error = handle_search(&memory, arguments(json!({ "limit": 2 })))
            .await
            .expect_err("missing query");
        assert_eq!(error.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
