//! Tool handlers for the MCP server.

use rmcp::{ErrorData as McpError, model::JsonObject};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod add;
pub mod search;

/// Parse structured arguments supplied to a tool invocation.
pub(crate) fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<JsonObject>,
) -> Result<T, McpError> {
    let value = arguments
        .map(Value::Object)
        .unwrap_or_else(|| Value::Object(JsonObject::new()));
    serde_json::from_value(value)
        .map_err(|err| McpError::invalid_params(format!("Invalid arguments: {err}"), None))
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Once};

    use crate::config::{CONFIG, Config};
    use crate::supermemory::SupermemoryService;
    use rmcp::model::CallToolResult;
    use reqwest::Client;

    pub(crate) fn ensure_test_config() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = CONFIG.set(Config {
                api_key: "test-key".into(),
                base_url: "http://127.0.0.1:9".into(),
                search_default_limit: 5,
            });
        });
    }

    pub(crate) fn test_service(base_url: String) -> Arc<SupermemoryService> {
        Arc::new(SupermemoryService {
            client: Client::builder()
                .user_agent("membridge-test")
                .build()
                .expect("client"),
            base_url,
            api_key: "test-key".into(),
        })
    }

    pub(crate) fn first_text(result: &CallToolResult) -> &str {
        result
            .content
            .first()
            .and_then(|content| content.raw.as_text())
            .map(|text| text.text.as_str())
            .expect("text content")
    }
}
