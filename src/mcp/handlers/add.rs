//! Handler for the `add_memory` tool.

use std::sync::Arc;

use crate::supermemory::{NewDocument, SupermemoryService};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::parse_arguments;

/// Request payload accepted by the `add_memory` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct AddToolRequest {
    /// Text content to store.
    pub(crate) content: String,
    /// Optional document title.
    #[serde(default)]
    pub(crate) title: Option<String>,
    /// Optional key-value metadata.
    #[serde(default)]
    pub(crate) metadata: Option<Map<String, Value>>,
}

/// Handle `add_memory` by creating a document in the store.
///
/// Empty optional fields are dropped from the write payload entirely, and
/// remote failures become a descriptive text result.
pub(crate) async fn handle_add(
    memory: &Arc<SupermemoryService>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: AddToolRequest = parse_arguments(arguments)?;
    if args.content.trim().is_empty() {
        return Err(McpError::invalid_params(
            "`content` must not be empty",
            None,
        ));
    }

    let document = NewDocument {
        content: args.content,
        title: args.title.filter(|title| !title.is_empty()),
        metadata: args.metadata.filter(|map| !map.is_empty()),
    };

    let text = match memory.add_document(&document).await {
        Ok(response) => format!(
            "Successfully added memory!\nDocument ID: {}\nStatus: {}",
            response.id.as_deref().unwrap_or("Unknown"),
            response.status.as_deref().unwrap_or("Unknown")
        ),
        Err(err) => format!("Error adding memory: {err}"),
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
