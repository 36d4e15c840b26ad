//! MCP server bootstrap and request dispatch.

use std::{borrow::Cow, sync::Arc};

use crate::{
    mcp::{
        handlers::{add::handle_add, search::handle_search},
        registry, schemas,
    },
    supermemory::SupermemoryService,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ListToolsResult, ServerCapabilities,
        ServerInfo, Tool, ToolAnnotations,
    },
};

/// MCP server implementation exposing the memory-store bridge operations.
#[derive(Clone)]
pub struct MembridgeMcpServer {
    memory: Arc<SupermemoryService>,
    registry: Arc<registry::Registry>,
}

impl MembridgeMcpServer {
    /// Create a new MCP server around the shared memory-store client.
    pub fn new(memory: Arc<SupermemoryService>) -> Self {
        let mut registry = registry::Registry::new();
        registry.register_tool("search_memories", tool_search);
        registry.register_tool("add_memory", tool_add);

        Self {
            memory,
            registry: Arc::new(registry),
        }
    }

    fn describe_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: Cow::Borrowed("search_memories"),
                title: Some("Search Memories".to_string()),
                description: Some(Cow::Borrowed(
                    "Search across all stored memories using semantic search. Returns relevant documents and chunks based on the query.",
                )),
                input_schema: Arc::new(schemas::search_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Search Memories")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("add_memory"),
                title: Some("Add Memory".to_string()),
                description: Some(Cow::Borrowed(
                    "Add a new memory/document to the store. This can be text content, notes, or any information worth keeping.",
                )),
                input_schema: Arc::new(schemas::add_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Add Memory")
                        .destructive(false)
                        .idempotent(false)
                        .open_world(false),
                ),
                icons: None,
            },
        ]
    }
}

fn tool_search(server: &MembridgeMcpServer, request: CallToolRequestParam) -> registry::ToolFuture {
    let memory = server.memory.clone();
    Box::pin(async move { handle_search(&memory, request.arguments).await })
}

fn tool_add(server: &MembridgeMcpServer, request: CallToolRequestParam) -> registry::ToolFuture {
    let memory = server.memory.clone();
    Box::pin(async move { handle_add(&memory, request.arguments).await })
}

impl ServerHandler for MembridgeMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = "membridge".to_string();
        implementation.title = Some("Membridge MCP".to_string());
        implementation.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: implementation,
            instructions: Some(
                "Use this server to store and retrieve durable memories. Store text with `add_memory`; retrieve relevant context later via `search_memories`.".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self.describe_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.tools.get(request.name.as_ref()) {
                return handler(self, request).await;
            }

            // Unknown names are a reportable outcome, not a protocol fault.
            Ok(CallToolResult::success(vec![Content::text(format!(
                "Unknown tool: {}",
                request.name
            ))]))
        }
    }
}
