//! MCP server entrypoint (stdio transport).
//!
//! Launches the Membridge MCP server over stdio for editor and agent-host
//! integrations. The memory-store client is constructed once at startup and
//! shared across invocations.
use anyhow::{Context, Result};
use membridge::{config, logging, mcp::MembridgeMcpServer, supermemory::SupermemoryService};
use rmcp::{service::ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    config::init_config();
    logging::init_tracing();

    let memory = Arc::new(
        SupermemoryService::new().context("failed to construct memory store client")?,
    );
    let server = MembridgeMcpServer::new(memory);

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}
