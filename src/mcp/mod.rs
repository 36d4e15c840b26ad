//! Model Context Protocol (MCP) integration for Membridge.
//!
//! This module wires the memory-store client into an MCP server so editors
//! and agent hosts can search and store memories over stdio. The surface area
//! is two tools: `search_memories` and `add_memory`. Handlers, schemas, and
//! formatting helpers are kept in focused submodules to make tests small and
//! targeted.

mod format;
pub mod handlers;
mod registry;
mod schemas;
mod server;

pub use server::MembridgeMcpServer;
