#![deny(missing_docs)]

//! Core library for the Membridge MCP server.

/// Environment-driven configuration management.
pub mod config;
/// Host-configuration installer backing the setup binary.
pub mod install;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// Hosted memory-store integration.
pub mod supermemory;
