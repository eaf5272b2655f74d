//! AI Tools MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing three tools to a host
//! process:
//!
//! - **fetch**: read a web page through the Jina AI reader
//! - **search**: search the web through Jina AI search
//! - **translate**: placeholder translation that annotates the input text
//!
//! plus an `optimize_prompt` prompt template.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: registry, argument extraction, tool definitions
//!   - **prompts**: prompt templates served to clients
//!
//! # Example
//!
//! ```rust,no_run
//! use ai_tools_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
