//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the default MCP mode - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over raw TCP sockets - feature: `tcp`
//!
//! Each transport owns the connection lifecycle and hands the byte stream to
//! rmcp, which drives the request/response loop against `McpServer`.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
