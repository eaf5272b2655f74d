//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `arguments.rs` - Argument extraction and typed params decoding
//! - `handler.rs` - The `ToolHandler` capability every tool implements
//! - `registry.rs` - Name → handler table, built once at startup
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `response.rs` - Success / reported-error result formatting
//! - `error.rs` - Propagated faults and their protocol mapping
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `to_tool()` and a
//!    `ToolHandler` impl
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `ToolRegistry::from_config`
//!
//! The router and server pick it up from the registry.

mod arguments;
pub mod definitions;
mod error;
mod handler;
mod registry;
pub mod response;
pub mod router;

pub use arguments::{FromArguments, ToolArguments};
pub use error::ToolError;
pub use handler::ToolHandler;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
