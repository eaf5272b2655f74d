//! Tool definitions module.
//!
//! Each tool is defined in its own file: params struct, `to_tool()`
//! metadata, `execute()` and its `ToolHandler` implementation.

pub mod jina;
pub mod translate;

pub use jina::{FetchParams, FetchTool, JinaClient, JinaEndpoint, SearchParams, SearchTool};
pub use translate::{TranslateParams, TranslateTool};
