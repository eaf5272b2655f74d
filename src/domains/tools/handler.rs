//! The capability every tool implements.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use tokio_util::sync::CancellationToken;

use super::arguments::ToolArguments;
use super::error::ToolError;

/// A callable tool.
///
/// `invoke` returns `Ok` for both successful and reported-error results and
/// `Err` only for propagated faults. Implementations that perform I/O must
/// stop as soon as `ct` is cancelled.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name, description and input schema of this tool.
    fn definition(&self) -> Tool;

    /// Run the tool against one invocation's arguments.
    async fn invoke(
        &self,
        arguments: ToolArguments,
        ct: CancellationToken,
    ) -> Result<CallToolResult, ToolError>;
}
