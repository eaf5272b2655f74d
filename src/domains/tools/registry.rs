//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is built once at startup and only read afterwards, so it is
//! shared behind an `Arc` without locking. Names are unique and lookups of
//! unknown names fail before any handler runs.
//!
//! Over the protocol, rmcp's `ToolRouter` only has routes for registered
//! names and answers unknown ones itself, so `ToolError::NotFound` is seen
//! only by direct callers of `call_tool`.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::core::config::Config;
use crate::core::{Error, Result};

use super::arguments::ToolArguments;
use super::definitions::{FetchTool, JinaClient, SearchTool, TranslateTool};
use super::error::ToolError;
use super::handler::ToolHandler;

/// Tool registry - maps tool names to their handlers.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolHandler>>,
    /// Registration order, used for listing.
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry with every tool this server exposes.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = JinaClient::new(config.credentials.jina_api_key.clone(), &config.jina)
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;
        let client = Arc::new(client);

        let mut registry = Self::new();
        registry.register(Arc::new(FetchTool::new(client.clone())))?;
        registry.register(Arc::new(SearchTool::new(client)))?;
        registry.register(Arc::new(TranslateTool::new()))?;

        info!("Registered tools: {}", registry.tool_names().join(", "));
        Ok(registry)
    }

    /// Register a tool. Fails if a tool with the same name already exists.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> std::result::Result<(), ToolError> {
        let name = handler.definition().name.to_string();
        if self.tools.contains_key(&name) {
            return Err(ToolError::Duplicate(name));
        }
        self.order.push(name.clone());
        self.tools.insert(name, handler);
        Ok(())
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|handler| handler.definition())
            .collect()
    }

    /// Look up a handler by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools.get(name)
    }

    /// Dispatch a tool call to the named handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: ToolArguments,
        ct: CancellationToken,
    ) -> std::result::Result<CallToolResult, ToolError> {
        let Some(handler) = self.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        info!("Calling tool: {}", name);
        handler.invoke(arguments, ct).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::{result_text, success_result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTool {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ToolHandler for CountingTool {
        fn definition(&self) -> Tool {
            Tool {
                name: "count".into(),
                description: Some("Counts invocations".into()),
                input_schema: Arc::new(Default::default()),
                annotations: None,
                output_schema: None,
                icons: None,
                meta: None,
                title: None,
            }
        }

        async fn invoke(
            &self,
            _arguments: ToolArguments,
            _ct: CancellationToken,
        ) -> std::result::Result<CallToolResult, ToolError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(success_result(n.to_string()))
        }
    }

    fn counting_tool() -> Arc<CountingTool> {
        Arc::new(CountingTool {
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::from_config(&Config::default()).unwrap();
        assert_eq!(registry.tool_names(), vec!["fetch", "search", "translate"]);
        assert_eq!(registry.get_all_tools().len(), 3);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(counting_tool()).unwrap();
        let err = registry.register(counting_tool()).unwrap_err();
        assert!(matches!(err, ToolError::Duplicate(ref name) if name == "count"));
        assert_eq!(registry.tool_names().len(), 1);
    }

    #[tokio::test]
    async fn test_registry_call_dispatches() {
        let tool = counting_tool();
        let mut registry = ToolRegistry::new();
        registry.register(tool.clone()).unwrap();

        let result = registry
            .call_tool("count", ToolArguments::default(), CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(result_text(&result), Some("1"));
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let tool = counting_tool();
        let mut registry = ToolRegistry::new();
        registry.register(tool.clone()).unwrap();

        let err = registry
            .call_tool("unknown", ToolArguments::default(), CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert_eq!(tool.calls.load(Ordering::SeqCst), 0);
    }
}
