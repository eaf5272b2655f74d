//! Web search tool.
//!
//! Runs a query through Jina search, which returns the top results as
//! LLM-friendly text. The query is appended to the base URL unescaped.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::client::{JinaClient, JinaEndpoint};
use crate::domains::tools::{FromArguments, ToolArguments, ToolError, ToolHandler};

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// The search query.
    #[schemars(description = "The search query")]
    pub query: String,
}

impl FromArguments for SearchParams {
    fn from_arguments(arguments: &ToolArguments) -> Result<Self, ToolError> {
        Ok(Self {
            query: arguments.required_str("query")?.to_string(),
        })
    }
}

/// Search tool implementation.
pub struct SearchTool {
    client: Arc<JinaClient>,
}

impl SearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the web using Jina AI";

    pub fn new(client: Arc<JinaClient>) -> Self {
        Self { client }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SearchParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run the search and return the result text.
    pub async fn execute(
        &self,
        params: &SearchParams,
        ct: &CancellationToken,
    ) -> Result<CallToolResult, ToolError> {
        info!("Search tool called for: {}", params.query);
        self.client.get(JinaEndpoint::Search, &params.query, ct).await
    }
}

#[async_trait]
impl ToolHandler for SearchTool {
    fn definition(&self) -> Tool {
        Self::to_tool()
    }

    async fn invoke(
        &self,
        arguments: ToolArguments,
        ct: CancellationToken,
    ) -> Result<CallToolResult, ToolError> {
        let params = SearchParams::from_arguments(&arguments)?;
        self.execute(&params, &ct).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::JinaConfig;
    use crate::domains::tools::response::{is_reported_error, result_text};
    use httpmock::prelude::*;
    use serde_json::json;

    fn search_tool(search_url: String, api_key: Option<&str>) -> SearchTool {
        let config = JinaConfig {
            search_url,
            ..JinaConfig::default()
        };
        let client = JinaClient::new(api_key.map(str::to_string), &config).unwrap();
        SearchTool::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_search_hits_search_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/tokio")
                    .header("Authorization", "Bearer k");
                then.status(200).body("1. tokio.rs");
            })
            .await;

        let tool = search_tool(format!("{}/", server.base_url()), Some("k"));
        let args = ToolArguments::from(json!({ "query": "tokio" }).as_object().cloned());
        let result = tool.invoke(args, CancellationToken::new()).await.unwrap();

        mock.assert_async().await;
        assert!(!is_reported_error(&result));
        assert_eq!(result_text(&result), Some("1. tokio.rs"));
    }

    #[tokio::test]
    async fn test_search_rate_limited_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/busy");
                then.status(429);
            })
            .await;

        let tool = search_tool(format!("{}/", server.base_url()), Some("k"));
        let params = SearchParams {
            query: "busy".to_string(),
        };
        let result = tool.execute(&params, &CancellationToken::new()).await.unwrap();

        assert!(is_reported_error(&result));
        assert_eq!(result_text(&result), Some("Error searching busy: 429"));
    }

    #[tokio::test]
    async fn test_search_without_key_is_reported() {
        // Nothing listens here; a request would fail differently
        let tool = search_tool("http://127.0.0.1:9/".to_string(), None);
        let args = ToolArguments::from(json!({ "query": "anything" }).as_object().cloned());
        let result = tool.invoke(args, CancellationToken::new()).await.unwrap();

        assert!(is_reported_error(&result));
        assert_eq!(result_text(&result), Some("JINA_API_KEY not set"));
    }

    #[tokio::test]
    async fn test_search_missing_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200);
            })
            .await;

        let tool = search_tool(format!("{}/", server.base_url()), Some("k"));
        let args = ToolArguments::from(json!({ "q": "tokio" }).as_object().cloned());
        let err = tool.invoke(args, CancellationToken::new()).await.unwrap_err();

        assert!(matches!(err, ToolError::MissingArgument(ref name) if name == "query"));
        assert_eq!(mock.hits_async().await, 0);
    }
}
