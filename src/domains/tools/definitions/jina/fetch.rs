//! Web page fetch tool.
//!
//! Reads a page through the Jina reader, which returns it as LLM-friendly
//! text. The URL is forwarded verbatim.

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

/// Parameters for the fetch tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchParams {
    /// The URL to fetch.
    #[schemars(description = "The URL to fetch")]
    pub url: String,
}

impl FromArguments for FetchParams {
    fn from_arguments(arguments: &ToolArguments) -> Result<Self, ToolError> {
        Ok(Self {
            url: arguments.required_str("url")?.to_string(),
        })
    }
}

/// Fetch tool implementation.
pub struct FetchTool {
    client: Arc<JinaClient>,
}

impl FetchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch the content of a web page using Jina AI";

    pub fn new(client: Arc<JinaClient>) -> Self {
        Self { client }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<FetchParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Fetch the page and return its text.
    pub async fn execute(
        &self,
        params: &FetchParams,
        ct: &CancellationToken,
    ) -> Result<CallToolResult, ToolError> {
        info!("Fetch tool called for: {}", params.url);
        self.client.get(JinaEndpoint::Reader, &params.url, ct).await
    }
}

#[async_trait]
impl ToolHandler for FetchTool {
    fn definition(&self) -> Tool {
        Self::to_tool()
    }

    async fn invoke(
        &self,
        arguments: ToolArguments,
        ct: CancellationToken,
    ) -> Result<CallToolResult, ToolError> {
        let params = FetchParams::from_arguments(&arguments)?;
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

    fn fetch_tool(server: &MockServer, api_key: Option<&str>) -> FetchTool {
        let config = JinaConfig {
            reader_url: format!("{}/", server.base_url()),
            ..JinaConfig::default()
        };
        let client = JinaClient::new(api_key.map(str::to_string), &config).unwrap();
        FetchTool::new(Arc::new(client))
    }

    fn arguments(value: serde_json::Value) -> ToolArguments {
        ToolArguments::from(value.as_object().cloned())
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/example.com")
                    .header("Authorization", "Bearer test-key");
                then.status(200).body("hello");
            })
            .await;

        let tool = fetch_tool(&server, Some("test-key"));
        let result = tool
            .invoke(arguments(json!({ "url": "example.com" })), CancellationToken::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(!is_reported_error(&result));
        assert_eq!(result_text(&result), Some("hello"));
    }

    #[tokio::test]
    async fn test_fetch_404_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing.example");
                then.status(404).body("not here");
            })
            .await;

        let tool = fetch_tool(&server, Some("test-key"));
        let result = tool
            .invoke(arguments(json!({ "url": "missing.example" })), CancellationToken::new())
            .await
            .unwrap();

        assert!(is_reported_error(&result));
        let text = result_text(&result).unwrap();
        assert!(text.contains("404"));
        assert_eq!(text, "Error fetching missing.example: 404");
    }

    #[tokio::test]
    async fn test_fetch_without_key_is_reported() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200);
            })
            .await;

        let tool = fetch_tool(&server, None);
        let result = tool
            .invoke(arguments(json!({ "url": "example.com" })), CancellationToken::new())
            .await
            .unwrap();

        assert!(is_reported_error(&result));
        assert!(result_text(&result).unwrap().contains("JINA_API_KEY not set"));
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_fetch_missing_url_fails_before_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200);
            })
            .await;

        let tool = fetch_tool(&server, Some("test-key"));
        let err = tool
            .invoke(arguments(json!({ "url": 7 })), CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "url parameter is required");
        assert_eq!(mock.hits_async().await, 0);
    }

    #[test]
    fn test_fetch_schema_requires_url() {
        let tool = FetchTool::to_tool();
        assert_eq!(tool.name, "fetch");
        assert_eq!(tool.input_schema.get("required"), Some(&json!(["url"])));
    }
}
