//! Placeholder translation tool.
//!
//! Performs no translation: the reply annotates the input text with the
//! source and target language tags and returns it unchanged.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::domains::tools::response::success_result;
use crate::domains::tools::{FromArguments, ToolArguments, ToolError, ToolHandler};

pub const DEFAULT_FROM_LANG: &str = "zh";
pub const DEFAULT_TO_LANG: &str = "en";

/// Parameters for the translate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TranslateParams {
    /// The text to translate.
    #[schemars(description = "The text to translate")]
    pub text: String,

    /// Source language (default: zh).
    #[schemars(description = "Source language (default: zh)")]
    #[serde(default = "default_from_lang")]
    pub from_lang: String,

    /// Target language (default: en).
    #[schemars(description = "Target language (default: en)")]
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
}

fn default_from_lang() -> String {
    DEFAULT_FROM_LANG.to_string()
}

fn default_to_lang() -> String {
    DEFAULT_TO_LANG.to_string()
}

impl FromArguments for TranslateParams {
    fn from_arguments(arguments: &ToolArguments) -> Result<Self, ToolError> {
        Ok(Self {
            text: arguments.required_str("text")?.to_string(),
            from_lang: arguments
                .optional_str("from_lang", DEFAULT_FROM_LANG)
                .to_string(),
            to_lang: arguments.optional_str("to_lang", DEFAULT_TO_LANG).to_string(),
        })
    }
}

/// Translate tool implementation.
#[derive(Debug, Clone, Default)]
pub struct TranslateTool;

impl TranslateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "translate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Translate text between languages";

    pub fn new() -> Self {
        Self
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<TranslateParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Format the placeholder translation.
    pub fn translate(params: &TranslateParams) -> String {
        format!(
            "[Translated from {} to {}]: {}",
            params.from_lang, params.to_lang, params.text
        )
    }

    /// Execute the tool logic.
    pub fn execute(params: &TranslateParams) -> CallToolResult {
        info!(
            "Translate tool called: {} -> {} ({} chars)",
            params.from_lang,
            params.to_lang,
            params.text.chars().count()
        );
        success_result(Self::translate(params))
    }
}

#[async_trait]
impl ToolHandler for TranslateTool {
    fn definition(&self) -> Tool {
        Self::to_tool()
    }

    async fn invoke(
        &self,
        arguments: ToolArguments,
        _ct: CancellationToken,
    ) -> Result<CallToolResult, ToolError> {
        let params = TranslateParams::from_arguments(&arguments)?;
        Ok(Self::execute(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::{is_reported_error, result_text};
    use serde_json::json;

    fn arguments(value: serde_json::Value) -> ToolArguments {
        ToolArguments::from(value.as_object().cloned())
    }

    fn run(value: serde_json::Value) -> Result<CallToolResult, ToolError> {
        tokio_test::block_on(TranslateTool::new().invoke(arguments(value), CancellationToken::new()))
    }

    #[test]
    fn test_translate_defaults() {
        let result = run(json!({ "text": "你好" })).unwrap();
        assert!(!is_reported_error(&result));
        assert_eq!(result_text(&result), Some("[Translated from zh to en]: 你好"));
    }

    #[test]
    fn test_translate_explicit_languages() {
        let result = run(json!({ "text": "hi", "from_lang": "en", "to_lang": "fr" })).unwrap();
        assert_eq!(result_text(&result), Some("[Translated from en to fr]: hi"));
    }

    #[test]
    fn test_translate_non_string_language_uses_default() {
        let result = run(json!({ "text": "hi", "to_lang": 3 })).unwrap();
        assert_eq!(result_text(&result), Some("[Translated from zh to en]: hi"));
    }

    #[test]
    fn test_translate_missing_text() {
        let err = run(json!({ "from_lang": "en" })).unwrap_err();
        assert_eq!(err.to_string(), "text parameter is required");
    }

    #[test]
    fn test_translate_params_serde_defaults_match() {
        let params: TranslateParams = serde_json::from_value(json!({ "text": "x" })).unwrap();
        assert_eq!(params.from_lang, DEFAULT_FROM_LANG);
        assert_eq!(params.to_lang, DEFAULT_TO_LANG);
    }

    #[test]
    fn test_translate_schema_requires_only_text() {
        let tool = TranslateTool::to_tool();
        assert_eq!(tool.input_schema.get("required"), Some(&json!(["text"])));

        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("from_lang").is_some());
        assert!(properties.get("to_lang").is_some());
    }
}
