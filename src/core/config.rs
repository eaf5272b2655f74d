//! Configuration management for the MCP server.
//!
//! Configuration is built from defaults, then overridden from environment
//! variables (a `.env` file is honored). Everything a tool needs, including
//! the provider API key, is carried here and handed to the tools at
//! construction time.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Jina AI endpoints and outbound HTTP settings.
    pub jina: JinaConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Jina AI bearer token used by `fetch` and `search`.
    /// Absent means those tools report an error instead of calling out.
    pub jina_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "jina_api_key",
                &self.jina_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Jina AI provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JinaConfig {
    /// Base URL of the reader service; the page URL is appended unescaped.
    pub reader_url: String,

    /// Base URL of the search service; the query is appended unescaped.
    pub search_url: String,

    /// Optional timeout for outbound requests. None means no timeout.
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl JinaConfig {
    /// Outbound timeout as a `Duration`, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for JinaConfig {
    fn default() -> Self {
        Self {
            reader_url: "https://r.jina.ai/".to_string(),
            search_url: "https://s.jina.ai/".to_string(),
            timeout_secs: None,
            user_agent: format!("AI-Tools-MCP-Server/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ai-tools".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            jina: JinaConfig::default(),
        }
    }
}

impl Config {
    /// Set the Jina API key, e.g. for tests that must not touch the process environment.
    pub fn with_jina_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials.jina_api_key = Some(api_key.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...). The provider key keeps its conventional
    /// name, `JINA_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // An empty key is treated the same as a missing one
        config.credentials.jina_api_key = std::env::var("JINA_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Ok(url) = std::env::var("MCP_JINA_READER_URL") {
            info!("Jina reader URL overridden: {}", url);
            config.jina.reader_url = url;
        }

        if let Ok(url) = std::env::var("MCP_JINA_SEARCH_URL") {
            info!("Jina search URL overridden: {}", url);
            config.jina.search_url = url;
        }

        if let Ok(secs) = std::env::var("MCP_HTTP_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.jina.timeout_secs = Some(secs),
                _ => warn!(
                    "Ignoring invalid MCP_HTTP_TIMEOUT_SECS value '{}'; outbound requests have no timeout",
                    secs
                ),
            }
        }

        config
    }
}
