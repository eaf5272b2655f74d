//! AI Tools MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the tool registry and
//! serves MCP requests over the configured transport until it closes.

use anyhow::Result;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ai_tools_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    log_credentials(&config);

    let server = McpServer::new(config.clone())?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    if let Err(e) = transport.run(server).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutting down");

    Ok(())
}

/// Report which provider credentials are present, never their values.
fn log_credentials(config: &Config) {
    if config.credentials.jina_api_key.is_some() {
        info!("JINA_API_KEY configured: yes");
    } else {
        warn!("JINA_API_KEY not set - fetch and search will report an error until it is provided");
    }
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP message stream.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
