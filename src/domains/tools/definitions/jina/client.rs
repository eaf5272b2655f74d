//! Jina AI HTTP client shared by the `fetch` and `search` tools.
//!
//! One call is one GET: `<base url><fragment>` with a bearer token. The
//! fragment is appended without escaping. The joined string is then parsed
//! as a URL, which percent-encodes characters not allowed in a URL and
//! resolves `.`/`..` path segments, so the provider may see a normalized
//! path rather than the exact bytes the caller sent.

use reqwest::{StatusCode, Url};
use rmcp::model::CallToolResult;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::core::config::JinaConfig;
use crate::domains::tools::ToolError;
use crate::domains::tools::response::{error_result, success_result};

/// Reported when no API key was configured.
pub const MISSING_API_KEY: &str = "JINA_API_KEY not set";

/// The two Jina services this server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JinaEndpoint {
    /// Page reader (`r.jina.ai`).
    Reader,
    /// Web search (`s.jina.ai`).
    Search,
}

impl JinaEndpoint {
    /// Verb used in reported error messages.
    fn verb(self) -> &'static str {
        match self {
            Self::Reader => "fetching",
            Self::Search => "searching",
        }
    }
}

/// Client for the Jina reader and search services.
pub struct JinaClient {
    http: reqwest::Client,
    api_key: Option<String>,
    reader_url: String,
    search_url: String,
}

impl JinaClient {
    /// Create a client from an explicit API key and endpoint configuration.
    ///
    /// A `None` key is allowed: calls then report `JINA_API_KEY not set`
    /// without touching the network.
    pub fn new(api_key: Option<String>, config: &JinaConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_key: api_key.filter(|key| !key.is_empty()),
            reader_url: config.reader_url.clone(),
            search_url: config.search_url.clone(),
        })
    }

    fn base_url(&self, endpoint: JinaEndpoint) -> &str {
        match endpoint {
            JinaEndpoint::Reader => &self.reader_url,
            JinaEndpoint::Search => &self.search_url,
        }
    }

    /// Issue one GET against `endpoint` for `fragment`.
    ///
    /// Returns a success result carrying the response body on HTTP 200 and a
    /// reported error for a missing key, a transport failure or any other
    /// status. Cancellation, an unparseable target URL and a body that
    /// cannot be read after a 200 are propagated as `ToolError`.
    pub async fn get(
        &self,
        endpoint: JinaEndpoint,
        fragment: &str,
        ct: &CancellationToken,
    ) -> Result<CallToolResult, ToolError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(error_result(MISSING_API_KEY));
        };

        let target = format!("{}{}", self.base_url(endpoint), fragment);
        let url = Url::parse(&target)
            .map_err(|e| ToolError::invalid_arguments(format!("invalid target URL {}: {}", target, e)))?;

        info!("Jina {:?} request: {}", endpoint, fragment);
        let request = self.http.get(url).bearer_auth(api_key).send();

        let response = tokio::select! {
            _ = ct.cancelled() => {
                info!("Jina {:?} request cancelled: {}", endpoint, fragment);
                return Err(ToolError::Cancelled);
            }
            response = request => response,
        };

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                return Ok(error_result(&format!(
                    "Error {} {}: {}",
                    endpoint.verb(),
                    fragment,
                    e
                )));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(error_result(&format!(
                "Error {} {}: {}",
                endpoint.verb(),
                fragment,
                status.as_u16()
            )));
        }

        let body = tokio::select! {
            _ = ct.cancelled() => return Err(ToolError::Cancelled),
            body = response.text() => body,
        };

        match body {
            Ok(body) => {
                debug!("Jina {:?} response: {} bytes", endpoint, body.len());
                Ok(success_result(body))
            }
            Err(e) => {
                error!("Failed to read Jina response body: {}", e);
                Err(ToolError::internal(format!(
                    "failed to read response body: {}",
                    e
                )))
            }
        }
    }
}
