//! REST API client for the MCP suggestion service.
//!
//! Wraps the theme suggestion endpoints (context-aware suggestions and the
//! default theme set) using [`reqwest`].

use std::time::Duration;

use studio_db::models::theme::CuratedTheme;

/// HTTP client for the MCP suggestion service.
pub struct McpApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the MCP REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum McpApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, or an
    /// undecodable body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("MCP API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl McpApi {
    /// Create a new API client with a per-request timeout.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:3100`.
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, McpApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch theme suggestions, optionally guided by a free-form context.
    ///
    /// Sends `GET /themes/suggestions[?context=...]`.
    pub async fn get_suggestions(
        &self,
        context: Option<&str>,
    ) -> Result<Vec<CuratedTheme>, McpApiError> {
        let mut request = self
            .client
            .get(format!("{}/themes/suggestions", self.api_url));
        if let Some(context) = context {
            request = request.query(&[("context", context)]);
        }

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    /// Fetch the service's default theme set.
    ///
    /// Sends `GET /themes/defaults`.
    pub async fn get_default_themes(&self) -> Result<Vec<CuratedTheme>, McpApiError> {
        let response = self
            .client
            .get(format!("{}/themes/defaults", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`McpApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, McpApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(McpApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, McpApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
