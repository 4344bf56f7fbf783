//! HTTP transport for JSON-RPC requests.
//!
//! Each request is a single POST. The response is decoded by
//! [`crate::codec`] according to its content type.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONNECTION, CONTENT_TYPE};
use url::Url;

use crate::codec::{self, CONTENT_TYPE_JSON};
use crate::error::{McpError, Result};
use crate::protocol::{JsonRpcRequest, RpcResult};

/// Accept header value; the server requires clients to accept both shapes.
pub const ACCEPT_BOTH: &str = "application/json, text/event-stream";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Endpoint URL of the tool provider.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Extra headers sent with every request (e.g. authentication).
    pub headers: Vec<(String, String)>,
    /// Extra query parameters appended to the endpoint URL.
    pub query: Vec<(String, String)>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
            query: Vec::new(),
        }
    }
}

impl HttpTransportConfig {
    /// Create a new HTTP transport config with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add a `Authorization: Bearer <token>` header.
    pub fn with_bearer_token(self, token: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {}", token))
    }

    /// Append a query parameter to the endpoint URL.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Resolve the endpoint URL including any extra query parameters.
    pub fn endpoint(&self) -> Result<Url> {
        let mut url = Url::parse(&self.url)
            .map_err(|e| McpError::transport(format!("invalid URL '{}': {}", self.url, e)))?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

/// HTTP transport holding one pooled, keep-alive client for its lifetime.
#[derive(Debug, Clone)]
pub struct McpTransport {
    client: reqwest::Client,
    endpoint: Url,
    config: HttpTransportConfig,
}

impl McpTransport {
    /// Create a new HTTP transport.
    pub fn connect_http(config: HttpTransportConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(5)
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| McpError::transport(format!("failed to build HTTP client: {}", e)))?;

        tracing::debug!(
            host = endpoint.host_str().unwrap_or_default(),
            path = endpoint.path(),
            timeout_secs = config.timeout.as_secs(),
            extra_headers = config.headers.len(),
            "created HTTP transport"
        );

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    /// The transport configuration.
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// The resolved endpoint URL (including query parameters).
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send a JSON-RPC request and decode the validated result.
    pub async fn send_request(&self, request: &JsonRpcRequest) -> Result<RpcResult> {
        tracing::trace!(
            id = request.id,
            method = %request.method,
            "sending JSON-RPC request"
        );

        let mut req = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(ACCEPT, ACCEPT_BOTH)
            .header(CONNECTION, "keep-alive")
            .json(request);

        for (key, value) in &self.config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req
            .send()
            .await
            .map_err(|e| McpError::network(self.describe(e)))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| {
                McpError::network(format!("failed to read response body: {}", self.describe(e)))
            })?;

        tracing::trace!(
            id = request.id,
            status = status.as_u16(),
            content_type = %content_type,
            body_len = body.len(),
            "received JSON-RPC response"
        );

        if !status.is_success() {
            return Err(McpError::http_status(status.as_u16(), &body));
        }

        codec::decode_response(&content_type, &body)
    }

    /// Render a request failure without the endpoint URL or query values.
    ///
    /// Query parameters may carry credentials, and the rendered text ends up
    /// in logs and in tool messages shown to the model.
    fn describe(&self, err: reqwest::Error) -> String {
        use std::error::Error;

        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        redact_query_values(message, &self.config.query)
    }
}

fn redact_query_values(mut message: String, query: &[(String, String)]) -> String {
    for (_, value) in query {
        if !value.is_empty() {
            message = message.replace(value.as_str(), "<redacted>");
        }
    }
    message
}
