//! Connecting to the tool provider with authentication fallback.
//!
//! The provider accepts the token either as a bearer header or as an
//! `api_key` query parameter. Header auth is tried first; the query form is
//! tried only if the first attempt fails for any reason. The catalog fetched
//! by the successful attempt is the one the session keeps.

use std::fmt;
use std::time::Duration;

use nimbus_mcp::{HttpTransportConfig, McpClient, McpError, ToolInfo};

use crate::error::BootstrapError;

/// Query parameter carrying the token in query-auth mode.
pub const API_KEY_PARAM: &str = "api_key";

/// How the client authenticates against the tool provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `Authorization: Bearer <token>`.
    Header,
    /// `?api_key=<token>` on the endpoint URL.
    Query,
}

impl AuthMode {
    /// Attempt order used by [`connect_with_fallback`].
    pub const ATTEMPT_ORDER: [AuthMode; 2] = [AuthMode::Header, AuthMode::Query];

    /// Transport configuration for this mode.
    pub fn transport_config(self, url: &str, token: &str, timeout: Duration) -> HttpTransportConfig {
        let config = HttpTransportConfig::new(url).with_timeout(timeout);
        match self {
            AuthMode::Header => config.with_bearer_token(token),
            AuthMode::Query => config.with_query_param(API_KEY_PARAM, token),
        }
    }

    /// Lowercase name used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthMode::Header => "header",
            AuthMode::Query => "query",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connected client together with the catalog it fetched.
#[derive(Debug)]
pub struct Connection {
    pub client: McpClient,
    pub tools: Vec<ToolInfo>,
    pub auth_mode: AuthMode,
}

/// Connect to the provider, trying header auth first and query auth second.
///
/// Each attempt builds a fresh client and lists tools with it. When both
/// attempts fail the returned error carries both failures, with the query
/// attempt's error as the source.
pub async fn connect_with_fallback(
    url: &str,
    token: &str,
    timeout: Duration,
) -> Result<Connection, BootstrapError> {
    let [first, second] = AuthMode::ATTEMPT_ORDER;

    let header = match attempt(first, url, token, timeout).await {
        Ok(connection) => return Ok(connection),
        Err(e) => e,
    };
    tracing::warn!(
        auth_mode = %first,
        error_kind = header.kind(),
        error = %header,
        "tool provider rejected first auth mode, retrying with {second}"
    );

    let query = match attempt(second, url, token, timeout).await {
        Ok(connection) => return Ok(connection),
        Err(e) => e,
    };
    tracing::error!(
        auth_mode = %second,
        error_kind = query.kind(),
        "tool provider unreachable with every auth mode"
    );

    Err(BootstrapError { header, query })
}

async fn attempt(
    mode: AuthMode,
    url: &str,
    token: &str,
    timeout: Duration,
) -> Result<Connection, McpError> {
    let client = McpClient::connect(
        format!("xweather-{mode}"),
        mode.transport_config(url, token, timeout),
    )?;
    let tools = client.list_tools().await?;

    tracing::info!(
        auth_mode = %mode,
        tool_count = tools.len(),
        "connected to tool provider"
    );

    Ok(Connection {
        client,
        tools,
        auth_mode: mode,
    })
}
