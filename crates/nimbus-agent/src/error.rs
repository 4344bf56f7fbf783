//! Error types for the agent crate.

use nimbus_mcp::McpError;
use thiserror::Error;

/// Result type alias using the agent error type.
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error type for agent operations.
#[derive(Debug, Error)]
pub enum AgentError {
    /// LLM backend error.
    #[error("LLM error: {0}")]
    Llm(#[from] nimbus_llm::LlmError),

    /// Tool provider error outside a tool call (e.g. listing tools).
    #[error("Tool provider error: {0}")]
    Mcp(#[from] McpError),

    /// Neither authentication mode could reach the tool provider.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}

/// Both authentication attempts against the tool provider failed.
///
/// The query-parameter attempt is the last one made; its error is the
/// [`source`](std::error::Error::source) and is kept unmodified.
#[derive(Debug, Error)]
#[error("could not connect to tool provider (header auth: {}, query auth: {query})", .header.kind())]
pub struct BootstrapError {
    /// Failure of the `Authorization: Bearer` attempt.
    pub header: McpError,
    /// Failure of the `?api_key=` attempt.
    #[source]
    pub query: McpError,
}

impl BootstrapError {
    /// Variant name of the final (query-parameter) failure.
    pub fn kind(&self) -> &'static str {
        self.query.kind()
    }

    /// Take the final protocol error.
    pub fn into_source(self) -> McpError {
        self.query
    }
}

/// The arguments a model produced for a tool call are unusable.
#[derive(Debug, Error)]
pub enum ArgumentParseError {
    /// The argument string is not JSON.
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The argument string is JSON, but not an object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
