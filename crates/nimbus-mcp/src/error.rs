//! Error types for tool-provider protocol operations.

use thiserror::Error;

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, McpError>;

/// Maximum number of characters of a response body kept in error messages.
pub const BODY_PREVIEW_LIMIT: usize = 600;

/// Maximum number of characters of a pretty-printed document kept in error messages.
pub const DOCUMENT_PREVIEW_LIMIT: usize = 800;

/// Placeholder used in previews when the response body is empty.
pub const EMPTY_BODY: &str = "<empty body>";

/// Error type for protocol operations.
///
/// Every failure of a request maps to exactly one variant.
#[derive(Debug, Error)]
pub enum McpError {
    /// The HTTP client could not be built or the endpoint URL is invalid.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request never produced an HTTP response (connect, DNS, timeout, body read).
    #[error("network error contacting tool provider: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from tool provider; body preview:\n{body_preview}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body_preview: String,
    },

    /// The body could not be decoded as JSON (or carried no SSE data).
    #[error("malformed response body: {0}")]
    MalformedBody(String),

    /// The decoded document is not a valid JSON-RPC success envelope.
    #[error("invalid JSON-RPC envelope: {0}")]
    InvalidEnvelope(String),

    /// The server returned a JSON-RPC error object.
    #[error("tool provider error {code}: {message}")]
    RemoteError {
        /// Error code from the server.
        code: i64,
        /// Error message from the server.
        message: String,
        /// Optional additional data.
        data: Option<serde_json::Value>,
    },

    /// The response had a content type we cannot decode.
    #[error("unexpected Content-Type '{content_type}'; body preview:\n{body_preview}")]
    UnexpectedContentType {
        /// Content type reported by the server (lowercased).
        content_type: String,
        /// Truncated response body.
        body_preview: String,
    },
}

impl McpError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a malformed body error.
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        Self::MalformedBody(msg.into())
    }

    /// Create an invalid envelope error.
    pub fn invalid_envelope(msg: impl Into<String>) -> Self {
        Self::InvalidEnvelope(msg.into())
    }

    /// Create an HTTP status error, truncating the body.
    pub fn http_status(status: u16, body: &str) -> Self {
        Self::HttpStatus {
            status,
            body_preview: body_preview(body),
        }
    }

    /// Create a remote error from a JSON-RPC error object.
    pub fn remote(code: i64, message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self::RemoteError {
            code,
            message: message.into(),
            data,
        }
    }

    /// Create an unexpected content type error, truncating the body.
    pub fn unexpected_content_type(content_type: impl Into<String>, body: &str) -> Self {
        Self::UnexpectedContentType {
            content_type: content_type.into(),
            body_preview: body_preview(body),
        }
    }

    /// Short name of the variant, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Network(_) => "network",
            Self::HttpStatus { .. } => "http_status",
            Self::MalformedBody(_) => "malformed_body",
            Self::InvalidEnvelope(_) => "invalid_envelope",
            Self::RemoteError { .. } => "remote_error",
            Self::UnexpectedContentType { .. } => "unexpected_content_type",
        }
    }
}

/// Keep at most `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Preview of a response body for diagnostics.
pub fn body_preview(body: &str) -> String {
    if body.is_empty() {
        EMPTY_BODY.to_string()
    } else {
        truncate_chars(body, BODY_PREVIEW_LIMIT)
    }
}

/// Pretty-printed, truncated preview of a JSON document.
pub fn document_preview(doc: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(doc).unwrap_or_else(|_| doc.to_string());
    truncate_chars(&pretty, DOCUMENT_PREVIEW_LIMIT)
}
