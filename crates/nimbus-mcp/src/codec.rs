//! Response decoding for the HTTP transport.
//!
//! The provider answers a POST either with a plain JSON document or with a
//! `text/event-stream` body whose last `data:` event carries the envelope.
//! Both shapes end up in [`unwrap_envelope`], which is the only place an
//! [`RpcResult`] is produced.

use serde_json::Value;

use crate::error::{McpError, Result, body_preview, document_preview};
use crate::protocol::{JSONRPC_VERSION, JsonRpcError, RpcResult};

/// Content type of a plain JSON response.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type of a Server-Sent-Events response.
pub const CONTENT_TYPE_SSE: &str = "text/event-stream";

/// Decode a 2xx response body into a validated JSON-RPC result.
///
/// `content_type` is matched case-insensitively by substring, so parameters
/// such as `; charset=utf-8` are fine.
pub fn decode_response(content_type: &str, body: &str) -> Result<RpcResult> {
    let content_type = content_type.to_ascii_lowercase();

    if content_type.contains(CONTENT_TYPE_JSON) {
        let doc: Value = serde_json::from_str(body).map_err(|e| {
            McpError::malformed_body(format!(
                "invalid JSON: {}\nBody preview:\n{}",
                e,
                body_preview(body)
            ))
        })?;
        return unwrap_envelope(doc);
    }

    if content_type.contains(CONTENT_TYPE_SSE) {
        let doc = parse_sse_document(body)?;
        return unwrap_envelope(doc);
    }

    // Some servers mislabel JSON; try it before giving up.
    match serde_json::from_str::<Value>(body) {
        Ok(doc) => unwrap_envelope(doc),
        Err(_) => Err(McpError::unexpected_content_type(content_type, body)),
    }
}

/// Return the payload of the last `data:` event in an SSE body.
///
/// Comment lines (`:`) and non-data fields are ignored. Multi-line data is
/// joined with `\n`. A final event without a trailing blank line still
/// counts.
pub fn last_sse_payload(body: &str) -> Option<String> {
    let mut buffer: Vec<&str> = Vec::new();
    let mut last: Option<String> = None;

    for line in body.lines() {
        if line.starts_with(':') {
            continue;
        }

        if let Some(data) = line.strip_prefix("data:") {
            buffer.push(data.strip_prefix(' ').unwrap_or(data));
        } else if line.trim().is_empty() && !buffer.is_empty() {
            last = Some(buffer.join("\n"));
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        last = Some(buffer.join("\n"));
    }

    last.filter(|payload| !payload.is_empty())
}

/// Parse the last SSE event payload as JSON.
pub fn parse_sse_document(body: &str) -> Result<Value> {
    let payload = last_sse_payload(body)
        .ok_or_else(|| McpError::malformed_body("SSE response contained no data payload"))?;

    serde_json::from_str(&payload)
        .map_err(|e| McpError::malformed_body(format!("SSE data is not valid JSON: {}", e)))
}

/// Validate a JSON-RPC envelope and extract its `result` object.
///
/// A truthy `error` member wins over `result`, even when both are present.
pub fn unwrap_envelope(doc: Value) -> Result<RpcResult> {
    let Value::Object(mut envelope) = doc else {
        return Err(McpError::invalid_envelope(format!(
            "expected a JSON object:\n{}",
            document_preview(&doc)
        )));
    };

    if envelope.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        let doc = Value::Object(envelope);
        return Err(McpError::invalid_envelope(format!(
            "missing or wrong \"jsonrpc\" version:\n{}",
            document_preview(&doc)
        )));
    }

    if let Some(error) = envelope.remove("error").filter(is_truthy) {
        let error = JsonRpcError::from_value(&error);
        return Err(McpError::remote(error.code, error.message, error.data));
    }

    match envelope.remove("result") {
        Some(Value::Object(result)) => Ok(result),
        Some(other) => Err(McpError::invalid_envelope(format!(
            "\"result\" must be an object, got {}",
            json_type_name(&other)
        ))),
        None => Err(McpError::invalid_envelope("missing \"result\" in response")),
    }
}

/// JSON truthiness: null, false, zero, and empty strings/arrays/objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
