//! JSON-RPC 2.0 protocol types for the tool provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC version string.
pub const JSONRPC_VERSION: &str = "2.0";

/// Method used to discover tools.
pub const METHOD_TOOLS_LIST: &str = "tools/list";

/// Method used to invoke a tool.
pub const METHOD_TOOLS_CALL: &str = "tools/call";

/// Success payload of a validated JSON-RPC envelope.
pub type RpcResult = Map<String, Value>;

// ─────────────────────────────────────────────────────────────────────────────
// JSON-RPC Base Types
// ─────────────────────────────────────────────────────────────────────────────

/// A JSON-RPC request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (always "2.0").
    pub jsonrpc: String,
    /// Request ID for correlating responses.
    pub id: u64,
    /// Method name to call.
    pub method: String,
    /// Method parameters, always an object.
    pub params: Map<String, Value>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request.
    pub fn new(id: u64, method: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// A JSON-RPC error object.
///
/// Servers are not always strict about this shape, so missing fields fall
/// back to defaults instead of failing the decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code.
    #[serde(default)]
    pub code: i64,
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// Optional additional data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Read an `error` member field by field.
    ///
    /// A non-integer `code` becomes 0 without losing `message` or `data`.
    /// Without a usable `message` the whole member is rendered as the message.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            return Self {
                message: value
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string()),
                ..Default::default()
            };
        };

        let message = match fields.get("message") {
            Some(Value::String(m)) => m.clone(),
            Some(other) if !other.is_null() => other.to_string(),
            _ => value.to_string(),
        };

        Self {
            code: fields.get("code").and_then(Value::as_i64).unwrap_or(0),
            message,
            data: fields.get("data").filter(|d| !d.is_null()).cloned(),
        }
    }
}

// Standard JSON-RPC error codes
impl JsonRpcError {
    /// Parse error - Invalid JSON.
    pub const PARSE_ERROR: i64 = -32700;
    /// Invalid Request - Not a valid Request object.
    pub const INVALID_REQUEST: i64 = -32600;
    /// Method not found.
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// Invalid params.
    pub const INVALID_PARAMS: i64 = -32602;
    /// Internal error.
    pub const INTERNAL_ERROR: i64 = -32603;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tool Types
// ─────────────────────────────────────────────────────────────────────────────

/// Schema used when a tool does not describe its input.
pub fn default_input_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}

/// A tool definition from the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    /// Tool name. Providers occasionally omit it; such entries are unusable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool's input parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
}

impl ToolInfo {
    /// Create a tool descriptor with a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            input_schema: None,
        }
    }

    /// Set the input schema.
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// The tool name, if present and non-empty.
    pub fn usable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The input schema, or the empty object schema when absent.
    pub fn input_schema_or_default(&self) -> Value {
        self.input_schema
            .clone()
            .unwrap_or_else(default_input_schema)
    }
}

/// Parameters for the tools/call request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments to pass to the tool.
    pub arguments: Map<String, Value>,
}

/// Content item in a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        #[serde(default)]
        text: String,
    },
    /// Image content (base64 encoded).
    Image {
        /// Base64-encoded image data.
        #[serde(default)]
        data: String,
        /// MIME type of the image.
        #[serde(default, rename = "mimeType", skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
    /// Embedded resource.
    Resource {
        /// The resource object as sent by the server.
        #[serde(default)]
        resource: Value,
    },
    /// Any content type this client does not know about.
    #[serde(other)]
    Other,
}

/// Result of the tools/call request.
///
/// Keeps the full result object next to the typed content so callers can
/// fall back to the raw document.
#[derive(Debug, Clone, PartialEq)]
pub struct CallToolResult {
    /// Content returned by the tool, in server order.
    pub content: Vec<ToolContent>,
    /// Whether the tool reported a failure of its own.
    pub is_error: bool,
    raw: RpcResult,
}

impl CallToolResult {
    /// Build a typed view over a validated `tools/call` result.
    ///
    /// Content items that are not objects, or whose shape does not match a
    /// known type, are kept as [`ToolContent::Other`].
    pub fn from_result(raw: RpcResult) -> Self {
        let content = raw
            .get("content")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        serde_json::from_value::<ToolContent>(item.clone())
                            .unwrap_or(ToolContent::Other)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let is_error = raw
            .get("isError")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Self {
            content,
            is_error,
            raw,
        }
    }

    /// Non-empty text parts joined by newlines, or `None` if there are none.
    pub fn text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|c| match c {
                ToolContent::Text { text } if !text.is_empty() => Some(text.as_str()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }

    /// The full result object as returned by the server.
    pub fn raw(&self) -> &RpcResult {
        &self.raw
    }

    /// Pretty-printed JSON of the full result object.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| format!("{:?}", self.raw))
    }
}
