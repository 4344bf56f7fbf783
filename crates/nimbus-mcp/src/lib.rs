//! Client for a remote tool provider speaking JSON-RPC 2.0 over HTTP.
//!
//! The provider is reached with a single POST per request and may answer
//! either with `application/json` or with a `text/event-stream` body. Both
//! shapes are normalized into one validated result type.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  McpClient                                                  │
//! │  - Owns the request-id counter                              │
//! │  - Implements tools/list, tools/call                        │
//! └─────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  McpTransport                                               │
//! │  - Pooled keep-alive HTTP client, auth headers / query      │
//! │  - Status checks, body capture                              │
//! └─────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  codec                                                      │
//! │  - JSON or SSE body → JSON document                         │
//! │  - JSON-RPC envelope validation → RpcResult                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use nimbus_mcp::{HttpTransportConfig, McpClient};
//!
//! let config = HttpTransportConfig::new("https://mcp.api.xweather.com/mcp")
//!     .with_bearer_token(&token);
//! let client = McpClient::connect("xweather", config)?;
//!
//! for tool in client.list_tools().await? {
//!     println!("Tool: {:?} - {:?}", tool.name, tool.description);
//! }
//!
//! let mut args = serde_json::Map::new();
//! args.insert("location".into(), "seattle,wa".into());
//! let result = client.call_tool("xweather_get_current_weather", args).await?;
//! println!("{}", result.text().unwrap_or_default());
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod protocol;
pub mod transport;

// Re-export main types
pub use client::McpClient;
pub use error::{McpError, Result};
pub use protocol::{
    CallToolParams, CallToolResult, JsonRpcError, JsonRpcRequest, RpcResult, ToolContent,
    ToolInfo, default_input_schema,
};
pub use transport::{HttpTransportConfig, McpTransport};
