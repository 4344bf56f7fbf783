//! Client for a JSON-RPC tool provider.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Map, Value};

use crate::error::{McpError, Result, document_preview};
use crate::protocol::{
    CallToolParams, CallToolResult, JsonRpcRequest, METHOD_TOOLS_CALL, METHOD_TOOLS_LIST,
    RpcResult, ToolInfo,
};
use crate::transport::{HttpTransportConfig, McpTransport};

/// A client connected to a single tool provider.
///
/// Owns one HTTP transport and a private request-id counter. Ids start at 1
/// and strictly increase for the lifetime of the client.
#[derive(Debug)]
pub struct McpClient {
    /// Name used in log output.
    name: String,
    /// Transport for communicating with the server.
    transport: McpTransport,
    /// Last issued request id.
    request_id: AtomicU64,
}

impl McpClient {
    /// Create a client for the configured HTTP endpoint.
    ///
    /// No request is sent until the first operation.
    pub fn connect(name: impl Into<String>, config: HttpTransportConfig) -> Result<Self> {
        let name = name.into();
        let transport = McpTransport::connect_http(config)?;

        tracing::info!(
            server = %name,
            host = transport.endpoint().host_str().unwrap_or_default(),
            "created tool provider client"
        );

        Ok(Self {
            name,
            transport,
            request_id: AtomicU64::new(0),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the transport.
    pub fn transport(&self) -> &McpTransport {
        &self.transport
    }

    /// Id of the most recently issued request (0 before the first request).
    pub fn last_request_id(&self) -> u64 {
        self.request_id.load(Ordering::SeqCst)
    }

    /// Get the next request ID.
    fn next_request_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Send a request and return its validated result.
    pub async fn rpc(&self, method: &str, params: Map<String, Value>) -> Result<RpcResult> {
        let request = JsonRpcRequest::new(self.next_request_id(), method, params);

        let result = self.transport.send_request(&request).await;
        if let Err(ref e) = result {
            tracing::debug!(
                server = %self.name,
                id = request.id,
                method,
                error_kind = e.kind(),
                "JSON-RPC request failed"
            );
        }
        result
    }

    /// List available tools from the server.
    ///
    /// Entries that are not objects are skipped. Entries without a name are
    /// returned as-is; callers decide what to do with them.
    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>> {
        let result = self.rpc(METHOD_TOOLS_LIST, Map::new()).await?;

        let Some(Value::Array(entries)) = result.get("tools") else {
            return Err(McpError::invalid_envelope(format!(
                "invalid tools/list shape:\n{}",
                document_preview(&Value::Object(result.clone()))
            )));
        };

        let mut tools = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match serde_json::from_value::<ToolInfo>(entry.clone()) {
                Ok(tool) => tools.push(tool),
                Err(e) => tracing::warn!(
                    server = %self.name,
                    index,
                    error = %e,
                    "skipping unreadable tool descriptor"
                ),
            }
        }

        tracing::debug!(
            server = %self.name,
            tool_count = tools.len(),
            "listed tools"
        );

        Ok(tools)
    }

    /// Call a tool on the server.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult> {
        let params = CallToolParams {
            name: name.to_string(),
            arguments,
        };
        let params = match serde_json::to_value(&params) {
            Ok(Value::Object(map)) => map,
            _ => return Err(McpError::transport("failed to encode tools/call params")),
        };

        let result = CallToolResult::from_result(self.rpc(METHOD_TOOLS_CALL, params).await?);

        if result.is_error {
            tracing::warn!(
                server = %self.name,
                tool = %name,
                "tool call returned error"
            );
        } else {
            tracing::debug!(
                server = %self.name,
                tool = %name,
                "tool call succeeded"
            );
        }

        Ok(result)
    }
}
