//! Bridge between the tool provider and the model's function-calling surface.
//!
//! [`ToolProvider`] is the seam the assistant loop calls through; the
//! protocol client implements it, and tests substitute a scripted provider.

use async_trait::async_trait;
use serde_json::{Map, Value};

use nimbus_llm::ToolDefinition;
use nimbus_mcp::{CallToolResult, McpClient, McpError, ToolInfo};

use crate::error::ArgumentParseError;

/// Something that can list and invoke remote tools.
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Fetch the tool catalog.
    async fn list_tools(&self) -> Result<Vec<ToolInfo>, McpError>;

    /// Invoke one tool with an arguments object.
    async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult, McpError>;
}

#[async_trait]
impl ToolProvider for McpClient {
    async fn list_tools(&self) -> Result<Vec<ToolInfo>, McpError> {
        McpClient::list_tools(self).await
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult, McpError> {
        McpClient::call_tool(self, name, arguments).await
    }
}

/// Convert tool descriptors into model function definitions.
///
/// Descriptors without a usable name are skipped; the rest of the catalog is
/// still offered.
pub fn to_tool_definitions(descriptors: &[ToolInfo]) -> Vec<ToolDefinition> {
    descriptors
        .iter()
        .filter_map(|tool| {
            let Some(name) = tool.usable_name() else {
                tracing::debug!(?tool.description, "skipping tool descriptor without a name");
                return None;
            };
            Some(ToolDefinition::new(
                name,
                tool.description.clone().unwrap_or_default(),
                tool.input_schema_or_default(),
            ))
        })
        .collect()
}

/// Render a tool result as the text sent back to the model.
///
/// Non-empty text parts are joined by newlines. Results without any text
/// fall back to the pretty-printed result object.
pub fn extract_text(result: &CallToolResult) -> String {
    result.text().unwrap_or_else(|| result.to_pretty_json())
}

/// Parse the raw argument string of a tool call into an arguments object.
pub fn parse_arguments(raw: &str) -> Result<Map<String, Value>, ArgumentParseError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ArgumentParseError::NotAnObject("null")),
        Value::Bool(_) => Err(ArgumentParseError::NotAnObject("boolean")),
        Value::Number(_) => Err(ArgumentParseError::NotAnObject("number")),
        Value::String(_) => Err(ArgumentParseError::NotAnObject("string")),
        Value::Array(_) => Err(ArgumentParseError::NotAnObject("array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(value: Value) -> CallToolResult {
        match value {
            Value::Object(map) => CallToolResult::from_result(map),
            other => panic!("Expected object, got {other}"),
        }
    }

    #[test]
    fn test_to_tool_definitions() {
        let descriptors = vec![
            ToolInfo::new("xweather_get_current_weather", "Current conditions").with_input_schema(
                json!({"type": "object", "properties": {"location": {"type": "string"}}}),
            ),
            ToolInfo {
                name: Some("xweather_get_forecast".into()),
                description: None,
                input_schema: None,
            },
        ];

        let defs = to_tool_definitions(&descriptors);
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "xweather_get_current_weather");
        assert_eq!(defs[0].parameters["properties"]["location"]["type"], "string");
        assert_eq!(defs[1].description, "");
        assert_eq!(
            defs[1].parameters,
            json!({"type": "object", "properties": {}, "required": []})
        );
    }

    #[test]
    fn test_nameless_descriptors_are_skipped() {
        let descriptors = vec![
            ToolInfo {
                name: None,
                description: Some("orphan".into()),
                input_schema: None,
            },
            ToolInfo::new("", "empty name"),
            ToolInfo::new("ok", "kept"),
        ];

        let defs = to_tool_definitions(&descriptors);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "ok");
    }

    #[test]
    fn test_extract_text_joins_text_parts() {
        let r = result(json!({
            "content": [
                {"type": "text", "text": "A"},
                {"type": "image", "data": "aGk=", "mimeType": "image/png"},
                {"type": "text", "text": ""},
                {"type": "text", "text": "B"}
            ]
        }));
        assert_eq!(extract_text(&r), "A\nB");
    }

    #[test]
    fn test_extract_text_falls_back_to_pretty_json() {
        let r = result(json!({
            "content": [{"type": "image", "data": "aGk="}],
            "structuredContent": {"temp": 21}
        }));
        let text = extract_text(&r);
        assert_eq!(
            serde_json::from_str::<Value>(&text).unwrap(),
            json!({"content": [{"type": "image", "data": "aGk="}], "structuredContent": {"temp": 21}})
        );
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_parse_arguments() {
        let args = parse_arguments(r#"{"location": "boston,ma", "days": 3}"#).unwrap();
        assert_eq!(args["location"], "boston,ma");
        assert_eq!(args["days"], 3);

        assert!(parse_arguments("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_arguments_rejects_bad_input() {
        assert!(matches!(
            parse_arguments("{location: boston"),
            Err(ArgumentParseError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_arguments(""),
            Err(ArgumentParseError::InvalidJson(_))
        ));
        match parse_arguments("[1, 2]") {
            Err(e @ ArgumentParseError::NotAnObject(_)) => {
                assert_eq!(e.to_string(), "expected a JSON object, got array")
            }
            other => panic!("Expected NotAnObject, got {other:?}"),
        }
    }
}
