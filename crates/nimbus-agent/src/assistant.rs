//! The tool-calling conversation loop.
//!
//! One [`Assistant`] holds a backend, a tool provider, and the tool catalog
//! fetched once when it was built. Every call to [`Assistant::turn`] starts a
//! fresh conversation:
//!
//! ```text
//! ┌──────────────┐  no tool calls   ┌──────┐
//! │ AwaitingModel│ ───────────────▶ │ Done │
//! └──────────────┘                  └──────┘
//!        ▲   │ tool calls (and rounds left)
//!        │   ▼
//! ┌──────────────┐
//! │ExecutingTools│  results appended as tool messages
//! └──────────────┘
//! ```
//!
//! Tool failures are reported to the model as tool messages and never end the
//! turn. Backend failures end the turn with an error.

use std::sync::Arc;
use std::time::Duration;

use nimbus_llm::{
    CompletionRequest, CompletionResponse, Message, SharedBackend, ToolCall, ToolChoice,
    ToolDefinition,
};
use nimbus_mcp::ToolInfo;

use crate::bootstrap::{AuthMode, connect_with_fallback};
use crate::error::Result;
use crate::tools::{ToolProvider, extract_text, parse_arguments, to_tool_definitions};

/// Default system instructions.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful weather assistant with access to Xweather tools.";

/// Default number of tool rounds after the first model response.
pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 2;

/// Answer returned when the final assistant message has no text.
pub const NO_CONTENT: &str = "(no content)";

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Assistant configuration.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Model identifier passed to the backend.
    pub model: String,
    /// System instructions prepended to every conversation.
    pub system_prompt: String,
    /// Tool rounds allowed after the first model response.
    pub max_tool_rounds: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: nimbus_llm::DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }
}

impl AssistantConfig {
    /// Create a config for the given model with default prompt and cap.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set the tool round cap.
    pub fn with_max_tool_rounds(mut self, rounds: u32) -> Self {
        self.max_tool_rounds = rounds;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────────────────

/// One tool call made during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallRecord {
    /// Id the model assigned to the call.
    pub id: String,
    /// Tool name.
    pub name: String,
    /// Whether the tool ran and did not report an error.
    pub success: bool,
}

/// Outcome of one turn.
#[derive(Debug, Clone)]
pub struct AssistantResponse {
    /// Final answer text.
    pub text: String,
    /// Number of backend calls made.
    pub model_calls: u32,
    /// Every tool call, in execution order.
    pub tool_calls: Vec<ToolCallRecord>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Assistant
// ─────────────────────────────────────────────────────────────────────────────

/// A weather assistant session.
pub struct Assistant {
    backend: SharedBackend,
    provider: Arc<dyn ToolProvider>,
    catalog: Vec<ToolInfo>,
    tools: Vec<ToolDefinition>,
    config: AssistantConfig,
    auth_mode: Option<AuthMode>,
}

impl Assistant {
    /// Build an assistant, fetching the tool catalog from the provider once.
    pub async fn new(
        backend: SharedBackend,
        provider: Arc<dyn ToolProvider>,
        config: AssistantConfig,
    ) -> Result<Self> {
        let catalog = provider.list_tools().await?;
        Ok(Self::from_catalog(backend, provider, catalog, config))
    }

    /// Build an assistant from an already fetched catalog.
    pub fn from_catalog(
        backend: SharedBackend,
        provider: Arc<dyn ToolProvider>,
        catalog: Vec<ToolInfo>,
        config: AssistantConfig,
    ) -> Self {
        let tools = to_tool_definitions(&catalog);
        tracing::debug!(
            backend = backend.name(),
            descriptors = catalog.len(),
            tools = tools.len(),
            max_tool_rounds = config.max_tool_rounds,
            "assistant ready"
        );
        Self {
            backend,
            provider,
            catalog,
            tools,
            config,
            auth_mode: None,
        }
    }

    /// Connect to the tool provider with auth fallback and build an assistant.
    pub async fn connect(
        backend: SharedBackend,
        url: &str,
        token: &str,
        timeout: Duration,
        config: AssistantConfig,
    ) -> Result<Self> {
        let connection = connect_with_fallback(url, token, timeout).await?;
        let mut assistant = Self::from_catalog(
            backend,
            Arc::new(connection.client),
            connection.tools,
            config,
        );
        assistant.auth_mode = Some(connection.auth_mode);
        Ok(assistant)
    }

    /// The tool catalog as returned by the provider.
    pub fn catalog(&self) -> &[ToolInfo] {
        &self.catalog
    }

    /// Function definitions offered to the model.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// The auth mode chosen during [`Assistant::connect`], if it was used.
    pub fn auth_mode(&self) -> Option<AuthMode> {
        self.auth_mode
    }

    /// The assistant configuration.
    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Answer a question and return just the text.
    pub async fn ask(&self, question: &str) -> Result<String> {
        Ok(self.turn(question).await?.text)
    }

    /// Answer a question, running tool calls as the model requests them.
    pub async fn turn(&self, question: &str) -> Result<AssistantResponse> {
        tracing::info!(question_len = question.len(), "turn started");

        let mut messages = vec![
            Message::system(self.config.system_prompt.as_str()),
            Message::user(question),
        ];
        let mut records = Vec::new();

        let response = self.complete(&messages, 0).await?;
        messages.push(response.into_message());
        let mut model_calls = 1;

        for round in 1..=self.config.max_tool_rounds {
            let calls: Vec<ToolCall> = match messages.last() {
                Some(last) if !last.tool_calls().is_empty() => last.tool_calls().to_vec(),
                _ => break,
            };

            tracing::info!(
                round,
                tool_count = calls.len(),
                tools = %calls.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", "),
                "executing tools"
            );

            for call in &calls {
                let (message, record) = self.execute_tool_call(call).await;
                messages.push(message);
                records.push(record);
            }

            let response = self.complete(&messages, round).await?;
            messages.push(response.into_message());
            model_calls += 1;
        }

        let text = messages
            .last()
            .and_then(Message::text)
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_CONTENT)
            .to_string();

        tracing::info!(
            model_calls,
            tool_calls = records.len(),
            failed_tool_calls = records.iter().filter(|r| !r.success).count(),
            response_len = text.len(),
            "turn completed"
        );

        Ok(AssistantResponse {
            text,
            model_calls,
            tool_calls: records,
        })
    }

    /// Send the conversation to the backend. Only the first call sets the
    /// tool choice explicitly.
    async fn complete(&self, messages: &[Message], round: u32) -> Result<CompletionResponse> {
        let mut request = CompletionRequest::new(self.config.model.as_str(), messages.to_vec())
            .with_tools(self.tools.clone());
        if round == 0 {
            request = request.with_tool_choice(ToolChoice::Auto);
        }

        tracing::debug!(
            round,
            messages = messages.len(),
            tools = self.tools.len(),
            model = %self.config.model,
            "calling model"
        );

        match self.backend.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    round,
                    stop_reason = ?response.stop_reason,
                    tool_calls = response.tool_calls.len(),
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "model responded"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::error!(round, error = %e, "model call failed");
                Err(e.into())
            }
        }
    }

    /// Run one tool call and produce the tool message answering it.
    async fn execute_tool_call(&self, call: &ToolCall) -> (Message, ToolCallRecord) {
        let record = |success| ToolCallRecord {
            id: call.id.clone(),
            name: call.name.clone(),
            success,
        };

        let arguments = match parse_arguments(&call.arguments) {
            Ok(arguments) => arguments,
            Err(e) => {
                tracing::warn!(tool = %call.name, error = %e, "bad tool arguments");
                return (
                    Message::tool(&call.id, format!("Bad arguments: {}", e)),
                    record(false),
                );
            }
        };

        match self.provider.call_tool(&call.name, arguments).await {
            Ok(result) => {
                if result.is_error {
                    tracing::warn!(tool = %call.name, "tool reported an error");
                } else {
                    tracing::info!(tool = %call.name, "tool call succeeded");
                }
                (
                    Message::tool(&call.id, extract_text(&result)),
                    record(!result.is_error),
                )
            }
            Err(e) => {
                tracing::warn!(
                    tool = %call.name,
                    error_kind = e.kind(),
                    error = %e,
                    "tool call failed"
                );
                (
                    Message::tool(&call.id, format!("Error calling {}: {}", call.name, e)),
                    record(false),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgentError;
    use async_trait::async_trait;
    use nimbus_llm::{LlmError, MockBackend, MockResponse};
    use nimbus_mcp::{CallToolResult, McpError};
    use serde_json::{Map, Value, json};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Tool provider with canned outcomes per tool name.
    #[derive(Default)]
    struct ScriptedProvider {
        catalog: Vec<ToolInfo>,
        outcomes: HashMap<String, std::result::Result<Value, String>>,
        calls: Mutex<Vec<(String, Map<String, Value>)>>,
        list_calls: Mutex<u32>,
    }

    impl ScriptedProvider {
        fn new() -> Self {
            Self {
                catalog: vec![
                    ToolInfo::new("xweather_get_current_weather", "Current conditions")
                        .with_input_schema(json!({
                            "type": "object",
                            "properties": {"location": {"type": "string"}},
                            "required": ["location"]
                        })),
                    ToolInfo::new("xweather_get_forecast", "Forecast"),
                    ToolInfo {
                        name: None,
                        description: Some("nameless".into()),
                        input_schema: None,
                    },
                ],
                ..Default::default()
            }
        }

        fn returns(mut self, tool: &str, result: Value) -> Self {
            self.outcomes.insert(tool.to_string(), Ok(result));
            self
        }

        fn fails(mut self, tool: &str, detail: &str) -> Self {
            self.outcomes.insert(tool.to_string(), Err(detail.to_string()));
            self
        }

        fn calls(&self) -> Vec<(String, Map<String, Value>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToolProvider for ScriptedProvider {
        async fn list_tools(&self) -> std::result::Result<Vec<ToolInfo>, McpError> {
            *self.list_calls.lock().unwrap() += 1;
            Ok(self.catalog.clone())
        }

        async fn call_tool(
            &self,
            name: &str,
            arguments: Map<String, Value>,
        ) -> std::result::Result<CallToolResult, McpError> {
            self.calls
                .lock()
                .unwrap()
                .push((name.to_string(), arguments));
            match self.outcomes.get(name) {
                Some(Ok(Value::Object(map))) => Ok(CallToolResult::from_result(map.clone())),
                Some(Ok(other)) => panic!("scripted result must be an object: {other}"),
                Some(Err(detail)) => Err(McpError::network(detail.clone())),
                None => Err(McpError::remote(-32602, format!("Unknown tool: {name}"), None)),
            }
        }
    }

    fn text_result(text: &str) -> Value {
        json!({"content": [{"type": "text", "text": text}]})
    }

    fn call(id: &str, name: &str, arguments: &str) -> ToolCall {
        ToolCall::new(id, name, arguments)
    }

    async fn assistant(
        backend: Arc<MockBackend>,
        provider: Arc<ScriptedProvider>,
        config: AssistantConfig,
    ) -> Assistant {
        Assistant::new(backend, provider, config).await.unwrap()
    }

    fn tool_messages(request: &CompletionRequest) -> Vec<(String, String)> {
        request
            .messages
            .iter()
            .filter_map(|m| match m {
                Message::Tool {
                    tool_call_id,
                    content,
                } => Some((tool_call_id.clone(), content.clone())),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_direct_answer_makes_no_tool_calls() {
        let backend = Arc::new(MockBackend::with_text("Hello! Ask me about the weather."));
        let provider = Arc::new(ScriptedProvider::new());
        let assistant = assistant(backend.clone(), provider.clone(), AssistantConfig::default()).await;

        let response = assistant.turn("hi").await.unwrap();

        assert_eq!(response.text, "Hello! Ask me about the weather.");
        assert_eq!(response.model_calls, 1);
        assert!(response.tool_calls.is_empty());
        assert!(provider.calls().is_empty());

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gpt-4o-mini");
        assert_eq!(requests[0].tool_choice, Some(ToolChoice::Auto));
        assert_eq!(
            requests[0].messages,
            vec![Message::system(DEFAULT_SYSTEM_PROMPT), Message::user("hi")]
        );
        // The nameless descriptor is not offered to the model.
        let names: Vec<&str> = requests[0].tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["xweather_get_current_weather", "xweather_get_forecast"]);
    }

    #[tokio::test]
    async fn test_single_tool_round() {
        let backend = Arc::new(MockBackend::new(vec![
            CompletionResponse::tool_calls_only(vec![call(
                "call_1",
                "xweather_get_current_weather",
                r#"{"location":"seattle,wa"}"#,
            )]),
            CompletionResponse::text_only("It is 12C and raining in Seattle."),
        ]));
        let provider = Arc::new(
            ScriptedProvider::new()
                .returns("xweather_get_current_weather", text_result("Seattle: 12C, rain")),
        );
        let assistant = assistant(backend.clone(), provider.clone(), AssistantConfig::default()).await;

        let response = assistant.turn("Weather in Seattle?").await.unwrap();

        assert_eq!(response.text, "It is 12C and raining in Seattle.");
        assert_eq!(response.model_calls, 2);
        assert_eq!(
            response.tool_calls,
            vec![ToolCallRecord {
                id: "call_1".into(),
                name: "xweather_get_current_weather".into(),
                success: true,
            }]
        );

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1["location"], "seattle,wa");

        let requests = backend.requests();
        let second = &requests[1];
        assert_eq!(second.tool_choice, None);
        assert_eq!(second.tools.len(), 2);
        assert_eq!(second.messages.len(), 4);
        assert_eq!(second.messages[2].tool_calls()[0].id, "call_1");
        assert_eq!(
            tool_messages(second),
            vec![("call_1".to_string(), "Seattle: 12C, rain".to_string())]
        );
    }

    #[tokio::test]
    async fn test_round_cap_limits_model_calls() {
        let wants_tool = || {
            CompletionResponse::new(
                "m",
                "mock-model",
                Some("still checking".into()),
                vec![call("c", "xweather_get_forecast", "{}")],
            )
        };
        let backend = Arc::new(MockBackend::new(vec![
            wants_tool(),
            wants_tool(),
            wants_tool(),
            CompletionResponse::text_only("never reached"),
        ]));
        let provider =
            Arc::new(ScriptedProvider::new().returns("xweather_get_forecast", text_result("sunny")));
        let assistant = assistant(backend.clone(), provider.clone(), AssistantConfig::default()).await;

        let response = assistant.turn("forecast?").await.unwrap();

        assert_eq!(backend.request_count(), 3);
        assert_eq!(response.model_calls, 3);
        assert_eq!(provider.calls().len(), 2);
        assert_eq!(response.text, "still checking");
    }

    #[tokio::test]
    async fn test_custom_round_cap() {
        let backend = Arc::new(MockBackend::new(vec![CompletionResponse::tool_calls_only(
            vec![call("c", "xweather_get_forecast", "{}")],
        )]));
        let provider = Arc::new(ScriptedProvider::new());
        let config = AssistantConfig::default().with_max_tool_rounds(0);
        let assistant = assistant(backend.clone(), provider.clone(), config).await;

        let response = assistant.turn("forecast?").await.unwrap();

        assert_eq!(backend.request_count(), 1);
        assert!(provider.calls().is_empty());
        assert_eq!(response.text, NO_CONTENT);
    }

    #[tokio::test]
    async fn test_bad_arguments_never_reach_provider() {
        let backend = Arc::new(MockBackend::new(vec![
            CompletionResponse::tool_calls_only(vec![
                call("bad", "xweather_get_current_weather", "{location: oops"),
                call("array", "xweather_get_current_weather", "[]"),
                call("good", "xweather_get_forecast", r#"{"location":"paris"}"#),
            ]),
            CompletionResponse::text_only("Paris will be sunny."),
        ]));
        let provider =
            Arc::new(ScriptedProvider::new().returns("xweather_get_forecast", text_result("sunny")));
        let assistant = assistant(backend.clone(), provider.clone(), AssistantConfig::default()).await;

        let response = assistant.turn("Forecast for Paris?").await.unwrap();

        assert_eq!(response.text, "Paris will be sunny.");
        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "xweather_get_forecast");

        let tool_msgs = tool_messages(&backend.requests()[1]);
        assert_eq!(tool_msgs.len(), 3);
        assert_eq!(tool_msgs[0].0, "bad");
        assert!(tool_msgs[0].1.starts_with("Bad arguments: "));
        assert_eq!(
            tool_msgs[1],
            (
                "array".to_string(),
                "Bad arguments: expected a JSON object, got array".to_string()
            )
        );
        assert_eq!(tool_msgs[2], ("good".to_string(), "sunny".to_string()));

        let successes: Vec<bool> = response.tool_calls.iter().map(|r| r.success).collect();
        assert_eq!(successes, vec![false, false, true]);
    }

    #[tokio::test]
    async fn test_tool_failure_is_reported_inline() {
        let backend = Arc::new(MockBackend::new(vec![
            CompletionResponse::tool_calls_only(vec![
                call("c1", "xweather_get_current_weather", r#"{"location":"oslo"}"#),
                call("c2", "xweather_get_forecast", r#"{"location":"oslo"}"#),
            ]),
            CompletionResponse::text_only("Sorry, current conditions are unavailable."),
        ]));
        let provider = Arc::new(
            ScriptedProvider::new()
                .fails("xweather_get_current_weather", "connection reset")
                .returns("xweather_get_forecast", text_result("snow")),
        );
        let assistant = assistant(backend.clone(), provider.clone(), AssistantConfig::default()).await;

        let response = assistant.turn("Oslo?").await.unwrap();

        assert_eq!(response.text, "Sorry, current conditions are unavailable.");
        assert_eq!(provider.calls().len(), 2);

        let tool_msgs = tool_messages(&backend.requests()[1]);
        assert_eq!(
            tool_msgs[0].1,
            "Error calling xweather_get_current_weather: network error contacting tool provider: connection reset"
        );
        assert_eq!(tool_msgs[1].1, "snow");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_reported_inline() {
        let backend = Arc::new(MockBackend::new(vec![
            CompletionResponse::tool_calls_only(vec![call("c1", "made_up_tool", "{}")]),
            CompletionResponse::text_only("I could not find that tool."),
        ]));
        let provider = Arc::new(ScriptedProvider::new());
        let assistant = assistant(backend.clone(), provider, AssistantConfig::default()).await;

        let response = assistant.turn("?").await.unwrap();
        assert_eq!(response.text, "I could not find that tool.");

        let tool_msgs = tool_messages(&backend.requests()[1]);
        assert!(tool_msgs[0].1.starts_with("Error calling made_up_tool: "));
        assert!(tool_msgs[0].1.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_tool_without_text_sends_pretty_json() {
        let backend = Arc::new(MockBackend::new(vec![
            CompletionResponse::tool_calls_only(vec![call(
                "c1",
                "xweather_get_current_weather",
                r#"{"location":"rome"}"#,
            )]),
            CompletionResponse::text_only("done"),
        ]));
        let provider = Arc::new(ScriptedProvider::new().returns(
            "xweather_get_current_weather",
            json!({"content": [], "structuredContent": {"tempC": 25}}),
        ));
        let assistant = assistant(backend.clone(), provider, AssistantConfig::default()).await;

        assistant.turn("Rome?").await.unwrap();

        let tool_msgs = tool_messages(&backend.requests()[1]);
        let sent: Value = serde_json::from_str(&tool_msgs[0].1).unwrap();
        assert_eq!(sent["structuredContent"]["tempC"], 25);
    }

    #[tokio::test]
    async fn test_tool_reported_error_is_not_a_success() {
        let backend = Arc::new(MockBackend::new(vec![
            CompletionResponse::tool_calls_only(vec![call(
                "c1",
                "xweather_get_current_weather",
                r#"{"location":"nowhere"}"#,
            )]),
            CompletionResponse::text_only("That location is unknown."),
        ]));
        let provider = Arc::new(ScriptedProvider::new().returns(
            "xweather_get_current_weather",
            json!({"isError": true, "content": [{"type": "text", "text": "invalid location"}]}),
        ));
        let assistant = assistant(backend.clone(), provider, AssistantConfig::default()).await;

        let response = assistant.turn("Weather in nowhere?").await.unwrap();

        assert!(!response.tool_calls[0].success);
        assert_eq!(tool_messages(&backend.requests()[1])[0].1, "invalid location");
    }

    #[tokio::test]
    async fn test_empty_final_content() {
        let backend = Arc::new(MockBackend::new(vec![CompletionResponse::new(
            "m",
            "mock-model",
            Some(String::new()),
            vec![],
        )]));
        let assistant = assistant(
            backend,
            Arc::new(ScriptedProvider::new()),
            AssistantConfig::default(),
        )
        .await;

        assert_eq!(assistant.ask("?").await.unwrap(), NO_CONTENT);
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let backend = Arc::new(MockBackend::scripted(vec![
            MockResponse::Response(CompletionResponse::tool_calls_only(vec![call(
                "c1",
                "xweather_get_forecast",
                "{}",
            )])),
            MockResponse::Error(LlmError::Auth("invalid api key".into())),
        ]));
        let provider =
            Arc::new(ScriptedProvider::new().returns("xweather_get_forecast", text_result("ok")));
        let assistant = assistant(backend, provider.clone(), AssistantConfig::default()).await;

        let err = assistant.ask("forecast?").await.unwrap_err();
        assert!(matches!(err, AgentError::Llm(LlmError::Auth(_))));
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_turns_are_independent_and_catalog_is_cached() {
        let backend = Arc::new(MockBackend::new(vec![
            CompletionResponse::text_only("first"),
            CompletionResponse::text_only("second"),
        ]));
        let provider = Arc::new(ScriptedProvider::new());
        let config = AssistantConfig::new("gpt-4o").with_system_prompt("Be brief.");
        let assistant = assistant(backend.clone(), provider.clone(), config).await;

        assert_eq!(assistant.ask("one").await.unwrap(), "first");
        assert_eq!(assistant.ask("two").await.unwrap(), "second");

        let requests = backend.requests();
        assert_eq!(
            requests[1].messages,
            vec![Message::system("Be brief."), Message::user("two")]
        );
        assert_eq!(requests[1].model, "gpt-4o");
        assert_eq!(*provider.list_calls.lock().unwrap(), 1);
        assert_eq!(assistant.catalog().len(), 3);
        assert_eq!(assistant.tools().len(), 2);
        assert_eq!(assistant.auth_mode(), None);
    }
}
