//! Weather assistant core for Nimbus.
//!
//! Connects a chat-completion backend to a remote tool provider:
//!
//! - [`bootstrap`]: connect to the provider, header auth first, query auth second
//! - [`tools`]: turn the provider catalog into model function definitions and
//!   tool results into text
//! - [`assistant`]: the bounded tool-calling loop behind [`Assistant::ask`]
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use nimbus_agent::{Assistant, AssistantConfig};
//! use nimbus_llm::{OpenAiBackend, OpenAiConfig};
//!
//! let backend = Arc::new(OpenAiBackend::new(OpenAiConfig::openai(api_key))?);
//! let assistant = Assistant::connect(
//!     backend,
//!     "https://mcp.api.xweather.com/mcp",
//!     &token,
//!     Duration::from_secs(30),
//!     AssistantConfig::default(),
//! )
//! .await?;
//!
//! println!("{}", assistant.ask("What's the weather in Seattle?").await?);
//! ```

pub mod assistant;
pub mod bootstrap;
pub mod error;
pub mod tools;

pub use assistant::{
    Assistant, AssistantConfig, AssistantResponse, DEFAULT_MAX_TOOL_ROUNDS, DEFAULT_SYSTEM_PROMPT,
    NO_CONTENT, ToolCallRecord,
};
pub use bootstrap::{API_KEY_PARAM, AuthMode, Connection, connect_with_fallback};
pub use error::{AgentError, ArgumentParseError, BootstrapError, Result};
pub use tools::{ToolProvider, extract_text, parse_arguments, to_tool_definitions};
