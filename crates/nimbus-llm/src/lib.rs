//! Chat-completion client abstraction for Nimbus.
//!
//! This crate provides a single interface over chat-completion providers with
//! native tool calling. The assistant loop talks only to [`LlmBackend`], so
//! tests can swap in [`MockBackend`].
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  LlmBackend trait                       │
//! │  - complete() -> CompletionResponse     │
//! └─────────────────────────────────────────┘
//!                    │
//!          ┌─────────┴─────────┐
//!          ▼                   ▼
//!    ┌──────────┐        ┌──────────┐
//!    │  OpenAI  │        │   Mock   │
//!    └──────────┘        └──────────┘
//! ```

pub mod backend;
pub mod error;
pub mod types;

// Provider implementations
pub mod openai;

pub use backend::{LlmBackend, MockBackend, MockResponse, SharedBackend, with_retry};
pub use error::{LlmError, RateLimitInfo, Result};
pub use types::{
    CompletionRequest, CompletionResponse, Message, StopReason, ToolCall, ToolChoice,
    ToolDefinition, Usage,
};

// Re-export provider config
pub use openai::{DEFAULT_MODEL, DEFAULT_OPENAI_BASE, OpenAiBackend, OpenAiConfig};
