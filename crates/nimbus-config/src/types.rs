//! Configuration types.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration. Secrets never live here; see [`crate::secrets`].

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Default tool-provider endpoint.
pub const DEFAULT_MCP_URL: &str = "https://mcp.api.xweather.com/mcp";

/// Default tool-provider request timeout in seconds.
pub const DEFAULT_MCP_TIMEOUT_SECS: u64 = 30;

/// Default chat model.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Default chat request timeout in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// Default retries for transient chat failures.
pub const DEFAULT_LLM_MAX_RETRIES: u32 = 2;

/// Default tool rounds after the first model response.
pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 2;

/// Env var overriding `mcp.url`.
pub const ENV_MCP_URL: &str = "NIMBUS_MCP_URL";
/// Env var overriding `llm.model`.
pub const ENV_LLM_MODEL: &str = "OPENAI_MODEL";
/// Env var overriding `llm.base_url`.
pub const ENV_LLM_BASE_URL: &str = "OPENAI_BASE_URL";

/// Root configuration.
///
/// ```toml
/// [mcp]
/// url = "https://mcp.api.xweather.com/mcp"
/// timeout_secs = 30
///
/// [llm]
/// model = "gpt-4o-mini"
/// max_retries = 2
///
/// [agent]
/// max_tool_rounds = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NimbusConfig {
    /// Tool provider connection.
    pub mcp: McpConfig,
    /// Chat-completion backend.
    pub llm: LlmConfig,
    /// Assistant loop behavior.
    pub agent: AgentConfig,
}

/// `[mcp]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct McpConfig {
    /// Endpoint URL.
    pub url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MCP_URL.to_string(),
            timeout_secs: DEFAULT_MCP_TIMEOUT_SECS,
        }
    }
}

impl McpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[llm]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier.
    pub model: String,
    /// Base URL of an OpenAI-compatible API; the provider default when unset.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries for network errors and rate limits.
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_LLM_MODEL.to_string(),
            base_url: None,
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            max_retries: DEFAULT_LLM_MAX_RETRIES,
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[agent]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Tool rounds allowed after the first model response.
    pub max_tool_rounds: u32,
    /// Replacement system prompt.
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
            system_prompt: None,
        }
    }
}

impl NimbusConfig {
    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Apply environment overrides using the given lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_MCP_URL) {
            tracing::debug!(var = ENV_MCP_URL, "overriding mcp.url from environment");
            self.mcp.url = url;
        }
        if let Some(model) = get(ENV_LLM_MODEL) {
            tracing::debug!(var = ENV_LLM_MODEL, "overriding llm.model from environment");
            self.llm.model = model;
        }
        if let Some(base_url) = get(ENV_LLM_BASE_URL) {
            tracing::debug!(var = ENV_LLM_BASE_URL, "overriding llm.base_url from environment");
            self.llm.base_url = Some(base_url);
        }
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        check_url("mcp.url", &self.mcp.url)?;
        if let Some(ref base_url) = self.llm.base_url {
            check_url("llm.base_url", base_url)?;
        }
        if self.mcp.timeout_secs == 0 {
            return Err(ConfigError::invalid("mcp.timeout_secs", "must be greater than 0"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::invalid("llm.timeout_secs", "must be greater than 0"));
        }
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::invalid("llm.model", "must not be empty"));
        }
        if self.agent.max_tool_rounds == 0 {
            return Err(ConfigError::invalid(
                "agent.max_tool_rounds",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

fn check_url(field: &str, value: &str) -> Result<()> {
    let url = url::Url::parse(value).map_err(|e| ConfigError::invalid(field, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::invalid(
            field,
            format!("unsupported scheme '{other}'"),
        )),
    }
}
