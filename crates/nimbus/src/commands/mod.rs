//! CLI command implementations.

pub mod ask;
pub mod chat;
pub mod repl;
pub mod tools;

use std::sync::Arc;

use anyhow::Result;
use console::style;
use nimbus_agent::{Assistant, AssistantConfig};
use nimbus_config::NimbusConfig;
use nimbus_llm::{OpenAiBackend, OpenAiConfig, SharedBackend};

/// Shared context for all commands.
pub struct Context {
    /// Effective configuration (file + env overrides).
    pub config: NimbusConfig,
    /// Whether verbose output is enabled.
    pub verbose: bool,
}

impl Context {
    /// Build the chat-completion backend from config and `OPENAI_API_KEY`.
    pub fn backend(&self) -> Result<SharedBackend> {
        let key = nimbus_config::openai_api_key()?;
        tracing::debug!(source = %key.source, "resolved OpenAI API key");

        let llm = &self.config.llm;
        let mut config = OpenAiConfig::openai(key.value)
            .with_timeout(llm.timeout())
            .with_max_retries(llm.max_retries);
        if let Some(ref base_url) = llm.base_url {
            config = config.with_base_url(base_url.as_str());
        }

        Ok(Arc::new(OpenAiBackend::new(config)?))
    }

    /// Assistant settings from the `[llm]` and `[agent]` sections.
    pub fn assistant_config(&self) -> AssistantConfig {
        let mut config = AssistantConfig::new(self.config.llm.model.as_str())
            .with_max_tool_rounds(self.config.agent.max_tool_rounds);
        if let Some(ref prompt) = self.config.agent.system_prompt {
            config = config.with_system_prompt(prompt.as_str());
        }
        config
    }

    /// Resolve secrets, connect to the tool provider and build an assistant.
    pub async fn connect_assistant(&self) -> Result<Assistant> {
        let backend = self.backend()?;
        let token = nimbus_config::xweather_token()?;
        tracing::debug!(source = %token.source, "resolved Xweather token");

        if self.verbose {
            print_dim(&format!("Connecting to {}...", self.config.mcp.url));
        }

        let assistant = Assistant::connect(
            backend,
            &self.config.mcp.url,
            &token.value,
            self.config.mcp.timeout(),
            self.assistant_config(),
        )
        .await?;

        if self.verbose {
            let auth = assistant
                .auth_mode()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            print_dim(&format!(
                "Connected ({} auth), {} tools, model {}",
                auth,
                assistant.tools().len(),
                assistant.config().model
            ));
        }

        Ok(assistant)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn print_dim(msg: &str) {
    eprintln!("{}", style(msg).dim());
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// `[tool: name done]` / `[tool: name failed]` lines for verbose output.
pub fn print_tool_calls(calls: &[nimbus_agent::ToolCallRecord]) {
    for call in calls {
        let status = if call.success {
            style("done").green()
        } else {
            style("failed").red()
        };
        eprintln!("{}", style(format!("[tool: {} {}]", call.name, status)).dim());
    }
}
