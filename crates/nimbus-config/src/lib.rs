//! Configuration system for Nimbus.
//!
//! Provides TOML-based configuration with:
//! - `[mcp]`, `[llm]` and `[agent]` sections, every field defaulted
//! - An optional user config file (`<config_dir>/nimbus/config.toml`)
//! - Environment overrides for endpoint and model selection
//! - Secret resolution from environment variables only

pub mod discovery;
pub mod error;
pub mod secrets;
pub mod types;

pub use discovery::{
    LoadedConfig, default_config_path, load_config, load_config_file, load_config_with_env,
};
pub use error::{ConfigError, Result};
pub use secrets::{
    ResolvedSecret, SecretSource, openai_api_key, resolve_openai_api_key, resolve_xweather_token,
    xweather_token,
};
pub use types::*;
