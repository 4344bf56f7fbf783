//! Config file discovery.
//!
//! Resolution order (later overrides earlier):
//! 1. Built-in defaults
//! 2. The config file: an explicit `--config` path, or
//!    `<config_dir>/nimbus/config.toml` when it exists
//! 3. Environment overrides (`NIMBUS_MCP_URL`, `OPENAI_MODEL`, `OPENAI_BASE_URL`)

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::secrets::process_env;
use crate::types::NimbusConfig;

/// Default config filename within the config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Application name for directory resolution.
const APP_NAME: &str = "nimbus";

/// Environment variable to override the config directory.
const CONFIG_DIR_ENV: &str = "NIMBUS_CONFIG_DIR";

/// Result of config loading.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The effective configuration.
    pub config: NimbusConfig,
    /// File the configuration was read from, if any.
    pub source: Option<PathBuf>,
}

/// Load configuration using the process environment.
///
/// An explicit path must exist. The default path is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    load_config_with_env(explicit, process_env)
}

/// Load configuration with the given env lookup.
pub fn load_config_with_env<F>(explicit: Option<&Path>, env: F) -> Result<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, source) = match explicit {
        Some(path) => (load_config_file(path)?, Some(path.to_path_buf())),
        None => match config_path_with_env(&env) {
            Some(path) if path.is_file() => (load_config_file(&path)?, Some(path)),
            _ => (NimbusConfig::default(), None),
        },
    };

    config.apply_env_overrides(&env);
    config.validate()?;

    match source {
        Some(ref path) => tracing::debug!(path = %path.display(), "loaded config file"),
        None => tracing::debug!("no config file found, using defaults"),
    }

    Ok(LoadedConfig { config, source })
}

/// Load config from a specific file path (no discovery, no overrides).
pub fn load_config_file(path: &Path) -> Result<NimbusConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    NimbusConfig::from_toml(&contents)
}

/// Default config file path.
///
/// Checks `NIMBUS_CONFIG_DIR` first, then the platform config directory
/// (`~/.config/nimbus/config.toml` on Linux).
pub fn default_config_path() -> Option<PathBuf> {
    config_path_with_env(&process_env)
}

fn config_path_with_env<F>(env: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let dir = match env(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join(APP_NAME),
    };
    Some(dir.join(USER_CONFIG_FILE))
}
