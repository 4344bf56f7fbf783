//! Secret resolution from the environment.
//!
//! Secrets are never read from the config file. The Xweather token is either
//! given whole (`XWEATHER_TOKEN`) or built from a client id and secret joined
//! with `_`.

use std::fmt;

use crate::error::{ConfigError, Result};

/// Full Xweather token.
pub const ENV_XWEATHER_TOKEN: &str = "XWEATHER_TOKEN";
/// Xweather client id.
pub const ENV_XWEATHER_CLIENT_ID: &str = "XWEATHER_CLIENT_ID";
/// Xweather client secret.
pub const ENV_XWEATHER_CLIENT_SECRET: &str = "XWEATHER_CLIENT_SECRET";
/// OpenAI API key.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// A resolved secret with provenance.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    /// The secret value.
    pub value: String,
    /// Where the secret was found.
    pub source: SecretSource,
}

impl fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Where a secret was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// A single environment variable.
    EnvVar(String),
    /// Two environment variables joined with `_`.
    EnvPair(String, String),
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretSource::EnvVar(var) => write!(f, "env var {}", var),
            SecretSource::EnvPair(a, b) => write!(f, "env vars {} + {}", a, b),
        }
    }
}

/// Resolve the Xweather token using the process environment.
pub fn xweather_token() -> Result<ResolvedSecret> {
    resolve_xweather_token(process_env)
}

/// Resolve the OpenAI API key using the process environment.
pub fn openai_api_key() -> Result<ResolvedSecret> {
    resolve_openai_api_key(process_env)
}

/// Resolve the Xweather token with the given env lookup.
///
/// `XWEATHER_TOKEN` wins; otherwise both `XWEATHER_CLIENT_ID` and
/// `XWEATHER_CLIENT_SECRET` must be set.
pub fn resolve_xweather_token<F>(env: F) -> Result<ResolvedSecret>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = non_empty(&env, ENV_XWEATHER_TOKEN) {
        return Ok(ResolvedSecret {
            value,
            source: SecretSource::EnvVar(ENV_XWEATHER_TOKEN.to_string()),
        });
    }

    match (
        non_empty(&env, ENV_XWEATHER_CLIENT_ID),
        non_empty(&env, ENV_XWEATHER_CLIENT_SECRET),
    ) {
        (Some(id), Some(secret)) => Ok(ResolvedSecret {
            value: format!("{id}_{secret}"),
            source: SecretSource::EnvPair(
                ENV_XWEATHER_CLIENT_ID.to_string(),
                ENV_XWEATHER_CLIENT_SECRET.to_string(),
            ),
        }),
        _ => Err(ConfigError::MissingSecret {
            name: "Xweather credentials".to_string(),
            vars: format!(
                "{ENV_XWEATHER_TOKEN}, or both {ENV_XWEATHER_CLIENT_ID} and {ENV_XWEATHER_CLIENT_SECRET}"
            ),
        }),
    }
}

/// Resolve the OpenAI API key with the given env lookup.
pub fn resolve_openai_api_key<F>(env: F) -> Result<ResolvedSecret>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(&env, ENV_OPENAI_API_KEY)
        .map(|value| ResolvedSecret {
            value,
            source: SecretSource::EnvVar(ENV_OPENAI_API_KEY.to_string()),
        })
        .ok_or_else(|| ConfigError::MissingSecret {
            name: "OpenAI API key".to_string(),
            vars: ENV_OPENAI_API_KEY.to_string(),
        })
}

/// Lookup against the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty<F>(env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
