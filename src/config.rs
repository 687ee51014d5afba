//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! The upstream API token is referenced by env-var name in the config and
//! resolved once at startup.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::fs;
use tracing::warn;

/// Default config path, overridable with `RELAY_CONFIG`.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Competition code on football-data.org ("SA" is Serie A).
    #[serde(default = "default_competition")]
    pub competition: String,
    /// Name of the env var holding the `X-Auth-Token` value.
    pub token_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Abort startup when the token env var is unset.
    #[serde(default)]
    pub require_token: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_base_url() -> String {
    "https://api.football-data.org/v4".to_string()
}

fn default_competition() -> String {
    "SA".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Config path from `RELAY_CONFIG`, else `config.toml`.
    pub fn path_from_env() -> String {
        std::env::var("RELAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Resolve an environment variable name to its value.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }

    /// Resolve the upstream token.
    ///
    /// A missing token is only fatal with `require_token = true`; otherwise
    /// the relay starts and every upstream call fails with 401/403.
    pub fn api_token(&self) -> Result<Option<SecretString>> {
        match Self::resolve_env(&self.upstream.token_env) {
            Ok(token) if !token.is_empty() => Ok(Some(SecretString::new(token))),
            Ok(_) | Err(_) if self.upstream.require_token => {
                anyhow::bail!(
                    "Upstream token required but {} is unset or empty",
                    self.upstream.token_env
                )
            }
            _ => {
                warn!(
                    env = %self.upstream.token_env,
                    "No upstream token configured — upstream calls will be rejected"
                );
                Ok(None)
            }
        }
    }
}
