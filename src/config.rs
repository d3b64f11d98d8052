//! Process configuration.
//!
//! Built once at startup from the environment and passed explicitly to
//! the transit client and the transport; nothing reads the environment
//! after this point.

use std::env;
use std::time::Duration;

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Default per-request timeout for Vault calls.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Immutable process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Vault base endpoint, e.g. `https://vault.example.com:8200`
    pub vault_host: String,
    /// Static Vault token sent as `X-Vault-Token` on every call
    pub vault_token: String,
    /// Telegram bot credential
    pub telegram_token: String,
    /// Bounded per-request timeout for Vault calls
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnv` if `VAULT_HOST`, `VAULT_TOKEN`,
    /// or `TELEGRAM_TOKEN` is absent or empty, and
    /// `ConfigError::InvalidTimeout` if `COURIER_TIMEOUT_MS` is set but
    /// not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_timeout(None)
    }

    /// Load configuration, letting the caller override the timeout
    /// (the `--timeout-ms` flag takes precedence over the environment).
    pub fn from_env_with_timeout(timeout_ms: Option<u64>) -> Result<Self> {
        let vault_host = require("VAULT_HOST")?;
        let vault_token = require("VAULT_TOKEN")?;
        let telegram_token = require("TELEGRAM_TOKEN")?;

        let timeout_ms = match timeout_ms {
            Some(ms) => ms,
            None => match env::var("COURIER_TIMEOUT_MS") {
                Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                    ConfigError::InvalidTimeout {
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?,
                Err(_) => DEFAULT_TIMEOUT_MS,
            },
        };

        debug!(vault_host = %vault_host, timeout_ms, "config loaded");

        Ok(Self {
            vault_host,
            vault_token,
            telegram_token,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingEnv(name).into())
}
