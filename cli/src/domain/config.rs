//! Domain types for the irons configuration file.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_API_URL: &str = "https://elrond.ironcd.dev";
/// Device authorization lives on the console, not the API host.
pub const DEFAULT_CONSOLE_URL: &str = "https://console.iron.sh";

// ── Config schema ────────────────────────────────────────────────────────────

/// Persistent configuration stored in `~/.config/irons/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IronsConfig {
    /// Bearer token written by `irons login`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Pick the API key: explicit flag/env value first, then the stored one.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] if neither is set.
pub fn resolve_api_key(
    explicit: Option<&str>,
    config: &IronsConfig,
) -> Result<String, ConfigError> {
    explicit
        .or(config.api_key.as_deref())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingApiKey)
}

/// Parse repeated `KEY=VALUE` secret flags.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSecret`] for an entry without `=` or with an
/// empty key.
pub fn parse_secrets(entries: &[String]) -> Result<HashMap<String, String>, ConfigError> {
    let mut secrets = HashMap::new();
    for entry in entries {
        match entry.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                secrets.insert(key.to_string(), value.to_string());
            }
            _ => return Err(ConfigError::InvalidSecret(entry.clone())),
        }
    }
    Ok(secrets)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
