//! Server configuration read from the environment

use std::net::SocketAddr;
use thiserror::Error;

use crate::settings::{HttpRemoteStore, Provider, RemoteStoreError, Validator};

pub const BIND_ADDR_VAR: &str = "SETTINGS_BIND_ADDR";
pub const CAN_CHANGE_KEYS_VAR: &str = "SETTINGS_CAN_CHANGE_KEYS";
pub const DISABLED_PROVIDERS_VAR: &str = "SETTINGS_DISABLED_PROVIDERS";
pub const REMOTE_URL_VAR: &str = "SETTINGS_REMOTE_URL";

/// Errors from reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for the user-config server and its clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the server listens on
    pub bind_addr: SocketAddr,
    /// Whether users may change LLM keys
    pub can_change_keys: bool,
    /// Extension providers that are switched off
    pub disabled_providers: Vec<Provider>,
    /// Base URL clients use to reach the user-config server
    pub remote_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            can_change_keys: true,
            disabled_providers: Vec::new(),
            remote_url: "http://127.0.0.1:3030".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: BIND_ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(CAN_CHANGE_KEYS_VAR) {
            config.can_change_keys = parse_bool(CAN_CHANGE_KEYS_VAR, &value)?;
        }

        if let Some(value) = lookup(DISABLED_PROVIDERS_VAR) {
            config.disabled_providers = value
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(Provider::from)
                .collect();
        }

        if let Some(value) = lookup(REMOTE_URL_VAR) {
            let value = value.trim();
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    key: REMOTE_URL_VAR,
                    value: value.to_string(),
                    reason: "expected an http(s) URL".to_string(),
                });
            }
            config.remote_url = value.to_string();
        }

        Ok(config)
    }

    /// HTTP client for the configured user-config server
    pub fn remote_store(&self) -> Result<HttpRemoteStore, RemoteStoreError> {
        HttpRemoteStore::new(&self.remote_url)
    }

    /// Validator honoring the disabled providers
    pub fn validator(&self) -> Validator {
        Validator::without(&self.disabled_providers)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
