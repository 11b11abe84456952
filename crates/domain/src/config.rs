//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_UPSTREAM_BASE_URL, MAX_WINDOW_CAPACITY,
    UPSTREAM_TIMEOUT_MS, WINDOW_CAPACITY,
};
use crate::errors::{NumWinError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Reject values the service cannot run with.
    ///
    /// # Errors
    /// Returns `NumWinError::Config` when the window capacity exceeds
    /// [`MAX_WINDOW_CAPACITY`].
    pub fn validate(&self) -> Result<()> {
        if self.window.capacity > MAX_WINDOW_CAPACITY {
            return Err(NumWinError::Config(format!(
                "window capacity {} exceeds maximum of {MAX_WINDOW_CAPACITY}",
                self.window.capacity
            )));
        }
        Ok(())
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream number source configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub client_id: Option<String>,
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            timeout_ms: UPSTREAM_TIMEOUT_MS,
            access_token: None,
            client_id: None,
            client_secret: None,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Credential form that will be sent upstream, if any is configured.
    ///
    /// A bearer token wins over client credentials.
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(token) = self.access_token.as_deref().filter(|t| !t.is_empty()) {
            return Some(Credentials::Bearer(token.to_string()));
        }

        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) if !id.is_empty() => Some(Credentials::Basic {
                client_id: id.to_string(),
                client_secret: secret.to_string(),
            }),
            _ => None,
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| "<redacted>");
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("access_token", &redact(&self.access_token))
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .finish()
    }
}

/// Credential material presented to upstream sources.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Bearer(String),
    Basic { client_id: String, client_secret: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer(<redacted>)"),
            Self::Basic { client_id, .. } => {
                f.debug_struct("Basic").field("client_id", client_id).finish_non_exhaustive()
            }
        }
    }
}

/// Number window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { capacity: WINDOW_CAPACITY }
    }
}
