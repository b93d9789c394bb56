//! HTTP listener settings: bind address, timeouts, logging filter and CORS.
//!
//! Every field has a default, so an empty `server` table still yields a
//! usable development listener on port 8000.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Longest request timeout accepted, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_FILTER: &str = "info,planners_assistant=debug,tower_http=info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Where and how the API server listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind; must be an IP literal.
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive applied when `RUST_LOG` is unset.
    pub log_level: String,
    /// Per-request deadline enforced by the timeout layer.
    pub request_timeout_secs: u64,
    /// Comma-separated allowed origins. `*` allows any origin.
    pub cors_origins: Option<String>,
}

/// Deployment stage. Production tightens validation.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: Environment::default(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(addr))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Trimmed origins; blank entries from stray commas are dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins_list().iter().any(|o| o == "*")
    }

    /// Rejects settings the server cannot start with, plus wildcard CORS in
    /// production.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("server.log_level"));
        }
        self.socket_addr()?;
        if self.is_production() && self.allows_any_origin() {
            return Err(ValidationError::WildcardCorsInProduction);
        }
        Ok(())
    }
}
