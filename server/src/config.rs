//! Server Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::permissions::RolePermissionMap;

/// Idle session expiry when `SESSION_TTL_SECS` is unset (24 hours).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Simulated latency for mock logins in milliseconds (default: 300)
    pub mock_login_delay_ms: u64,

    /// Idle session expiry in seconds (default: 86400)
    pub session_ttl_secs: u64,

    /// JSON grant table replacing the built-in role map (optional)
    pub role_map_path: Option<PathBuf>,

    /// Allowed CORS origins (comma-separated, any origin if unset)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            mock_login_delay_ms: match env::var("MOCK_LOGIN_DELAY_MS") {
                Ok(v) => v
                    .parse()
                    .context("MOCK_LOGIN_DELAY_MS must be a number of milliseconds")?,
                Err(_) => 300,
            },
            session_ttl_secs: parse_session_ttl(env::var("SESSION_TTL_SECS").ok())?,
            role_map_path: env::var("ROLE_MAP_PATH").ok().map(PathBuf::from),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            }),
        })
    }

    /// Simulated login latency.
    #[must_use]
    pub const fn mock_login_delay(&self) -> Duration {
        Duration::from_millis(self.mock_login_delay_ms)
    }

    /// Idle session expiry.
    #[must_use]
    pub const fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Load the role map: the file at `role_map_path` if set, otherwise the
    /// built-in table.
    pub fn load_role_map(&self) -> Result<RolePermissionMap> {
        let Some(path) = &self.role_map_path else {
            return Ok(RolePermissionMap::builtin());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read role map {}", path.display()))?;
        RolePermissionMap::from_json(&json)
            .with_context(|| format!("Invalid role map {}", path.display()))
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            mock_login_delay_ms: 0,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            role_map_path: None,
            cors_allowed_origins: None,
        }
    }
}

fn parse_session_ttl(value: Option<String>) -> Result<u64> {
    value.map_or(Ok(DEFAULT_SESSION_TTL_SECS), |v| {
        v.parse()
            .context("SESSION_TTL_SECS must be a number of seconds")
    })
}
