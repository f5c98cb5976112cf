//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or wherever `MARQUEE_CONFIG` points) and includes:
//! - The TMDB API bearer token
//! - API endpoint, language and timeout settings
//! - Request cache freshness
//! - Log level

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretBox;
use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, Result};
use crate::paths;

/// Environment variable that takes precedence over `auth.tmdb_token`.
pub const TOKEN_ENV_VAR: &str = "TMDB_TOKEN";

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Authentication tokens
    #[serde(default)]
    pub auth: AuthConfig,

    /// Catalog API settings
    #[serde(default, skip_serializing_if = "ApiConfig::is_default")]
    pub api: ApiConfig,

    /// Request cache settings
    #[serde(default, skip_serializing_if = "CacheConfig::is_default")]
    pub cache: CacheConfig,

    /// Logging settings
    #[serde(default, skip_serializing_if = "LogConfig::is_default")]
    pub log: LogConfig,
}

/// Authentication configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_token: Option<String>,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("tmdb_token", &self.tmdb_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Catalog API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the search API (default: https://api.themoviedb.org/3)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional response language, e.g. `en-US`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Total request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Request cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Seconds before a cached page is refetched on revisit (default: 300, 0 = always)
    #[serde(default = "default_stale_secs")]
    pub stale_secs: u64,
}

fn default_stale_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_secs: default_stale_secs(),
        }
    }
}

impl CacheConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: warn)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl LogConfig {
    pub fn is_default(&self) -> bool {
        self.level.is_none()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the TMDB token from the environment or the config file
    pub fn tmdb_token(&self) -> Option<String> {
        if let Ok(token) = env::var(TOKEN_ENV_VAR)
            && !token.is_empty()
        {
            return Some(token);
        }

        self.auth
            .tmdb_token
            .as_ref()
            .filter(|t| !t.is_empty())
            .cloned()
    }

    /// Get the TMDB token, failing when none is configured.
    ///
    /// Requests are never sent unauthenticated.
    pub fn require_tmdb_token(&self) -> Result<SecretBox<String>> {
        self.tmdb_token()
            .map(|token| SecretBox::new(Box::new(token)))
            .ok_or_else(|| {
                MarqueeError::Auth(format!(
                    "TMDB token not configured. Set {TOKEN_ENV_VAR} environment variable or run: marquee config set tmdb.token <token>"
                ))
            })
    }

    pub fn set_tmdb_token(&mut self, token: String) {
        self.auth.tmdb_token = Some(token);
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }
}
