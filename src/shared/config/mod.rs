//! Application configuration module
//!
//! `AppConfig` is assembled from three layers, highest precedence first:
//! environment variables, an optional TOML file, and built-in defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default API base endpoint
pub const DEFAULT_SERVER_URL: &str = "http://localhost:9000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the API base endpoint
pub const ENV_SERVER_URL: &str = "CLIENT_API_URL";
/// Environment variable overriding the session file location
pub const ENV_SESSION_PATH: &str = "CLIENT_SESSION_PATH";
/// Environment variable overriding the request timeout
pub const ENV_TIMEOUT_SECS: &str = "CLIENT_TIMEOUT_SECS";

const APP_DIR: &str = "articles-desk";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API base endpoint, without trailing slash
    pub server_url: String,
    /// Where the session file lives; `None` keeps the session in memory only
    pub session_path: Option<PathBuf>,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            session_path: default_session_path(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Contents of the optional `config.toml`
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    server_url: Option<String>,
    session_path: Option<PathBuf>,
    timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load from the default config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path` (skipped when missing) and the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            let file: FileConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            tracing::debug!("Loaded config file {}", path.display());

            if let Some(url) = file.server_url {
                builder = builder.server_url(url);
            }
            if let Some(session_path) = file.session_path {
                builder = builder.session_path(session_path);
            }
            if let Some(secs) = file.timeout_secs {
                builder = builder.request_timeout(Duration::from_secs(secs));
            }
        }

        builder.with_env()?.build()
    }

    /// `<config_dir>/articles-desk/config.toml`, or the working directory
    /// when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(APP_DIR).join("config.toml")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.server_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.server_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                self.server_url,
                url.scheme()
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn default_session_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join("session.json"))
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    session_path: Option<PathBuf>,
    in_memory_session: bool,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Persist the session at `path`
    pub fn session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self.in_memory_session = false;
        self
    }

    /// Keep the session in memory only
    pub fn in_memory_session(mut self) -> Self {
        self.session_path = None;
        self.in_memory_session = true;
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Apply `CLIENT_*` environment overrides
    pub fn with_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(url) = std::env::var(ENV_SERVER_URL) {
            self = self.server_url(url);
        }
        if let Ok(path) = std::env::var(ENV_SESSION_PATH) {
            self = self.session_path(path);
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS,
                message: format!("expected whole seconds, got '{}'", raw),
            })?;
            self = self.request_timeout(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let session_path = if self.in_memory_session {
            None
        } else {
            self.session_path.or(defaults.session_path)
        };
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.server_url),
            session_path,
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
