//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub tables: TablesConfig,

    #[serde(default)]
    pub mock: MockConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Sentiment backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL every endpoint is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Page sizes of the two ranked tables
#[derive(Debug, Clone, Deserialize)]
pub struct TablesConfig {
    #[serde(default = "default_attendants_page_size")]
    pub attendants_page_size: u64,

    #[serde(default = "default_clients_page_size")]
    pub clients_page_size: u64,
}

fn default_attendants_page_size() -> u64 {
    8
}

fn default_clients_page_size() -> u64 {
    10
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            attendants_page_size: default_attendants_page_size(),
            clients_page_size: default_clients_page_size(),
        }
    }
}

/// Mock backend server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    #[serde(default = "default_mock_host")]
    pub host: String,

    #[serde(default = "default_mock_port")]
    pub port: u16,
}

fn default_mock_host() -> String {
    "127.0.0.1".to_string()
}

fn default_mock_port() -> u16 {
    8000
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            host: default_mock_host(),
            port: default_mock_port(),
        }
    }
}

impl MockConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let (config, skipped) = Self::discover();
        for error in &skipped {
            tracing::warn!("Skipping config file: {}", error);
        }
        config
    }

    /// Like [`Config::load_default`] but hands back the files that could not
    /// be loaded, for callers that install logging after reading the config.
    pub fn discover() -> (Self, Vec<ConfigError>) {
        Self::discover_in(&default_config_paths())
    }

    /// First candidate that exists and loads wins; env overrides always apply
    fn discover_in(paths: &[PathBuf]) -> (Self, Vec<ConfigError>) {
        let mut skipped = Vec::new();

        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => return (config, skipped),
                    Err(e) => skipped.push(e),
                }
            }
        }

        (Self::from_env(), skipped)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Backend overrides
        if let Some(url) = lookup("SENTIMENT_API_URL") {
            self.backend.base_url = url;
        }
        if let Some(timeout) = lookup("SENTIMENT_API_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.backend.request_timeout_secs = t;
            }
        }

        // Mock server overrides
        if let Some(host) = lookup("SENTIMENT_MOCK_HOST") {
            self.mock.host = host;
        }
        if let Some(port) = lookup("SENTIMENT_MOCK_PORT") {
            if let Ok(p) = port.parse() {
                self.mock.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("SENTIMENT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SENTIMENT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Config file candidates, most specific first
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("sentiment-dashboard").join("config.toml"));
    }
    paths.push(PathBuf::from("./sentiment-dashboard.toml"));
    paths
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Sentiment Dashboard Configuration
#
# Environment variables override these settings:
# - SENTIMENT_API_URL
# - SENTIMENT_API_TIMEOUT_SECS
# - SENTIMENT_MOCK_HOST
# - SENTIMENT_MOCK_PORT
# - SENTIMENT_LOG_LEVEL
# - SENTIMENT_LOG_FORMAT

[backend]
# Sentiment backend base URL
base_url = "http://localhost:8000"

# Request timeout in seconds
request_timeout_secs = 10

[tables]
# Rows per page of the attendants table
attendants_page_size = 8

# Rows per page of the clients table
clients_page_size = 10

[mock]
# Mock backend host
host = "127.0.0.1"

# Mock backend port
port = 8000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
