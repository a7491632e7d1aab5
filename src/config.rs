//! Configuration System
//!
//! Loads settings from a TOML file with environment variable overrides, and
//! persists the session token after login.

use crate::client::{ClientConfig, DEFAULT_BASE_URL};
use crate::tracking::CurrentUser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "nexhale";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "./nexhale.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

/// Signed-in user state
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Name shown on the leaderboard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl SessionConfig {
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user_name.as_deref().map(CurrentUser::new)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
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

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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

    /// Per-user config file location, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [Self::default_path(), Some(PathBuf::from(LOCAL_CONFIG_FILE))];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Write the whole config back, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |e: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            error: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(io_err)
    }

    /// Store a fresh login in the config file at `path`, keeping its other settings
    pub fn save_session(
        path: &Path,
        token: &str,
        user_name: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };

        config.session.token = Some(token.to_string());
        if let Some(name) = user_name {
            config.session.user_name = Some(name.to_string());
        }
        config.save(path)?;
        Ok(config)
    }

    /// Settings for `NexhaleClient`
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            token: self.session.token.clone(),
            request_timeout_secs: self.api.request_timeout_secs,
            max_retries: self.api.max_retries,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `NEXHALE_*` overrides from any variable source
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("NEXHALE_API_URL") {
            self.api.base_url = url;
        }
        if let Some(token) = var("NEXHALE_TOKEN") {
            self.session.token = Some(token);
        }
        if let Some(user) = var("NEXHALE_USER") {
            self.session.user_name = Some(user);
        }
        if let Some(age) = var("NEXHALE_AGE") {
            match age.parse() {
                Ok(a) => self.session.age = Some(a),
                Err(_) => tracing::warn!("Ignoring invalid NEXHALE_AGE: {}", age),
            }
        }
        if let Some(level) = var("NEXHALE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("NEXHALE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Failed to serialize config: {error}")]
    Serialize { error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Nexhale Configuration
#
# Environment variables override these settings:
# - NEXHALE_API_URL
# - NEXHALE_TOKEN
# - NEXHALE_USER
# - NEXHALE_AGE
# - NEXHALE_LOG_LEVEL
# - NEXHALE_LOG_FORMAT

[api]
# Backend base URL, including the /api prefix
base_url = "http://localhost:5000/api"

# Request timeout in seconds
request_timeout_secs = 30

# Attempts for read requests when the backend is unreachable or rate limiting
max_retries = 3

[session]
# Filled in by `nexhale login`
# token = ""

# Your leaderboard name, used to highlight your row
# user_name = ""

# Your age; Nexhale requires 15 or older
# age = 18

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert!(config.session.token.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.max_retries, 3);
        assert!(config.session.user_name.is_none());
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nuser_name = \"USR-0042\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.session.current_user(),
            Some(CurrentUser::new("USR-0042"))
        );
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[api\nbase_url = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("NEXHALE_API_URL", "https://nexhale.test/api"),
            ("NEXHALE_TOKEN", "tok"),
            ("NEXHALE_AGE", "not-a-number"),
            ("NEXHALE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "https://nexhale.test/api");
        assert_eq!(config.session.token.as_deref(), Some("tok"));
        assert_eq!(config.session.age, None);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_save_session_keeps_other_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut initial = Config::default();
        initial.api.base_url = "http://backend:5000/api".into();
        initial.save(&path).unwrap();

        Config::save_session(&path, "fresh-token", Some("amira")).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.api.base_url, "http://backend:5000/api");
        assert_eq!(reloaded.session.token.as_deref(), Some("fresh-token"));
        assert_eq!(reloaded.session.user_name.as_deref(), Some("amira"));
    }

    #[test]
    fn test_client_config() {
        let mut config = Config::default();
        config.session.token = Some("abc".into());
        config.api.max_retries = 1;

        let client = config.client_config();
        assert_eq!(client.token.as_deref(), Some("abc"));
        assert_eq!(client.max_retries, 1);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
