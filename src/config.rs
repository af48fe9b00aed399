//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::feed::DEFAULT_FEED_ORIGIN;
use crate::reveal::RevealConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dev API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8080".to_string(),
        "http://127.0.0.1:8080".to_string(),
    ]
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Where the featured lists are read from
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_origin")]
    pub origin: String,
}

fn default_feed_origin() -> String {
    DEFAULT_FEED_ORIGIN.to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            origin: default_feed_origin(),
        }
    }
}

/// Local key-value store location
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("nefra").to_string_lossy().to_string())
        .unwrap_or_else(|| "./nefra_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Resolved data directory. A leading `~` expands to the home directory.
    pub fn data_path(&self) -> PathBuf {
        expand_home(&self.data_dir, dirs::home_dir())
    }
}

fn expand_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR) => {
            &rest[1..]
        }
        // `~user` is not expanded
        _ => return PathBuf::from(path),
    };

    match home {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
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

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("nefra_connect={},tower_http=debug", self.level)
    }

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

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("nefra").join("config.toml")),
            Some(PathBuf::from("/etc/nefra/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `NEFRA_*` overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("NEFRA_API_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("NEFRA_API_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid NEFRA_API_PORT"),
            }
        }

        if let Some(origin) = lookup("NEFRA_FEED_ORIGIN") {
            self.feed.origin = origin;
        }

        if let Some(data_dir) = lookup("NEFRA_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(level) = lookup("NEFRA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("NEFRA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    pub fn bind_addr(&self) -> String {
        self.server.addr()
    }
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
    r#"# NEFRA Connections Configuration
#
# Environment variables override these settings:
# - NEFRA_API_HOST
# - NEFRA_API_PORT
# - NEFRA_FEED_ORIGIN
# - NEFRA_DATA_DIR
# - NEFRA_LOG_LEVEL
# - NEFRA_LOG_FORMAT

[server]
# Dev API host
host = "0.0.0.0"

# Dev API port
port = 5000

# Allowed CORS origins (the UI dev server)
cors_origins = ["http://localhost:8080", "http://127.0.0.1:8080"]

[feed]
# Origin serving /api/featured-connections and /api/featured-stories
origin = "http://localhost:5000"

[storage]
# Directory holding the local key-value store
data_dir = "~/.local/share/nefra"

[reveal]
# Wait after a route change before collecting reveal targets (ms)
settle_delay_ms = 100

# Per-element stagger step (ms)
stagger_ms = 80

# Visible fraction needed to activate
threshold = 0.1

# Viewport margin, CSS order (top right bottom left)
root_margin = "0px 0px -50px 0px"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.feed.origin, DEFAULT_FEED_ORIGIN);
        assert_eq!(config.reveal, RevealConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 7070\n\n[reveal]\nstagger_ms = 40\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.reveal.stagger_ms, 40);
        assert_eq!(config.reveal.settle_delay_ms, 100);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("NEFRA_API_PORT", "9000"),
            ("NEFRA_FEED_ORIGIN", "http://feeds.local"),
            ("NEFRA_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.feed.origin, "http://feeds.local");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_data_dir_expands_home() {
        let home = Some(PathBuf::from("/home/priya"));
        assert_eq!(
            expand_home("~/.local/share/nefra", home.clone()),
            PathBuf::from("/home/priya/.local/share/nefra")
        );
        assert_eq!(expand_home("~", home.clone()), PathBuf::from("/home/priya"));
        assert_eq!(expand_home("/var/lib/nefra", home.clone()), PathBuf::from("/var/lib/nefra"));
        assert_eq!(expand_home("~arjun/data", home), PathBuf::from("~arjun/data"));
        assert_eq!(expand_home("~/data", None), PathBuf::from("~/data"));
    }

    #[test]
    fn test_template_data_dir_resolves_under_home() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let path = config.storage.data_path();
        if let Some(home) = dirs::home_dir() {
            assert!(path.starts_with(&home));
            assert!(path.ends_with(".local/share/nefra"));
        }
    }

    #[test]
    fn test_bad_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| (k == "NEFRA_API_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 5000);
    }
}
