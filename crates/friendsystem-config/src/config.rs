//! Configuration management for the friend system.

use crate::{ConfigResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default maximum connections in the database pool.
pub const DEFAULT_MAX_POOL_SIZE: u32 = 10;
/// Default minimum idle connections in the database pool.
pub const DEFAULT_MIN_IDLE_CONNECTIONS: u32 = 1;
/// Default connection acquisition timeout in milliseconds.
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 10_000;

/// Main friend system configuration.
///
/// The pool settings are plain integers here; the embedding front end
/// converts them into the database crate's pool configuration when it
/// constructs the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Optional override for the database file location.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// Maximum connections in the database pool.
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    /// Minimum idle connections to maintain.
    #[serde(default = "default_min_idle_connections")]
    pub min_idle_connections: u32,
    /// Connection acquisition timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

fn default_min_idle_connections() -> u32 {
    DEFAULT_MIN_IDLE_CONNECTIONS
}

fn default_connection_timeout_ms() -> u64 {
    DEFAULT_CONNECTION_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            database_path: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            min_idle_connections: DEFAULT_MIN_IDLE_CONNECTIONS,
            connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Load configuration from the standard location, falling back to
    /// defaults when the file is absent. Environment variables override
    /// the loaded values afterwards.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            debug!(path = %config_path.display(), "Loading config file");
            Self::load_from_file(&config_path)?
        } else {
            info!(path = %config_path.display(), "No config file found, using defaults");
            Self::default()
        };

        config.load_from_env();

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the standard location.
    pub fn save(&self, paths: &Paths) -> ConfigResult<()> {
        paths.ensure_dirs()?;
        let config_path = paths.config_file();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        debug!(path = %config_path.display(), "Config saved");
        Ok(())
    }

    /// Resolve the database file location: the configured override if set,
    /// otherwise the standard path.
    pub fn database_file(&self, paths: &Paths) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| paths.database_file())
    }

    /// Override configuration from environment variables.
    fn load_from_env(&mut self) {
        if let Ok(log_level) = std::env::var("FRIENDSYSTEM_LOG_LEVEL") {
            self.log_level = log_level;
        }
        if let Ok(database_path) = std::env::var("FRIENDSYSTEM_DATABASE_PATH") {
            self.database_path = Some(PathBuf::from(database_path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.database_path, None);
        assert_eq!(config.max_pool_size, DEFAULT_MAX_POOL_SIZE);
        assert_eq!(config.min_idle_connections, DEFAULT_MIN_IDLE_CONNECTIONS);
        assert_eq!(config.connection_timeout_ms, DEFAULT_CONNECTION_TIMEOUT_MS);
    }

    #[test]
    fn test_config_load_from_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let config_json = r#"{
            "log_level": "debug"
        }"#;

        std::fs::write(&config_path, config_json).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_pool_size, DEFAULT_MAX_POOL_SIZE);
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let mut config = Config::default();
        config.log_level = "trace".to_string();
        config.max_pool_size = 4;

        config.save(&paths).unwrap();

        let loaded = Config::load(&paths).unwrap();
        assert_eq!(loaded.log_level, "trace");
        assert_eq!(loaded.max_pool_size, 4);
    }

    #[test]
    fn test_config_load_nonexistent_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_database_file_override() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let mut config = Config::default();
        assert_eq!(config.database_file(&paths), paths.database_file());

        let custom = dir.path().join("elsewhere.sqlite");
        config.database_path = Some(custom.clone());
        assert_eq!(config.database_file(&paths), custom);
    }
}
