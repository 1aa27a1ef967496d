//! File system paths for the friend system.

use crate::{ConfigError, ConfigResult};
use std::path::PathBuf;

/// Manages file system paths for the friend system.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for runtime files (~/.friendsystem)
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.friendsystem`.
    pub fn new() -> ConfigResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConfigError::Path("Could not determine home directory".to_string()))?;

        Ok(Self {
            base_dir: home.join(".friendsystem"),
        })
    }

    /// Create a new Paths instance with a custom base directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.friendsystem).
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config file path (~/.friendsystem/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the database file path (~/.friendsystem/friendsystem.sqlite).
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join("friendsystem.sqlite")
    }

    /// Ensure all required directories exist.
    pub fn ensure_dirs(&self) -> ConfigResult<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().expect("Failed to determine home directory")
    }
}
