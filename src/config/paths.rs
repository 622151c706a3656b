//! Path management for paysplit
//!
//! ## Path Resolution Order
//!
//! 1. `PAYSPLIT_DATA_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/paysplit` (if set)
//! 3. The platform config directory (`~/.config/paysplit`, `%APPDATA%\paysplit`, ...)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PaysplitError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PAYSPLIT_DATA_DIR";

/// Manages all paths used by paysplit
#[derive(Debug, Clone)]
pub struct PaysplitPaths {
    /// Base directory for all paysplit data
    base_dir: PathBuf,
}

impl PaysplitPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PaysplitError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the key-value store files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Directory holding state backups
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PaysplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaysplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PaysplitError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| PaysplitError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }

    /// Check if paysplit has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PaysplitError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("paysplit"));
        }
    }

    ProjectDirs::from("", "", "paysplit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PaysplitError::Config("Could not determine a home directory".into()))
}
