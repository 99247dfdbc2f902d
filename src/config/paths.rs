//! Path management for the allowance tracker
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `ALLOWANCE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/allowance-cli` or `~/.config/allowance-cli`
//! 3. Windows: `%APPDATA%\allowance-cli`

use std::path::PathBuf;

use crate::error::AllowanceError;

/// Manages all paths used by the allowance tracker
#[derive(Debug, Clone)]
pub struct AllowancePaths {
    /// Base directory for all tracker data
    base_dir: PathBuf,
}

impl AllowancePaths {
    /// Create a new AllowancePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AllowanceError> {
        let base_dir = if let Ok(custom) = std::env::var("ALLOWANCE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AllowancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/allowance-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted ledger document
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("data").join("ledger.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), AllowanceError> {
        std::fs::create_dir_all(self.base_dir.join("data")).map_err(|e| {
            AllowanceError::Config(format!(
                "Failed to create data directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, AllowanceError> {
    #[cfg(windows)]
    {
        std::env::var("APPDATA")
            .map(|appdata| PathBuf::from(appdata).join("allowance-cli"))
            .map_err(|_| AllowanceError::Config("Could not determine %APPDATA%".into()))
    }

    #[cfg(not(windows))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg).join("allowance-cli"));
        }
        std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".config").join("allowance-cli"))
            .map_err(|_| AllowanceError::Config("Could not determine home directory".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllowancePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(paths.base_dir(), &temp_dir.path().to_path_buf());
        assert!(paths.ledger_file().ends_with("data/ledger.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllowancePaths::with_base_dir(temp_dir.path().join("nested"));
        paths.ensure_directories().unwrap();
        assert!(temp_dir.path().join("nested").join("data").exists());
    }
}
