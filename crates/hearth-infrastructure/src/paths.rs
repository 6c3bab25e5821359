//! Unified path management for hearth data files.
//!
//! All profile snapshots and configuration live under the platform config
//! directory, so every storage component resolves locations the same way.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/hearth/            # Config directory (XDG on Linux)
//! ├── config.toml              # Engine configuration
//! └── profiles/                # One JSON snapshot per persona
//!     ├── auntie-mae.json
//!     └── dr-feelgood.json
//! ```

use hearth_core::error::{HearthError, Result};
use std::path::PathBuf;

/// Unified path management for hearth.
pub struct HearthPaths;

impl HearthPaths {
    /// Returns the hearth configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/hearth/`)
    /// - `Err(_)`: The platform config directory could not be determined
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("hearth"))
            .ok_or_else(|| HearthError::config("cannot determine platform config directory"))
    }

    /// Returns the path to the engine configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding per-persona profile snapshots.
    pub fn profiles_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("profiles"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = HearthPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("hearth"));
    }

    #[test]
    fn test_config_file() {
        let config_file = HearthPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(HearthPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_profiles_dir() {
        let profiles_dir = HearthPaths::profiles_dir().unwrap();
        assert!(profiles_dir.ends_with("profiles"));
        assert!(profiles_dir.starts_with(HearthPaths::config_dir().unwrap()));
    }
}
