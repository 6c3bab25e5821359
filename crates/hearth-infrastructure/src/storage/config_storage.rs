//! Engine configuration file handling.
//!
//! Reads `config.toml` from the hearth config directory. A missing or
//! malformed file yields the built-in defaults with a logged warning;
//! configuration problems never stop the engine.

use hearth_core::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Lower bound of the simulated thinking delay, in milliseconds.
    #[serde(default = "default_delay_min_ms")]
    pub thinking_delay_min_ms: u64,
    /// Upper bound of the simulated thinking delay, in milliseconds.
    #[serde(default = "default_delay_max_ms")]
    pub thinking_delay_max_ms: u64,
    /// Overrides the profile snapshot directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles_dir: Option<PathBuf>,
}

fn default_delay_min_ms() -> u64 {
    800
}

fn default_delay_max_ms() -> u64 {
    2000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thinking_delay_min_ms: default_delay_min_ms(),
            thinking_delay_max_ms: default_delay_max_ms(),
            profiles_dir: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config");
                    Self::default()
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Writes the configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = EngineConfig::load_or_default(&temp_dir.path().join("config.toml"));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "thinking_delay_min_ms = \"not a number\"").unwrap();

        let config = EngineConfig::load_or_default(&path);
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn save_and_reload_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = EngineConfig {
            thinking_delay_min_ms: 1000,
            thinking_delay_max_ms: 3000,
            profiles_dir: Some(temp_dir.path().join("profiles")),
        };
        config.save(&path).unwrap();

        assert_eq!(EngineConfig::load_or_default(&path), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "thinking_delay_max_ms = 5000").unwrap();

        let config = EngineConfig::load_or_default(&path);
        assert_eq!(config.thinking_delay_min_ms, 800);
        assert_eq!(config.thinking_delay_max_ms, 5000);
    }
}
