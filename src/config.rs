//! Configuration management
//!
//! User preferences live in `config.toml` under the taskboard home
//! directory (see [`paths`](crate::paths)). Every field has a default, so a
//! missing file or a partial file both work.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors loading or saving the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading or writing the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this config
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be encoded
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Top-level taskboard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskboardConfig {
    /// Board behavior
    #[serde(default)]
    pub board: BoardSettings,
    /// Snapshot storage
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Board behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Seed the example tasks when no snapshot exists yet
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,
}

const fn default_seed_examples() -> bool {
    true
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            seed_examples: default_seed_examples(),
        }
    }
}

/// Snapshot storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Snapshot file; defaults to `board.json` in the taskboard home
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl TaskboardConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from the default location, or defaults if it does not exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The snapshot file to use
    #[must_use]
    pub fn board_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(paths::default_board_file)
    }
}
