//! Centralized path definitions for taskboard
//!
//! Single source of truth for every filesystem path taskboard uses.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.taskboard/                 # or $TASKBOARD_HOME
//! ├── config.toml               # User preferences
//! └── board.json                # Board snapshot (default location)
//! ```

use std::path::PathBuf;

/// Environment variable overriding the taskboard home directory
pub const HOME_ENV: &str = "TASKBOARD_HOME";

/// Home directory name under the user's home
const HOME_DIR: &str = ".taskboard";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Default board snapshot filename
const BOARD_FILE: &str = "board.json";

/// Get the taskboard home directory.
///
/// Returns `$TASKBOARD_HOME` when set and non-empty, else `~/.taskboard/`.
#[must_use]
pub fn home_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(HOME_DIR),
    }
}

/// Get the config file path.
///
/// Returns `<home>/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    home_dir().join(CONFIG_FILE)
}

/// Get the default board snapshot path.
///
/// Returns `<home>/board.json`. The config may point elsewhere.
#[must_use]
pub fn default_board_file() -> PathBuf {
    home_dir().join(BOARD_FILE)
}
