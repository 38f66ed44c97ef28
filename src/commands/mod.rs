//! Command implementations

mod board;
mod task;

pub use board::{list, show_config};
pub use task::task_cmd;

use taskboard::adapters::JsonFileStore;
use taskboard::config::TaskboardConfig;
use taskboard::core::services::BoardManager;

/// The configured snapshot file, without loading the board
fn board_store() -> anyhow::Result<JsonFileStore> {
    Ok(JsonFileStore::new(TaskboardConfig::load()?.board_path()))
}

/// Open the board from the configured snapshot file
fn open_board() -> anyhow::Result<BoardManager<JsonFileStore>> {
    let config = TaskboardConfig::load()?;
    let store = JsonFileStore::new(config.board_path());
    Ok(BoardManager::open(store, config.board.seed_examples))
}

/// Parse a list name or priority given on the command line
fn parse_arg<T: std::str::FromStr<Err = String>>(value: &str) -> anyhow::Result<T> {
    value.parse().map_err(|e: String| anyhow::anyhow!(e))
}
