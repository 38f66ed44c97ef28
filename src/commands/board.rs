//! Board-wide commands: list, config

use taskboard::config::TaskboardConfig;
use taskboard::core::models::TaskStatus;
use taskboard::output::{BoardListResult, OutputMode};

use super::{open_board, parse_arg};

/// Show the board, optionally one list only
pub fn list(status: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let only: Option<TaskStatus> = status.map(parse_arg).transpose()?;
    let manager = open_board()?;

    let saved_at = manager
        .store()
        .saved_at()
        .ok()
        .flatten()
        .map(|t| t.to_rfc3339());

    BoardListResult::from_board(manager.board(), only, saved_at).render(mode);
    Ok(())
}

/// Show the effective configuration, writing the defaults first with `init`
pub fn show_config(init: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = TaskboardConfig::config_path();
    if init && !config_path.exists() {
        TaskboardConfig::default().save()?;
        log::info!("wrote default config to {}", config_path.display());
    }
    let config = TaskboardConfig::load()?;
    let board_path = config.board_path();

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "configFile": config_path,
                "boardFile": board_path,
                "seedExamples": config.board.seed_examples,
            })
        );
    } else {
        println!("Config file:   {}", config_path.display());
        println!("Board file:    {}", board_path.display());
        println!("Seed examples: {}", config.board.seed_examples);
    }

    Ok(())
}
