//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use taskboard::output::OutputMode;

/// taskboard - A kanban board in your terminal
#[derive(Parser, Debug)]
#[command(
    name = "taskboard",
    version,
    about = "A kanban board in your terminal",
    long_about = "Keep tasks in three ordered lists: todo, inProgress and done.\n\n\
                  Move tasks between lists, reorder them within a list, and\n\
                  add, edit or delete them. The board is saved after every change."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the board
    List {
        /// Only show one list: todo, inProgress, done
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Add a task to the todo list
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Person responsible for the task
        #[arg(short, long, default_value = "")]
        responsible: String,

        /// People doing the work
        #[arg(short, long, value_delimiter = ',')]
        performers: Vec<String>,

        /// Priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,

        /// Explicit task ID (defaults to the next free one)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        id: Option<u64>,
    },

    /// Edit a task's fields
    Edit {
        /// Task ID
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New responsible person
        #[arg(short, long)]
        responsible: Option<String>,

        /// New performers (replaces the existing ones)
        #[arg(short, long, value_delimiter = ',')]
        performers: Option<Vec<String>>,

        /// New priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,

        /// List to delete from (defaults to the list holding the task)
        #[arg(short, long)]
        from: Option<String>,
    },

    /// Move a task to the end of another list
    Move {
        /// Task ID
        id: u64,

        /// Target list: todo, inProgress, done
        to: String,
    },

    /// Move a task to a new position within its list
    Reorder {
        /// Task ID
        id: u64,

        /// New position (0-based, counted without the task itself)
        index: usize,
    },

    /// Replace the board with the example tasks
    Reset {
        /// Start from an empty board instead
        #[arg(long)]
        empty: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::List { status }) => commands::list(status.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": taskboard::VERSION
                    })
                );
            } else {
                println!("taskboard v{}", taskboard::VERSION);
            }
            Ok(())
        },
        Some(Command::Config { init }) => commands::show_config(init, output_mode),
        Some(command) => commands::task_cmd(command, output_mode),
        None => commands::list(None, output_mode),
    }
}
