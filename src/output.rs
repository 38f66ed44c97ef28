//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Board, Priority, Task, TaskStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Information about a task
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    /// Task ID
    pub id: u64,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Responsible person
    pub responsible_person: String,
    /// Performers
    pub performers: Vec<String>,
    /// Status (list name)
    pub status: String,
    /// Priority
    pub priority: String,
}

impl From<&Task> for TaskInfo {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            responsible_person: task.responsible_person.clone(),
            performers: task.performers.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
        }
    }
}

/// One board column
#[derive(Debug, Serialize)]
pub struct ColumnInfo {
    /// List name
    pub status: String,
    /// Tasks in order
    pub tasks: Vec<TaskInfo>,
}

/// Result of a list operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardListResult {
    /// Columns shown, in board order
    pub columns: Vec<ColumnInfo>,
    /// Total tasks shown
    pub total: usize,
    /// When the snapshot was last saved (RFC3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl BoardListResult {
    /// Build from a board, optionally restricted to one list
    #[must_use]
    pub fn from_board(board: &Board, only: Option<TaskStatus>, saved_at: Option<String>) -> Self {
        let columns: Vec<ColumnInfo> = TaskStatus::ALL
            .into_iter()
            .filter(|s| only.is_none_or(|o| o == *s))
            .map(|status| ColumnInfo {
                status: status.to_string(),
                tasks: board.list(status).iter().map(TaskInfo::from).collect(),
            })
            .collect();
        let total = columns.iter().map(|c| c.tasks.len()).sum();

        Self {
            columns,
            total,
            saved_at,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for column in &self.columns {
            let heading = column_heading(&column.status);
            println!("{} ({})", heading.bold(), column.tasks.len());

            if column.tasks.is_empty() {
                println!("  (empty)");
            }
            for task in &column.tasks {
                println!("  [{}] {} {}", task.id, task.title, priority_badge(&task.priority));
                if !task.responsible_person.is_empty() {
                    println!("        owner: {}", task.responsible_person);
                }
                if !task.performers.is_empty() {
                    println!("        performers: {}", task.performers.join(", "));
                }
            }
            println!();
        }

        if let Some(saved_at) = &self.saved_at {
            println!("Last saved: {saved_at}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Column title for a list name, or the name itself if it is not a known list
fn column_heading(status: &str) -> &str {
    match status.parse::<TaskStatus>() {
        Ok(list) => list.title(),
        Err(_) => status,
    }
}

fn priority_badge(priority: &str) -> String {
    match priority.parse::<Priority>() {
        Ok(Priority::High) => format!("({priority})").red().to_string(),
        Ok(Priority::Medium) => format!("({priority})").yellow().to_string(),
        Ok(Priority::Low) => format!("({priority})").dimmed().to_string(),
        Err(_) => format!("({priority})"),
    }
}

/// Result of a single-task operation (add, edit, move, reorder)
#[derive(Debug, Serialize)]
pub struct TaskResult {
    /// Whether the operation changed the board
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// The task after the operation, if it exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskInfo>,
}

impl TaskResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.message);
                if let Some(task) = &self.task {
                    println!("  Title:    {}", task.title);
                    println!("  Status:   {}", task.status);
                    println!("  Priority: {}", task.priority);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
