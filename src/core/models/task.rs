//! Task model
//!
//! A task is a single card on the board. Its `status` names the list that
//! currently holds it.

use serde::{Deserialize, Serialize};

/// A task - one card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned by the caller
    pub id: u64,

    /// Short summary shown on the card
    pub title: String,

    /// Longer free-form description
    #[serde(default)]
    pub description: String,

    /// Person accountable for the task
    #[serde(default)]
    pub responsible_person: String,

    /// People doing the work, in display order
    #[serde(default)]
    pub performers: Vec<String>,

    /// The list this task belongs to
    #[serde(default)]
    pub status: TaskStatus,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,
}

/// Task status, which doubles as the name of a board list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Todo,
    /// Currently being worked on
    InProgress,
    /// Completed
    Done,
}

impl TaskStatus {
    /// Every status, in board column order
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// The list name used in snapshots and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Human-readable column heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" | "doing" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(format!("Invalid status: {s}. Use: todo, inProgress, done")),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal priority (default)
    #[default]
    Medium,
    /// Needs attention first
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "high" | "h" => Ok(Self::High),
            _ => Err(format!("Invalid priority: {s}. Use: low, medium, high")),
        }
    }
}

impl Task {
    /// Create a new todo task with the given id and title
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            responsible_person: String::new(),
            performers: Vec::new(),
            status: TaskStatus::default(),
            priority: Priority::default(),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the responsible person
    #[must_use]
    pub fn with_responsible(mut self, person: impl Into<String>) -> Self {
        self.responsible_person = person.into();
        self
    }

    /// Set the performers
    #[must_use]
    pub fn with_performers<I, S>(mut self, performers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.performers = performers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the status
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
