//! Drag session model
//!
//! Transient record of a task being dragged. Never persisted.

use super::task::{Task, TaskStatus};

/// An in-progress drag gesture
///
/// The manager holds this as `Option<DragSession>`: `None` is the idle state,
/// so the three fields are always either all present or all absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    task: Task,
    origin: TaskStatus,
}

impl DragSession {
    /// Start a session for a task picked up from `origin`
    #[must_use]
    pub const fn new(task: Task, origin: TaskStatus) -> Self {
        Self { task, origin }
    }

    /// The task as it was when picked up
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// The list the drag started in
    #[must_use]
    pub const fn origin(&self) -> TaskStatus {
        self.origin
    }

    /// Id of the dragged task
    #[must_use]
    pub const fn task_id(&self) -> u64 {
        self.task.id
    }
}
