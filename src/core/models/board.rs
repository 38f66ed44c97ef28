//! Board model
//!
//! The board is three ordered task lists keyed by [`TaskStatus`]. This is
//! also the snapshot shape handed to a [`SnapshotStore`](crate::core::ports::SnapshotStore).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::task::{Priority, Task, TaskStatus};

/// The three task lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Tasks not started yet
    #[serde(default)]
    pub todo: Vec<Task>,
    /// Tasks being worked on
    #[serde(default)]
    pub in_progress: Vec<Task>,
    /// Finished tasks
    #[serde(default)]
    pub done: Vec<Task>,
}

/// A violation of the board invariants, found by [`Board::integrity_issues`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// The same id appears more than once across the lists
    DuplicateId {
        /// The repeated id
        id: u64,
        /// How many times it appears
        count: usize,
    },
    /// A task's status names a different list than the one holding it
    StatusMismatch {
        /// The task id
        id: u64,
        /// The list the task sits in
        list: TaskStatus,
        /// The status recorded on the task
        status: TaskStatus,
    },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { id, count } => write!(f, "task {id} appears {count} times"),
            Self::StatusMismatch { id, list, status } => {
                write!(f, "task {id} is in '{list}' but has status '{status}'")
            },
        }
    }
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The list for a status
    #[must_use]
    pub fn list(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// The list for a status, mutably
    pub fn list_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Position of a task id within one list
    #[must_use]
    pub fn position(&self, status: TaskStatus, id: u64) -> Option<usize> {
        self.list(status).iter().position(|t| t.id == id)
    }

    /// Find a task anywhere on the board, with the list holding it
    #[must_use]
    pub fn find_task(&self, id: u64) -> Option<(TaskStatus, &Task)> {
        TaskStatus::ALL
            .into_iter()
            .find_map(|status| self.list(status).iter().find(|t| t.id == id).map(|t| (status, t)))
    }

    /// Whether any list holds this id
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.find_task(id).is_some()
    }

    /// Iterate over every task with the list holding it
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &Task)> {
        TaskStatus::ALL
            .into_iter()
            .flat_map(move |status| self.list(status).iter().map(move |t| (status, t)))
    }

    /// Total number of tasks across all lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Whether all three lists are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Next free id: one past the largest id on the board
    ///
    /// Returns `None` when the largest id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<u64> {
        self.iter().map(|(_, t)| t.id).max().map_or(Some(1), |max| max.checked_add(1))
    }

    /// Check the board invariants: unique ids and status matching list
    #[must_use]
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        let mut counts: HashMap<u64, usize> = HashMap::new();

        for (list, task) in self.iter() {
            *counts.entry(task.id).or_insert(0) += 1;
            if task.status != list {
                issues.push(IntegrityIssue::StatusMismatch {
                    id: task.id,
                    list,
                    status: task.status,
                });
            }
        }

        let mut duplicates: Vec<_> = counts.into_iter().filter(|(_, count)| *count > 1).collect();
        duplicates.sort_unstable();
        issues.extend(duplicates.into_iter().map(|(id, count)| IntegrityIssue::DuplicateId { id, count }));

        issues
    }

    /// The example board used to seed a fresh install
    #[must_use]
    pub fn example() -> Self {
        let seed: [(&str, &str, &str, &[&str], Priority); 10] = [
            (
                "Homepage Development",
                "Design and layout of the homepage.",
                "Ivan Ivanov",
                &["Maria Petrova"],
                Priority::High,
            ),
            (
                "API Testing",
                "Testing the user authentication API.",
                "Olena Koval",
                &["Serhiy Horbunov"],
                Priority::Medium,
            ),
            (
                "Bug Fixing",
                "Fixing bugs found during testing.",
                "Anton Sydorenko",
                &["Yulia Kravchenko"],
                Priority::High,
            ),
            (
                "Payment System Integration",
                "Integrating the payment system for transactions.",
                "Vasyl Popov",
                &["Dmytro Ivanov", "Oleg Lysenko"],
                Priority::High,
            ),
            (
                "Speed Optimization",
                "Optimizing the website for faster loading times.",
                "Iryna Petrenko",
                &["Oleksandr Rudenko"],
                Priority::Medium,
            ),
            (
                "Mobile Version Development",
                "Adapting the website for mobile devices.",
                "Andriy Boyko",
                &["Olena Koval", "Maria Petrova"],
                Priority::High,
            ),
            (
                "Technical Documentation Preparation",
                "Writing documentation for the new release.",
                "Natalia Sydorenko",
                &["Ivan Ivanov"],
                Priority::Low,
            ),
            (
                "Code Refactoring",
                "Improving the code structure and quality.",
                "Yuriy Tymchenko",
                &["Oleg Lysenko"],
                Priority::Medium,
            ),
            (
                "Database Backup",
                "Setting up automatic database backups.",
                "Kateryna Sokolova",
                &["Serhiy Horbunov"],
                Priority::Low,
            ),
            (
                "New Module Development",
                "Creating new modules to extend website functionality.",
                "Vitaliy Zakharenko",
                &["Andriy Boyko", "Yulia Kravchenko"],
                Priority::High,
            ),
        ];

        let todo = (1..)
            .zip(seed)
            .map(|(id, (title, description, responsible, performers, priority))| {
                Task::new(id, title)
                    .with_description(description)
                    .with_responsible(responsible)
                    .with_performers(performers.iter().copied())
                    .with_priority(priority)
            })
            .collect();

        Self {
            todo,
            in_progress: Vec::new(),
            done: Vec::new(),
        }
    }
}
