//! taskboard - The state core of a kanban-style task board
//!
//! This library holds three ordered task lists (todo, in progress, done) and
//! implements drag-and-reorder semantics for moving a task within a list or
//! across lists, plus adding, editing and deleting tasks. The board is
//! persisted through a pluggable snapshot store.
//!
//! # Examples
//!
//! ```
//! use taskboard::adapters::InMemoryStore;
//! use taskboard::core::models::{Task, TaskStatus};
//! use taskboard::core::services::BoardManager;
//!
//! let mut manager = BoardManager::open(InMemoryStore::new(), false);
//! manager.add_task(Task::new(1, "Write docs")).unwrap();
//!
//! let task = manager.todo()[0].clone();
//! manager.start_drag(&task, TaskStatus::Todo);
//! manager.drop(TaskStatus::Done);
//!
//! assert_eq!(manager.done()[0].status, TaskStatus::Done);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
