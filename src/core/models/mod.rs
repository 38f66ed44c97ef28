//! Domain models for taskboard
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A card on the board
//! - [`Board`] - The three ordered task lists
//! - [`DragSession`] - A drag gesture in flight

mod board;
mod drag;
mod task;

pub use board::{Board, IntegrityIssue};
pub use drag::DragSession;
pub use task::{Priority, Task, TaskStatus};
