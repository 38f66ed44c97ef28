//! Business logic services
//!
//! Orchestration over the domain models. The only I/O happens through the
//! [`SnapshotStore`](crate::core::ports::SnapshotStore) port.
//!
//! - [`board_manager`] - Drag gestures and task CRUD on the board
//! - [`rules`] - Form field predicates

pub mod board_manager;
pub mod rules;

pub use board_manager::{BoardError, BoardManager};
pub use rules::{FieldRuleError, FieldValue, REQUIRED_MESSAGE, required};
