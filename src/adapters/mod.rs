//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - JSON snapshot file
//! - `memory/` - In-process snapshot, no I/O

pub mod file;
pub mod memory;

pub use file::{JsonFileStore, StoreError};
pub use memory::InMemoryStore;
