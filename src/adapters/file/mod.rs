//! File-based board storage
//!
//! Implements `SnapshotStore` using a JSON file.

mod store;

pub use store::{JsonFileStore, StoreError};
