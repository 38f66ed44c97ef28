//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the board core and the
//! outside world. Implementations live in the `adapters` module.

mod snapshot_store;

pub use snapshot_store::SnapshotStore;
