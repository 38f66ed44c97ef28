//! Core domain logic for taskboard
//!
//! This module contains the board logic with no I/O dependencies.
//! Persistence is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Board, DragSession)
//! - `services/` - Board state manager and field rules
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
