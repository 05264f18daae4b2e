//! Snapshot persistence layer.
//!
//! This module provides the storage abstraction the store writes through
//! after every collection mutation: a trait over swappable snapshot
//! backends, a JSON file implementation, and an in-memory implementation for
//! tests and degraded operation.
//!
//! # Modules
//!
//! - `backend`: Snapshot storage trait
//! - `json`: JSON file-based implementation with atomic writes
//! - `memory`: In-memory implementation
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::SnapshotStorage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::BookRecord;
