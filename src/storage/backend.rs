//! Storage backend abstraction.
//!
//! This module defines the [`SnapshotStorage`] trait that abstracts over
//! snapshot persistence backends, so the store never knows whether books land
//! in a JSON file, in memory, or nowhere at all.
//!
//! # Design Philosophy
//!
//! The trait is minimal and shaped by the store's actual needs: load the last
//! snapshot at startup, overwrite it after each mutation, and report whether
//! the medium is usable at all. It is not a generic repository interface.

use crate::domain::Result;
use crate::storage::models::BookRecord;

/// Abstraction over snapshot persistence backends.
///
/// A snapshot is the full `books` sequence; `save` always overwrites rather
/// than patching. Implementations are free to be unavailable (the medium
/// equivalent of disabled browser storage): callers check
/// [`is_available`](SnapshotStorage::is_available) at call time and degrade
/// to in-memory operation.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): single JSON file with
///   atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local, used
///   in tests and as the degraded fallback
pub trait SnapshotStorage {
    /// Whether the medium can currently be read and written.
    ///
    /// Checked on every save rather than cached, so a medium that comes and
    /// goes is observed faithfully. Defaults to `true`.
    fn is_available(&self) -> bool {
        true
    }

    /// Returns the last saved snapshot, or `None` when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error when a snapshot exists but cannot be read or parsed.
    /// Callers hydrating state fail closed to an empty collection.
    fn load(&self) -> Result<Option<Vec<BookRecord>>>;

    /// Overwrites the snapshot with the given book sequence.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the underlying write fails.
    /// The store treats this as best-effort and logs instead of propagating.
    fn save(&self, books: &[BookRecord]) -> Result<()>;
}
