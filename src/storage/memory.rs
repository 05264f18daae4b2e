//! In-memory snapshot backend.
//!
//! Process-local storage used two ways: as a test double, and as the
//! degraded fallback when the configured snapshot location is unusable. In
//! the fallback role it is constructed unavailable, so the store raises its
//! one-time notice and skips saves entirely.

use crate::domain::Result;
use crate::storage::backend::SnapshotStorage;
use crate::storage::models::BookRecord;
use std::cell::RefCell;

/// Snapshot backend that keeps the last save in memory.
pub struct MemoryStorage {
    available: bool,
    snapshot: RefCell<Option<Vec<BookRecord>>>,
}

impl MemoryStorage {
    /// Creates an available, empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: true,
            snapshot: RefCell::new(None),
        }
    }

    /// Creates a backend that reports the medium as unavailable.
    ///
    /// Used when the real storage location cannot be prepared: the shelf
    /// keeps working for the process lifetime, nothing is written anywhere.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            available: false,
            snapshot: RefCell::new(None),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn is_available(&self) -> bool {
        self.available
    }

    fn load(&self) -> Result<Option<Vec<BookRecord>>> {
        if !self.available {
            return Ok(None);
        }
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, books: &[BookRecord]) -> Result<()> {
        if !self.available {
            return Ok(());
        }
        *self.snapshot.borrow_mut() = Some(books.to_vec());
        Ok(())
    }
}
