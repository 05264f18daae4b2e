//! JSON file-based snapshot backend.
//!
//! This module persists the shelf as a single human-readable JSON file. It
//! uses atomic file writes (write-to-temp + rename) so a crash mid-save never
//! leaves a corrupt snapshot behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n) - the whole snapshot is parsed once at startup
//! - **Write**: O(n) - every save serializes and rewrites the full shelf
//! - **Best for**: collections in the hundreds, write-per-user-action

use crate::domain::{BookrackError, Result};
use crate::storage::backend::SnapshotStorage;
use crate::storage::models::BookRecord;
use std::path::PathBuf;

/// Snapshot backend writing a flat JSON array to one file.
///
/// The file holds exactly the `books` sequence as an array of
/// [`BookRecord`] objects. Construction creates parent directories eagerly
/// so the first save cannot fail on a missing path.
pub struct JsonStorage {
    /// Path of the snapshot file on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Creates a JSON snapshot backend at the given path.
    ///
    /// Parent directories are created up front; the snapshot file itself is
    /// only written on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON snapshot storage");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { file_path })
    }
}

impl SnapshotStorage for JsonStorage {
    fn load(&self) -> Result<Option<Vec<BookRecord>>> {
        if !self.file_path.exists() {
            tracing::debug!(path = ?self.file_path, "no snapshot file yet");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let records: Vec<BookRecord> = serde_json::from_str(&contents)
            .map_err(|e| BookrackError::Storage(format!("failed to parse snapshot: {e}")))?;

        tracing::debug!(count = records.len(), "loaded snapshot");
        Ok(Some(records))
    }

    fn save(&self, books: &[BookRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(books)
            .map_err(|e| BookrackError::Storage(format!("failed to serialize snapshot: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(count = books.len(), path = ?self.file_path, "snapshot saved");
        Ok(())
    }
}
