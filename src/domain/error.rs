//! Error types for bookrack.
//!
//! This module defines the centralized error type [`BookrackError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for bookrack operations.
///
/// Consolidates the error conditions that can occur while managing the shelf:
/// snapshot persistence failures, underlying I/O errors, and configuration
/// problems. Persistence is best-effort at the store boundary, so most of
/// these surface as warnings rather than aborting a dispatch.
#[derive(Debug, Error)]
pub enum BookrackError {
    /// Snapshot load or save failed.
    ///
    /// Occurs when the snapshot cannot be read, parsed, or written. The
    /// string describes what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configured value (data directory, theme file) is
    /// malformed or unusable. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for bookrack operations.
pub type Result<T> = std::result::Result<T, BookrackError>;
