//! Book domain model.
//!
//! This module defines the core `Book` type representing one catalog item on
//! the shelf. Books are identified by a numeric id assigned at creation time
//! and keep their user-supplied text fields exactly as entered; normalization
//! only happens transiently during search matching.

use serde::{Deserialize, Serialize};

/// A single catalog item on the shelf.
///
/// The `id` is unique within the collection and immutable once assigned.
/// `title` and `author` are stored case-preserved; search lowercases them on
/// the fly. `year` is numeric-like text kept exactly as the user entered it
/// and compared as a raw string during search.
///
/// # Fields
///
/// - `id`: Collection-unique identifier, assigned once
/// - `title`: Book title, case preserved
/// - `author`: Author name, case preserved
/// - `year`: Publication year as entered (numeric-like text)
/// - `is_complete`: Whether the book sits on the completed shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: String,
    pub is_complete: bool,
}

impl Book {
    /// Creates a book with an explicit id.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookrack::domain::Book;
    ///
    /// let book = Book::new(1, "Dune", "Frank Herbert", "1965", false);
    /// assert_eq!(book.id, 1);
    /// assert!(!book.is_complete);
    /// ```
    #[must_use]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        is_complete: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: year.into(),
            is_complete,
        }
    }

    /// Creates a book with a fresh id drawn from the current time.
    ///
    /// Ids are millisecond Unix timestamps, matching the monotonic id source
    /// the collection expects. Callers adding books in a tight loop must
    /// supply their own distinct ids via [`Book::new`].
    #[must_use]
    pub fn with_fresh_id(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        is_complete: bool,
    ) -> Self {
        Self::new(fresh_id(), title, author, year, is_complete)
    }
}

/// Returns a fresh collection id: the current Unix time in milliseconds.
#[must_use]
pub fn fresh_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_fields_verbatim() {
        let book = Book::new(42, "The Left Hand of Darkness", "Ursula K. Le Guin", "1969", true);
        assert_eq!(book.id, 42);
        assert_eq!(book.title, "The Left Hand of Darkness");
        assert_eq!(book.author, "Ursula K. Le Guin");
        assert_eq!(book.year, "1969");
        assert!(book.is_complete);
    }

    #[test]
    fn fresh_id_is_millisecond_scale() {
        // Any plausible "now" in milliseconds is far beyond the second scale.
        assert!(fresh_id() > 1_000_000_000_000);
    }
}
