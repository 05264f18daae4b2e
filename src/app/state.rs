//! Shelf state container.
//!
//! This module defines [`BookshelfState`], the single aggregate the store
//! owns. It separates the canonical book list from the derived search result
//! so the reducer can mutate one without touching the other.
//!
//! # State Components
//!
//! - **Books**: the canonical collection, most-recently-added first
//! - **Filtered books**: cached result of the last search action
//!
//! The filtered list is a snapshot, not a live view: it is recomputed only by
//! a filter action and goes stale when `books` mutates in between. An empty
//! filtered list means "no filter active", not "nothing matched" — the
//! renderer falls back to the full collection in that case (see
//! [`crate::ui::viewmodel`]).

use crate::domain::Book;

/// The store's sole mutable aggregate.
///
/// Created once at startup (hydrated from the snapshot if one exists) and
/// mutated exclusively through the reducer. At most one book per id lives in
/// `books` at any time; `filtered_books` is always a subset (by id) of
/// `books` as of the last filter action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookshelfState {
    /// Canonical book collection, newest additions first.
    pub books: Vec<Book>,

    /// Result of the last search, in `books` order.
    ///
    /// Empty means "no active filter". Stale after `books` mutates, until
    /// the next filter action re-runs.
    pub filtered_books: Vec<Book>,
}

impl BookshelfState {
    /// Creates a state with the given collection and no active filter.
    #[must_use]
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            filtered_books: Vec::new(),
        }
    }

    /// Looks up a book by id in the canonical collection.
    #[must_use]
    pub fn book(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let state = BookshelfState::default();
        assert!(state.books.is_empty());
        assert!(state.filtered_books.is_empty());
    }

    #[test]
    fn book_lookup_by_id() {
        let state = BookshelfState::with_books(vec![
            Book::new(2, "B", "Y", "2001", false),
            Book::new(1, "A", "X", "2000", false),
        ]);
        assert_eq!(state.book(1).map(|b| b.title.as_str()), Some("A"));
        assert!(state.book(3).is_none());
    }
}
