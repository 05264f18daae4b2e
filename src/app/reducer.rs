//! The state transition function.
//!
//! A pure reducer: given the current state and an action, it returns the next
//! state. No I/O happens here — snapshot writes are the store's concern,
//! keyed off [`Action::persists`] after the transition is adopted. The
//! reducer owns its input state and is free to mutate it before returning;
//! the store adopts exactly what comes back.

use crate::app::actions::Action;
use crate::app::state::BookshelfState;
use crate::domain::Book;

/// Computes the next state from the current state and an action.
///
/// Transition contract per variant:
///
/// - `AddBook`: prepend the payload to `books` (most-recent-first order).
///   No id-collision check; callers guarantee fresh ids.
/// - `DeleteBook`: remove the matching book, preserving the relative order
///   of the rest. No-op if no id matches.
/// - `UpdateBook`: replace the book sharing the payload's id with the
///   payload itself, position preserved. Full replacement. No-op if no id
///   matches.
/// - `FilterBook`: recompute `filtered_books` from `books` and the query.
///   The canonical list is untouched.
/// - `Bootstrap`: state unchanged.
pub fn reduce(mut state: BookshelfState, action: &Action) -> BookshelfState {
    match action {
        Action::AddBook(book) => {
            tracing::debug!(id = book.id, title = %book.title, "adding book");
            state.books.insert(0, book.clone());
            state
        }
        Action::DeleteBook { id } => {
            let before = state.books.len();
            state.books.retain(|book| book.id != *id);
            tracing::debug!(id, removed = before - state.books.len(), "deleting book");
            state
        }
        Action::UpdateBook(book) => {
            if let Some(slot) = state.books.iter_mut().find(|b| b.id == book.id) {
                *slot = book.clone();
                tracing::debug!(id = book.id, "updated book");
            } else {
                tracing::debug!(id = book.id, "update matched no book");
            }
            state
        }
        Action::FilterBook(query) => {
            state.filtered_books = state
                .books
                .iter()
                .filter(|book| matches_query(book, query))
                .cloned()
                .collect();
            tracing::debug!(
                query = %query,
                matched = state.filtered_books.len(),
                "filter applied"
            );
            state
        }
        Action::Bootstrap => state,
    }
}

/// Search predicate: case-insensitive substring on title and author, raw
/// substring on the year text.
///
/// The empty query matches every book, so filtering with `""` fills
/// `filtered_books` with the whole collection rather than clearing it.
fn matches_query(book: &Book, query: &str) -> bool {
    let needle = query.to_lowercase();
    book.title.to_lowercase().contains(&needle)
        || book.author.to_lowercase().contains(&needle)
        || book.year.contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, year: &str, complete: bool) -> Book {
        Book::new(id, title, author, year, complete)
    }

    fn dispatch_all(actions: &[Action]) -> BookshelfState {
        actions
            .iter()
            .fold(BookshelfState::default(), |state, action| {
                reduce(state, action)
            })
    }

    #[test]
    fn add_prepends_most_recent_first() {
        let state = dispatch_all(&[
            Action::AddBook(book(1, "A", "X", "2000", false)),
            Action::AddBook(book(2, "B", "Y", "2001", false)),
            Action::AddBook(book(3, "C", "Z", "2002", false)),
        ]);

        assert_eq!(state.books.len(), 3);
        let ids: Vec<i64> = state.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn delete_preserves_order_of_rest() {
        let mut state = dispatch_all(&[
            Action::AddBook(book(1, "A", "X", "2000", false)),
            Action::AddBook(book(2, "B", "Y", "2001", false)),
            Action::AddBook(book(3, "C", "Z", "2002", false)),
        ]);

        state = reduce(state, &Action::DeleteBook { id: 2 });
        let ids: Vec<i64> = state.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut state = dispatch_all(&[
            Action::AddBook(book(1, "A", "X", "2000", false)),
            Action::AddBook(book(2, "B", "Y", "2001", false)),
        ]);

        state = reduce(state, &Action::DeleteBook { id: 1 });
        let after_first = state.clone();
        state = reduce(state, &Action::DeleteBook { id: 1 });
        assert_eq!(state, after_first);
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let before = dispatch_all(&[Action::AddBook(book(1, "A", "X", "2000", false))]);
        let after = reduce(before.clone(), &Action::DeleteBook { id: 99 });
        assert_eq!(after, before);
    }

    #[test]
    fn update_replaces_fully_in_place() {
        let mut state = dispatch_all(&[
            Action::AddBook(book(1, "A", "X", "2000", false)),
            Action::AddBook(book(2, "B", "Y", "2001", false)),
        ]);

        state = reduce(
            state,
            &Action::UpdateBook(book(1, "A2", "X2", "1999", true)),
        );

        // Position unchanged: id 1 is still last.
        assert_eq!(state.books[1].id, 1);
        assert_eq!(state.books[1].title, "A2");
        assert_eq!(state.books[1].author, "X2");
        assert_eq!(state.books[1].year, "1999");
        assert!(state.books[1].is_complete);
        // The other entry is untouched.
        assert_eq!(state.books[0], book(2, "B", "Y", "2001", false));
    }

    #[test]
    fn update_missing_id_is_noop() {
        let before = dispatch_all(&[Action::AddBook(book(1, "A", "X", "2000", false))]);
        let after = reduce(
            before.clone(),
            &Action::UpdateBook(book(9, "Ghost", "?", "0", false)),
        );
        assert_eq!(after, before);
    }

    #[test]
    fn filter_matches_title_author_case_insensitive() {
        let state = dispatch_all(&[
            Action::AddBook(book(1, "Dune", "Frank Herbert", "1965", false)),
            Action::AddBook(book(2, "Hyperion", "Dan Simmons", "1989", false)),
            Action::FilterBook("dUnE".to_string()),
        ]);
        assert_eq!(state.filtered_books.len(), 1);
        assert_eq!(state.filtered_books[0].id, 1);

        let state = reduce(state, &Action::FilterBook("simmons".to_string()));
        assert_eq!(state.filtered_books.len(), 1);
        assert_eq!(state.filtered_books[0].id, 2);
    }

    #[test]
    fn filter_matches_year_as_raw_substring() {
        let state = dispatch_all(&[
            Action::AddBook(book(1, "A", "X", "2000", false)),
            Action::AddBook(book(2, "B", "Y", "2001", false)),
            Action::FilterBook("2000".to_string()),
        ]);
        assert_eq!(state.filtered_books.len(), 1);
        assert_eq!(state.filtered_books[0].id, 1);
    }

    #[test]
    fn empty_query_fills_filter_with_every_book() {
        let state = dispatch_all(&[
            Action::AddBook(book(1, "A", "X", "2000", false)),
            Action::AddBook(book(2, "B", "Y", "2001", false)),
            Action::FilterBook(String::new()),
        ]);
        // Substring match against "" is always true, so the filtered list
        // holds the full collection — it must not collapse to "no filter".
        assert_eq!(state.filtered_books.len(), 2);
        assert_eq!(state.filtered_books, state.books);
    }

    #[test]
    fn filter_does_not_touch_canonical_list() {
        let state = dispatch_all(&[
            Action::AddBook(book(1, "A", "X", "2000", false)),
            Action::AddBook(book(2, "B", "Y", "2001", false)),
            Action::FilterBook("nothing-matches-this".to_string()),
        ]);
        assert_eq!(state.books.len(), 2);
        assert!(state.filtered_books.is_empty());
    }

    #[test]
    fn filter_goes_stale_after_update() {
        // The concrete scenario: add two, filter by year, update the match.
        let mut state = dispatch_all(&[
            Action::AddBook(book(1, "A", "X", "2000", false)),
            Action::AddBook(book(2, "B", "Y", "2001", false)),
        ]);
        let ids: Vec<i64> = state.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);

        state = reduce(state, &Action::FilterBook("2000".to_string()));
        assert_eq!(state.filtered_books.len(), 1);
        assert_eq!(state.filtered_books[0].id, 1);

        state = reduce(state, &Action::UpdateBook(book(1, "A", "X", "2000", true)));
        assert!(state.books[1].is_complete);
        assert_eq!(state.books[1].id, 1);

        // The cached filter still shows the pre-update copy until the next
        // filter action re-runs.
        assert!(!state.filtered_books[0].is_complete);

        state = reduce(state, &Action::FilterBook("2000".to_string()));
        assert!(state.filtered_books[0].is_complete);
    }

    #[test]
    fn bootstrap_leaves_state_unchanged() {
        let before = dispatch_all(&[Action::AddBook(book(1, "A", "X", "2000", false))]);
        let after = reduce(before.clone(), &Action::Bootstrap);
        assert_eq!(after, before);
    }
}
