//! Intent constructors: raw user input to typed actions.
//!
//! The store's vocabulary is the [`Action`] enum; everything the terminal
//! front end produces goes through the constructors here. This is the outer
//! edge of the interface — form fields in, commands out — and it owns the
//! add-versus-update decision and fresh id assignment so the reducer never
//! has to.

use crate::app::Action;
use crate::domain::Book;

/// The editable fields of the book form.
///
/// `id` is `None` (or non-positive) for a new book and the existing id when
/// editing. Submission always carries every field; partial updates do not
/// exist at the action level.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub year: String,
    pub is_complete: bool,
}

/// Builds the action for a submitted form.
///
/// A missing or non-positive id means "add": a fresh timestamp id is
/// assigned. Otherwise the form edits an existing book and becomes a full
/// replacement update under the same id.
#[must_use]
pub fn submit(form: BookForm) -> Action {
    match form.id {
        Some(id) if id > 0 => Action::UpdateBook(Book::new(
            id,
            form.title,
            form.author,
            form.year,
            form.is_complete,
        )),
        _ => Action::AddBook(Book::with_fresh_id(
            form.title,
            form.author,
            form.year,
            form.is_complete,
        )),
    }
}

/// Builds the search intent for a raw query string.
#[must_use]
pub fn search(query: impl Into<String>) -> Action {
    Action::FilterBook(query.into())
}

/// Moves a book to the other shelf: a full-replacement update with the
/// completion flag flipped and every other field carried over.
#[must_use]
pub fn toggle(book: &Book) -> Action {
    let mut moved = book.clone();
    moved.is_complete = !moved.is_complete;
    Action::UpdateBook(moved)
}

/// Builds the delete intent for a book.
#[must_use]
pub fn delete(book: &Book) -> Action {
    Action::DeleteBook { id: book.id }
}
