//! View model types representing renderable shelf state.
//!
//! View models are immutable snapshots computed from the store's state plus
//! the renderer's own view state (active tab, last search). They contain no
//! business logic, only display-ready data, and are consumed by the
//! component renderers.

use crate::app::BookshelfState;
use crate::ui::tabs::Tab;

/// Complete view model for one render pass.
#[derive(Debug, Clone)]
pub struct ShelfViewModel {
    /// Cards for the unread shelf, in collection order.
    pub unread: Vec<BookCard>,

    /// Cards for the completed shelf, in collection order.
    pub completed: Vec<BookCard>,

    /// Which shelf is expanded.
    pub active_tab: Tab,

    /// The last submitted search query, shown above the shelves.
    pub search_query: Option<String>,

    /// Whether the visible list came from the cached search result.
    pub showing_filtered: bool,

    /// One-time storage degradation notice, if raised.
    pub notice: Option<String>,
}

/// Display information for a single book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: String,
    pub is_complete: bool,
}

impl ShelfViewModel {
    /// Computes a view model from store state and view state.
    ///
    /// Visible-list rule, kept exactly as the collection behaves: the cached
    /// search result is shown when it is non-empty, otherwise the full
    /// collection. An empty result is therefore indistinguishable from "no
    /// search active" — a search that matches nothing falls back to showing
    /// everything. Known quirk, deliberately not papered over here.
    #[must_use]
    pub fn compute(
        state: &BookshelfState,
        active_tab: Tab,
        search_query: Option<&str>,
        notice: Option<String>,
    ) -> Self {
        let showing_filtered = !state.filtered_books.is_empty();
        let visible = if showing_filtered {
            &state.filtered_books
        } else {
            &state.books
        };

        let mut unread = Vec::new();
        let mut completed = Vec::new();
        for book in visible {
            let card = BookCard {
                id: book.id,
                title: book.title.clone(),
                author: book.author.clone(),
                year: book.year.clone(),
                is_complete: book.is_complete,
            };
            if book.is_complete {
                completed.push(card);
            } else {
                unread.push(card);
            }
        }

        Self {
            unread,
            completed,
            active_tab,
            search_query: search_query.map(str::to_string),
            showing_filtered,
            notice,
        }
    }

    /// Cards on the expanded shelf.
    #[must_use]
    pub fn active_cards(&self) -> &[BookCard] {
        match self.active_tab {
            Tab::Unread => &self.unread,
            Tab::Completed => &self.completed,
        }
    }
}
