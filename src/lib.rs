//! Bookrack: a terminal bookshelf manager.
//!
//! Bookrack keeps a single user's book collection — add, edit, delete, move
//! between shelves, search — persisted as a JSON snapshot and rendered as two
//! tabbed shelves (unread / completed) in the terminal.
//!
//! # Architecture
//!
//! The crate is built around a single-writer store with unidirectional data
//! flow:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Core (app/)                            │
//! │  - Store: state / dispatch / subscribe              │
//! │  - Reducer: pure state transitions                  │
//! │  - Actions: the command vocabulary                  │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────┐                  ┌───────────────┐
//! │ View Layer    │                  │ Storage Layer │
//! │ (ui/)         │                  │ (storage/)    │
//! │ - View models │                  │ - JSON file   │
//! │ - Intents     │                  │ - In-memory   │
//! │ - Components  │                  │ - Records     │
//! └───────────────┘                  └───────────────┘
//!         │                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Book model, errors (domain/)                     │
//! │  - Paths (infrastructure/)                          │
//! │  - Tracing setup (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Every change flows one way: the shim parses input, the intent
//! constructors build an [`Action`], [`Store::dispatch`] runs the reducer
//! and persists the collection when the action mutates it, and the
//! subscribed renderer repaints both shelves from the adopted state.
//!
//! The store is an explicitly constructed value owned by the entry point;
//! there is no global state.
//!
//! # Example
//!
//! ```
//! use bookrack::storage::MemoryStorage;
//! use bookrack::{Action, Book, Store};
//!
//! let store = Store::new(Box::new(MemoryStorage::new()));
//!
//! store.dispatch(Action::AddBook(Book::new(1, "Dune", "Frank Herbert", "1965", false)));
//! store.dispatch(Action::FilterBook("herbert".to_string()));
//!
//! assert_eq!(store.state().books.len(), 1);
//! assert_eq!(store.state().filtered_books.len(), 1);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{reduce, Action, BookshelfState, Store};
pub use domain::{Book, BookrackError, Result};
pub use ui::{BookForm, Tab, Theme};

use std::path::PathBuf;
use std::rc::Rc;

/// Runtime configuration, parsed from the environment.
///
/// # Variables
///
/// - `BOOKRACK_DATA_DIR`: where the snapshot and log file live
///   (default: XDG data dir, see [`infrastructure::paths`])
/// - `BOOKRACK_LOG`: tracing filter directive (default: `info`)
/// - `BOOKRACK_THEME_FILE`: path to a TOML theme (default: built-in `paper`)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Override for the data directory.
    pub data_dir: Option<String>,

    /// Tracing filter directive.
    pub log_filter: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,
}

impl Config {
    /// Reads configuration from `BOOKRACK_*` environment variables.
    ///
    /// Unset and empty variables fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            data_dir: non_empty("BOOKRACK_DATA_DIR"),
            log_filter: non_empty("BOOKRACK_LOG"),
            theme_file: non_empty("BOOKRACK_THEME_FILE"),
        }
    }

    /// Resolves the effective data directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.as_ref().map_or_else(
            infrastructure::default_data_dir,
            |dir| PathBuf::from(infrastructure::expand_tilde(dir)),
        )
    }
}

/// Loads the configured theme, falling back to the built-in default.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(Theme::default, |path| {
        Theme::from_file(infrastructure::expand_tilde(path)).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load theme, using default");
            Theme::default()
        })
    })
}

/// Constructs the store over JSON snapshot storage.
///
/// The snapshot lives at `books.json` inside the resolved data directory.
/// When that location cannot be prepared the store falls back to an
/// unavailable in-memory port: the shelf still works for the session and the
/// store raises its one-time degradation notice.
#[must_use]
pub fn initialize(config: &Config) -> Rc<Store> {
    let snapshot_path = config.resolved_data_dir().join("books.json");

    let storage: Box<dyn storage::SnapshotStorage> =
        match storage::JsonStorage::new(snapshot_path) {
            Ok(json) => Box::new(json),
            Err(e) => {
                tracing::warn!(error = %e, "snapshot location unusable, storage disabled");
                Box::new(storage::MemoryStorage::disabled())
            }
        };

    Store::new(storage)
}
