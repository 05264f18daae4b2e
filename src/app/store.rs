//! The single-writer store.
//!
//! [`Store`] owns the canonical [`BookshelfState`] and is the only writer
//! path in the system: every change flows through [`Store::dispatch`], which
//! runs the reducer, adopts the returned state, persists the collection when
//! the action calls for it, and then notifies listeners in registration
//! order.
//!
//! # Construction
//!
//! The store is an explicitly constructed value owned by the application
//! entry point and handed to the view layer — there is no global singleton.
//! On construction it hydrates `books` from the persistence port (an absent
//! snapshot starts empty; a malformed one fails closed to empty with a
//! warning) and then issues one synthetic [`Action::Bootstrap`] dispatch so
//! state passes through the reducer before any listener attaches.
//!
//! # Persistence middleware
//!
//! The reducer stays pure; after adopting the next state the store consults
//! [`Action::persists`] and writes the `books` sequence — never the filtered
//! list — through the port. Availability is checked on every write, but the
//! user-facing notice for an unavailable medium is raised only once; after
//! that the shelf simply lives in memory for the rest of the process.
//!
//! # Re-entrancy
//!
//! A dispatch issued from inside a listener is queued and drained
//! sequentially by the outermost `dispatch` call, so listeners never observe
//! a half-applied transition and notification order stays deterministic.

use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::app::actions::Action;
use crate::app::reducer::reduce;
use crate::app::state::BookshelfState;
use crate::domain::Book;
use crate::storage::{BookRecord, SnapshotStorage};

/// A zero-argument callback invoked after every dispatch.
pub type Listener = Rc<dyn Fn()>;

/// Notice text raised when the persistence medium is unavailable.
const STORAGE_UNAVAILABLE_NOTICE: &str =
    "Storage is unavailable: changes will not survive this session";

/// The stateful holder exposing `state` / `dispatch` / `subscribe`.
///
/// Single-threaded by construction (`RefCell` and `Rc` inside); all
/// operations run synchronously to completion on the calling thread, and the
/// caller of `dispatch` regains control only after every listener has
/// finished.
pub struct Store {
    state: RefCell<BookshelfState>,
    listeners: RefCell<Vec<Listener>>,
    queue: RefCell<VecDeque<Action>>,
    draining: Cell<bool>,
    storage: Box<dyn SnapshotStorage>,
    storage_warned: Cell<bool>,
    storage_notice: RefCell<Option<String>>,
}

impl Store {
    /// Constructs a store over the given persistence port.
    ///
    /// Hydrates the collection from the port's snapshot, failing closed to an
    /// empty shelf when the snapshot is absent or unreadable, then dispatches
    /// the bootstrap action. The returned handle is shared with the view
    /// layer via `Rc`.
    #[must_use]
    pub fn new(storage: Box<dyn SnapshotStorage>) -> Rc<Self> {
        let books = match storage.load() {
            Ok(Some(records)) => {
                tracing::debug!(count = records.len(), "hydrated books from snapshot");
                records.into_iter().map(Book::from).collect()
            }
            Ok(None) => {
                tracing::debug!("no snapshot found, starting with an empty shelf");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "snapshot unreadable, starting with an empty shelf");
                Vec::new()
            }
        };

        let store = Rc::new(Self {
            state: RefCell::new(BookshelfState::with_books(books)),
            listeners: RefCell::new(Vec::new()),
            queue: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
            storage,
            storage_warned: Cell::new(false),
            storage_notice: RefCell::new(None),
        });

        if !store.storage.is_available() {
            store.warn_unavailable();
        }

        // One pass through the reducer before anyone subscribes.
        store.dispatch(Action::Bootstrap);
        store
    }

    /// Returns the live current state.
    ///
    /// Not a defensive copy: the guard borrows the store's own state. Drop
    /// it before calling [`Store::dispatch`]; only dispatch may mutate.
    pub fn state(&self) -> Ref<'_, BookshelfState> {
        self.state.borrow()
    }

    /// The one-time notice raised when the persistence medium is
    /// unavailable, if it has been raised.
    #[must_use]
    pub fn storage_notice(&self) -> Option<String> {
        self.storage_notice.borrow().clone()
    }

    /// Applies an action: reduce, adopt, persist if required, notify.
    ///
    /// Synchronous. Listeners run in registration order with no arguments.
    /// When called from inside a listener the action is queued and drained
    /// by the outermost dispatch instead of recursing.
    pub fn dispatch(&self, action: Action) {
        self.queue.borrow_mut().push_back(action);
        if self.draining.replace(true) {
            tracing::trace!("re-entrant dispatch queued for the outer drain");
            return;
        }

        while let Some(action) = self.pop_queued() {
            let current = self.state.take();
            let next = reduce(current, &action);
            *self.state.borrow_mut() = next;

            if action.persists() {
                self.persist();
            }

            self.notify();
        }

        self.draining.set(false);
    }

    /// Registers a listener at the end of the notification list.
    ///
    /// There is no unsubscribe and no deduplication; avoiding duplicate
    /// registration is the caller's responsibility.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn pop_queued(&self) -> Option<Action> {
        self.queue.borrow_mut().pop_front()
    }

    /// Invokes every listener in registration order.
    ///
    /// The list is snapshotted first so a listener that subscribes another
    /// listener does not invalidate the iteration; late subscribers are
    /// picked up from the next dispatch onward.
    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    /// Writes the canonical book list through the port, best-effort.
    ///
    /// Availability is checked per call, not cached; a failed or unavailable
    /// write degrades to in-memory operation and never aborts the dispatch.
    fn persist(&self) {
        if !self.storage.is_available() {
            self.warn_unavailable();
            return;
        }

        let records: Vec<BookRecord> = self
            .state
            .borrow()
            .books
            .iter()
            .map(BookRecord::from)
            .collect();

        if let Err(e) = self.storage.save(&records) {
            tracing::warn!(error = %e, "snapshot write failed, collection kept in memory");
        }
    }

    fn warn_unavailable(&self) {
        if self.storage_warned.replace(true) {
            return;
        }
        tracing::warn!("persistence medium unavailable, degrading to in-memory operation");
        *self.storage_notice.borrow_mut() = Some(STORAGE_UNAVAILABLE_NOTICE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Result;
    use std::rc::Weak;

    /// Test port that records every snapshot handed to `save`.
    struct RecordingStorage {
        available: bool,
        initial: Option<Vec<BookRecord>>,
        saves: Rc<RefCell<Vec<Vec<BookRecord>>>>,
    }

    impl RecordingStorage {
        fn empty() -> (Self, Rc<RefCell<Vec<Vec<BookRecord>>>>) {
            let saves = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    available: true,
                    initial: None,
                    saves: Rc::clone(&saves),
                },
                saves,
            )
        }

        fn with_snapshot(records: Vec<BookRecord>) -> Self {
            Self {
                available: true,
                initial: Some(records),
                saves: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn unavailable() -> Self {
            Self {
                available: false,
                initial: None,
                saves: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl SnapshotStorage for RecordingStorage {
        fn is_available(&self) -> bool {
            self.available
        }

        fn load(&self) -> Result<Option<Vec<BookRecord>>> {
            Ok(self.initial.clone())
        }

        fn save(&self, books: &[BookRecord]) -> Result<()> {
            self.saves.borrow_mut().push(books.to_vec());
            Ok(())
        }
    }

    /// Port whose snapshot is unreadable.
    struct CorruptStorage;

    impl SnapshotStorage for CorruptStorage {
        fn load(&self) -> Result<Option<Vec<BookRecord>>> {
            Err(crate::domain::BookrackError::Storage(
                "expected a JSON array".to_string(),
            ))
        }

        fn save(&self, _books: &[BookRecord]) -> Result<()> {
            Ok(())
        }
    }

    fn book(id: i64, title: &str) -> Book {
        Book::new(id, title, "author", "2000", false)
    }

    #[test]
    fn hydrates_books_from_snapshot() {
        let records = vec![
            BookRecord::from(&book(2, "B")),
            BookRecord::from(&book(1, "A")),
        ];
        let store = Store::new(Box::new(RecordingStorage::with_snapshot(records)));

        let state = store.state();
        assert_eq!(state.books.len(), 2);
        assert_eq!(state.books[0].id, 2);
        assert!(state.filtered_books.is_empty());
    }

    #[test]
    fn unreadable_snapshot_fails_closed_to_empty() {
        let store = Store::new(Box::new(CorruptStorage));
        assert!(store.state().books.is_empty());
    }

    #[test]
    fn bootstrap_does_not_persist() {
        let (storage, saves) = RecordingStorage::empty();
        let _store = Store::new(Box::new(storage));
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn persistence_trigger_set_is_exactly_the_mutations() {
        let (storage, saves) = RecordingStorage::empty();
        let store = Store::new(Box::new(storage));

        store.dispatch(Action::AddBook(book(1, "A")));
        assert_eq!(saves.borrow().len(), 1);

        store.dispatch(Action::FilterBook("a".to_string()));
        assert_eq!(saves.borrow().len(), 1);

        store.dispatch(Action::UpdateBook(book(1, "A2")));
        assert_eq!(saves.borrow().len(), 2);

        // Deleting a missing id still persists.
        store.dispatch(Action::DeleteBook { id: 99 });
        assert_eq!(saves.borrow().len(), 3);
    }

    #[test]
    fn persisted_snapshot_is_the_books_sequence_only() {
        let (storage, saves) = RecordingStorage::empty();
        let store = Store::new(Box::new(storage));

        store.dispatch(Action::AddBook(book(1, "A")));
        store.dispatch(Action::FilterBook("zzz".to_string()));
        store.dispatch(Action::AddBook(book(2, "B")));

        let last = saves.borrow().last().cloned().unwrap();
        let ids: Vec<i64> = last.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let (storage, _saves) = RecordingStorage::empty();
        let store = Store::new(Box::new(storage));

        let order = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        store.subscribe(move || first.borrow_mut().push("first"));
        store.subscribe(move || second.borrow_mut().push("second"));

        store.dispatch(Action::AddBook(book(1, "A")));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn listener_reads_the_adopted_state() {
        let (storage, _saves) = RecordingStorage::empty();
        let store = Store::new(Box::new(storage));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_handle = Rc::clone(&seen);
        let weak: Weak<Store> = Rc::downgrade(&store);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                seen_handle.borrow_mut().push(store.state().books.len());
            }
        });

        store.dispatch(Action::AddBook(book(1, "A")));
        store.dispatch(Action::AddBook(book(2, "B")));
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn reentrant_dispatch_is_queued_and_drained() {
        let (storage, _saves) = RecordingStorage::empty();
        let store = Store::new(Box::new(storage));

        // On the first notification, push a second action from inside the
        // listener; record the collection size seen at each notification.
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_handle = Rc::clone(&seen);
        let fired = Cell::new(false);
        let weak: Weak<Store> = Rc::downgrade(&store);
        store.subscribe(move || {
            let Some(store) = weak.upgrade() else { return };
            seen_handle.borrow_mut().push(store.state().books.len());
            if !fired.replace(true) {
                store.dispatch(Action::AddBook(book(2, "B")));
            }
        });

        store.dispatch(Action::AddBook(book(1, "A")));

        // Two notifications, each observing a fully applied transition.
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(store.state().books.len(), 2);
    }

    #[test]
    fn unavailable_medium_warns_once_and_skips_saves() {
        let store = Store::new(Box::new(RecordingStorage::unavailable()));
        assert!(store.storage_notice().is_some());

        let notice = store.storage_notice();
        store.dispatch(Action::AddBook(book(1, "A")));
        store.dispatch(Action::AddBook(book(2, "B")));

        // The shelf still works in memory and the notice is unchanged.
        assert_eq!(store.state().books.len(), 2);
        assert_eq!(store.storage_notice(), notice);
    }

    #[test]
    fn available_medium_raises_no_notice() {
        let (storage, _saves) = RecordingStorage::empty();
        let store = Store::new(Box::new(storage));
        store.dispatch(Action::AddBook(book(1, "A")));
        assert!(store.storage_notice().is_none());
    }
}
