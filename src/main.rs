//! Terminal shim and entry point.
//!
//! This binary is the thin integration layer between the bookrack library
//! and the terminal: it owns the store, parses line-oriented commands into
//! intents, and keeps the shelves painted through a store subscription.
//!
//! # Startup Flow
//!
//! 1. Parse configuration from `BOOKRACK_*` environment variables
//! 2. Initialize tracing (file-targeted; stdout belongs to the renderer)
//! 3. Construct the store over JSON snapshot storage
//! 4. Subscribe the renderer, paint once, and enter the command loop
//!
//! # Commands
//!
//! - `add <title> | <author> | <year> [| done]` — put a new book on the shelf
//! - `edit <id> <title> | <author> | <year> [| done|unread]` — rewrite a book
//! - `toggle <id>` — move a book to the other shelf
//! - `delete <id>` — remove a book
//! - `search [query]` — filter by title, author, or year; empty query
//!   matches everything
//! - `tab` — expand the other shelf
//! - `list` — repaint
//! - `help` — command reference
//! - `quit` / `exit` — leave
//!
//! The renderer repaints after every dispatch; `tab` and `list` repaint
//! directly since they only touch view state.

use std::cell::RefCell;
use std::io::{self, BufRead, Write as _};
use std::rc::Rc;

use bookrack::ui::{intent, render};
use bookrack::{BookForm, Config, Store, Tab, Theme};

/// View state owned by the shim: which shelf is expanded, the last search,
/// and the active theme. Never enters the store.
struct ViewState {
    tab: Tab,
    search: Option<String>,
    theme: Theme,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add {
        title: String,
        author: String,
        year: String,
        done: bool,
    },
    Edit {
        id: i64,
        title: String,
        author: String,
        year: String,
        done: Option<bool>,
    },
    Toggle(i64),
    Delete(i64),
    Search(String),
    SwitchTab,
    List,
    Help,
    Quit,
    Invalid(String),
    Empty,
}

fn main() {
    let config = Config::from_env();
    bookrack::observability::init_tracing(&config, &config.resolved_data_dir());
    tracing::debug!("bookrack starting");

    let theme = bookrack::load_theme(&config);
    let store = bookrack::initialize(&config);

    let view = Rc::new(RefCell::new(ViewState {
        tab: Tab::Unread,
        search: None,
        theme,
    }));

    let weak = Rc::downgrade(&store);
    let view_handle = Rc::clone(&view);
    store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            let view = view_handle.borrow();
            render(
                &store.state(),
                view.tab,
                view.search.as_deref(),
                store.storage_notice(),
                &view.theme,
            );
        }
    });

    render_now(&store, &view);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt();
        let Some(Ok(line)) = lines.next() else { break };

        match parse_command(&line) {
            Command::Add {
                title,
                author,
                year,
                done,
            } => {
                store.dispatch(intent::submit(BookForm {
                    id: None,
                    title,
                    author,
                    year,
                    is_complete: done,
                }));
            }
            Command::Edit {
                id,
                title,
                author,
                year,
                done,
            } => {
                let existing = store.state().book(id).cloned();
                match existing {
                    Some(book) => {
                        store.dispatch(intent::submit(BookForm {
                            id: Some(id),
                            title,
                            author,
                            year,
                            is_complete: done.unwrap_or(book.is_complete),
                        }));
                    }
                    None => println!("no book with id {id}"),
                }
            }
            Command::Toggle(id) => {
                let existing = store.state().book(id).cloned();
                match existing {
                    Some(book) => store.dispatch(intent::toggle(&book)),
                    None => println!("no book with id {id}"),
                }
            }
            Command::Delete(id) => {
                let existing = store.state().book(id).cloned();
                match existing {
                    Some(book) => store.dispatch(intent::delete(&book)),
                    None => println!("no book with id {id}"),
                }
            }
            Command::Search(query) => {
                view.borrow_mut().search = Some(query.clone());
                store.dispatch(intent::search(query));
            }
            Command::SwitchTab => {
                {
                    let mut view = view.borrow_mut();
                    view.tab = view.tab.toggled();
                }
                render_now(&store, &view);
            }
            Command::List => render_now(&store, &view),
            Command::Help => print_help(),
            Command::Invalid(message) => println!("{message}"),
            Command::Empty => {}
            Command::Quit => break,
        }
    }

    tracing::debug!("bookrack exiting");
}

/// Repaints outside of a dispatch, for view-only changes.
fn render_now(store: &Store, view: &Rc<RefCell<ViewState>>) {
    let view = view.borrow();
    render(
        &store.state(),
        view.tab,
        view.search.as_deref(),
        store.storage_notice(),
        &view.theme,
    );
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn print_help() {
    println!("commands:");
    println!("  add <title> | <author> | <year> [| done]");
    println!("  edit <id> <title> | <author> | <year> [| done|unread]");
    println!("  toggle <id>      move a book to the other shelf");
    println!("  delete <id>      remove a book");
    println!("  search [query]   filter by title, author, or year");
    println!("  tab              expand the other shelf");
    println!("  list             repaint the shelves");
    println!("  quit             exit");
}

/// Parses one input line into a command.
fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let (word, rest) = split_word(trimmed);
    match word {
        "add" => parse_add(rest),
        "edit" => parse_edit(rest),
        "toggle" => parse_id(rest)
            .map_or_else(|| usage("toggle <id>"), Command::Toggle),
        "delete" => parse_id(rest)
            .map_or_else(|| usage("delete <id>"), Command::Delete),
        "search" => Command::Search(rest.trim().to_string()),
        "tab" => Command::SwitchTab,
        "list" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command: {other} (try help)")),
    }
}

fn parse_add(rest: &str) -> Command {
    let fields = split_fields(rest);
    match fields.as_slice() {
        [title, author, year] if !title.is_empty() => Command::Add {
            title: title.clone(),
            author: author.clone(),
            year: year.clone(),
            done: false,
        },
        [title, author, year, flag] if !title.is_empty() && flag.eq_ignore_ascii_case("done") => {
            Command::Add {
                title: title.clone(),
                author: author.clone(),
                year: year.clone(),
                done: true,
            }
        }
        _ => usage("add <title> | <author> | <year> [| done]"),
    }
}

fn parse_edit(rest: &str) -> Command {
    let (id_word, fields_part) = split_word(rest.trim());
    let Some(id) = parse_id(id_word) else {
        return usage("edit <id> <title> | <author> | <year> [| done|unread]");
    };

    let fields = split_fields(fields_part);
    let (title, author, year, done) = match fields.as_slice() {
        [title, author, year] if !title.is_empty() => {
            (title.clone(), author.clone(), year.clone(), None)
        }
        [title, author, year, flag] if !title.is_empty() => {
            let done = if flag.eq_ignore_ascii_case("done") {
                Some(true)
            } else if flag.eq_ignore_ascii_case("unread") {
                Some(false)
            } else {
                return usage("edit <id> <title> | <author> | <year> [| done|unread]");
            };
            (title.clone(), author.clone(), year.clone(), done)
        }
        _ => return usage("edit <id> <title> | <author> | <year> [| done|unread]"),
    };

    Command::Edit {
        id,
        title,
        author,
        year,
        done,
    }
}

fn usage(text: &str) -> Command {
    Command::Invalid(format!("usage: {text}"))
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (text, ""),
    }
}

fn split_fields(rest: &str) -> Vec<String> {
    rest.split('|').map(|f| f.trim().to_string()).collect()
}

fn parse_id(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
