//! Filesystem path utilities.
//!
//! This module resolves where bookrack keeps its data (the JSON snapshot and
//! the log file) and expands tilde-prefixed paths from configuration.

use std::env;
use std::path::PathBuf;

/// Returns the default data directory.
///
/// Resolution order: `$XDG_DATA_HOME/bookrack`, then
/// `$HOME/.local/share/bookrack`, then `./.bookrack` as a last resort. The
/// snapshot file `books.json` and the log file live inside this directory.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("bookrack");
        }
    }

    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("bookrack");
        }
    }

    PathBuf::from(".bookrack")
}

/// Expands a leading tilde against the current `$HOME`.
///
/// Paths without a tilde pass through unchanged, as does everything when
/// `$HOME` is unset.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let home = env::var("HOME").unwrap_or_default();
    expand_tilde_with(path, &home)
}

fn expand_tilde_with(path: &str, home: &str) -> String {
    if home.is_empty() {
        return path.to_string();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home.to_string()
    } else {
        path.to_string()
    }
}
