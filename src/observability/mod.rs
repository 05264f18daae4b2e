//! Tracing initialization.
//!
//! Sets up the `tracing` subscriber for the process. Log lines go to a file
//! under the data directory, never to stdout — that surface belongs to the
//! shelf renderer, and interleaving log output with ANSI repaints would
//! corrupt it.

use crate::Config;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
const LOG_FILE: &str = "bookrack.log";

/// Initializes the tracing subscriber with file output.
///
/// The filter comes from `config.log_filter` (an `EnvFilter` directive such
/// as `"debug"` or `"bookrack=trace"`), defaulting to `"info"`. Idempotent:
/// only the first call installs a subscriber.
///
/// Initialization is best-effort. If the data directory or the log file
/// cannot be created, the function returns silently and the process runs
/// without log output — observability never blocks the shelf.
pub fn init_tracing(config: &Config, data_dir: &Path) {
    let filter = config
        .log_filter
        .clone()
        .unwrap_or_else(|| "info".to_string());

    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
