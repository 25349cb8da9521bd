//! File-backed tracing setup.
//!
//! The terminal belongs to the UI while the application runs, so diagnostics
//! go to a log file under the data directory instead of stderr. Logging
//! setup failures are not fatal; the application simply runs without a
//! subscriber.

use std::fs::{self, File};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE: &str = "saltscout.log";
const FILTER_ENV: &str = "SALTSCOUT_LOG";

/// Install the global tracing subscriber. Safe to call once at startup.
pub fn initialize() {
    let Ok(dir) = app_dirs::get_data_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join(LOG_FILE)) else {
        return;
    };

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
