#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Simple logging utilities for the SMD crates.
//!
//! Library code reports through [`trace`] and [`warn`] with a module prefix;
//! binaries call [`init`] once to decide where those events go.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Emits a trace event tagged with the reporting module.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(target: "smd", module = module, "{}", msg);
}

/// Emits a warning tagged with the reporting module.
pub fn warn(module: &str, msg: &str) {
    tracing::warn!(target: "smd", module = module, "{}", msg);
}

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `level`. When `file` is given, events are
/// appended to it instead of stderr. Returns `false` if a subscriber was
/// already installed or the log file could not be opened.
pub fn init(level: &str, file: Option<&Path>) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match file {
        Some(path) => {
            let Ok(log_file) = OpenOptions::new().create(true).append(true).open(path) else {
                return false;
            };
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .try_init()
                .is_ok()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}
