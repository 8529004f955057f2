//! Tracing setup
//!
//! Installs the global `tracing` subscriber once per process. The filter comes
//! from `RUST_LOG` when set, otherwise from the configured log level. The
//! terminal form logs to a file because stderr shares the screen.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{FinanceError, FinanceResult};

static TRACING_INIT: Once = Once::new();

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter: `RUST_LOG` wins over the configured level
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the global tracing subscriber
///
/// Later calls are no-ops, so tests and nested entry points may call it
/// freely.
pub fn init_tracing(default_level: &str, target: LogTarget) -> FinanceResult<()> {
    let file = match &target {
        LogTarget::Stderr => None,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| FinanceError::Io(format!("Failed to open log file: {}", e)))?;
            Some(file)
        }
    };
    let filter = build_filter(default_level);

    TRACING_INIT.call_once(move || {
        let builder = fmt().with_env_filter(filter);
        // A subscriber may already be installed by an embedding program
        let _ = match file {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        };
        tracing::debug!(log_target = ?target, "tracing initialized");
    });

    Ok(())
}
