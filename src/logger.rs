//! Logging collaborators.
//!
//! Components that need to report failures without surfacing them take a
//! [`RunnerLogger`]. The no-op logger is the default; [`LogLogger`] forwards
//! to the `log` facade, which the application routes to `tui-logger`, and
//! keeps a copy of each message in a [`LogBuffer`] for the log pane.

use log::error;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept in a [`LogBuffer`].
///
const MAX_LOG_ENTRIES: usize = 1000;

/// Error-level sink for messages that must not interrupt the caller.
///
pub trait RunnerLogger: Send + Sync {
    fn error(&self, message: &str);
}

/// Logger that discards everything.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl RunnerLogger for NoopLogger {
    fn error(&self, _message: &str) {}
}

/// Shared list of error messages, readable from the render loop while the
/// preference saver writes to it.
///
#[derive(Debug, Default, Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    /// Add an entry, dropping the oldest one beyond the limit.
    ///
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
            if entries.len() > MAX_LOG_ENTRIES {
                entries.remove(0);
            }
        }
    }

    /// Return a snapshot of the captured entries, oldest first.
    ///
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.is_empty())
            .unwrap_or(true)
    }
}

/// Logger forwarding to the global `log` facade and capturing each message.
///
#[derive(Debug, Default, Clone)]
pub struct LogLogger {
    buffer: LogBuffer,
}

impl LogLogger {
    pub fn new(buffer: LogBuffer) -> Self {
        LogLogger { buffer }
    }
}

impl RunnerLogger for LogLogger {
    fn error(&self, message: &str) {
        error!("{}", message);
        self.buffer.push(message.to_string());
    }
}
