//! Write-back of the banner display preference.
//!
//! Once a "show once" banner has finished, the driver asks for the
//! preference to be flipped to "never". The request travels over a channel
//! to a background saver so the render loop never waits on disk.

use crate::config::ConfigError;
use crate::logger::RunnerLogger;
use log::*;
use std::sync::{mpsc, Arc};

pub const BANNER_KEY: &str = "banner";

/// Key/value preference persistence.
///
pub trait PreferenceStore: Send + Sync {
    fn write_key(&self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// A single preference write, carrying the logger that reports failures.
///
pub struct PreferenceEvent {
    pub key: String,
    pub value: String,
    pub logger: Arc<dyn RunnerLogger>,
}

pub type PreferenceSender = mpsc::Sender<PreferenceEvent>;
pub type PreferenceReceiver = mpsc::Receiver<PreferenceEvent>;

/// Apply a preference write. Failures are reported to the event's logger
/// and never returned.
///
pub fn handle(event: PreferenceEvent, store: &dyn PreferenceStore) {
    debug!("Writing preference '{}' = '{}'...", event.key, event.value);
    match store.write_key(&event.key, &event.value) {
        Ok(()) => info!("Saved {} preference as '{}'.", event.key, event.value),
        Err(e) => event
            .logger
            .error(&format!("Failed to update banner preference: {}", e)),
    }
}

/// Drain preference events until every sender is dropped.
///
pub fn run_saver(receiver: PreferenceReceiver, store: &dyn PreferenceStore) {
    while let Ok(event) = receiver.recv() {
        handle(event, store);
    }
    debug!("Preference saver stopped.");
}
