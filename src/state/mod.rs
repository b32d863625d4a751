//! Application state management module.
//!
//! Holds the banner driver together with the ambient signals the renderer
//! needs (theme and terminal background) and decides when the application
//! has shown enough to exit.

use crate::banner::FrameDriver;
use crate::logger::LogBuffer;
use crate::ui::{TerminalBackground, Theme};
use std::time::{Duration, Instant};

/// How long the settled banner stays on screen before exiting.
///
pub const EXIT_DELAY_MS: u64 = 1500;

pub struct State {
    driver: FrameDriver,
    theme: Theme,
    background: TerminalBackground,
    hold: bool,
    log: LogBuffer,
    completed_at: Option<Instant>,
}

impl State {
    /// Return a new state around an unmounted driver.
    ///
    pub fn new(
        driver: FrameDriver,
        theme: Theme,
        background: TerminalBackground,
        hold: bool,
    ) -> Self {
        State {
            driver,
            theme,
            background,
            hold,
            log: LogBuffer::default(),
            completed_at: None,
        }
    }

    /// Show the entries captured in `log` below the banner.
    ///
    pub fn with_log(mut self, log: LogBuffer) -> Self {
        self.log = log;
        self
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn background(&self) -> TerminalBackground {
        self.background
    }

    pub fn is_holding(&self) -> bool {
        self.hold
    }

    pub fn log_entries(&self) -> Vec<String> {
        self.log.entries()
    }

    /// Mount the banner driver.
    ///
    pub fn mount(&mut self, now: Instant) {
        self.driver.mount(now);
        self.note_completion(now);
    }

    /// Advance the banner if its timer is due.
    ///
    pub fn tick(&mut self, now: Instant) {
        self.driver.poll(now);
        self.note_completion(now);
    }

    /// Whether the application should exit on its own.
    ///
    pub fn should_exit(&self, now: Instant) -> bool {
        match self.completed_at {
            Some(at) if !self.hold => {
                now.saturating_duration_since(at) >= Duration::from_millis(EXIT_DELAY_MS)
            }
            _ => false,
        }
    }

    fn note_completion(&mut self, now: Instant) {
        if !self.driver.is_complete() {
            self.completed_at = None;
        } else if self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }
}
