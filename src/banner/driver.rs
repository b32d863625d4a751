//! Timer-driven frame driver for the banner animation.
//!
//! The driver is a small state machine over the current frame index. Each
//! evaluation either completes the animation or schedules a single timer for
//! the current frame's duration; when that timer fires the index advances by
//! exactly one and the driver evaluates again. Every scheduled timer carries
//! a [`TimerToken`]; cancelling bumps the driver's generation so that stale
//! tokens are ignored.

use super::animation::banner_animation;
use super::preference::{PreferenceEvent, PreferenceSender, BANNER_KEY};
use super::BannerConfig;
use crate::logger::{NoopLogger, RunnerLogger};
use log::*;
use std::sync::Arc;
use std::time::Instant;

/// Callback invoked once the animation is finished or skipped.
///
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Caller-facing configuration of the banner.
///
#[derive(Default)]
pub struct BannerOptions {
    pub animation_complete: Option<CompletionCallback>,
    /// Start on the final frame.
    pub completed: bool,
    pub banner_config: Option<BannerConfig>,
    pub logger_override: Option<Arc<dyn RunnerLogger>>,
}

/// Handle to a scheduled frame advance.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    due: Instant,
}

impl TimerToken {
    pub fn due(&self) -> Instant {
        self.due
    }
}

pub struct FrameDriver {
    frame_idx: usize,
    last_idx: usize,
    banner_config: Option<BannerConfig>,
    screen_reader: bool,
    animation_complete: Option<CompletionCallback>,
    logger: Arc<dyn RunnerLogger>,
    preferences: Option<PreferenceSender>,
    timer: Option<TimerToken>,
    generation: u64,
    mounted: bool,
    skipped: bool,
}

impl FrameDriver {
    /// Return a new, unmounted driver.
    ///
    pub fn new(options: BannerOptions, screen_reader: bool) -> Self {
        let last_idx = banner_animation().last_index();
        FrameDriver {
            frame_idx: if options.completed { last_idx } else { 0 },
            last_idx,
            banner_config: options.banner_config,
            screen_reader,
            animation_complete: options.animation_complete,
            logger: options
                .logger_override
                .unwrap_or_else(|| Arc::new(NoopLogger) as Arc<dyn RunnerLogger>),
            preferences: None,
            timer: None,
            generation: 0,
            mounted: false,
            skipped: false,
        }
    }

    /// Route preference writes to the given saver.
    ///
    pub fn with_preference_sender(mut self, sender: PreferenceSender) -> Self {
        self.preferences = Some(sender);
        self
    }

    pub fn frame_idx(&self) -> usize {
        self.frame_idx
    }

    pub fn banner_config(&self) -> Option<BannerConfig> {
        self.banner_config
    }

    /// Whether the animation has settled on its last frame or was skipped.
    ///
    pub fn is_complete(&self) -> bool {
        self.mounted && (self.skipped || self.frame_idx >= self.last_idx)
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Return the currently scheduled timer, if any.
    ///
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.timer
    }

    /// Whether anything should be drawn for the current configuration.
    ///
    pub fn should_render(&self) -> bool {
        !self.screen_reader
            && matches!(
                self.banner_config,
                Some(BannerConfig::Always) | Some(BannerConfig::Once)
            )
    }

    /// Start the animation.
    ///
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        debug!("Mounting banner at frame {}...", self.frame_idx);
        self.mounted = true;
        self.evaluate(now);
    }

    /// Tear the driver down, cancelling any pending timer.
    ///
    pub fn unmount(&mut self) {
        if self.mounted {
            debug!("Unmounting banner at frame {}.", self.frame_idx);
        }
        self.cancel();
        self.mounted = false;
    }

    /// Change the display policy. Any pending timer is cancelled before the
    /// driver re-evaluates.
    ///
    pub fn set_banner_config(&mut self, banner_config: Option<BannerConfig>, now: Instant) {
        if self.banner_config == banner_config {
            return;
        }
        self.banner_config = banner_config;
        self.cancel();
        if self.mounted {
            self.evaluate(now);
        }
    }

    /// Fire the pending timer if it is due. Returns true if the frame
    /// advanced.
    ///
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.timer {
            Some(token) if token.due <= now => self.fire(token, now),
            _ => false,
        }
    }

    /// Fire a specific timer. Tokens from cancelled timers are ignored.
    /// Returns true if the frame advanced.
    ///
    pub fn fire(&mut self, token: TimerToken, now: Instant) -> bool {
        if !self.mounted || self.timer != Some(token) || token.generation != self.generation {
            trace!("Ignoring stale banner timer.");
            return false;
        }
        self.timer = None;
        self.frame_idx = (self.frame_idx + 1).min(self.last_idx);
        trace!("Advanced banner to frame {}.", self.frame_idx);
        self.evaluate(now);
        true
    }

    fn cancel(&mut self) {
        self.generation += 1;
        self.timer = None;
    }

    fn evaluate(&mut self, now: Instant) {
        if self.screen_reader || self.banner_config == Some(BannerConfig::Never) {
            debug!("Skipping banner animation.");
            self.skipped = true;
            self.signal_complete();
            return;
        }
        self.skipped = false;

        if self.frame_idx >= self.last_idx {
            if self.banner_config == Some(BannerConfig::Once) {
                self.request_never();
            }
            self.signal_complete();
            return;
        }

        let duration = banner_animation().frame(self.frame_idx).duration;
        self.generation += 1;
        self.timer = Some(TimerToken {
            generation: self.generation,
            due: now + duration,
        });
    }

    fn signal_complete(&mut self) {
        if let Some(callback) = self.animation_complete.take() {
            callback();
        }
    }

    fn request_never(&self) {
        let Some(sender) = &self.preferences else {
            debug!("No preference saver attached; banner preference not updated.");
            return;
        };
        let event = PreferenceEvent {
            key: BANNER_KEY.to_string(),
            value: BannerConfig::Never.to_string(),
            logger: Arc::clone(&self.logger),
        };
        if let Err(e) = sender.send(event) {
            self.logger
                .error(&format!("Failed to update banner preference: {}", e));
        }
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
