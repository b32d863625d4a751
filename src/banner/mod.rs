//! Animated banner module.
//!
//! This module contains everything needed to animate the condensed banner:
//! - The static frame table and its cached singleton
//! - Per-character color resolution against light/dark palettes
//! - The timer-driven frame driver
//! - The "show once" preference write-back

pub mod animation;
pub mod color;
pub mod driver;
pub mod preference;

pub use animation::{banner_animation, frame_content, frame_intervals, total_frames};
pub use color::{character_color, Element};
pub use driver::{BannerOptions, FrameDriver, TimerToken};
pub use preference::{PreferenceEvent, PreferenceSender, PreferenceStore};

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// When the banner should be displayed.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerConfig {
    Always,
    Once,
    Never,
}

impl BannerConfig {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerConfig::Always => "always",
            BannerConfig::Once => "once",
            BannerConfig::Never => "never",
        }
    }
}

impl fmt::Display for BannerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BannerConfig {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "always" => Ok(BannerConfig::Always),
            "once" => Ok(BannerConfig::Once),
            "never" => Ok(BannerConfig::Never),
            other => Err(ConfigError::InvalidValue {
                key: preference::BANNER_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }
}
