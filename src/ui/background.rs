//! Terminal background detection.

use std::env;

/// Whether the terminal draws on a dark or light background.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TerminalBackground {
    #[default]
    Dark,
    Light,
}

impl TerminalBackground {
    /// Detect the background from `COLORFGBG`, assuming dark when unknown.
    ///
    pub fn detect() -> Self {
        Self::from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    /// Interpret a `COLORFGBG` value such as `15;0` or `0;default;15`. The
    /// last field is the background palette index; 7 and 9-15 are light.
    ///
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match background {
            Some(7) | Some(9..=15) => TerminalBackground::Light,
            _ => TerminalBackground::Dark,
        }
    }
}
