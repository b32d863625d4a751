//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - The animated banner renderer
//! - Theme and terminal background handling
//! - Shared styling helpers

type Frame<'a> = ratatui::Frame<'a>;

mod background;
mod render;
mod theme;
mod widgets;

pub use background::TerminalBackground;
pub use render::{banner_lines, render, render_banner, MAX_LINE_WIDTH};
pub use theme::{ColorSpec, Theme, THEME_NAMES};
