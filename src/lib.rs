//! An animated ASCII-art banner for the terminal.
//!
//! The banner plays a short fixed animation, settles on its final frame and,
//! when configured to show only once, records that it should not be shown
//! again.

pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
pub mod utils;
