//! Event handling module.
//!
//! Terminal events drive the application: key presses request an exit and
//! periodic ticks advance the banner animation.

pub mod terminal;
