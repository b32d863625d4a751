mod banner;
mod footer;
mod log;

use super::*;
use crate::state::State;
use footer::footer;
use ratatui::layout::{Constraint, Direction, Layout};

use self::log::log;

pub use banner::{banner_lines, render_banner, MAX_LINE_WIDTH};

/// Most log lines shown below the banner at once.
///
const LOG_PANE_LINES: u16 = 3;

/// Render the whole screen according to state. The log pane only appears
/// once something has been logged.
///
pub fn render(frame: &mut Frame, state: &State) {
    let entries = state.log_entries();
    let log_height = if entries.is_empty() {
        0
    } else {
        (entries.len() as u16).min(LOG_PANE_LINES) + 2
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(frame.size());

    render_banner(
        frame,
        rows[0],
        state.driver(),
        state.theme(),
        state.background(),
    );
    if !entries.is_empty() {
        log(frame, rows[1], &entries, state.theme());
    }
    footer(frame, rows[2], state);
}
