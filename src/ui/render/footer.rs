use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the key hint line below the banner.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let mut spans = vec![
        Span::styled(" q", styling::hint_key_style(theme)),
        Span::styled(": quit", styling::hint_text_style(theme)),
    ];
    if state.driver().is_complete() && state.is_holding() {
        spans.push(Span::styled("  ·  done", styling::hint_text_style(theme)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}
