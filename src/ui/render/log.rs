use super::Frame;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render captured error messages in a bordered pane, newest last.
///
pub fn log(frame: &mut Frame, size: Rect, entries: &[String], theme: &Theme) {
    let block = Block::default().title("Log").borders(Borders::ALL);
    let visible = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = entries
        .iter()
        .skip(entries.len().saturating_sub(visible))
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry.clone(),
                styling::log_entry_style(theme),
            )]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), size);
}
