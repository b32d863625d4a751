use crate::ui::theme::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Return the style for one colored run of banner text.
///
pub fn banner_run_style(color: Color) -> Style {
    Style::default().fg(color)
}

/// Return the style for footer hints.
///
pub fn hint_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for highlighted footer keys.
///
pub fn hint_key_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.copilot.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for entries in the log pane.
///
pub fn log_entry_style(theme: &Theme) -> Style {
    Style::default().fg(theme.fg.to_color())
}
