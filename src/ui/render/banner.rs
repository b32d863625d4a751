use super::Frame;
use crate::banner::animation::{banner_animation, AnimationFrame};
use crate::banner::{character_color, frame_content, FrameDriver};
use crate::ui::widgets::styling;
use crate::ui::{TerminalBackground, Theme};
use crate::utils::text_processing::{group_runs, truncate_chars};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Rows wider than this are cut, never wrapped.
pub const MAX_LINE_WIDTH: usize = 80;

/// Turn one row of a frame into colored runs.
///
fn styled_line(
    row: usize,
    line: &str,
    frame: &AnimationFrame,
    theme: &Theme,
    background: TerminalBackground,
) -> Line<'static> {
    let colored = truncate_chars(line, MAX_LINE_WIDTH)
        .chars()
        .enumerate()
        .map(|(col, ch)| (ch, character_color(row, col, frame, theme, background)));
    let spans: Vec<Span<'static>> = group_runs(colored)
        .into_iter()
        .map(|(text, color)| Span::styled(text, styling::banner_run_style(color)))
        .collect();
    Line::from(spans)
}

/// Return the styled rows of the frame at `frame_idx`.
///
pub fn banner_lines(
    frame_idx: usize,
    theme: &Theme,
    background: TerminalBackground,
) -> Vec<Line<'static>> {
    let frame = banner_animation().frame(frame_idx);
    frame_content(frame_idx)
        .into_iter()
        .enumerate()
        .map(|(row, line)| styled_line(row, line, frame, theme, background))
        .collect()
}

/// Render the banner's current frame. Nothing is drawn in screen-reader
/// mode or when the banner is unset or disabled.
///
pub fn render_banner(
    frame: &mut Frame,
    size: Rect,
    driver: &FrameDriver,
    theme: &Theme,
    background: TerminalBackground,
) {
    if !driver.should_render() {
        return;
    }
    let lines = banner_lines(driver.frame_idx(), theme, background);
    frame.render_widget(Paragraph::new(lines), size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{BannerConfig, BannerOptions};
    use ratatui::{backend::TestBackend, style::Color, Terminal};
    use std::time::Duration;

    fn driver(banner_config: Option<BannerConfig>, screen_reader: bool) -> FrameDriver {
        FrameDriver::new(
            BannerOptions {
                banner_config,
                ..Default::default()
            },
            screen_reader,
        )
    }

    fn draw(driver: &FrameDriver) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        let theme = Theme::dark();
        terminal
            .draw(|f| {
                let area = f.size();
                render_banner(f, area, driver, &theme, TerminalBackground::Dark)
            })
            .unwrap();
        terminal
    }

    fn is_blank(terminal: &Terminal<TestBackend>) -> bool {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .all(|cell| cell.symbol() == " ")
    }

    #[test]
    fn test_lines_match_frame_content() {
        let theme = Theme::dark();
        for index in 0..5 {
            let lines = banner_lines(index, &theme, TerminalBackground::Dark);
            let rendered: Vec<String> = lines
                .iter()
                .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
                .collect();
            assert_eq!(rendered, frame_content(index));
        }
    }

    #[test]
    fn test_adjacent_same_color_runs_are_merged() {
        let theme = Theme::dark();
        let lines = banner_lines(0, &theme, TerminalBackground::Dark);
        assert!(lines[0].spans.is_empty());
        for line in &lines {
            for pair in line.spans.windows(2) {
                assert_ne!(pair[0].style.fg, pair[1].style.fg);
            }
        }
        let top = &lines[1].spans;
        assert_eq!(top.len(), 4);
        assert_eq!(top[0].content, "┌──");
        assert_eq!(top[0].style.fg, Some(Color::Gray));
        assert_eq!(top[1].style.fg, Some(theme.fg.to_color()));
        assert_eq!(top[2].content, "  ─");
        assert_eq!(top[3].content, "─┐");

        let eyes = &lines[7].spans;
        assert_eq!(eyes.len(), 8);
        assert_eq!(eyes[3].content, "▄");
        assert_eq!(eyes[3].style.fg, Some(Color::LightGreen));
    }

    #[test]
    fn test_uniform_row_is_one_run() {
        let theme = Theme::light();
        let frame = AnimationFrame {
            title: "Plain",
            duration: Duration::from_millis(1),
            content: "",
            colors: None,
        };
        let text = "x".repeat(30);
        let line = styled_line(3, &text, &frame, &theme, TerminalBackground::Light);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, text);
        assert_eq!(line.spans[0].style.fg, Some(theme.copilot.to_color()));
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let theme = Theme::dark();
        let frame = AnimationFrame {
            title: "Wide",
            duration: Duration::from_millis(1),
            content: "",
            colors: None,
        };
        let text = "█".repeat(120);
        let line = styled_line(0, &text, &frame, &theme, TerminalBackground::Dark);
        assert_eq!(line.spans[0].content.chars().count(), MAX_LINE_WIDTH);
    }

    #[test]
    fn test_render_draws_current_frame() {
        let terminal = draw(&driver(Some(BannerConfig::Always), false));
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.get(0, 1).symbol(), "┌");
        assert_eq!(buffer.get(0, 1).fg, Color::Gray);
        assert_eq!(buffer.get(32, 7).fg, Color::LightGreen);
    }

    #[test]
    fn test_render_nothing_when_disabled() {
        assert!(is_blank(&draw(&driver(Some(BannerConfig::Never), false))));
        assert!(is_blank(&draw(&driver(None, false))));
        assert!(is_blank(&draw(&driver(Some(BannerConfig::Always), true))));
    }
}
