//! Per-character color resolution for banner frames.

use super::animation::AnimationFrame;
use crate::ui::{TerminalBackground, Theme};
use ratatui::style::Color;

/// Semantic part of the banner art, resolved to a color through a palette.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Border,
    Eyes,
    Head,
    Goggles,
    Shine,
}

/// Mapping of elements to terminal colors.
///
pub type AnimationTheme = &'static [(Element, Color)];

pub const ANIMATION_ANSI_DARK: AnimationTheme = &[
    (Element::Border, Color::Gray),
    (Element::Eyes, Color::LightGreen),
    (Element::Head, Color::LightMagenta),
    (Element::Goggles, Color::LightCyan),
    (Element::Shine, Color::White),
];

pub const ANIMATION_ANSI_LIGHT: AnimationTheme = &[
    (Element::Border, Color::DarkGray),
    (Element::Eyes, Color::Green),
    (Element::Head, Color::Magenta),
    (Element::Goggles, Color::Cyan),
    (Element::Shine, Color::White),
];

/// Return the palette matching the terminal background.
///
pub fn palette(background: TerminalBackground) -> AnimationTheme {
    match background {
        TerminalBackground::Dark => ANIMATION_ANSI_DARK,
        TerminalBackground::Light => ANIMATION_ANSI_LIGHT,
    }
}

fn element_color(palette: AnimationTheme, element: Element, theme: &Theme) -> Color {
    palette
        .iter()
        .find(|(candidate, _)| *candidate == element)
        .map(|(_, color)| *color)
        .unwrap_or_else(|| theme.copilot.to_color())
}

/// Return the color of the character at `(row, col)` in `frame`.
///
/// Frames without an override table are drawn entirely in the brand color.
/// Cells without an override, including positions outside the grid, use the
/// foreground color.
///
pub fn character_color(
    row: usize,
    col: usize,
    frame: &AnimationFrame,
    theme: &Theme,
    background: TerminalBackground,
) -> Color {
    let Some(colors) = frame.colors.as_ref() else {
        return theme.copilot.to_color();
    };
    match colors.get(&(row, col)) {
        Some(element) => element_color(palette(background), *element, theme),
        None => theme.fg.to_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::animation::banner_animation;
    use std::time::Duration;

    fn plain_frame() -> AnimationFrame {
        AnimationFrame {
            title: "Plain",
            duration: Duration::from_millis(10),
            content: "\nabc\ndef",
            colors: None,
        }
    }

    #[test]
    fn test_frame_without_overrides_uses_brand_color() {
        let theme = Theme::dark();
        let frame = plain_frame();
        for (row, col) in [(0, 0), (1, 2), (2, 0), (40, 90)] {
            assert_eq!(
                character_color(row, col, &frame, &theme, TerminalBackground::Dark),
                theme.copilot.to_color()
            );
        }
    }

    #[test]
    fn test_unlisted_position_uses_foreground() {
        let theme = Theme::dark();
        let frame = banner_animation().frame(0);
        assert_eq!(
            character_color(0, 0, frame, &theme, TerminalBackground::Dark),
            theme.fg.to_color()
        );
        assert_eq!(
            character_color(500, 500, frame, &theme, TerminalBackground::Light),
            theme.fg.to_color()
        );
    }

    #[test]
    fn test_listed_position_follows_background() {
        let theme = Theme::dark();
        let frame = banner_animation().frame(0);
        assert_eq!(
            character_color(7, 32, frame, &theme, TerminalBackground::Dark),
            Color::LightGreen
        );
        assert_eq!(
            character_color(7, 32, frame, &theme, TerminalBackground::Light),
            Color::Green
        );
        assert_eq!(
            character_color(1, 0, frame, &theme, TerminalBackground::Light),
            Color::DarkGray
        );
    }

    #[test]
    fn test_same_element_resolves_identically_across_positions() {
        let theme = Theme::light();
        let frame = banner_animation().frame(0);
        let head_a = character_color(2, 29, frame, &theme, TerminalBackground::Dark);
        let head_b = character_color(10, 41, frame, &theme, TerminalBackground::Dark);
        assert_eq!(head_a, head_b);
        assert_eq!(head_a, Color::LightMagenta);
    }

    #[test]
    fn test_element_missing_from_palette_uses_brand_color() {
        const PARTIAL: AnimationTheme = &[(Element::Border, Color::Red)];
        let theme = Theme::dark();
        assert_eq!(element_color(PARTIAL, Element::Border, &theme), Color::Red);
        assert_eq!(
            element_color(PARTIAL, Element::Eyes, &theme),
            theme.copilot.to_color()
        );
    }
}
