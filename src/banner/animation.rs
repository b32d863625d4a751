//! The condensed banner animation table.
//!
//! Frames are inert data so that the driver and renderer stay generic over
//! frame count and content. The table is built once on first access and
//! shared for the lifetime of the process.

use super::color::Element;
use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

static BANNER_ANIMATION: OnceLock<Animation> = OnceLock::new();

/// Map of `(row, column)` positions to the element drawn there.
///
pub type ColorOverrides = HashMap<(usize, usize), Element>;

/// A single frame of the banner: a text grid, how long it stays on screen
/// and which cells are painted with a named element color.
///
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub title: &'static str,
    pub duration: Duration,
    pub content: &'static str,
    pub colors: Option<ColorOverrides>,
}

impl AnimationFrame {
    /// Return the frame content split into rows, exactly as authored.
    ///
    pub fn lines(&self) -> Vec<&'static str> {
        self.content.split('\n').collect()
    }

    /// Return the element painted at the given position, if any.
    ///
    pub fn element_at(&self, row: usize, col: usize) -> Option<Element> {
        self.colors.as_ref()?.get(&(row, col)).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// An ordered sequence of frames plus descriptive metadata.
///
#[derive(Debug, Clone)]
pub struct Animation {
    pub metadata: Metadata,
    pub frames: Vec<AnimationFrame>,
}

impl Animation {
    /// Return the frame at `index`, clamping to the last frame.
    ///
    pub fn frame(&self, index: usize) -> &AnimationFrame {
        let last = self.frames.len().saturating_sub(1);
        &self.frames[index.min(last)]
    }

    /// Return the index of the final frame.
    ///
    pub fn last_index(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }
}

/// Inclusive run of columns on one row sharing an element.
#[derive(Debug, Clone, Copy)]
struct ColorRun {
    row: usize,
    first: usize,
    last: usize,
    element: Element,
}

const fn run(row: usize, first: usize, last: usize, element: Element) -> ColorRun {
    ColorRun {
        row,
        first,
        last,
        element,
    }
}

#[rustfmt::skip]
const BASE_RUNS: &[ColorRun] = &[
    run(1, 0, 2, Element::Border), run(1, 44, 46, Element::Border),
    run(2, 0, 0, Element::Border), run(2, 29, 36, Element::Head), run(2, 46, 46, Element::Border),
    run(3, 26, 41, Element::Goggles),
    run(4, 25, 26, Element::Goggles), run(4, 33, 34, Element::Goggles), run(4, 41, 42, Element::Goggles),
    run(5, 25, 27, Element::Goggles), run(5, 32, 35, Element::Goggles), run(5, 40, 42, Element::Goggles),
    run(6, 24, 26, Element::Head), run(6, 27, 40, Element::Goggles), run(6, 41, 43, Element::Head),
    run(7, 23, 26, Element::Head), run(7, 32, 32, Element::Eyes), run(7, 35, 35, Element::Eyes), run(7, 41, 44, Element::Head),
    run(8, 23, 26, Element::Head), run(8, 32, 32, Element::Eyes), run(8, 35, 35, Element::Eyes), run(8, 41, 44, Element::Head),
    run(9, 23, 27, Element::Head), run(9, 40, 44, Element::Head),
    run(10, 0, 0, Element::Border), run(10, 26, 41, Element::Head), run(10, 46, 46, Element::Border),
    run(11, 0, 2, Element::Border), run(11, 44, 46, Element::Border),
];

const BLINK_START_SHINE: &[ColorRun] = &[run(4, 28, 29, Element::Shine), run(5, 28, 28, Element::Shine)];

const BLINK_CONTINUE_SHINE: &[ColorRun] = &[run(4, 32, 32, Element::Shine), run(4, 35, 35, Element::Shine)];

const BLINK_FINISH_SHINE: &[ColorRun] = &[run(4, 39, 40, Element::Shine), run(5, 38, 39, Element::Shine)];

const RESTING: &str = "
┌──                                           ──┐
│                             ▄██████▄          │
                          ▄█▀▀▀▀▀██▀▀▀▀▀█▄
    █████┐ ██┐     ██┐   ▐█      ▐▌      █▌
   ██┌───┘ ██│     ██│   ▐█▄    ▄██▄    ▄█▌
   ██│     ██│     ██│  ▄▄███████▀▀███████▄▄
   ██│     ██│     ██│ ████     ▄  ▄     ████
   └█████┐ ██████┐ ██│ ████     █  █     ████
    └────┘ └─────┘ └─┘ ▀███▄            ▄███▀
│                          ▀▀████████████▀▀     │
└──                                           ──┘";

const BLINK_START: &str = "
┌──                                           ──┐
│                             ▄██████▄          │
                          ▄█▀▀▀▀▀██▀▀▀▀▀█▄
    █████┐ ██┐     ██┐   ▐█ ██   ▐▌      █▌
   ██┌───┘ ██│     ██│   ▐█▄█   ▄██▄    ▄█▌
   ██│     ██│     ██│  ▄▄███████▀▀███████▄▄
   ██│     ██│     ██│ ████     ▄  ▄     ████
   └█████┐ ██████┐ ██│ ████     █  █     ████
    └────┘ └─────┘ └─┘ ▀███▄            ▄███▀
│                          ▀▀████████████▀▀     │
└──                                           ──┘";

const BLINK_CONTINUE: &str = "
┌──                                           ──┐
│                             ▄██████▄          │
                          ▄█▀▀▀▀▀██▀▀▀▀▀█▄
    █████┐ ██┐     ██┐   ▐█     █▐▌█     █▌
   ██┌───┘ ██│     ██│   ▐█▄   █▄██▄    ▄█▌
   ██│     ██│     ██│  ▄▄███████▀▀███████▄▄
   ██│     ██│     ██│ ████     ▄  ▄     ████
   └█████┐ ██████┐ ██│ ████     █  █     ████
    └────┘ └─────┘ └─┘ ▀███▄            ▄███▀
│                          ▀▀████████████▀▀     │
└──                                           ──┘";

const BLINK_FINISH: &str = "
┌──                                           ──┐
│                             ▄██████▄          │
                          ▄█▀▀▀▀▀██▀▀▀▀▀█▄
    █████┐ ██┐     ██┐   ▐█      ▐▌    ███▌
   ██┌───┘ ██│     ██│   ▐█▄    ▄██▄  ██▄█▌
   ██│     ██│     ██│  ▄▄███████▀▀███████▄▄
   ██│     ██│     ██│ ████     ▄  ▄     ████
   └█████┐ ██████┐ ██│ ████     █  █     ████
    └────┘ └─────┘ └─┘ ▀███▄            ▄███▀
│                          ▀▀████████████▀▀     │
└──                                           ──┘";

/// Expand layered color runs into a position map. Later layers win.
///
fn overrides(layers: &[&[ColorRun]]) -> ColorOverrides {
    layers
        .iter()
        .flat_map(|layer| layer.iter())
        .flat_map(|run| (run.first..=run.last).map(move |col| ((run.row, col), run.element)))
        .collect()
}

fn frame(
    title: &'static str,
    duration_ms: u64,
    content: &'static str,
    layers: &[&[ColorRun]],
) -> AnimationFrame {
    AnimationFrame {
        title,
        duration: Duration::from_millis(duration_ms),
        content,
        colors: Some(overrides(layers)),
    }
}

/// Build a fresh copy of the condensed banner animation. Prefer
/// [`banner_animation`], which builds it once and caches it.
///
pub fn create_banner_animation() -> Animation {
    let frames = vec![
        frame("Frame 1", 80, RESTING, &[BASE_RUNS]),
        frame(
            "Frame 2 - Eye blink start",
            70,
            BLINK_START,
            &[BASE_RUNS, BLINK_START_SHINE],
        ),
        frame(
            "Frame 3 - Eye blink continue",
            70,
            BLINK_CONTINUE,
            &[BASE_RUNS, BLINK_CONTINUE_SHINE],
        ),
        frame(
            "Frame 4 - Eye blink finish",
            70,
            BLINK_FINISH,
            &[BASE_RUNS, BLINK_FINISH_SHINE],
        ),
        frame("Frame 5 - Final", 850, RESTING, &[BASE_RUNS]),
    ];

    Animation {
        metadata: Metadata {
            id: "condensed-cli-banner",
            name: "Condensed CLI banner",
            description: "Narrower banner animation without text, based on new-banner.txt",
        },
        frames,
    }
}

/// Return the shared banner animation.
///
pub fn banner_animation() -> &'static Animation {
    BANNER_ANIMATION.get_or_init(create_banner_animation)
}

/// Return the number of frames in the banner animation.
///
pub fn total_frames() -> usize {
    banner_animation().frames.len()
}

/// Return how long each non-final frame stays on screen, in order.
///
pub fn frame_intervals() -> Vec<Duration> {
    let frames = &banner_animation().frames;
    frames[..frames.len().saturating_sub(1)]
        .iter()
        .map(|frame| frame.duration)
        .collect()
}

/// Return the rows of the frame at `frame_idx`. Indices past the end clamp
/// to the final frame.
///
pub fn frame_content(frame_idx: usize) -> Vec<&'static str> {
    banner_animation().frame(frame_idx).lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_ordered_with_durations() {
        let animation = banner_animation();
        let titles: Vec<&str> = animation.frames.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Frame 1",
                "Frame 2 - Eye blink start",
                "Frame 3 - Eye blink continue",
                "Frame 4 - Eye blink finish",
                "Frame 5 - Final",
            ]
        );
        assert_eq!(total_frames(), 5);
        assert_eq!(animation.frames[4].duration, Duration::from_millis(850));
    }

    #[test]
    fn test_frame_intervals_skip_final_frame() {
        let intervals: Vec<u128> = frame_intervals().iter().map(|d| d.as_millis()).collect();
        assert_eq!(intervals, vec![80, 70, 70, 70]);
    }

    #[test]
    fn test_metadata() {
        let metadata = &banner_animation().metadata;
        assert_eq!(metadata.id, "condensed-cli-banner");
        assert_eq!(metadata.name, "Condensed CLI banner");
    }

    #[test]
    fn test_animation_is_built_once() {
        assert!(std::ptr::eq(banner_animation(), banner_animation()));
    }

    #[test]
    fn test_frame_content_matches_authored_text() {
        let authored = [RESTING, BLINK_START, BLINK_CONTINUE, BLINK_FINISH, RESTING];
        for (index, text) in authored.iter().enumerate() {
            let expected: Vec<&str> = text.split('\n').collect();
            assert_eq!(frame_content(index), expected);
        }
    }

    #[test]
    fn test_frame_content_leading_row_is_empty() {
        let lines = frame_content(0);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("┌──"));
    }

    #[test]
    fn test_frame_content_clamps_past_last_frame() {
        assert_eq!(frame_content(5), frame_content(4));
        assert_eq!(frame_content(usize::MAX), frame_content(4));
    }

    #[test]
    fn test_base_overrides() {
        let first = banner_animation().frame(0);
        assert_eq!(first.element_at(1, 0), Some(Element::Border));
        assert_eq!(first.element_at(2, 29), Some(Element::Head));
        assert_eq!(first.element_at(7, 32), Some(Element::Eyes));
        assert_eq!(first.element_at(6, 27), Some(Element::Goggles));
        assert_eq!(first.element_at(4, 28), None);
        assert_eq!(first.element_at(0, 0), None);
        assert_eq!(first.colors.as_ref().map(|c| c.len()), Some(122));
    }

    #[test]
    fn test_blink_frames_add_shine() {
        let animation = banner_animation();
        assert_eq!(animation.frame(1).element_at(4, 28), Some(Element::Shine));
        assert_eq!(animation.frame(1).element_at(5, 28), Some(Element::Shine));
        assert_eq!(animation.frame(2).element_at(4, 35), Some(Element::Shine));
        assert_eq!(animation.frame(3).element_at(5, 39), Some(Element::Shine));
        assert_eq!(animation.frame(3).element_at(4, 41), Some(Element::Goggles));
        assert_eq!(animation.frame(1).colors.as_ref().map(|c| c.len()), Some(125));
        assert_eq!(animation.frame(4).element_at(4, 28), None);
    }
}
