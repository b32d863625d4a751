//! Text processing utilities.
//!
//! This module contains helpers for preparing banner text for display:
//! width-limited truncation and grouping of styled characters into runs.

/// Return at most `max_chars` characters of `line`. Lines are cut, never
/// wrapped.
///
pub fn truncate_chars(line: &str, max_chars: usize) -> &str {
    match line.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &line[..byte_idx],
        None => line,
    }
}

/// Merge consecutive characters sharing a style into runs.
///
/// The result is lossless: concatenating the runs in order reproduces the
/// input text, and every character keeps its style.
///
pub fn group_runs<S, I>(chars: I) -> Vec<(String, S)>
where
    S: PartialEq,
    I: IntoIterator<Item = (char, S)>,
{
    let mut runs: Vec<(String, S)> = Vec::new();
    for (ch, style) in chars {
        if let Some((text, current)) = runs.last_mut() {
            if *current == style {
                text.push(ch);
                continue;
            }
        }
        runs.push((ch.to_string(), style));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        let line = "██████";
        assert_eq!(truncate_chars(line, 3), "███");
        assert_eq!(truncate_chars(line, 6), line);
        assert_eq!(truncate_chars(line, 80), line);
        assert_eq!(truncate_chars("", 80), "");
    }

    #[test]
    fn test_group_runs_uniform_text_is_one_run() {
        let text = "a".repeat(40);
        let runs = group_runs(text.chars().map(|c| (c, 1)));
        assert_eq!(runs, vec![(text.clone(), 1)]);
    }

    #[test]
    fn test_group_runs_splits_on_style_change() {
        let runs = group_runs(vec![('a', 1), ('b', 1), ('c', 2), ('d', 1)]);
        assert_eq!(
            runs,
            vec![
                ("ab".to_string(), 1),
                ("c".to_string(), 2),
                ("d".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_group_runs_empty() {
        let runs: Vec<(String, u8)> = group_runs(Vec::new());
        assert!(runs.is_empty());
    }
}
