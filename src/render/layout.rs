//! Pure text layout: word wrapping and centering. Text measurement is an
//! injected function, so none of this depends on a rendering backend.

/// A text line with the position it should be drawn at.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLayout {
    pub lines: Vec<PositionedLine>,
    /// y of the last quote line; the attribution line anchors below it.
    pub final_y: f32,
}

/// Greedy word wrap. A word joins the current line while the joined line
/// measures strictly under `max_width`; otherwise it starts a new line.
/// Words are never split, so a single oversized word still yields one line.
pub fn wrap(text: &str, max_width: f32, width_of: impl Fn(&str) -> f32) -> Vec<String> {
    let mut words = text.split(' ');
    let mut current = words.next().unwrap_or("").to_owned();
    let mut lines = Vec::new();

    for word in words {
        let candidate = format!("{current} {word}");
        if width_of(&candidate) < max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_owned();
        }
    }
    lines.push(current);

    lines
}

/// Centers the wrapped lines on the canvas: the block is centered vertically
/// around `canvas_height / 2`, and every line is centered horizontally on its
/// own measured width.
pub fn layout(
    lines: &[String],
    line_height: f32,
    canvas_width: f32,
    canvas_height: f32,
    width_of: impl Fn(&str) -> f32,
) -> QuoteLayout {
    let count = lines.len() as f32;
    let start_y = canvas_height / 2.0 - (count - 1.0) * line_height / 2.0;

    let positioned = lines
        .iter()
        .enumerate()
        .map(|(index, line)| PositionedLine {
            text: line.clone(),
            x: (canvas_width - width_of(line)) / 2.0,
            y: start_y + index as f32 * line_height,
        })
        .collect();

    QuoteLayout {
        lines: positioned,
        final_y: start_y + (count - 1.0) * line_height,
    }
}

/// Places the `- name date` line beneath the quote. The step down uses the
/// quote line height, not the attribution font's.
pub fn attribution(
    name: &str,
    date: Option<&str>,
    final_y: f32,
    line_height: f32,
    canvas_width: f32,
    width_of: impl Fn(&str) -> f32,
) -> PositionedLine {
    let text = match date {
        Some(date) => format!("- {name} {date}"),
        None => format!("- {name}"),
    };

    PositionedLine {
        x: (canvas_width - width_of(&text)) / 2.0,
        y: final_y + line_height,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One pixel per character keeps the wrap arithmetic easy to follow.
    fn char_width(text: &str) -> f32 {
        text.chars().count() as f32
    }

    #[test]
    fn test_wrap_empty_text_yields_one_empty_line() {
        assert_eq!(wrap("", 10.0, char_width), vec!["".to_owned()]);
    }

    #[test]
    fn test_wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("aa bb", 10.0, char_width), vec!["aa bb".to_owned()]);
    }

    #[test]
    fn test_wrap_breaks_when_width_reached() {
        // "aa bb" fits (5 < 6) but "aa bb cc" (8) does not.
        assert_eq!(
            wrap("aa bb cc", 6.0, char_width),
            vec!["aa bb".to_owned(), "cc".to_owned()]
        );
    }

    #[test]
    fn test_wrap_limit_is_exclusive() {
        // The joined line measures exactly max_width, which is not under it.
        assert_eq!(
            wrap("aa bb", 5.0, char_width),
            vec!["aa".to_owned(), "bb".to_owned()]
        );
    }

    #[test]
    fn test_wrap_never_splits_an_oversized_word() {
        assert_eq!(
            wrap("incomprehensibilities", 5.0, char_width),
            vec!["incomprehensibilities".to_owned()]
        );
    }

    #[test]
    fn test_wrap_preserves_word_sequence() {
        for text in ["one", "one two", "lorem ipsum dolor sit amet consectetur"] {
            for max_width in [3.0, 8.0, 100.0] {
                let lines = wrap(text, max_width, char_width);
                assert!(!lines.is_empty());
                assert!(lines.iter().all(|line| !line.is_empty()));
                assert_eq!(lines.join(" "), text);
            }
        }
    }

    #[test]
    fn test_layout_centers_a_single_line() {
        let lines = vec!["abcd".to_owned()];
        let result = layout(&lines, 10.0, 100.0, 80.0, char_width);

        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].y, 40.0);
        assert_eq!(result.lines[0].x, 48.0);
        assert_eq!(result.final_y, 40.0);
    }

    #[test]
    fn test_layout_centers_a_block_of_lines() {
        let lines = vec!["a".to_owned(), "bb".to_owned(), "ccc".to_owned()];
        let result = layout(&lines, 10.0, 100.0, 100.0, char_width);

        assert_eq!(result.lines[0].y, 40.0);
        assert_eq!(result.lines[1].y, 50.0);
        assert_eq!(result.lines[2].y, 60.0);
        assert_eq!(result.final_y, 60.0);

        // Each line is centered on its own width.
        assert_eq!(result.lines[0].x, 49.5);
        assert_eq!(result.lines[1].x, 49.0);
        assert_eq!(result.lines[2].x, 48.5);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let lines = vec!["alpha".to_owned(), "beta".to_owned()];
        let first = layout(&lines, 12.0, 600.0, 400.0, char_width);
        let second = layout(&lines, 12.0, 600.0, 400.0, char_width);
        assert_eq!(first, second);
    }

    #[test]
    fn test_attribution_with_date() {
        let line = attribution("name1", Some("01-01-2020"), 60.0, 10.0, 100.0, char_width);
        assert_eq!(line.text, "- name1 01-01-2020");
        assert_eq!(line.y, 70.0);
        assert_eq!(line.x, (100.0 - line.text.chars().count() as f32) / 2.0);
    }

    #[test]
    fn test_attribution_without_date_has_no_trailing_space() {
        let line = attribution("name1", None, 60.0, 10.0, 100.0, char_width);
        assert_eq!(line.text, "- name1");
        assert_eq!(line.y, 70.0);
    }
}
