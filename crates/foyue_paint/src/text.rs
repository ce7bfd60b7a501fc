//! Greedy multi-line text wrapping
//!
//! Lines are built one character at a time. Once the running line no longer
//! fits, the longest fitting prefix is emitted and the overflowing character
//! starts the next line. When a height limit would be crossed by the next
//! line, the current line is shortened and ends with an ellipsis instead.

use std::sync::OnceLock;

use regex::Regex;

/// Marker appended to a line cut short by the height limit
pub const ELLIPSIS: &str = "...";

static FONT_SIZE: OnceLock<Regex> = OnceLock::new();

/// Extract the pixel size from a CSS font string (`"bold 24PX serif"` -> 24)
pub fn font_size_px(font: &str) -> Option<f32> {
    let pattern =
        FONT_SIZE.get_or_init(|| Regex::new(r"(?i)(\d+)px").expect("Invalid regex pattern"));
    pattern
        .captures(font)
        .and_then(|caps| caps.get(1))
        .and_then(|size| size.as_str().parse().ok())
}

/// A line produced by [`wrap_lines`]
#[derive(Clone, Debug, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    /// Vertical position of the line
    pub y: f32,
}

/// Layout limits for [`wrap_lines`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapOptions {
    pub start_y: f32,
    pub max_width: f32,
    pub max_height: Option<f32>,
    /// Distance between consecutive lines (font size plus gap)
    pub line_advance: f32,
}

/// Break `text` into lines no wider than `max_width`
///
/// `measure` returns the rendered width of a string. A single character
/// wider than `max_width` is kept on its own line rather than split.
pub fn wrap_lines(
    text: &str,
    options: &WrapOptions,
    mut measure: impl FnMut(&str) -> f32,
) -> Vec<WrappedLine> {
    if measure(text) <= options.max_width {
        return vec![WrappedLine {
            text: text.to_string(),
            y: options.start_y,
        }];
    }

    let line_y = |index: usize| options.start_y + index as f32 * options.line_advance;

    let mut lines = Vec::new();
    let mut buffer = String::new();
    let mut buffered_chars = 0usize;

    for ch in text.chars() {
        buffer.push(ch);
        buffered_chars += 1;

        if buffered_chars < 2 || measure(&buffer) <= options.max_width {
            continue;
        }

        let mut fitting = buffer[..buffer.len() - ch.len_utf8()].to_string();
        let index = lines.len();

        let next_line_y = line_y(index + 1);
        if let Some(max_height) = options.max_height {
            if next_line_y > max_height {
                fitting.pop();
                fitting.pop();
                fitting.push_str(ELLIPSIS);
                tracing::trace!(line = index, "height limit reached, truncating");
                lines.push(WrappedLine {
                    text: fitting,
                    y: line_y(index),
                });
                return lines;
            }
        }

        lines.push(WrappedLine {
            text: fitting,
            y: line_y(index),
        });
        buffer.clear();
        buffer.push(ch);
        buffered_chars = 1;
    }

    if !buffer.is_empty() {
        let index = lines.len();
        lines.push(WrappedLine {
            text: buffer,
            y: line_y(index),
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_per_char(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    fn options(max_width: f32, max_height: Option<f32>) -> WrapOptions {
        WrapOptions {
            start_y: 0.0,
            max_width,
            max_height,
            line_advance: 20.0,
        }
    }

    fn texts(lines: &[WrappedLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_font_size_extraction() {
        assert_eq!(font_size_px("24px serif"), Some(24.0));
        assert_eq!(font_size_px("bold 32PX Arial"), Some(32.0));
        assert_eq!(font_size_px("italic 1.5em serif"), None);
        assert_eq!(font_size_px(""), None);
    }

    #[test]
    fn test_fitting_text_is_one_line() {
        let lines = wrap_lines("abc", &options(35.0, None), ten_per_char);
        assert_eq!(
            lines,
            vec![WrappedLine {
                text: "abc".to_string(),
                y: 0.0
            }]
        );
    }

    #[test]
    fn test_greedy_breaks_every_three_chars() {
        let lines = wrap_lines("abcdefghij", &options(35.0, None), ten_per_char);
        assert_eq!(texts(&lines), vec!["abc", "def", "ghi", "j"]);
        let ys: Vec<f32> = lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![0.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn test_lines_reconstruct_text() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_lines(text, &options(75.0, None), ten_per_char);
        assert!(lines.len() > 1);
        let joined: String = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(joined, text);
        assert!(lines.iter().all(|l| ten_per_char(&l.text) <= 75.0));
    }

    #[test]
    fn test_height_limit_truncates_with_ellipsis() {
        // Second line would push the third line's top past 30
        let lines = wrap_lines("abcdefghij", &options(35.0, Some(30.0)), ten_per_char);
        assert_eq!(texts(&lines), vec!["abc", "d..."]);
        assert_eq!(lines[1].y, 20.0);
    }

    #[test]
    fn test_truncation_on_first_line() {
        let lines = wrap_lines("abcdefghij", &options(35.0, Some(10.0)), ten_per_char);
        assert_eq!(texts(&lines), vec!["a..."]);
    }

    #[test]
    fn test_wide_single_char_is_not_split() {
        let measure = |s: &str| {
            s.chars()
                .map(|c| if c == 'W' { 50.0 } else { 10.0 })
                .sum::<f32>()
        };
        let lines = wrap_lines("Wab", &options(35.0, None), measure);
        assert_eq!(texts(&lines), vec!["W", "ab"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let lines = wrap_lines("年轻人都在玩", &options(25.0, None), ten_per_char);
        assert_eq!(texts(&lines), vec!["年轻", "人都", "在玩"]);
    }
}
