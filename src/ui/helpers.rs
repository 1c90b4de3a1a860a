//! Shared rendering utilities and helpers.
//!
//! Low-level rendering utilities used across multiple UI components: cursor
//! positioning, filter-match highlighting with proper ANSI management, text
//! wrapping for the plot paragraph, and truncation.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for filter matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighting is skipped entirely on selected rows, where
/// the selection background takes precedence.
///
/// Ranges use character indices (not byte indices), `(start, end)` with
/// exclusive end.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Wraps text into lines of at most `width` characters, breaking on spaces.
///
/// A word longer than the width gets a line of its own rather than being
/// split. Used for the plot paragraph on the details page.
///
/// # Examples
///
/// ```
/// use reelfinder::ui::helpers::wrap_text;
///
/// let lines = wrap_text("a thief who steals corporate secrets", 12);
/// assert_eq!(lines, vec!["a thief who", "steals", "corporate", "secrets"]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Truncates a string to `max` characters, appending `...` when cut.
///
/// Operates on character counts, so multi-byte titles truncate cleanly.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(3);
    let truncated: String = text.chars().take(keep).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_respects_width() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 9));
    }

    #[test]
    fn long_words_get_their_own_line() {
        let lines = wrap_text("a extraordinarily long", 5);
        assert_eq!(lines, vec!["a", "extraordinarily", "long"]);
    }

    #[test]
    fn truncation_keeps_short_strings_intact() {
        assert_eq!(truncate_with_ellipsis("Alien", 10), "Alien");
        assert_eq!(truncate_with_ellipsis("Blade Runner 2049", 10), "Blade R...");
    }
}
