//! Error banner component renderer.
//!
//! Stateless banner for the error taxonomy's user-facing half: API errors and
//! communication failures. An empty message renders nothing at all, so the
//! caller can pass the page's error string unconditionally.

use crate::ui::theme::Theme;
use crate::ui::helpers::position_cursor;

/// Renders the error banner at the specified row.
///
/// The message is prefixed with `!` and drawn in the theme's error color,
/// padded to the full terminal width.
///
/// # Returns
///
/// The next available row position: `row + 1` when a banner was drawn, `row`
/// unchanged for an empty message.
pub fn render_error_banner(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    if message.is_empty() {
        return row;
    }

    let text = format!(" ! {message}");
    let text_len = text.chars().count().min(cols);
    let shown: String = text.chars().take(text_len).collect();

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{shown}");
    print!("{}", " ".repeat(cols.saturating_sub(text_len)));
    print!("{}", Theme::reset());
    row + 1
}
