//! Loading spinner component renderer.
//!
//! Stateless loading indicator shown while the active page's request is in
//! flight. The plugin only repaints on events, so the glyph is static rather
//! than animated.

use crate::ui::theme::Theme;
use crate::ui::helpers::position_cursor;

/// Renders the centered loading indicator at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_spinner(row: usize, theme: &Theme, cols: usize) -> usize {
    let text = "◌ Loading…";
    let text_len = text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.loading_fg));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", Theme::reset());
    row + 1
}
