//! Header component renderer.
//!
//! Renders the plugin title bar with centered text, theme-aware colors, and
//! optional background styling.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use crate::ui::helpers::position_cursor;

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally with bold styling, padding the
/// line to fill the entire terminal width. If the width cannot divide evenly,
/// left padding is slightly larger.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
