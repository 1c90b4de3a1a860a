//! Footer component renderer.
//!
//! Renders the footer help bar with centered keybinding hints.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use crate::ui::helpers::position_cursor;

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centered horizontally with dimmed styling and the
/// line is padded to fill the terminal width. Text longer than the terminal
/// is truncated to avoid layout corruption on narrow panes.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = &footer.keybindings;

    let text_len = help_text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    let shown: String = help_text.chars().take(text_len).collect();
    print!("{shown}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
