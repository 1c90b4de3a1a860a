//! Empty state component renderer.
//!
//! Renders the centered two-line message shown when a page has nothing to
//! list: no search performed yet, no results, or an empty favorites grid.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use crate::ui::helpers::position_cursor;

/// Renders the empty state message starting at the specified row.
///
/// Both lines are horizontally centered. The message uses the
/// `empty_state_fg` theme color, the subtitle `text_dim` with dim styling.
///
/// # Returns
///
/// The next available row position (row + 2).
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = empty.message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 2
}
