//! Poster component renderer.
//!
//! A terminal pane cannot show the image itself, so the poster component
//! renders the URL for the user to open, substituting a placeholder label
//! when the API supplied no usable poster. Callers collapse both the empty
//! string and the `"N/A"` sentinel into an empty string via `has_poster`.

use crate::ui::theme::Theme;
use crate::ui::helpers::position_cursor;

/// Placeholder shown when no poster URL exists.
const NO_POSTER: &str = "(no poster available)";

/// Renders the poster line at the specified row.
///
/// `poster` is the URL to display, or empty for the placeholder.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_poster(row: usize, poster: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if poster.is_empty() {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {NO_POSTER}");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        let line = format!("  Poster: {poster}");
        let shown: String = line.chars().take(cols).collect();
        print!("{shown}");
    }

    print!("{}", Theme::reset());
    row + 1
}
