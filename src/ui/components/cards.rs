//! Movie card list renderer.
//!
//! Renders search results and favorites as rows with a favorite marker,
//! title, year, identifier, and poster indicator. Supports selection
//! highlighting and filter-match highlighting on the title.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;
use crate::ui::helpers::{self, position_cursor, truncate_with_ellipsis};

/// Fixed display width of the title column.
const TITLE_COLUMN_WIDTH: usize = 44;

/// Fixed display width of the year column.
const YEAR_COLUMN_WIDTH: usize = 11;

/// Renders the card list column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_card_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "   {:<TITLE_COLUMN_WIDTH$}{:<YEAR_COLUMN_WIDTH$}{:<}",
        "TITLE", "YEAR", "IMDB ID"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all card rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items).
pub fn render_card_rows(row: usize, items: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_card_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single card row.
///
/// # Layout
///
/// ```text
/// ★ TITLE (up to 44 chars)  YEAR  IMDB-ID  ▦
/// ```
///
/// The favorite star renders in the favorite color; the poster indicator `▦`
/// marks entries with a real poster URL. Selection paints the full row with
/// the selection colors, which take precedence over match highlighting.
fn render_card_row(row: usize, item: &CardItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.is_favorite {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.favorite_fg));
        }
        print!(" ★ ");
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    } else {
        print!("   ");
    }

    let title = truncate_with_ellipsis(&item.title, TITLE_COLUMN_WIDTH - 2);
    if item.highlight_ranges.is_empty() {
        print!("{title}");
    } else {
        helpers::render_highlighted_text(&title, &item.highlight_ranges, theme, item.is_selected);
    }
    let title_len = title.chars().count();
    print!(
        "{}",
        " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len))
    );

    let year_len = item.year.chars().count();
    print!("{}", item.year);
    print!("{}", " ".repeat(YEAR_COLUMN_WIDTH.saturating_sub(year_len)));

    print!("{}", item.imdb_id);

    let poster_marker = if item.has_poster { "  ▦" } else { "" };
    print!("{poster_marker}");

    let line_len = 3
        + TITLE_COLUMN_WIDTH
        + YEAR_COLUMN_WIDTH
        + item.imdb_id.chars().count()
        + poster_marker.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
