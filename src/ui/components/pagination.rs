//! Pagination control renderer and window computation.
//!
//! The control shows first/previous/next/last markers around a sliding window
//! of at most five page numbers. The window is centered on the current page
//! and clamped to `[1, total]`; the whole control is suppressed upstream when
//! there is at most one page.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationView;
use crate::ui::helpers::position_cursor;

/// Maximum number of page buttons shown at once.
const MAX_BUTTONS: u32 = 5;

/// Computes the sliding window of page numbers to display.
///
/// The window spans `[page - 2, page + 2]` clamped to `[1, total]`, so it
/// shrinks near either boundary instead of shifting to keep five entries.
///
/// # Examples
///
/// ```
/// use reelfinder::ui::components::pagination::page_window;
///
/// assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
/// assert_eq!(page_window(1, 10), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn page_window(page: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return vec![];
    }

    let half = MAX_BUTTONS / 2;
    let start = page.saturating_sub(half).max(1);
    let end = page.saturating_add(half).min(total);

    (start..=end).collect()
}

/// Renders the pagination control at the specified row.
///
/// Layout: `« ‹  1 [2] 3  › »`, centered horizontally. The current page is
/// drawn as an active button; boundary controls are dimmed when disabled.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_pagination(
    row: usize,
    pagination: &PaginationView,
    theme: &Theme,
    cols: usize,
) -> usize {
    // Plain-text width for centering: markers + page numbers + separators.
    let numbers_width: usize = pagination
        .window
        .iter()
        .map(|p| p.to_string().len() + 3)
        .sum();
    let text_width = 2 + 2 + numbers_width + 2 + 2;
    let padding = cols.saturating_sub(text_width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));

    render_boundary_marker("« ", pagination.at_first, theme);
    render_boundary_marker("‹ ", pagination.at_first, theme);

    for page in &pagination.window {
        if *page == pagination.current {
            print!("{}", Theme::fg(&theme.colors.page_active_fg));
            print!("{}", Theme::bg(&theme.colors.page_active_bg));
            print!("[{page}]");
            print!("{}", Theme::reset());
            print!(" ");
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!(" {page}  ");
            print!("{}", Theme::reset());
        }
    }

    render_boundary_marker("› ", pagination.at_last, theme);
    render_boundary_marker("»", pagination.at_last, theme);

    print!("{}", Theme::reset());
    row + 1
}

/// Renders a first/previous/next/last marker, dimmed when its boundary is
/// reached.
fn render_boundary_marker(marker: &str, disabled: bool, theme: &Theme) {
    if disabled {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{marker}");
    print!("{}", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_clamps_at_the_start() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4]);
    }

    #[test]
    fn window_clamps_at_the_end() {
        assert_eq!(page_window(10, 10), vec![8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![7, 8, 9, 10]);
    }

    #[test]
    fn window_centers_in_the_middle() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_never_exceeds_five_buttons() {
        for page in 1..=30 {
            assert!(page_window(page, 30).len() <= 5);
        }
    }

    #[test]
    fn tiny_totals_shrink_the_window() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(1, 2), vec![1, 2]);
        assert_eq!(page_window(1, 0), Vec::<u32>::new());
    }
}
