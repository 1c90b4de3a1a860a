//! Details panel renderer.
//!
//! Renders the full metadata for one movie: title line, runtime/genre,
//! director and ratings, the wrapped plot paragraph, cast, poster line, the
//! outbound IMDb link, and the favorite state.

use crate::ui::components::poster::render_poster;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailsView;
use crate::ui::helpers::{position_cursor, wrap_text};

/// Left margin for the panel body.
const PANEL_MARGIN: usize = 2;

/// Renders the details panel starting at the specified row.
///
/// Skipped entirely (returns `row` unchanged) while no data is present; the
/// caller renders the spinner or the error banner instead.
///
/// # Returns
///
/// The next available row position.
pub fn render_details(row: usize, details: &DetailsView, theme: &Theme, cols: usize) -> usize {
    if !details.present {
        return row;
    }

    let mut current_row = row;
    let text_width = cols.saturating_sub(PANEL_MARGIN * 2).max(20);

    position_cursor(current_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("  {}", details.title);
    if details.is_favorite {
        print!("{}", Theme::fg(&theme.colors.favorite_fg));
        print!("  ★");
    }
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {}", details.meta);
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(
        "  Director: {}   Rated: {}   IMDb rating: {}",
        details.director,
        if details.rated.is_empty() {
            "—"
        } else {
            &details.rated
        },
        details.imdb_rating
    );
    print!("{}", Theme::reset());
    current_row += 2;

    for line in wrap_text(&details.plot, text_width) {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  {line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("  Cast");
    print!("{}", Theme::reset());
    current_row += 1;

    for line in wrap_text(&details.actors, text_width) {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  {line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    current_row = render_poster(current_row, &details.poster, theme, cols);

    position_cursor(current_row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  Open on IMDb: {}", details.link);
    print!("{}", Theme::reset());
    current_row += 1;

    current_row
}
