//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different UI
//! elements, following a component-based architecture. Each component renders
//! one part of the interface and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the active page name
//! - [`footer`]: Keybinding hints
//! - [`input`]: Bordered input box (query / API key / filter)
//! - [`cards`]: Movie list with columns (TITLE, YEAR, IMDB ID)
//! - [`pagination`]: Page-number window with boundary controls
//! - [`details`]: Full metadata panel for one movie
//! - [`poster`]: Poster URL line with placeholder fallback
//! - [`spinner`]: Loading indicator
//! - [`banner`]: Error banner (renders nothing for an empty message)
//! - [`empty`]: Empty state message

mod banner;
mod cards;
mod details;
mod empty;
mod footer;
mod header;
mod input;
pub mod pagination;
mod poster;
mod spinner;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardListView, DetailsView, UiViewModel};
use crate::ui::helpers::position_cursor;

use banner::render_error_banner;
use cards::{render_card_headers, render_card_rows};
use details::render_details;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_input_box;
use pagination::render_pagination;
use spinner::render_spinner;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a card-list page (search results or favorites).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Input box, when open]
/// [Error banner, when a message exists]
/// [Spinner, while loading]
/// [Status line]
/// [Column headers + card rows | empty state]
/// [Pagination]
/// [Border]
/// [Footer]
/// ```
pub fn render_cards_page(
    vm: &UiViewModel,
    cards: &CardListView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(input) = &vm.input {
        current_row = render_input_box(current_row, input, theme, cols);
    }

    current_row = render_error_banner(current_row, &vm.error, theme, cols);

    if vm.loading {
        current_row = render_spinner(current_row + 1, theme, cols) + 1;
    }

    if let Some(status) = &cards.status {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {status}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(empty) = &cards.empty_state {
        if !vm.loading {
            render_empty_state(current_row + 2, empty, theme, cols);
        }
    } else if !cards.items.is_empty() {
        current_row = render_card_headers(current_row, theme);
        current_row = render_card_rows(current_row, &cards.items, theme, cols);
    }

    if let Some(pagination) = &cards.pagination {
        let pagination_row = rows.saturating_sub(3);
        render_pagination(pagination_row, pagination, theme, cols);
    }

    let _ = current_row;
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the details page.
///
/// Same chrome as the card pages, with the metadata panel as the body.
pub fn render_details_page(
    vm: &UiViewModel,
    details: &DetailsView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    current_row = render_error_banner(current_row, &vm.error, theme, cols);

    if vm.loading {
        current_row = render_spinner(current_row + 1, theme, cols) + 1;
    }

    render_details(current_row + 1, details, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
