//! Input box component renderer.
//!
//! Renders the bordered input box used for search query entry, API key entry,
//! and the favorites filter. Only the label differs between the three.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputInfo;
use crate::ui::helpers::position_cursor;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 5;

/// Renders the input box at the specified row.
///
/// Displays a 3-line bordered box containing `" {label}: {value}"`. The box
/// is horizontally centered with margins on both sides.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: alien    │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3).
pub fn render_input_box(row: usize, input: &InputInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let input_text = format!(" {}: {}", input.label, input.value);
    let text_len = input_text.chars().count().min(inner_width);
    let shown: String = input_text.chars().take(text_len).collect();
    let padding = inner_width.saturating_sub(text_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
