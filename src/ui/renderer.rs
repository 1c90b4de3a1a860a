//! Top-level rendering coordinator.
//!
//! Provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! Rendering is a two-step process:
//!
//! 1. **View model computation**: transform `AppState` into a `UiViewModel`
//! 2. **Component rendering**: delegate to the page-specific layout

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageView, UiViewModel};

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// layout matching the active page. Prints ANSI-styled output; does not clear
/// the screen or manage cursor visibility.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a pre-computed view model.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.page {
        PageView::Cards(cards) => components::render_cards_page(vm, cards, theme, cols, rows),
        PageView::Details(details) => {
            components::render_details_page(vm, details, theme, cols, rows);
        }
    }
}
