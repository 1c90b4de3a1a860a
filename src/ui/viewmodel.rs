//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information (formatted strings, highlight ranges, the pagination window)
//! and no business logic.

/// Complete UI view model for one frame.
///
/// Computed from `AppState` via
/// [`compute_viewmodel`](crate::app::AppState::compute_viewmodel) and consumed
/// by the renderer.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title bar).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Input box, present while the user is typing a query, key, or filter.
    pub input: Option<InputInfo>,

    /// Whether the active page has a request in flight (renders the spinner).
    pub loading: bool,

    /// Error banner text; an empty string renders nothing.
    pub error: String,

    /// The active page's content.
    pub page: PageView,
}

/// Content of the active page.
#[derive(Debug, Clone)]
pub enum PageView {
    /// Search results or favorites rendered as a card list.
    Cards(CardListView),
    /// The movie details panel.
    Details(DetailsView),
}

/// A page of movie cards (search results or favorites).
#[derive(Debug, Clone)]
pub struct CardListView {
    /// Optional status line above the list, e.g. result counts.
    pub status: Option<String>,

    /// Visible window of cards.
    pub items: Vec<CardItem>,

    /// Pagination control; `None` when a single page suffices.
    pub pagination: Option<PaginationView>,

    /// Empty-state message when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single movie card row.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Movie title.
    pub title: String,

    /// Release year.
    pub year: String,

    /// IMDb identifier.
    pub imdb_id: String,

    /// Whether the cursor is on this card.
    pub is_selected: bool,

    /// Whether this movie is in the favorites collection.
    pub is_favorite: bool,

    /// Whether a real poster URL exists (vs. the `"N/A"` sentinel).
    pub has_poster: bool,

    /// Character ranges to highlight (favorites filter matches).
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Pagination control state.
#[derive(Debug, Clone)]
pub struct PaginationView {
    /// Current page, 1-based.
    pub current: u32,

    /// Total page count.
    pub total: u32,

    /// Sliding window of page numbers to show as buttons.
    pub window: Vec<u32>,

    /// Current page is the first (first/previous controls disabled).
    pub at_first: bool,

    /// Current page is the last (next/last controls disabled).
    pub at_last: bool,
}

/// Pre-formatted details panel content.
///
/// `present` is false while nothing has been fetched yet (loading or error),
/// in which case the panel body is skipped.
#[derive(Debug, Clone, Default)]
pub struct DetailsView {
    /// Title line, e.g. `"Inception (2010)"`.
    pub title: String,

    /// Runtime and genre line.
    pub meta: String,

    pub director: String,

    /// Content rating; may be empty.
    pub rated: String,

    pub imdb_rating: String,

    /// Full plot text, wrapped at render time.
    pub plot: String,

    /// Principal cast.
    pub actors: String,

    /// Poster URL, empty when unavailable.
    pub poster: String,

    /// Outbound IMDb page URL.
    pub link: String,

    /// Whether the movie is currently favorited.
    pub is_favorite: bool,

    /// Whether fetched data exists to render.
    pub present: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Input box display information.
#[derive(Debug, Clone)]
pub struct InputInfo {
    /// Label shown before the value, e.g. `"Search"`.
    pub label: String,

    /// Current buffer contents.
    pub value: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "Your favorites list is empty.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
