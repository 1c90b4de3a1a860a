//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with the per-page request sessions, selection management,
//! and UI view model generation. It is the single source of truth for all
//! transient UI state.
//!
//! # State Components
//!
//! - **Shell state**: API key, favorites map, last submitted query, held at
//!   the top and threaded into whichever page is active
//! - **Location**: the navigable location string plus the route derived from
//!   it through the router's one parse path
//! - **Sessions**: per-page request lifecycle (loading/error/data) with a
//!   generation counter used to drop superseded responses
//! - **Input mode**: controls keybinding interpretation and the input box
//!
//! View models are computed on demand from state snapshots; rendering never
//! reads state directly.

use crate::api;
use crate::app::modes::{InputMode, QueryFocus};
use crate::app::router::Route;
use crate::domain::{imdb_url, MovieDetails, MovieSummary};
use crate::ui::components::pagination::page_window;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, CardListView, DetailsView, EmptyState, FooterInfo, HeaderInfo, InputInfo, PageView,
    PaginationView, UiViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::collections::BTreeMap;

/// Search page request lifecycle.
///
/// Reset when the search page is (re)entered; the generation counter is the
/// exception and survives resets so that responses from a previous page
/// instance can never be mistaken for current ones.
#[derive(Debug, Clone)]
pub struct SearchSession {
    /// Query the session is showing results for.
    pub query: String,
    /// Current page, 1-based.
    pub page: u32,
    /// Result page currently on screen.
    pub results: Vec<MovieSummary>,
    /// Total matches across all pages, as reported by the API.
    pub total: u32,
    /// A request is in flight.
    pub loading: bool,
    /// Error banner text; empty means no banner.
    pub error: String,
    /// Generation of the most recently issued request. Only a response
    /// carrying this exact value may be applied.
    pub generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: vec![],
            total: 0,
            loading: false,
            error: String::new(),
            generation: 0,
        }
    }
}

impl SearchSession {
    /// Resets the session for a fresh page mount, keeping the generation
    /// counter monotonic.
    pub fn reset(&mut self, query: String) {
        let generation = self.generation;
        *self = Self {
            query,
            generation,
            ..Self::default()
        };
    }
}

/// Details page request lifecycle. Same discipline as [`SearchSession`].
#[derive(Debug, Clone, Default)]
pub struct DetailsSession {
    /// IMDb id the session is fetching/showing.
    pub id: String,
    /// Fetched details, present after a successful response.
    pub data: Option<MovieDetails>,
    /// A request is in flight.
    pub loading: bool,
    /// Error banner text; empty means no banner.
    pub error: String,
    /// Generation of the most recently issued request.
    pub generation: u64,
}

impl DetailsSession {
    /// Resets the session for a new movie id, keeping the generation counter
    /// monotonic.
    pub fn reset(&mut self, id: String) {
        let generation = self.generation;
        *self = Self {
            id,
            generation,
            ..Self::default()
        };
    }
}

/// Central application state container.
///
/// Mutated only by the event handler in response to user input, worker
/// responses, and web-request results. View models are computed on demand
/// via [`AppState::compute_viewmodel`].
#[derive(Debug, Clone)]
pub struct AppState {
    /// OMDb API key; empty until configured or loaded from storage.
    pub api_key: String,

    /// Favorites keyed by IMDb id. Every mutation is immediately followed by
    /// a full-snapshot persistence message, so this map and storage never
    /// diverge.
    pub favorites: BTreeMap<String, MovieSummary>,

    /// The location string, e.g. `"#/movie/tt1375666"`. Single source of
    /// truth for routing; rewritten by navigation, never edited elsewhere.
    pub location: String,

    /// Route derived from `location`. Updated only by [`Self::set_location`].
    pub route: Route,

    /// Last submitted search term, held at the shell so returning to the
    /// search page can re-run it.
    pub last_query: String,

    /// Search page session.
    pub search: SearchSession,

    /// Details page session.
    pub details: DetailsSession,

    /// Favorites-page fuzzy filter text.
    pub favorites_filter: String,

    /// Favorites passing the filter, in display order.
    pub filtered_favorites: Vec<MovieSummary>,

    /// Cursor position within the active page's list.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Text being typed into the input box (query, key, or filter).
    pub input_buffer: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state on the search route.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            api_key: String::new(),
            favorites: BTreeMap::new(),
            location: "#/search".to_string(),
            route: Route::Search,
            last_query: String::new(),
            search: SearchSession::default(),
            details: DetailsSession::default(),
            favorites_filter: String::new(),
            filtered_favorites: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            theme,
        }
    }

    /// Rewrites the location string and recomputes the derived route.
    ///
    /// This is the only place the route changes; callers navigate by
    /// rewriting the location, never by assigning a route directly.
    pub fn set_location(&mut self, fragment: String) {
        tracing::debug!(location = %fragment, "location changed");
        self.route = Route::parse(&fragment);
        self.location = fragment;
    }

    /// Number of items in the list the cursor currently moves over.
    #[must_use]
    pub fn visible_list_len(&self) -> usize {
        match self.route {
            Route::Search => self.search.results.len(),
            Route::Favorites => self.filtered_favorites.len(),
            Route::Movie { .. } => 0,
        }
    }

    /// Moves the cursor down one position, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_list_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up one position, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_list_len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the summary under the cursor, if any.
    #[must_use]
    pub fn selected_summary(&self) -> Option<&MovieSummary> {
        match self.route {
            Route::Search => self.search.results.get(self.selected_index),
            Route::Favorites => self.filtered_favorites.get(self.selected_index),
            Route::Movie { .. } => None,
        }
    }

    /// Whether the given id is currently favorited.
    #[must_use]
    pub fn is_favorite(&self, imdb_id: &str) -> bool {
        self.favorites.contains_key(imdb_id)
    }

    /// Recomputes the filtered favorites list from the map and filter text.
    ///
    /// Tokenizes the filter on whitespace and requires every token to fuzzy
    /// match the title. Clamps the cursor to the new bounds.
    pub fn apply_favorites_filter(&mut self) {
        use fuzzy_matcher::FuzzyMatcher;

        let _span = tracing::debug_span!(
            "apply_favorites_filter",
            total = self.favorites.len(),
            filter_len = self.favorites_filter.len()
        )
        .entered();

        let tokens: Vec<String> = self
            .favorites_filter
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let mut filtered: Vec<MovieSummary> = self
            .favorites
            .values()
            .filter(|movie| {
                matcher.as_ref().map_or(true, |m| {
                    let title_lower = movie.title.to_lowercase();
                    tokens
                        .iter()
                        .all(|token| m.fuzzy_match(&title_lower, token).is_some())
                })
            })
            .cloned()
            .collect();

        filtered.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.imdb_id.cmp(&b.imdb_id)));
        self.filtered_favorites = filtered;

        if self.filtered_favorites.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_favorites.len() - 1);
        }

        tracing::debug!(filtered = self.filtered_favorites.len(), "filter applied");
    }

    /// Total page count for the current search total.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        api::total_pages(self.search.total)
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    ///
    /// Handles list windowing (centered on the cursor), filter-match
    /// highlighting, and per-page chrome (status line, pagination, empty
    /// states).
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UiViewModel {
        let page = match &self.route {
            Route::Search => PageView::Cards(self.compute_search_view(rows)),
            Route::Favorites => PageView::Cards(self.compute_favorites_view(rows)),
            Route::Movie { .. } => PageView::Details(self.compute_details_view()),
        };

        UiViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            input: self.compute_input(),
            loading: self.page_loading(),
            error: self.page_error(),
            page,
        }
    }

    fn page_loading(&self) -> bool {
        match self.route {
            Route::Search => self.search.loading,
            Route::Movie { .. } => self.details.loading,
            Route::Favorites => false,
        }
    }

    fn page_error(&self) -> String {
        match self.route {
            Route::Search => {
                if self.api_key.is_empty() {
                    return "Add your OMDb API key to start searching (press i).".to_string();
                }
                self.search.error.clone()
            }
            Route::Movie { .. } => self.details.error.clone(),
            Route::Favorites => String::new(),
        }
    }

    fn compute_search_view(&self, rows: usize) -> CardListView {
        let results = &self.search.results;
        let total_pages = self.total_pages();

        let status = if !self.search.loading && self.search.error.is_empty() && self.search.total > 0
        {
            Some(format!(
                "{} result(s) — page {} of {}",
                self.search.total, self.search.page, total_pages
            ))
        } else {
            None
        };

        let pagination = if total_pages > 1 && !results.is_empty() {
            Some(PaginationView {
                current: self.search.page,
                total: total_pages,
                window: page_window(self.search.page, total_pages),
                at_first: self.search.page == 1,
                at_last: self.search.page == total_pages,
            })
        } else {
            None
        };

        let empty_state = if results.is_empty() && !self.search.loading {
            if self.search.query.is_empty() {
                Some(EmptyState {
                    message: "Search for a movie".to_string(),
                    subtitle: "Press / and type a title".to_string(),
                })
            } else if self.search.error.is_empty() {
                Some(EmptyState {
                    message: "No results found.".to_string(),
                    subtitle: "Try a different title".to_string(),
                })
            } else {
                None
            }
        } else {
            None
        };

        CardListView {
            status,
            items: self.compute_card_items(results, rows, None),
            pagination,
            empty_state,
        }
    }

    fn compute_favorites_view(&self, rows: usize) -> CardListView {
        let matcher = if !self.favorites_filter.is_empty() {
            Some(SkimMatcherV2::default())
        } else {
            None
        };

        let empty_state = if self.favorites.is_empty() {
            Some(EmptyState {
                message: "Your favorites list is empty.".to_string(),
                subtitle: "Press f on a search result to add one".to_string(),
            })
        } else if self.filtered_favorites.is_empty() {
            Some(EmptyState {
                message: "No favorites match the filter.".to_string(),
                subtitle: "Press Esc to clear it".to_string(),
            })
        } else {
            None
        };

        CardListView {
            status: Some(format!("{} favorite(s)", self.favorites.len())),
            items: self.compute_card_items(&self.filtered_favorites, rows, matcher.as_ref()),
            pagination: None,
            empty_state,
        }
    }

    fn compute_details_view(&self) -> DetailsView {
        let Some(data) = &self.details.data else {
            return DetailsView::default();
        };

        DetailsView {
            title: format!("{} ({})", data.title, data.year),
            meta: format!("{} • {}", data.runtime, data.genre),
            director: data.director.clone(),
            rated: data.rated.clone(),
            imdb_rating: data.imdb_rating.clone(),
            plot: data.plot.clone(),
            actors: data.actors.clone(),
            poster: if data.has_poster() {
                data.poster.clone()
            } else {
                String::new()
            },
            link: imdb_url(&data.imdb_id),
            is_favorite: self.is_favorite(&data.imdb_id),
            present: true,
        }
    }

    /// Windows a list of summaries around the cursor and maps them to card
    /// items.
    fn compute_card_items(
        &self,
        items: &[MovieSummary],
        rows: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> Vec<CardItem> {
        if items.is_empty() {
            return vec![];
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(items.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| {
                let absolute_idx = visible_start + relative_idx;
                CardItem {
                    title: movie.title.clone(),
                    year: movie.year.clone(),
                    imdb_id: movie.imdb_id.clone(),
                    is_selected: absolute_idx == self.selected_index,
                    is_favorite: self.is_favorite(&movie.imdb_id),
                    has_poster: movie.has_poster(),
                    highlight_ranges: matcher
                        .map_or_else(Vec::new, |m| self.compute_highlight_ranges(&movie.title, m)),
                }
            })
            .collect()
    }

    /// Computes character index ranges to highlight for filter matches.
    ///
    /// Coalesces the matcher's individual indices into contiguous `(start,
    /// end)` ranges (exclusive end).
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.favorites_filter) else {
            return vec![];
        };

        let mut ranges = Vec::new();
        let mut start = None;
        let mut prev = None;

        for &idx in &indices {
            match (start, prev) {
                (None, _) => {
                    start = Some(idx);
                    prev = Some(idx);
                }
                (Some(_), Some(p)) if idx == p + 1 => {
                    prev = Some(idx);
                }
                (Some(s), Some(p)) => {
                    ranges.push((s, p + 1));
                    start = Some(idx);
                    prev = Some(idx);
                }
                _ => {}
            }
        }

        if let (Some(s), Some(p)) = (start, prev) {
            ranges.push((s, p + 1));
        }

        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.route {
            Route::Search => " Reelfinder · Search ".to_string(),
            Route::Movie { .. } => " Reelfinder · Details ".to_string(),
            Route::Favorites => {
                format!(" Reelfinder · Favorites ({}) ", self.favorites.len())
            }
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, &self.route) {
            (InputMode::Query(QueryFocus::Typing), _) => {
                "Enter: search  Tab: results  Esc: cancel  Ctrl+n/p: navigate".to_string()
            }
            (InputMode::Query(QueryFocus::Navigating), _) => {
                "Esc: close  /: edit query  j/k: navigate  Enter: details".to_string()
            }
            (InputMode::ApiKey, _) => "Enter: save key  Esc: cancel".to_string(),
            (InputMode::Filter, _) => "Type to filter  Enter: keep  Esc: clear".to_string(),
            (InputMode::Normal, Route::Search) => {
                "j/k: navigate  Enter: details  f: favorite  h/l: page  g/G: first/last  /: search  i: api key  v: favorites  q: quit"
                    .to_string()
            }
            (InputMode::Normal, Route::Favorites) => {
                "j/k: navigate  Enter: details  f: remove  /: filter  s: search  q: quit"
                    .to_string()
            }
            (InputMode::Normal, Route::Movie { .. }) => {
                "f: favorite  Esc: back  s: search  v: favorites  q: quit".to_string()
            }
        };

        FooterInfo { keybindings }
    }

    fn compute_input(&self) -> Option<InputInfo> {
        let label = match self.input_mode {
            InputMode::Normal => return None,
            InputMode::Query(_) => "Search",
            InputMode::ApiKey => "OMDb API key",
            InputMode::Filter => "Filter",
        };

        Some(InputInfo {
            label: label.to_string(),
            value: self.input_buffer.clone(),
        })
    }

    /// Rows left for the card list after subtracting UI chrome.
    ///
    /// Accounts for the header block, borders, status line, pagination row,
    /// footer, and the input box when one is open.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(9),
            _ => total_rows.saturating_sub(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2010".to_string(),
            poster: "N/A".to_string(),
        }
    }

    fn state_with_results(count: usize) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.search.results = (0..count)
            .map(|i| movie(&format!("tt{i:07}"), &format!("Movie {i}")))
            .collect();
        state
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state_with_results(3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_inert_on_empty_lists() {
        let mut state = state_with_results(0);
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_summary().is_none());
    }

    #[test]
    fn favorites_filter_narrows_and_clamps_selection() {
        let mut state = AppState::new(Theme::default());
        state.set_location("#/favorites".to_string());
        for (id, title) in [
            ("tt1", "Alien"),
            ("tt2", "Aliens"),
            ("tt3", "Blade Runner"),
        ] {
            state.favorites.insert(id.to_string(), movie(id, title));
        }
        state.selected_index = 2;

        state.favorites_filter = "alien".to_string();
        state.apply_favorites_filter();

        assert_eq!(state.filtered_favorites.len(), 2);
        assert_eq!(state.selected_index, 1);
        assert!(state
            .filtered_favorites
            .iter()
            .all(|m| m.title.to_lowercase().contains("alien")));
    }

    #[test]
    fn pagination_is_suppressed_at_one_page() {
        let mut state = state_with_results(5);
        state.search.total = 5;

        let vm = state.compute_viewmodel(40, 100);
        let PageView::Cards(cards) = vm.page else {
            panic!("expected card view");
        };
        assert!(cards.pagination.is_none());
    }

    #[test]
    fn pagination_appears_past_one_page() {
        let mut state = state_with_results(10);
        state.search.total = 23;
        state.search.page = 2;

        let vm = state.compute_viewmodel(40, 100);
        let PageView::Cards(cards) = vm.page else {
            panic!("expected card view");
        };
        let pagination = cards.pagination.expect("pagination should render");
        assert_eq!(pagination.total, 3);
        assert_eq!(pagination.window, vec![1, 2, 3]);
        assert!(!pagination.at_first);
        assert!(!pagination.at_last);
    }

    #[test]
    fn missing_api_key_yields_hint_banner_on_search() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(40, 100);
        assert!(vm.error.contains("API key"));
    }
}
