//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! API responses, and worker responses, translating them into state changes
//! and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Request generations
//!
//! Every fetch bumps the owning session's generation counter and tags the
//! outgoing request with it; a response event carrying any other value is
//! dropped without touching state. That is the plugin's only ordering
//! guarantee: at most one applied response per input generation, with no
//! assumption about completion order. In-flight requests are never cancelled,
//! only ignored.

use crate::api;
use crate::app::modes::{InputMode, QueryFocus};
use crate::app::router::normalize_target;
use crate::app::router::Route;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::MovieSummary;
use crate::storage::FavoriteRecord;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::collections::BTreeMap;

/// Events triggered by user input, API responses, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one position (wraps to top).
    KeyDown,
    /// Moves the cursor up one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Opens the details page for the movie under the cursor.
    OpenDetails,
    /// Toggles the current movie in the favorites collection.
    ///
    /// Insert-if-absent, remove-if-present: a double toggle is a no-op. The
    /// subject is the cursor's movie on list pages and the fetched movie on
    /// the details page.
    ToggleFavorite,

    /// Opens the search query input.
    QueryMode,
    /// Opens the API key input.
    ApiKeyMode,
    /// Opens the favorites filter input.
    FilterMode,
    /// Refocuses the query input from result navigation.
    FocusInput,
    /// Moves focus from the query input to the result list.
    FocusResults,
    /// Closes the input box, discarding the buffer.
    ExitInput,
    /// Appends a character to the input buffer.
    Char(char),
    /// Removes the last character from the input buffer.
    Backspace,
    /// Submits the input buffer (search, key save, or filter keep).
    SubmitInput,
    /// Escape in normal mode: back out of the details page.
    Escape,

    /// Navigates to the search page.
    ShowSearch,
    /// Navigates to the favorites page.
    ShowFavorites,
    /// Navigates to an arbitrary location target.
    Navigate {
        /// Target fragment, with or without the `#/` prefix.
        target: String,
    },

    /// Advances to the next result page.
    NextPage,
    /// Returns to the previous result page.
    PrevPage,
    /// Jumps to the first result page.
    FirstPage,
    /// Jumps to the last result page.
    LastPage,

    /// Raw result of a search web request.
    SearchResponse {
        /// Generation the request was tagged with.
        generation: u64,
        /// HTTP status code.
        status: u16,
        /// Response body bytes.
        body: Vec<u8>,
    },

    /// Raw result of a details web request.
    DetailsResponse {
        /// Generation the request was tagged with.
        generation: u64,
        /// HTTP status code.
        status: u16,
        /// Response body bytes.
        body: Vec<u8>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a repaint, and the side
/// effects to run in order.
///
/// # Errors
///
/// Returns errors from state mutation methods. Parse failures of API
/// responses are not errors here; they become banner text on the owning
/// session.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::OpenDetails => {
            let Some(movie) = state.selected_summary() else {
                tracing::debug!("no movie under cursor");
                return Ok((false, vec![]));
            };
            let target = format!("movie/{}", movie.imdb_id);

            if state.input_mode != InputMode::Normal {
                state.input_mode = InputMode::Normal;
                state.input_buffer.clear();
            }

            let actions = navigate_to(state, &target);
            Ok((true, actions))
        }

        Event::ToggleFavorite => {
            let Some(movie) = toggle_subject(state) else {
                tracing::debug!("nothing to toggle");
                return Ok((false, vec![]));
            };

            let id = movie.imdb_id.clone();
            if state.favorites.remove(&id).is_none() {
                tracing::debug!(imdb_id = %id, "favorite added");
                state.favorites.insert(id.clone(), movie);
            } else {
                tracing::debug!(imdb_id = %id, "favorite removed");
            }

            if state.route == Route::Favorites {
                state.apply_favorites_filter();
            }

            // Full snapshot on every mutation keeps storage in lockstep.
            let snapshot: BTreeMap<String, FavoriteRecord> = state
                .favorites
                .values()
                .cloned()
                .map(|summary| (summary.imdb_id.clone(), FavoriteRecord::from(summary)))
                .collect();

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::SaveFavorites {
                    favorites: snapshot,
                })],
            ))
        }

        Event::QueryMode => {
            tracing::debug!("entering query input");
            state.input_mode = InputMode::Query(QueryFocus::Typing);
            state.input_buffer = state.last_query.clone();
            Ok((true, vec![]))
        }
        Event::ApiKeyMode => {
            tracing::debug!("entering api key input");
            state.input_mode = InputMode::ApiKey;
            state.input_buffer = state.api_key.clone();
            Ok((true, vec![]))
        }
        Event::FilterMode => {
            if state.route != Route::Favorites {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Filter;
            state.input_buffer = state.favorites_filter.clone();
            Ok((true, vec![]))
        }
        Event::FocusInput => {
            state.input_mode = InputMode::Query(QueryFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.input_buffer.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Query(QueryFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitInput => {
            tracing::debug!("closing input box");
            if state.input_mode == InputMode::Filter {
                state.favorites_filter.clear();
                state.apply_favorites_filter();
            }
            state.input_mode = InputMode::Normal;
            state.input_buffer.clear();
            Ok((true, vec![]))
        }

        Event::Char(c) => {
            if !state.input_mode.is_capturing() {
                return Ok((false, vec![]));
            }
            state.input_buffer.push(*c);
            if state.input_mode == InputMode::Filter {
                state.favorites_filter = state.input_buffer.clone();
                state.apply_favorites_filter();
            }
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_capturing() {
                return Ok((false, vec![]));
            }
            state.input_buffer.pop();
            if state.input_mode == InputMode::Filter {
                state.favorites_filter = state.input_buffer.clone();
                state.apply_favorites_filter();
            }
            Ok((true, vec![]))
        }

        Event::SubmitInput => match state.input_mode {
            InputMode::Query(_) => {
                let term = state.input_buffer.trim().to_string();
                if term.is_empty() {
                    return Ok((false, vec![]));
                }
                tracing::debug!(query = %term, "query submitted");
                state.last_query = term;
                state.input_mode = InputMode::Normal;
                state.input_buffer.clear();
                // Navigation resets the session to page 1 and refetches.
                let actions = navigate_to(state, "search");
                Ok((true, actions))
            }
            InputMode::ApiKey => {
                let key = state.input_buffer.trim().to_string();
                tracing::debug!(key_present = !key.is_empty(), "api key submitted");
                state.api_key = key.clone();
                state.input_mode = InputMode::Normal;
                state.input_buffer.clear();

                let mut actions = vec![Action::PostToWorker(WorkerMessage::SaveApiKey { key })];
                actions.extend(refetch_current_route(state));
                Ok((true, actions))
            }
            InputMode::Filter => {
                state.input_mode = InputMode::Normal;
                state.input_buffer.clear();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },

        Event::Escape => {
            if matches!(state.route, Route::Movie { .. }) {
                let actions = navigate_to(state, "search");
                return Ok((true, actions));
            }
            Ok((false, vec![]))
        }

        Event::ShowSearch => {
            let actions = navigate_to(state, "search");
            Ok((true, actions))
        }
        Event::ShowFavorites => {
            let actions = navigate_to(state, "favorites");
            Ok((true, actions))
        }
        Event::Navigate { target } => {
            let actions = navigate_to(state, target);
            Ok((true, actions))
        }

        Event::NextPage => {
            let target = state.search.page.saturating_add(1);
            change_page(state, target)
        }
        Event::PrevPage => {
            let target = state.search.page.saturating_sub(1);
            change_page(state, target)
        }
        Event::FirstPage => change_page(state, 1),
        Event::LastPage => {
            let target = state.total_pages();
            change_page(state, target)
        }

        Event::SearchResponse {
            generation,
            status,
            body,
        } => {
            if *generation != state.search.generation {
                tracing::debug!(
                    response_generation = generation,
                    current_generation = state.search.generation,
                    "dropping superseded search response"
                );
                return Ok((false, vec![]));
            }

            state.search.loading = false;
            match api::parse_search_response(*status, body) {
                Ok(results) => {
                    tracing::debug!(
                        item_count = results.items.len(),
                        total = results.total,
                        "search results applied"
                    );
                    state.search.results = results.items;
                    state.search.total = results.total;
                    state.search.error.clear();
                    if state.selected_index >= state.search.results.len() {
                        state.selected_index = 0;
                    }
                }
                Err(e) => {
                    // Previous results stay on screen behind the banner.
                    tracing::debug!(error = %e, "search failed");
                    state.search.error = e.to_string();
                }
            }
            Ok((true, vec![]))
        }

        Event::DetailsResponse {
            generation,
            status,
            body,
        } => {
            if *generation != state.details.generation {
                tracing::debug!(
                    response_generation = generation,
                    current_generation = state.details.generation,
                    "dropping superseded details response"
                );
                return Ok((false, vec![]));
            }

            state.details.loading = false;
            match api::parse_details_response(*status, body) {
                Ok(details) => {
                    tracing::debug!(imdb_id = %details.imdb_id, "details applied");
                    state.details.data = Some(details);
                    state.details.error.clear();
                }
                Err(e) => {
                    tracing::debug!(error = %e, "details fetch failed");
                    state.details.error = e.to_string();
                }
            }
            Ok((true, vec![]))
        }

        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Rewrites the location, derives the new route, and runs its mount effects.
///
/// The returned actions are the fetches the freshly mounted page needs.
fn navigate_to(state: &mut AppState, target: &str) -> Vec<Action> {
    let fragment = normalize_target(target);
    state.set_location(fragment);
    state.selected_index = 0;

    match state.route.clone() {
        Route::Search => {
            let query = state.last_query.clone();
            state.search.reset(query);
            start_search(state)
        }
        Route::Movie { id } => {
            state.details.reset(id);
            start_details(state)
        }
        Route::Favorites => {
            state.favorites_filter.clear();
            state.apply_favorites_filter();
            vec![]
        }
    }
}

/// Issues a search request for the session's current query and page.
///
/// No-op unless both the API key and the query are non-empty.
fn start_search(state: &mut AppState) -> Vec<Action> {
    if state.api_key.is_empty() || state.search.query.is_empty() {
        return vec![];
    }

    state.search.generation += 1;
    state.search.loading = true;
    state.search.error.clear();

    tracing::debug!(
        query = %state.search.query,
        page = state.search.page,
        generation = state.search.generation,
        "search dispatched"
    );

    vec![Action::FetchSearch {
        url: api::search_url(&state.api_key, &state.search.query, state.search.page),
        generation: state.search.generation,
    }]
}

/// Issues a details request for the session's movie id.
///
/// No-op unless both the API key and the id are non-empty.
fn start_details(state: &mut AppState) -> Vec<Action> {
    if state.api_key.is_empty() || state.details.id.is_empty() {
        return vec![];
    }

    state.details.generation += 1;
    state.details.loading = true;
    state.details.error.clear();

    tracing::debug!(
        imdb_id = %state.details.id,
        generation = state.details.generation,
        "details dispatched"
    );

    vec![Action::FetchDetails {
        url: api::details_url(&state.api_key, &state.details.id),
        generation: state.details.generation,
    }]
}

/// Re-issues the active page's request after an API key change.
fn refetch_current_route(state: &mut AppState) -> Vec<Action> {
    match state.route {
        Route::Search => start_search(state),
        Route::Movie { .. } => start_details(state),
        Route::Favorites => vec![],
    }
}

/// Moves the search session to `page`, clamped to the valid range, and
/// refetches when the page actually changed.
fn change_page(state: &mut AppState, page: u32) -> Result<(bool, Vec<Action>)> {
    if state.route != Route::Search {
        return Ok((false, vec![]));
    }

    let total_pages = state.total_pages();
    if total_pages <= 1 {
        return Ok((false, vec![]));
    }

    let target = page.clamp(1, total_pages);
    if target == state.search.page {
        return Ok((false, vec![]));
    }

    state.search.page = target;
    state.selected_index = 0;
    let actions = start_search(state);
    Ok((true, actions))
}

/// The movie a favorite toggle applies to, per route.
///
/// List pages toggle the cursor's movie; the details page builds a summary
/// from the fetched record.
fn toggle_subject(state: &AppState) -> Option<MovieSummary> {
    match state.route {
        Route::Search | Route::Favorites => state.selected_summary().cloned(),
        Route::Movie { .. } => state.details.data.as_ref().map(crate::domain::MovieDetails::summary),
    }
}

fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::StateLoaded { api_key, favorites } => {
            tracing::debug!(
                stored_key_present = !api_key.is_empty(),
                favorite_count = favorites.len(),
                "persisted state loaded"
            );

            state.favorites = favorites
                .values()
                .cloned()
                .map(|record| (record.imdb_id.clone(), MovieSummary::from(record)))
                .collect();
            if state.route == Route::Favorites {
                state.apply_favorites_filter();
            }

            // A key from the plugin configuration wins; the stored key only
            // fills the gap.
            let mut actions = vec![];
            if state.api_key.is_empty() && !api_key.is_empty() {
                state.api_key.clone_from(api_key);
                actions = refetch_current_route(state);
            }

            Ok((true, actions))
        }
        WorkerResponse::ApiKeySaved | WorkerResponse::FavoritesSaved { .. } => Ok((false, vec![])),
        WorkerResponse::Error { message } => {
            // Storage failures are logged, never shown to the user.
            tracing::error!(error = %message, "worker error");
            Ok((false, vec![]))
        }
    }
}

/// Short name for span labels, avoiding response bodies in the logs.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::CloseFocus => "CloseFocus",
        Event::OpenDetails => "OpenDetails",
        Event::ToggleFavorite => "ToggleFavorite",
        Event::QueryMode => "QueryMode",
        Event::ApiKeyMode => "ApiKeyMode",
        Event::FilterMode => "FilterMode",
        Event::FocusInput => "FocusInput",
        Event::FocusResults => "FocusResults",
        Event::ExitInput => "ExitInput",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::SubmitInput => "SubmitInput",
        Event::Escape => "Escape",
        Event::ShowSearch => "ShowSearch",
        Event::ShowFavorites => "ShowFavorites",
        Event::Navigate { .. } => "Navigate",
        Event::NextPage => "NextPage",
        Event::PrevPage => "PrevPage",
        Event::FirstPage => "FirstPage",
        Event::LastPage => "LastPage",
        Event::SearchResponse { .. } => "SearchResponse",
        Event::DetailsResponse { .. } => "DetailsResponse",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn test_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.api_key = "k_test".to_string();
        state
    }

    fn movie(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "1999".to_string(),
            poster: "N/A".to_string(),
        }
    }

    fn search_body(titles: &[(&str, &str)], total: u32) -> Vec<u8> {
        let entries: Vec<String> = titles
            .iter()
            .map(|(id, title)| {
                format!(r#"{{"Title":"{title}","Year":"1999","imdbID":"{id}","Poster":"N/A"}}"#)
            })
            .collect();
        format!(
            r#"{{"Search":[{}],"totalResults":"{total}","Response":"True"}}"#,
            entries.join(",")
        )
        .into_bytes()
    }

    /// Submits a query through the input flow, returning the fetch actions.
    fn submit_query(state: &mut AppState, query: &str) -> Vec<Action> {
        handle_event(state, &Event::QueryMode).unwrap();
        state.input_buffer = query.to_string();
        let (_, actions) = handle_event(state, &Event::SubmitInput).unwrap();
        actions
    }

    fn fetch_generation(actions: &[Action]) -> u64 {
        match actions.first() {
            Some(Action::FetchSearch { generation, .. }) => *generation,
            other => panic!("expected FetchSearch, got {other:?}"),
        }
    }

    #[test]
    fn double_toggle_is_a_no_op() {
        let mut state = test_state();
        state.search.results = vec![movie("tt1", "Alien")];

        let (_, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(state.favorites.contains_key("tt1"));
        match &actions[0] {
            Action::PostToWorker(WorkerMessage::SaveFavorites { favorites }) => {
                assert_eq!(favorites.len(), 1);
            }
            other => panic!("expected SaveFavorites, got {other:?}"),
        }

        let (_, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(state.favorites.is_empty());
        match &actions[0] {
            Action::PostToWorker(WorkerMessage::SaveFavorites { favorites }) => {
                assert!(favorites.is_empty());
            }
            other => panic!("expected SaveFavorites, got {other:?}"),
        }
    }

    #[test]
    fn toggle_sequence_replays_insert_remove_semantics() {
        let mut state = test_state();
        state.search.results = vec![movie("tt1", "Alien"), movie("tt2", "Aliens")];

        // toggle tt1, toggle tt2, toggle tt1 again -> only tt2 remains
        handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        state.selected_index = 1;
        handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        state.selected_index = 0;
        handle_event(&mut state, &Event::ToggleFavorite).unwrap();

        assert_eq!(state.favorites.len(), 1);
        assert!(state.favorites.contains_key("tt2"));
    }

    #[test]
    fn toggle_on_details_page_builds_summary_from_details() {
        let mut state = test_state();
        let (_, actions) = handle_event(
            &mut state,
            &Event::Navigate {
                target: "movie/tt1375666".to_string(),
            },
        )
        .unwrap();
        let generation = match &actions[0] {
            Action::FetchDetails { generation, .. } => *generation,
            other => panic!("expected FetchDetails, got {other:?}"),
        };

        let body = br#"{
            "Title":"Inception","Year":"2010","imdbID":"tt1375666",
            "Poster":"https://img/x.jpg","Runtime":"148 min","Genre":"Sci-Fi",
            "Director":"Christopher Nolan","Actors":"Leonardo DiCaprio",
            "Plot":"Dreams.","Rated":"PG-13","imdbRating":"8.8","Response":"True"
        }"#
        .to_vec();
        handle_event(
            &mut state,
            &Event::DetailsResponse {
                generation,
                status: 200,
                body,
            },
        )
        .unwrap();

        handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        let favorite = state.favorites.get("tt1375666").unwrap();
        assert_eq!(favorite.title, "Inception");
        assert_eq!(favorite.year, "2010");
    }

    #[test]
    fn stale_search_response_is_dropped() {
        let mut state = test_state();

        let first = fetch_generation(&submit_query(&mut state, "alien"));
        let second = fetch_generation(&submit_query(&mut state, "blade runner"));
        assert!(second > first);

        // The first request resolves late; its payload must not apply.
        let (rendered, _) = handle_event(
            &mut state,
            &Event::SearchResponse {
                generation: first,
                status: 200,
                body: search_body(&[("tt1", "Alien")], 1),
            },
        )
        .unwrap();
        assert!(!rendered);
        assert!(state.search.results.is_empty());
        assert!(state.search.loading);

        let (rendered, _) = handle_event(
            &mut state,
            &Event::SearchResponse {
                generation: second,
                status: 200,
                body: search_body(&[("tt2", "Blade Runner")], 1),
            },
        )
        .unwrap();
        assert!(rendered);
        assert_eq!(state.search.results.len(), 1);
        assert_eq!(state.search.results[0].title, "Blade Runner");
        assert!(!state.search.loading);
    }

    #[test]
    fn submitting_a_query_resets_the_page_to_one() {
        let mut state = test_state();
        submit_query(&mut state, "alien");
        state.search.page = 5;
        state.search.total = 100;

        let actions = submit_query(&mut state, "alien again");
        assert_eq!(state.search.page, 1);
        match &actions[0] {
            Action::FetchSearch { url, .. } => assert!(url.ends_with("&page=1")),
            other => panic!("expected FetchSearch, got {other:?}"),
        }
    }

    #[test]
    fn page_navigation_is_clamped_to_bounds() {
        let mut state = test_state();
        let generation = fetch_generation(&submit_query(&mut state, "alien"));
        handle_event(
            &mut state,
            &Event::SearchResponse {
                generation,
                status: 200,
                body: search_body(&[("tt1", "Alien")], 23),
            },
        )
        .unwrap();
        assert_eq!(state.total_pages(), 3);

        let (_, actions) = handle_event(&mut state, &Event::LastPage).unwrap();
        assert_eq!(state.search.page, 3);
        assert!(matches!(actions[0], Action::FetchSearch { .. }));

        // Already at the last page: no fetch, no render.
        let (rendered, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.search.page, 3);
    }

    #[test]
    fn search_failure_keeps_previous_results_behind_the_banner() {
        let mut state = test_state();
        let generation = fetch_generation(&submit_query(&mut state, "alien"));
        handle_event(
            &mut state,
            &Event::SearchResponse {
                generation,
                status: 200,
                body: search_body(&[("tt1", "Alien")], 23),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        let generation = fetch_generation(&actions);
        handle_event(
            &mut state,
            &Event::SearchResponse {
                generation,
                status: 200,
                body: br#"{"Response":"False","Error":"Movie not found!"}"#.to_vec(),
            },
        )
        .unwrap();

        assert_eq!(state.search.error, "Movie not found!");
        assert_eq!(state.search.results.len(), 1);
    }

    #[test]
    fn navigation_updates_route_through_the_location_string() {
        let mut state = test_state();

        handle_event(&mut state, &Event::ShowFavorites).unwrap();
        assert_eq!(state.location, "#/favorites");
        assert_eq!(state.route, Route::Favorites);

        handle_event(
            &mut state,
            &Event::Navigate {
                target: "#/movie/tt42".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            state.route,
            Route::Movie {
                id: "tt42".to_string()
            }
        );

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.route, Route::Search);
    }

    #[test]
    fn saving_a_key_refetches_the_open_search() {
        let mut state = test_state();
        submit_query(&mut state, "alien");

        handle_event(&mut state, &Event::ApiKeyMode).unwrap();
        state.input_buffer = " k_fresh ".to_string();
        let (_, actions) = handle_event(&mut state, &Event::SubmitInput).unwrap();

        assert_eq!(state.api_key, "k_fresh");
        match &actions[0] {
            Action::PostToWorker(WorkerMessage::SaveApiKey { key }) => {
                assert_eq!(key, "k_fresh");
            }
            other => panic!("expected SaveApiKey, got {other:?}"),
        }
        assert!(matches!(actions[1], Action::FetchSearch { .. }));
    }

    #[test]
    fn empty_query_submission_is_ignored() {
        let mut state = test_state();
        handle_event(&mut state, &Event::QueryMode).unwrap();
        state.input_buffer = "   ".to_string();
        let (rendered, actions) = handle_event(&mut state, &Event::SubmitInput).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn stored_state_fills_empty_key_and_favorites() {
        let mut state = AppState::new(Theme::default());

        let mut favorites = BTreeMap::new();
        favorites.insert(
            "tt1".to_string(),
            FavoriteRecord {
                imdb_id: "tt1".to_string(),
                title: "Alien".to_string(),
                year: "1979".to_string(),
                poster: "N/A".to_string(),
            },
        );

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::StateLoaded {
                api_key: "k_stored".to_string(),
                favorites,
            }),
        )
        .unwrap();

        assert_eq!(state.api_key, "k_stored");
        assert!(state.is_favorite("tt1"));
    }

    #[test]
    fn configured_key_wins_over_stored_key() {
        let mut state = test_state();

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::StateLoaded {
                api_key: "k_stored".to_string(),
                favorites: BTreeMap::new(),
            }),
        )
        .unwrap();

        assert_eq!(state.api_key, "k_test");
    }

    #[test]
    fn worker_errors_stay_silent() {
        let mut state = test_state();
        let (rendered, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "disk full".to_string(),
            }),
        )
        .unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn favorites_filter_typing_narrows_live() {
        let mut state = test_state();
        state
            .favorites
            .insert("tt1".to_string(), movie("tt1", "Alien"));
        state
            .favorites
            .insert("tt2".to_string(), movie("tt2", "Heat"));

        handle_event(&mut state, &Event::ShowFavorites).unwrap();
        assert_eq!(state.filtered_favorites.len(), 2);

        handle_event(&mut state, &Event::FilterMode).unwrap();
        for c in "heat".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.filtered_favorites.len(), 1);
        assert_eq!(state.filtered_favorites[0].title, "Heat");

        // Esc clears the filter entirely.
        handle_event(&mut state, &Event::ExitInput).unwrap();
        assert_eq!(state.filtered_favorites.len(), 2);
        assert!(state.favorites_filter.is_empty());
    }
}
