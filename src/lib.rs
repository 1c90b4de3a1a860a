//! Reelfinder: a Zellij plugin for searching movies on OMDb.
//!
//! Reelfinder is a terminal multiplexer plugin that provides:
//! - Title search against the OMDb API with paginated results
//! - A details view with full metadata and the movie's IMDb link
//! - A locally persisted favorites list with idempotent toggling
//! - JSON-file persistence handled by a background worker thread
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, route derivation                 │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                │                │
//! ┌───────────────┐  ┌───────────────┐  ┌───────────────┐
//! │ UI Layer      │  │ API Client    │  │ Worker Layer  │
//! │ (ui/)         │  │ (api/)        │  │ (worker/)     │
//! │ - Rendering   │  │ - URL build   │  │ - Storage I/O │
//! │ - Theming     │  │ - Parsing     │  │ - IPC bridge  │
//! │ - Components  │  │ - Error map   │  │               │
//! └───────────────┘  └───────────────┘  └───────────────┘
//!         │                │                │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Storage & Infrastructure Layers            │
//! │  - Movie models, errors (domain/)                   │
//! │  - API key + favorites persistence (storage/)       │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! The shell state (API key, favorites, last query) lives in
//! [`app::AppState`]. A single location string (e.g. `"#/movie/tt1375666"`)
//! determines the active page through [`app::Route::parse`]; navigation
//! rewrites that string and re-derives the route, so routing state can never
//! diverge from it. Page mounts dispatch API fetches as
//! [`app::Action`] values; the shim fires them over Zellij's `web_request`
//! with the request generation in the context map, and responses come back as
//! events that the handler drops when their generation is no longer current.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/reelfinder.wasm" {
//!         api_key "k_abcdefg"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! The API key can also be entered interactively (`i`) and is persisted to
//! the plugin data directory; a key in the configuration takes precedence
//! over the stored one.

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, QueryFocus, Route};
pub use domain::{MovieDetails, MovieSummary, ReelfinderError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// OMDb API key. Optional; when set it takes precedence over a key
    /// persisted from an earlier session.
    pub api_key: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Trace level directive for the log file.
    ///
    /// Any `EnvFilter` directive works, e.g. `"debug"` or
    /// `"info,reelfinder::api=debug"`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Missing keys fall back to `None`; an `api_key`
    /// that trims to empty counts as absent.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use reelfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "k_abcdefg".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("k_abcdefg"));
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_key = config
            .get("api_key")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            api_key,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new [`AppState`] with the resolved theme and the configured API
/// key (if any); favorites and a stored key arrive later via the worker's
/// `StateLoaded` response.
///
/// # Theme Resolution
///
/// 1. `theme_file`, when set and parseable
/// 2. `theme` name, when recognized
/// 3. Default (Catppuccin Mocha)
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing reelfinder plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);
    if let Some(api_key) = &config.api_key {
        state.api_key.clone_from(api_key);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_known_keys() {
        let mut map = BTreeMap::new();
        map.insert("api_key".to_string(), "  k_x  ".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_key.as_deref(), Some("k_x"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn blank_api_key_counts_as_absent() {
        let mut map = BTreeMap::new();
        map.insert("api_key".to_string(), "   ".to_string());
        assert!(Config::from_zellij(&map).api_key.is_none());
    }

    #[test]
    fn initialize_seeds_state_from_config() {
        let config = Config {
            api_key: Some("k_seed".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.api_key, "k_seed");
        assert_eq!(state.route, Route::Search);
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
