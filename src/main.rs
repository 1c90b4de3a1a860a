//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Reelfinder
//! library and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling,
//! │  └──────────────────┘   │    web_request dispatch
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ ReelfinderWorker │   │  ← Storage operations
//! │  │ (worker thread)  │   │    (API key, favorites)
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `CustomMessage`, `WebRequestResult`,
//!    and `PermissionRequestResult` events
//! 3. **Permissions granted**: Post `LoadState` to the worker
//! 4. **Update**: Translate Zellij events to library events, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Web Requests
//!
//! API calls are fired with `web_request`; the context map carries the
//! request kind (`search`/`details`) and the generation counter, which the
//! result event echoes back so the handler can drop superseded responses.
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`k` or arrows: move cursor, `Enter`: open details
//! - `f`: toggle favorite, `h`/`l`: previous/next page, `g`/`G`: first/last
//! - `/`: search input (filter input on the favorites page)
//! - `i`: API key input, `s`: search page, `v`: favorites page
//! - `Esc`: back from details, `q`: close the pane
//!
//! While an input box is open:
//! - printable keys type, `Enter` submits, `Esc` cancels
//! - `Tab`: move focus to the results (query input only)
//! - `Ctrl+n`/`Ctrl+p`: move the cursor without leaving the box

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, web_request};

use reelfinder::worker::{ReelfinderWorker, WorkerResponse};
use reelfinder::{handle_event, Action, Config, Event, InputMode, QueryFocus, Route};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(ReelfinderWorker, reelfinder_worker, REELFINDER_WORKER);

/// Context key carrying the request kind through `web_request`.
const CONTEXT_KIND: &str = "kind";

/// Context key carrying the request generation through `web_request`.
const CONTEXT_GENERATION: &str = "generation";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication.
struct State {
    /// Core application state from the library layer.
    app: reelfinder::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: reelfinder::initialize(&default_config),
            worker_name: "reelfinder".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes application state, requests
    /// permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: call the OMDb API via `web_request`
    /// - `FullHdAccess`: persist state under the plugin data directory
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        reelfinder::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = reelfinder::initialize(&config);
        tracing::debug!(
            configured_key = config.api_key.is_some(),
            "app state initialized"
        );

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess, PermissionType::FullHdAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        reelfinder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Interpretation depends on the input mode: while an input box captures
    /// typing, printable keys become `Char` events; otherwise they are
    /// commands. `Ctrl+n`/`Ctrl+p` always navigate.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let capturing = self.app.input_mode.is_capturing();

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => {
                if capturing {
                    Event::SubmitInput
                } else {
                    Event::OpenDetails
                }
            }
            BareKey::Esc => {
                if self.app.input_mode == InputMode::Normal {
                    Event::Escape
                } else {
                    Event::ExitInput
                }
            }
            BareKey::Tab if self.app.input_mode == InputMode::Query(QueryFocus::Typing) => {
                Event::FocusResults
            }
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if capturing => Event::Char(c),
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('/') => {
                if self.app.input_mode == InputMode::Query(QueryFocus::Navigating) {
                    Event::FocusInput
                } else if self.app.route == Route::Favorites {
                    Event::FilterMode
                } else {
                    Event::QueryMode
                }
            }
            BareKey::Char('i') => Event::ApiKeyMode,
            BareKey::Char('f') => Event::ToggleFavorite,
            BareKey::Char('s') => Event::ShowSearch,
            BareKey::Char('v') => Event::ShowFavorites,
            BareKey::Char('h') => Event::PrevPage,
            BareKey::Char('l') => Event::NextPage,
            BareKey::Char('g') => Event::FirstPage,
            BareKey::Char('G') => Event::LastPage,
            _ => return None,
        })
    }

    /// Handles permission request results.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading persisted state");
                self.post_worker_message(&reelfinder::worker::WorkerMessage::LoadState);
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin functionality limited");
            }
        }
    }

    /// Maps custom message events (worker responses) to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Maps a web request result back to the owning session's response event.
    ///
    /// The context map written at dispatch time identifies the request kind
    /// and generation; results without a recognizable context are dropped.
    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let kind = context.get(CONTEXT_KIND)?;
        let generation = context.get(CONTEXT_GENERATION)?.parse::<u64>().ok()?;

        tracing::debug!(
            kind = %kind,
            generation = generation,
            status = status,
            body_len = body.len(),
            "web request result"
        );

        match kind.as_str() {
            "search" => Some(Event::SearchResponse {
                generation,
                status,
                body,
            }),
            "details" => Some(Event::DetailsResponse {
                generation,
                status,
                body,
            }),
            _ => {
                tracing::debug!(kind = %kind, "unknown web request kind");
                None
            }
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Logs serialization errors but does not propagate them.
    fn post_worker_message(&self, message: &reelfinder::worker::WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Fires an API request with the kind/generation context attached.
    fn fire_web_request(&self, url: &str, kind: &str, generation: u64) {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KIND.to_string(), kind.to_string());
        context.insert(CONTEXT_GENERATION.to_string(), generation.to_string());

        tracing::debug!(kind = %kind, generation = generation, "firing web request");
        web_request(
            url.to_string(),
            HttpVerb::Get,
            BTreeMap::new(),
            vec![],
            context,
        );
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
            Action::FetchSearch { url, generation } => {
                self.fire_web_request(url, "search", *generation);
            }
            Action::FetchDetails { url, generation } => {
                self.fire_web_request(url, "details", *generation);
            }
        }
    }
}
