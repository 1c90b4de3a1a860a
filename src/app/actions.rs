//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or system events. Actions
//! bridge pure state transformations and effectful operations: firing web
//! requests, posting persistence messages to the worker, or closing the pane.
//!
//! The event handler returns a `Vec<Action>` per event so multiple side
//! effects can be queued atomically; the plugin shim executes them in order.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Fetch actions carry a fully built URL (the handler builds it through the
/// API client, so the shim stays dumb) and the generation counter that will
/// tag the response; a response whose generation no longer matches the
/// session's counter is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Posts a persistence message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Fires a search request over `web_request`.
    FetchSearch {
        /// Complete request URL.
        url: String,
        /// Generation tag echoed back with the response.
        generation: u64,
    },

    /// Fires a details request over `web_request`.
    FetchDetails {
        /// Complete request URL.
        url: String,
        /// Generation tag echoed back with the response.
        generation: u64,
    },
}
