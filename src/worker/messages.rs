//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker thread that owns the storage
//! backend. Messages are JSON-serialized over Zellij's plugin IPC.
//!
//! The protocol is small because persistence is: one load at startup, and a
//! whole-value save per mutation of either entry.

use crate::storage::models::FavoriteRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Messages sent from the main thread to the worker thread.
///
/// Each variant corresponds to one storage operation performed
/// asynchronously so the render loop never blocks on disk I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load both durable entries (API key and favorites) from storage.
    ///
    /// Posted once after permissions are granted; answered with
    /// [`WorkerResponse::StateLoaded`].
    LoadState,

    /// Persist a new API key, replacing the stored one wholesale.
    SaveApiKey {
        /// The key to store; trimmed by the storage layer.
        key: String,
    },

    /// Persist the complete favorites map, replacing the stored one.
    ///
    /// Always carries the full snapshot taken immediately after the in-memory
    /// mutation, keeping storage in lockstep with app state.
    SaveFavorites {
        /// Favorites keyed by IMDb id.
        favorites: BTreeMap<String, FavoriteRecord>,
    },
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Both durable entries were read from storage.
    StateLoaded {
        /// Stored API key, empty when none was saved.
        api_key: String,
        /// Stored favorites, empty when absent or malformed.
        favorites: BTreeMap<String, FavoriteRecord>,
    },

    /// The API key was persisted.
    ApiKeySaved,

    /// The favorites snapshot was persisted.
    FavoritesSaved {
        /// Number of favorites in the persisted snapshot.
        count: usize,
    },

    /// A storage operation failed.
    ///
    /// Logged on the main thread; storage failures are never shown to the
    /// user.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
