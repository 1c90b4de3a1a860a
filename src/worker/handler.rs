//! Worker thread implementation for asynchronous storage operations.
//!
//! This module implements the Zellij worker thread interface, handling all
//! storage I/O away from the main plugin rendering loop. The storage backend
//! is initialized lazily on first message receipt.

use crate::domain::error::{ReelfinderError, Result};
use crate::infrastructure::paths;
use crate::storage::backend::Storage;
use crate::storage::{FavoriteRecord, JsonStorage};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling storage operations.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent
/// from the main plugin thread.
#[derive(Serialize, Deserialize, Default)]
pub struct ReelfinderWorker {
    /// Storage backend, initialized lazily on first use.
    #[serde(skip)]
    storage: Option<Box<dyn Storage>>,
}

impl ReelfinderWorker {
    /// Creates a worker with an initialized storage backend rooted in the
    /// plugin data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let storage: Box<dyn Storage> = Box::new(JsonStorage::new(paths::get_data_dir())?);
        Ok(Self {
            storage: Some(storage),
        })
    }

    /// Returns the storage backend, failing if it was never initialized.
    fn get_storage(&mut self) -> Result<&mut Box<dyn Storage>> {
        self.storage
            .as_mut()
            .ok_or_else(|| ReelfinderError::Worker("storage not initialized".to_string()))
    }

    /// Handles the `LoadState` message.
    ///
    /// Reads both durable entries; reads are infallible by the storage
    /// contract, so this only errors when the backend itself is missing.
    fn handle_load_state(&mut self) -> WorkerResponse {
        match self.get_storage() {
            Ok(storage) => {
                let api_key = storage.load_api_key();
                let favorites = storage.load_favorites();
                tracing::debug!(
                    key_present = !api_key.is_empty(),
                    favorite_count = favorites.len(),
                    "state loaded from storage"
                );
                WorkerResponse::StateLoaded { api_key, favorites }
            }
            Err(e) => WorkerResponse::Error {
                message: format!("load state: {e}"),
            },
        }
    }

    /// Handles the `SaveApiKey` message.
    fn handle_save_api_key(&mut self, key: &str) -> WorkerResponse {
        let result = self
            .get_storage()
            .and_then(|storage| storage.save_api_key(key));

        match result {
            Ok(()) => {
                tracing::debug!("api key persisted");
                WorkerResponse::ApiKeySaved
            }
            Err(e) => {
                tracing::debug!(error = %e, "api key save failed");
                WorkerResponse::Error {
                    message: format!("save api key: {e}"),
                }
            }
        }
    }

    /// Handles the `SaveFavorites` message.
    ///
    /// Persists the full snapshot carried by the message; the count in the
    /// response is the snapshot size, not a delta.
    fn handle_save_favorites(
        &mut self,
        favorites: &BTreeMap<String, FavoriteRecord>,
    ) -> WorkerResponse {
        let count = favorites.len();
        let result = self
            .get_storage()
            .and_then(|storage| storage.save_favorites(favorites));

        match result {
            Ok(()) => {
                tracing::debug!(count = count, "favorites persisted");
                WorkerResponse::FavoritesSaved { count }
            }
            Err(e) => {
                tracing::debug!(error = %e, "favorites save failed");
                WorkerResponse::Error {
                    message: format!("save favorites: {e}"),
                }
            }
        }
    }

    /// Processes a worker message and returns the appropriate response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadState => self.handle_load_state(),
            WorkerMessage::SaveApiKey { key } => self.handle_save_api_key(&key),
            WorkerMessage::SaveFavorites { favorites } => self.handle_save_favorites(&favorites),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Uses the default configuration so logs from both threads land in the same
/// file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ReelfinderWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Lazy-initializes the storage backend if needed
    /// 3. Deserializes the payload, processes it, posts the response back
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.storage.is_none() {
            match Self::new() {
                Ok(worker) => {
                    self.storage = worker.storage;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize storage");
                    let error_response = WorkerResponse::Error {
                        message: format!("failed to initialize storage: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}
