//! Storage layer for the persisted API key and favorites collection.
//!
//! This module provides the storage abstraction for the plugin's two durable
//! entries. Both are read whole at startup and rewritten whole on every
//! mutation; there is no incremental update path.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: file-based storage implementation with atomic writes
//! - `models`: storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Storage;
pub use json::JsonStorage;
pub use models::FavoriteRecord;
