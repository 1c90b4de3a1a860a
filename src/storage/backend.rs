//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over persistence
//! backends for the two durable entries the plugin keeps: the OMDb API key
//! and the favorites collection.
//!
//! # Design Philosophy
//!
//! The trait is minimal and mirrors how the rest of the app actually uses
//! persistence: whole-value reads at startup, whole-value overwrites on every
//! mutation. There are no partial updates: `save_favorites` always receives
//! and persists the complete map, which is what keeps the in-memory collection
//! and the stored one in lockstep.
//!
//! Reads are infallible by contract: a missing or unreadable entry is the
//! empty value, never an error the caller has to handle. Only writes can fail.

use crate::domain::error::Result;
use crate::storage::models::FavoriteRecord;
use std::collections::BTreeMap;

/// Abstraction over persistent storage for the API key and favorites.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): two files in the plugin
///   data directory, atomic writes (default)
pub trait Storage: Send {
    /// Returns the stored API key, or an empty string when absent or
    /// unreadable.
    fn load_api_key(&self) -> String;

    /// Trims and stores the API key, overwriting unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_api_key(&mut self, key: &str) -> Result<()>;

    /// Returns the stored favorites map, keyed by IMDb id.
    ///
    /// A missing or malformed entry is treated as "no favorites" and yields
    /// an empty map; it is never surfaced as an error.
    fn load_favorites(&self) -> BTreeMap<String, FavoriteRecord>;

    /// Serializes and stores the complete favorites map, overwriting the
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save_favorites(&mut self, favorites: &BTreeMap<String, FavoriteRecord>) -> Result<()>;
}
