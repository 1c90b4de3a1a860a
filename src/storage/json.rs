//! File-based storage backend.
//!
//! Persists the plugin's two durable entries as separate files in the data
//! directory: `api_key` holds the raw key string, `favorites_v1.json` holds
//! the JSON-encoded favorites map (the `_v1` suffix is the only schema
//! versioning). Writes go through a temp-file-plus-rename so a crash mid-write
//! never leaves a corrupt entry behind.

use crate::domain::error::{ReelfinderError, Result};
use crate::storage::backend::Storage;
use crate::storage::models::FavoriteRecord;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// File name of the raw API key entry.
const API_KEY_FILE: &str = "api_key";

/// File name of the JSON favorites entry.
const FAVORITES_FILE: &str = "favorites_v1.json";

/// JSON/flat-file storage backend.
///
/// Stateless beyond the directory path: every read goes to disk and every
/// write replaces the whole entry, matching the load-once/overwrite-on-toggle
/// access pattern of the app.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; designed to be owned by the single worker thread.
pub struct JsonStorage {
    /// Directory holding both entries.
    dir: PathBuf,
}

impl JsonStorage {
    /// Creates a storage backend rooted at `dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reelfinder::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/reelfinder"))?;
    /// # Ok::<(), reelfinder::domain::ReelfinderError>(())
    /// ```
    pub fn new(dir: PathBuf) -> Result<Self> {
        tracing::debug!(dir = ?dir, "initializing storage");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn api_key_path(&self) -> PathBuf {
        self.dir.join(API_KEY_FILE)
    }

    fn favorites_path(&self) -> PathBuf {
        self.dir.join(FAVORITES_FILE)
    }

    /// Writes `contents` to `path` atomically via a sibling temp file.
    fn write_atomic(path: &PathBuf, contents: &str) -> Result<()> {
        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, contents)?;

        tracing::trace!(path = ?path, "renaming temporary file into place");
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn load_api_key(&self) -> String {
        match std::fs::read_to_string(self.api_key_path()) {
            Ok(key) => {
                let key = key.trim().to_string();
                tracing::debug!(key_present = !key.is_empty(), "api key loaded");
                key
            }
            Err(e) => {
                tracing::debug!(error = %e, "no stored api key");
                String::new()
            }
        }
    }

    fn save_api_key(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("save_api_key").entered();
        Self::write_atomic(&self.api_key_path(), key.trim())?;
        tracing::debug!("api key saved");
        Ok(())
    }

    fn load_favorites(&self) -> BTreeMap<String, FavoriteRecord> {
        let _span = tracing::debug_span!("load_favorites").entered();

        let contents = match std::fs::read_to_string(self.favorites_path()) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(error = %e, "no stored favorites");
                return BTreeMap::new();
            }
        };

        // Malformed storage is "no favorites", not an error.
        match serde_json::from_str::<BTreeMap<String, FavoriteRecord>>(&contents) {
            Ok(favorites) => {
                tracing::debug!(count = favorites.len(), "favorites loaded");
                favorites
            }
            Err(e) => {
                tracing::debug!(error = %e, "stored favorites failed to parse, treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn save_favorites(&mut self, favorites: &BTreeMap<String, FavoriteRecord>) -> Result<()> {
        let _span = tracing::debug_span!("save_favorites", count = favorites.len()).entered();

        let json = serde_json::to_string_pretty(favorites)
            .map_err(|e| ReelfinderError::Storage(format!("failed to serialize favorites: {e}")))?;

        Self::write_atomic(&self.favorites_path(), &json)?;
        tracing::debug!("favorites saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_favorites() -> BTreeMap<String, FavoriteRecord> {
        let mut favorites = BTreeMap::new();
        favorites.insert(
            "tt1375666".to_string(),
            FavoriteRecord {
                imdb_id: "tt1375666".to_string(),
                title: "Inception".to_string(),
                year: "2010".to_string(),
                poster: "N/A".to_string(),
            },
        );
        favorites.insert(
            "tt0133093".to_string(),
            FavoriteRecord {
                imdb_id: "tt0133093".to_string(),
                title: "The Matrix".to_string(),
                year: "1999".to_string(),
                poster: "https://img.example/matrix.jpg".to_string(),
            },
        );
        favorites
    }

    #[test]
    fn favorites_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().to_path_buf()).unwrap();

        let favorites = sample_favorites();
        storage.save_favorites(&favorites).unwrap();

        assert_eq!(storage.load_favorites(), favorites);
    }

    #[test]
    fn missing_favorites_is_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().to_path_buf()).unwrap();
        assert!(storage.load_favorites().is_empty());
    }

    #[test]
    fn malformed_favorites_is_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().to_path_buf()).unwrap();

        std::fs::write(dir.path().join(FAVORITES_FILE), "{ not json").unwrap();
        assert!(storage.load_favorites().is_empty());
    }

    #[test]
    fn save_overwrites_previous_favorites() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().to_path_buf()).unwrap();

        storage.save_favorites(&sample_favorites()).unwrap();
        let empty = BTreeMap::new();
        storage.save_favorites(&empty).unwrap();

        assert!(storage.load_favorites().is_empty());
    }

    #[test]
    fn api_key_is_trimmed_and_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(storage.load_api_key(), "");

        storage.save_api_key("  k_abcdef  ").unwrap();
        assert_eq!(storage.load_api_key(), "k_abcdef");

        storage.save_api_key("k_other").unwrap();
        assert_eq!(storage.load_api_key(), "k_other");
    }
}
