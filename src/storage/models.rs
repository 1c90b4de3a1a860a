//! Storage record models for the persistence layer.
//!
//! Storage records are kept separate from domain models to maintain a clear
//! boundary between the persisted representation and business logic; the
//! worker converts between the two at its boundary.

use crate::domain::MovieSummary;
use serde::{Deserialize, Serialize};

/// Persisted form of a favorited movie.
///
/// Field-for-field the same shape as [`MovieSummary`] today, but serialized
/// under its own type so the stored format can grow fields without touching
/// the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// IMDb identifier; also the favorites map key.
    pub imdb_id: String,

    /// Display title.
    pub title: String,

    /// Release year as reported by the API.
    pub year: String,

    /// Poster URL, possibly empty or the `"N/A"` sentinel.
    pub poster: String,
}

impl From<MovieSummary> for FavoriteRecord {
    fn from(summary: MovieSummary) -> Self {
        Self {
            imdb_id: summary.imdb_id,
            title: summary.title,
            year: summary.year,
            poster: summary.poster,
        }
    }
}

impl From<FavoriteRecord> for MovieSummary {
    fn from(record: FavoriteRecord) -> Self {
        Self {
            imdb_id: record.imdb_id,
            title: record.title,
            year: record.year,
            poster: record.poster,
        }
    }
}
