//! Movie domain models.
//!
//! This module defines the two shapes a movie takes inside the plugin: the
//! [`MovieSummary`] returned by search results (and stored as a favorite), and
//! the [`MovieDetails`] superset fetched per detail view. Both are immutable
//! once received from the API.

use serde::{Deserialize, Serialize};

/// Sentinel value OMDb uses for a missing poster URL.
///
/// The API returns the literal string `"N/A"` instead of omitting the field,
/// so poster presence has to be checked against this value as well as the
/// empty string.
pub const POSTER_UNAVAILABLE: &str = "N/A";

/// Minimal movie record returned by a search.
///
/// A summary is what search results carry and what the favorites collection
/// persists: the IMDb identifier (unique), the title, the release year, and a
/// poster URL. The year is kept as a string because OMDb reports ranges like
/// `"2014–2019"` for series-adjacent entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// IMDb identifier, e.g. `"tt1375666"`. Unique per title.
    pub imdb_id: String,
    /// Display title.
    pub title: String,
    /// Release year as reported by the API.
    pub year: String,
    /// Poster URL; possibly empty or the [`POSTER_UNAVAILABLE`] sentinel.
    pub poster: String,
}

impl MovieSummary {
    /// Returns `true` when the poster URL points at an actual image.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelfinder::domain::MovieSummary;
    ///
    /// let movie = MovieSummary {
    ///     imdb_id: "tt1375666".into(),
    ///     title: "Inception".into(),
    ///     year: "2010".into(),
    ///     poster: "N/A".into(),
    /// };
    /// assert!(!movie.has_poster());
    /// ```
    #[must_use]
    pub fn has_poster(&self) -> bool {
        !self.poster.is_empty() && self.poster != POSTER_UNAVAILABLE
    }
}

/// Full movie record fetched per title on demand.
///
/// Superset of [`MovieSummary`] with the metadata rendered on the details
/// page. Not cached across views; every visit to a detail route fetches anew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    /// Runtime text, e.g. `"148 min"`.
    pub runtime: String,
    /// Comma-separated genre list.
    pub genre: String,
    pub director: String,
    /// Comma-separated principal cast.
    pub actors: String,
    /// Full plot text (the client requests `plot=full`).
    pub plot: String,
    /// Content rating, e.g. `"PG-13"`. May be empty.
    pub rated: String,
    /// Aggregate IMDb rating, e.g. `"8.8"`.
    pub imdb_rating: String,
}

impl MovieDetails {
    /// Projects the details down to the summary shape.
    ///
    /// Used when toggling a favorite from the details page: the favorites
    /// collection only ever stores summaries, regardless of where the toggle
    /// happened.
    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            poster: self.poster.clone(),
        }
    }

    /// Returns `true` when the poster URL points at an actual image.
    #[must_use]
    pub fn has_poster(&self) -> bool {
        !self.poster.is_empty() && self.poster != POSTER_UNAVAILABLE
    }
}

/// Builds the public IMDb page URL for a movie identifier.
///
/// # Examples
///
/// ```
/// use reelfinder::domain::imdb_url;
///
/// assert_eq!(
///     imdb_url("tt1375666"),
///     "https://www.imdb.com/title/tt1375666/"
/// );
/// ```
#[must_use]
pub fn imdb_url(imdb_id: &str) -> String {
    format!("https://www.imdb.com/title/{imdb_id}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(poster: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster: poster.to_string(),
        }
    }

    #[test]
    fn poster_sentinel_counts_as_missing() {
        assert!(!summary("N/A").has_poster());
        assert!(!summary("").has_poster());
        assert!(summary("https://img.omdbapi.com/x.jpg").has_poster());
    }

    #[test]
    fn details_project_to_summary() {
        let details = MovieDetails {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster: "N/A".to_string(),
            runtime: "136 min".to_string(),
            genre: "Action, Sci-Fi".to_string(),
            director: "Lana Wachowski, Lilly Wachowski".to_string(),
            actors: "Keanu Reeves".to_string(),
            plot: "A hacker learns the truth.".to_string(),
            rated: "R".to_string(),
            imdb_rating: "8.7".to_string(),
        };

        assert_eq!(details.summary(), summary("N/A"));
    }
}
