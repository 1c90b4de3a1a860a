//! OMDb request building and response parsing.
//!
//! The client is split along the plugin's event boundary: URL builders and
//! response parsers are pure functions, while the actual transport is the
//! plugin shim firing a `web_request` host call and feeding the result back in
//! as an event. Keeping both halves pure makes the whole API contract testable
//! without a network.
//!
//! Two operations exist, matching what the UI needs and nothing more:
//!
//! - search by title and page (`s`, `type=movie`, `page` parameters)
//! - fetch details by IMDb id (`i`, `plot=full` parameters)
//!
//! There is no retry, no timeout configuration, and no caching; every call is
//! a single best-effort request.

use crate::api::models::{DetailsEnvelope, SearchEnvelope};
use crate::domain::error::{ReelfinderError, Result};
use crate::domain::{MovieDetails, MovieSummary};
use urlencoding::encode;

/// Fixed OMDb endpoint. All parameters travel in the query string.
pub const OMDB_ENDPOINT: &str = "https://www.omdbapi.com/";

/// Results per page, imposed by OMDb and not configurable.
pub const PAGE_SIZE: u32 = 10;

/// Default error text for a search the API failed without explanation.
const SEARCH_FAILED: &str = "Search failed.";

/// Default error text for a details lookup the API failed without explanation.
const MOVIE_NOT_FOUND: &str = "Movie not found.";

/// One page of search results plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Summaries on this page, in API order.
    pub items: Vec<MovieSummary>,
    /// Total matches across all pages.
    pub total: u32,
}

/// Builds the search URL for a title query and 1-based page number.
///
/// # Examples
///
/// ```
/// use reelfinder::api::search_url;
///
/// let url = search_url("k_test", "blade runner", 2);
/// assert_eq!(
///     url,
///     "https://www.omdbapi.com/?apikey=k_test&s=blade%20runner&type=movie&page=2"
/// );
/// ```
#[must_use]
pub fn search_url(api_key: &str, query: &str, page: u32) -> String {
    format!(
        "{OMDB_ENDPOINT}?apikey={}&s={}&type=movie&page={page}",
        encode(api_key),
        encode(query)
    )
}

/// Builds the details URL for an IMDb identifier, requesting the full plot.
#[must_use]
pub fn details_url(api_key: &str, imdb_id: &str) -> String {
    format!(
        "{OMDB_ENDPOINT}?apikey={}&i={}&plot=full",
        encode(api_key),
        encode(imdb_id)
    )
}

/// Parses a search response body.
///
/// # Failure contract
///
/// - non-2xx `status`, or a body that is not valid JSON, maps to
///   [`ReelfinderError::Communication`]
/// - a payload with `Response: "False"` maps to [`ReelfinderError::Api`] with
///   the API's own `Error` text, or `"Search failed."` when it supplied none
///
/// On success, a missing or non-numeric `totalResults` counts as 0 and a
/// missing `Search` array counts as empty, so a degenerate success payload
/// still yields an empty result page rather than an error.
///
/// # Errors
///
/// Returns the mapped error as described above.
pub fn parse_search_response(status: u16, body: &[u8]) -> Result<SearchResults> {
    let envelope: SearchEnvelope = decode_body(status, body)?;

    if envelope.response == "False" {
        let message = envelope.error.unwrap_or_else(|| SEARCH_FAILED.to_string());
        tracing::debug!(error = %message, "search rejected by API");
        return Err(ReelfinderError::Api(message));
    }

    let total = envelope
        .total_results
        .as_deref()
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(0);

    let items: Vec<MovieSummary> = envelope
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|entry| MovieSummary {
            imdb_id: entry.imdb_id,
            title: entry.title,
            year: entry.year,
            poster: entry.poster,
        })
        .collect();

    tracing::debug!(item_count = items.len(), total = total, "search parsed");
    Ok(SearchResults { items, total })
}

/// Parses a details response body.
///
/// Same contract as [`parse_search_response`], with `"Movie not found."` as
/// the default API error text.
///
/// # Errors
///
/// Returns [`ReelfinderError::Communication`] for transport/parse failures and
/// [`ReelfinderError::Api`] for API-reported ones.
pub fn parse_details_response(status: u16, body: &[u8]) -> Result<MovieDetails> {
    let envelope: DetailsEnvelope = decode_body(status, body)?;

    if envelope.response == "False" {
        let message = envelope
            .error
            .unwrap_or_else(|| MOVIE_NOT_FOUND.to_string());
        tracing::debug!(error = %message, "details rejected by API");
        return Err(ReelfinderError::Api(message));
    }

    Ok(MovieDetails {
        imdb_id: envelope.imdb_id,
        title: envelope.title,
        year: envelope.year,
        poster: envelope.poster,
        runtime: envelope.runtime,
        genre: envelope.genre,
        director: envelope.director,
        actors: envelope.actors,
        plot: envelope.plot,
        rated: envelope.rated,
        imdb_rating: envelope.imdb_rating,
    })
}

/// Total page count for a result total, at OMDb's fixed page size.
///
/// # Examples
///
/// ```
/// use reelfinder::api::total_pages;
///
/// assert_eq!(total_pages(23), 3);
/// assert_eq!(total_pages(0), 0);
/// ```
#[must_use]
pub const fn total_pages(total_results: u32) -> u32 {
    total_results.div_ceil(PAGE_SIZE)
}

/// Shared status check + JSON decode for both operations.
fn decode_body<T: serde::de::DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    if !(200..300).contains(&status) {
        tracing::debug!(status = status, "non-success HTTP status");
        return Err(ReelfinderError::Communication);
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "response body failed to parse");
        ReelfinderError::Communication
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_query() {
        let url = search_url("abc123", "the good, the bad", 1);
        assert_eq!(
            url,
            "https://www.omdbapi.com/?apikey=abc123&s=the%20good%2C%20the%20bad&type=movie&page=1"
        );
    }

    #[test]
    fn search_success_parses_items_and_total() {
        let body = br#"{
            "Search": [
                {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Poster": "N/A", "Type": "movie"},
                {"Title": "Inception: The Cobol Job", "Year": "2010", "imdbID": "tt5295894", "Poster": "", "Type": "movie"}
            ],
            "totalResults": "23",
            "Response": "True"
        }"#;

        let results = parse_search_response(200, body).unwrap();
        assert_eq!(results.items.len(), 2);
        assert_eq!(results.items[0].imdb_id, "tt1375666");
        assert_eq!(results.total, 23);
        assert_eq!(total_pages(results.total), 3);
    }

    #[test]
    fn api_error_text_surfaces_verbatim() {
        let body = br#"{"Response": "False", "Error": "Movie not found!"}"#;
        let err = parse_search_response(200, body).unwrap_err();
        assert_eq!(err.to_string(), "Movie not found!");
    }

    #[test]
    fn api_failure_without_text_uses_page_default() {
        let body = br#"{"Response": "False"}"#;
        let search_err = parse_search_response(200, body).unwrap_err();
        assert_eq!(search_err.to_string(), "Search failed.");

        let details_err = parse_details_response(200, body).unwrap_err();
        assert_eq!(details_err.to_string(), "Movie not found.");
    }

    #[test]
    fn transport_failure_maps_to_communication_error() {
        let err = parse_search_response(502, b"Bad Gateway").unwrap_err();
        assert!(matches!(err, ReelfinderError::Communication));

        let err = parse_search_response(200, b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, ReelfinderError::Communication));
    }

    #[test]
    fn missing_total_and_results_default_to_empty() {
        let body = br#"{"Response": "True"}"#;
        let results = parse_search_response(200, body).unwrap();
        assert!(results.items.is_empty());
        assert_eq!(results.total, 0);

        let body = br#"{"Response": "True", "totalResults": "many"}"#;
        assert_eq!(parse_search_response(200, body).unwrap().total, 0);
    }

    #[test]
    fn details_success_parses_full_record() {
        let body = br#"{
            "Title": "Inception", "Year": "2010", "Rated": "PG-13",
            "Runtime": "148 min", "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "Plot": "A thief who steals corporate secrets.",
            "Poster": "https://m.media-amazon.com/images/inception.jpg",
            "imdbRating": "8.8", "imdbID": "tt1375666",
            "Response": "True"
        }"#;

        let details = parse_details_response(200, body).unwrap();
        assert_eq!(details.title, "Inception");
        assert_eq!(details.runtime, "148 min");
        assert_eq!(details.imdb_rating, "8.8");
        assert!(details.has_poster());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(23), 3);
    }
}
