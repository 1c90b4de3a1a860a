//! Serde wire models for OMDb responses.
//!
//! OMDb serializes every field as a string with PascalCase names, marks
//! failures inside an otherwise-200 payload with `Response: "False"`, and
//! omits content fields entirely on failure. The envelopes here are therefore
//! deliberately lenient: everything beyond `Response` is optional or
//! defaulted, and the decision of what a payload *means* lives in
//! [`crate::api::client`], not in the deserializer.

use serde::Deserialize;

/// Top-level payload of a search request.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    /// `"True"` on success, `"False"` on an API-reported failure.
    #[serde(rename = "Response", default)]
    pub response: String,

    /// Error text supplied by the API when `response` is `"False"`.
    #[serde(rename = "Error")]
    pub error: Option<String>,

    /// The result page; absent on failure.
    #[serde(rename = "Search")]
    pub results: Option<Vec<SummaryEnvelope>>,

    /// Total match count, string-encoded (e.g. `"231"`); absent on failure.
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
}

/// One entry of the `Search` array.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryEnvelope {
    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Year", default)]
    pub year: String,

    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,

    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Top-level payload of a details request.
///
/// Shares the `Response`/`Error` envelope with search; all content fields
/// default to empty so that a failure payload still deserializes.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsEnvelope {
    #[serde(rename = "Response", default)]
    pub response: String,

    #[serde(rename = "Error")]
    pub error: Option<String>,

    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Year", default)]
    pub year: String,

    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,

    #[serde(rename = "Poster", default)]
    pub poster: String,

    #[serde(rename = "Runtime", default)]
    pub runtime: String,

    #[serde(rename = "Genre", default)]
    pub genre: String,

    #[serde(rename = "Director", default)]
    pub director: String,

    #[serde(rename = "Actors", default)]
    pub actors: String,

    #[serde(rename = "Plot", default)]
    pub plot: String,

    #[serde(rename = "Rated", default)]
    pub rated: String,

    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
}
