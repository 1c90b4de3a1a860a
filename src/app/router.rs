//! Location parsing and navigation targets.
//!
//! The app keeps one location string in [`AppState`](crate::app::AppState)
//! (e.g. `"#/movie/tt1375666"`) and derives the active page from it through
//! this module. Navigation always rewrites the location string and re-parses
//! it; the route is never stored independently, so the location is the single
//! source of truth and cannot drift from the page being shown.

/// The active page, derived from the location string.
///
/// Recomputed on every navigation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The search page (default).
    Search,
    /// The details page for one movie.
    Movie {
        /// IMDb identifier from the location parameter.
        id: String,
    },
    /// The favorites page.
    Favorites,
}

impl Route {
    /// Parses a location fragment into a route.
    ///
    /// Strips a leading `#/`, splits on `/`, and reads the first segment as
    /// the page name and the second as the parameter. An empty fragment maps
    /// to [`Route::Search`]; so do unknown names and a `movie` segment with
    /// no identifier, keeping the app on a renderable page for any input.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelfinder::app::Route;
    ///
    /// assert_eq!(Route::parse(""), Route::Search);
    /// assert_eq!(Route::parse("#/favorites"), Route::Favorites);
    /// assert_eq!(
    ///     Route::parse("#/movie/tt1234567"),
    ///     Route::Movie { id: "tt1234567".into() }
    /// );
    /// ```
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let clean = fragment.strip_prefix("#/").unwrap_or(fragment);
        let mut segments = clean.split('/');
        let name = segments.next().unwrap_or_default();
        let param = segments.next();

        match (name, param) {
            ("movie", Some(id)) if !id.is_empty() => Self::Movie { id: id.to_string() },
            ("favorites", _) => Self::Favorites,
            _ => Self::Search,
        }
    }
}

/// Normalizes a navigation target into a location fragment.
///
/// Prefixes `#/` when missing, so handlers can navigate with bare targets
/// like `"favorites"` or `"movie/tt1375666"`.
///
/// # Examples
///
/// ```
/// use reelfinder::app::router::normalize_target;
///
/// assert_eq!(normalize_target("search"), "#/search");
/// assert_eq!(normalize_target("#/search"), "#/search");
/// ```
#[must_use]
pub fn normalize_target(target: &str) -> String {
    if target.starts_with("#/") {
        target.to_string()
    } else {
        format!("#/{target}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_is_search() {
        assert_eq!(Route::parse(""), Route::Search);
        assert_eq!(Route::parse("#/"), Route::Search);
    }

    #[test]
    fn named_fragments_parse() {
        assert_eq!(Route::parse("#/search"), Route::Search);
        assert_eq!(Route::parse("#/favorites"), Route::Favorites);
        assert_eq!(
            Route::parse("#/movie/tt1234567"),
            Route::Movie {
                id: "tt1234567".to_string()
            }
        );
    }

    #[test]
    fn parameter_is_the_second_segment_only() {
        assert_eq!(
            Route::parse("#/movie/tt1234567/trailing"),
            Route::Movie {
                id: "tt1234567".to_string()
            }
        );
    }

    #[test]
    fn unknown_or_incomplete_routes_fall_back_to_search() {
        assert_eq!(Route::parse("#/bogus"), Route::Search);
        assert_eq!(Route::parse("#/movie"), Route::Search);
        assert_eq!(Route::parse("#/movie/"), Route::Search);
    }

    #[test]
    fn targets_gain_the_fragment_prefix() {
        assert_eq!(normalize_target("movie/tt1"), "#/movie/tt1");
        assert_eq!(normalize_target("#/movie/tt1"), "#/movie/tt1");
    }
}
