//! Error types for the Reelfinder plugin.
//!
//! This module defines the centralized error type [`ReelfinderError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! The two API-facing variants carry the exact strings shown in the UI error
//! banner: [`ReelfinderError::Api`] wraps whatever text OMDb reported (or the
//! page-specific default), while [`ReelfinderError::Communication`] is the
//! fixed message used for transport-level failures, where no useful detail
//! from the service exists.

use thiserror::Error;

/// The main error type for Reelfinder plugin operations.
///
/// Consolidates all error conditions that can occur during plugin execution,
/// from API calls to storage operations and I/O failures. `Display` output is
/// what the user sees in the error banner, so the API variants are worded for
/// display rather than for debugging.
#[derive(Debug, Error)]
pub enum ReelfinderError {
    /// The movie API reported a failure in its payload (`Response: "False"`).
    ///
    /// Carries the API's own `Error` text, or a page-specific default when the
    /// payload omitted one. Rendered verbatim in the error banner.
    #[error("{0}")]
    Api(String),

    /// The request never produced a usable payload.
    ///
    /// Covers non-success HTTP statuses and bodies that fail to parse as JSON.
    #[error("Failed to communicate with the movie database.")]
    Communication,

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the plugin cannot talk to its worker thread, typically
    /// during persistence operations.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for Reelfinder operations.
///
/// Type alias for `std::result::Result<T, ReelfinderError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ReelfinderError>;
