//! Path utilities for the Zellij sandbox environment.
//!
//! In the plugin sandbox the host filesystem is mounted under `/host`, so all
//! durable state lives beneath that prefix.

use std::path::PathBuf;

/// Returns the data directory for Reelfinder storage.
///
/// The directory is located at `/host/.local/share/zellij/reelfinder` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started, which typically resolves to the user's
/// home directory, making the effective path
/// `~/.local/share/zellij/reelfinder`.
///
/// Both storage entries (`api_key`, `favorites_v1.json`) and the plugin log
/// file live inside this directory.
///
/// # Examples
///
/// ```
/// use reelfinder::infrastructure::get_data_dir;
///
/// let dir = get_data_dir();
/// assert_eq!(dir.to_str().unwrap(), "/host/.local/share/zellij/reelfinder");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("reelfinder")
}
