//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control how keyboard
//! input is interpreted. The active page itself is not a mode (it is derived
//! from the location string by the router), but the input box can capture
//! typing for three different targets, and that capture state lives here.
//!
//! # State Machine
//!
//! - **Normal**: navigation and command keys are active
//! - **Query**: typing a search term (with typing/navigating focus)
//! - **ApiKey**: typing the OMDb API key
//! - **Filter**: typing the favorites-page fuzzy filter

/// Focus state while the search query input is open.
///
/// Determines whether keystrokes edit the query or navigate the result list
/// underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFocus {
    /// User is typing in the query input field.
    ///
    /// Accepts character input, backspace, and enter (to submit).
    Typing,

    /// User is navigating the results while the query stays visible.
    ///
    /// Accepts j/k for movement, enter to open details, `/` to return to
    /// typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and where typed characters land.
/// Determines the displayed footer text and whether the input box renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Search query entry, with a [`QueryFocus`] indicating whether the user
    /// is typing or navigating results.
    Query(QueryFocus),

    /// API key entry. Submitting persists the key and closes the box.
    ApiKey,

    /// Favorites-page filter entry. Characters narrow the grid live.
    Filter,
}

impl InputMode {
    /// Returns `true` when typed characters are being captured by an input
    /// box rather than interpreted as commands.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        matches!(
            self,
            Self::Query(QueryFocus::Typing) | Self::ApiKey | Self::Filter
        )
    }
}
