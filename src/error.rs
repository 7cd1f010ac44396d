/// Error types for tab actions
use thiserror::Error;

/// A failure reported by the browser's tab inventory or mutation API,
/// carrying the browser's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> ProviderError {
        ProviderError(message.into())
    }
}

/// Everything that can go wrong while running a tab action. Always returned
/// as a value, never panicked; the `Display` string is what the shell shows
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The reference tab is missing its URL or its id.
    #[error("Current tab has no URL or ID")]
    MissingUrlOrId,

    /// The reference tab has a URL, but not a parsable http(s) one
    /// (e.g. `chrome://extensions`).
    #[error("Could not parse current tab URL")]
    UnparsableUrl,

    /// Grouping found no tab ids to put in the group. Closing zero tabs is
    /// a no-op, but a group needs a first member.
    #[error("No tabs to group")]
    NothingToGroup,

    /// The browser rejected a query or mutation call; the message is
    /// passed through untouched.
    #[error("{0}")]
    Provider(String),
}

impl From<ProviderError> for ActionError {
    fn from(err: ProviderError) -> ActionError {
        ActionError::Provider(err.0)
    }
}
