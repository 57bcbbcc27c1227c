// src/error.rs
// =============================================================================
// The error taxonomy shared by everything that talks to the GitHub API.
//
// There are exactly two ways a fetch can go wrong:
// - The API answered, but not with a success status (unknown user, bad token)
// - We never got a usable answer (connection refused, DNS, garbled body)
//
// Both the search form and the profile view receive these same errors, so
// they can make their own decisions about what to show the user.
// =============================================================================

use thiserror::Error;

/// The message the user sees whenever a lookup fails, whatever the cause.
pub const LOOKUP_FAILED_MESSAGE: &str = "User not found or unauthorized";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API rejected the handle or the credential (404, 401, 403, ...)
    #[error("not found or unauthorized (HTTP {status})")]
    NotFoundOrUnauthorized { status: u16 },

    /// Transport-level failure, or a body we could not decode
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// What the user should see for this error.
    ///
    /// Deliberately the same text for every variant; the details go to the log.
    pub fn user_message(&self) -> &'static str {
        LOOKUP_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        // Status errors only come out of error_for_status()
        match error.status() {
            Some(status) if !status.is_success() => FetchError::NotFoundOrUnauthorized {
                status: status.as_u16(),
            },
            _ => FetchError::Network(error.to_string()),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
