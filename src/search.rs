// src/search.rs
// =============================================================================
// The search form: type a handle, submit, land on that user's profile page.
//
// A submission does a single existence check (GET /users/{handle}). If it
// succeeds we navigate to /user/{handle}; otherwise the form shows one fixed
// message and stays where it is. Every submission is independent: no retry,
// no memory of earlier attempts apart from the message on screen.
// =============================================================================

use tracing::{info, warn};

use crate::error::{FetchError, LOOKUP_FAILED_MESSAGE};
use crate::github::{Handle, ProfileApi};
use crate::routes::{Navigator, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The profile exists; navigation to its page has happened
    Found(Handle),
    /// The lookup failed; the form shows its error message
    NotFound(FetchError),
    /// Blank input, or a bare "." / ".."; no request was made
    InvalidInput,
}

#[derive(Debug, Default)]
pub struct SearchForm {
    input: String,
    error: Option<&'static str>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// The user-visible error line, if the last submission failed.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub async fn submit<A, N>(&mut self, api: &A, navigator: &mut N) -> SearchOutcome
    where
        A: ProfileApi,
        N: Navigator,
    {
        self.error = None;

        let Some(handle) = Handle::new(&self.input) else {
            self.error = Some(LOOKUP_FAILED_MESSAGE);
            return SearchOutcome::InvalidInput;
        };

        match api.fetch_profile(&handle).await {
            Ok(_) => {
                info!(%handle, "profile found");
                navigator.navigate(Route::Profile(handle.clone()));
                SearchOutcome::Found(handle)
            }
            Err(error) => {
                warn!(%handle, %error, "profile lookup failed");
                self.error = Some(error.user_message());
                SearchOutcome::NotFound(error)
            }
        }
    }
}
