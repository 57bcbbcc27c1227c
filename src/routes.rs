// src/routes.rs
// =============================================================================
// The two places a user can be:
//
//   /                 -> the search form
//   /user/{handle}    -> the profile page for {handle}
//
// Controllers never jump between screens directly. They ask a Navigator to go
// to a Route, and the Navigator decides what that means (render a page in the
// CLI, record the call in a test, ...).
// =============================================================================

use std::fmt;

use crate::github::Handle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    Profile(Handle),
}

impl Route {
    /// Resolves a path like "/user/octocat". Returns None for unknown paths.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Some(Route::Search);
        }

        let rest = trimmed.strip_prefix("/user/")?;
        if rest.contains('/') {
            return None;
        }

        // Invalid UTF-8 after decoding is just another unknown path
        let decoded = urlencoding::decode(rest).ok()?;
        Handle::new(&decoded).map(Route::Profile)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Search => "/".to_string(),
            Route::Profile(handle) => format!("/user/{}", urlencoding::encode(handle.as_str())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Something that can take the user to a route.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}
