// src/github/models.rs
// =============================================================================
// Data shapes for the two GitHub endpoints we call.
//
// - GET /users/{handle}        -> Profile
// - GET /users/{handle}/repos  -> Vec<Repository>
//
// GitHub sends many more fields than we need. serde ignores unknown fields by
// default, so we only declare the ones we actually display.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A GitHub login as typed by the user.
///
/// Always non-empty, free of surrounding whitespace, and never "." or "..",
/// which a URL would treat as a step up or sideways instead of a user name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Returns None for input that is empty once trimmed, or a dot segment.
    pub fn new(input: &str) -> Option<Self> {
        match input.trim() {
            "" | "." | ".." => None,
            trimmed => Some(Handle(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Basic identity record for a handle.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// One repository entry, in the order GitHub returned it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
