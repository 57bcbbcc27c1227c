// src/github/mod.rs
// =============================================================================
// This module handles everything that talks to the GitHub REST API.
//
// Currently implements:
// - The wire models (Profile, Repository) and the Handle newtype
// - GithubClient: the reqwest-backed client for the two user endpoints
// - ProfileApi: the trait the controllers depend on, so tests can swap in a
//   fake instead of a network
// =============================================================================

mod client;
mod models;

#[cfg(test)]
pub mod fake;
#[cfg(test)]
pub mod test_server;

use async_trait::async_trait;

use crate::error::FetchResult;

pub use client::GithubClient;
pub use models::{Handle, Profile, Repository};

/// The two reads the controllers need.
///
/// Implementations must be cheap to clone and shareable across tasks, since
/// the profile view hands a clone to every fetch it spawns.
#[async_trait]
pub trait ProfileApi: Clone + Send + Sync + 'static {
    async fn fetch_profile(&self, handle: &Handle) -> FetchResult<Profile>;

    async fn fetch_repositories(&self, handle: &Handle) -> FetchResult<Vec<Repository>>;
}
