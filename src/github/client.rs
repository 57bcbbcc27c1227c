// src/github/client.rs
// =============================================================================
// The HTTP side of profile lookups.
//
// Two read-only calls, both against the configured API base:
// - GET {base}/users/{handle}
// - GET {base}/users/{handle}/repos
//
// Every call is a fresh request: no caching, no retries, no pagination (we
// keep whatever the first page of /repos contains, in server order).
//
// Status handling:
// - 2xx          -> decode the JSON body
// - anything else -> FetchError::NotFoundOrUnauthorized
// - no response or undecodable body -> FetchError::Network
//
// Rust concepts:
// - Traits: GithubClient implements ProfileApi, so tests can swap in a fake
// - Generics: get_json<T> decodes into whatever type the caller asks for
// - The ? operator: reqwest errors convert into FetchError via From
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned; // "can be decoded without borrowing the input"
use tracing::debug;
use url::Url;

use super::models::{Handle, Profile, Repository};
use super::ProfileApi;
use crate::config::Config;
use crate::error::{FetchError, FetchResult};

// GitHub rejects requests without a User-Agent
// concat! and env! are evaluated at compile time
const USER_AGENT_VALUE: &str = concat!("profile-finder/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed implementation of [`ProfileApi`].
///
/// Cheap to clone: the inner Client is reference counted, so every clone
/// shares one connection pool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_base: Url,
}

impl GithubClient {
    /// Builds the client once, with the credential baked into its default headers.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        match config.token.as_deref() {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .context("Token contains characters not allowed in a header")?;
                // Keeps the token out of Debug output and logs
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            // The API decides what an anonymous request may see
            None => debug!("no token configured, sending anonymous requests"),
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(GithubClient {
            http,
            api_base: config.api_base.clone(),
        })
    }

    // {base}/users/{handle}[/{tail}], with the handle encoded as one segment
    fn user_url(&self, handle: &Handle, tail: Option<&str>) -> FetchResult<Url> {
        let mut url = self.api_base.clone();
        // The inner block ends the mutable borrow of `url` before we return it
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::Network(format!("unusable API base {}", self.api_base)))?;
            // push() percent-encodes, so "a/b" stays one segment
            segments.pop_if_empty().push("users").push(handle.as_str());
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> FetchResult<T> {
        debug!(%url, "GET");

        // ? turns a transport failure into FetchError::Network
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "response");

        if !status.is_success() {
            return Err(FetchError::NotFoundOrUnauthorized {
                status: status.as_u16(),
            });
        }

        // ::<T> is the "turbofish": it names the type json() should produce
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Network(format!("invalid response body: {}", e)))
    }
}

// #[async_trait] lets a trait have async methods (it boxes the futures)
#[async_trait]
impl ProfileApi for GithubClient {
    async fn fetch_profile(&self, handle: &Handle) -> FetchResult<Profile> {
        let url = self.user_url(handle, None)?;
        self.get_json(url).await
    }

    async fn fetch_repositories(&self, handle: &Handle) -> FetchResult<Vec<Repository>> {
        let url = self.user_url(handle, Some("repos"))?;
        self.get_json(url).await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why build the Client once?
//    - A Client owns a connection pool and TLS setup
//    - Cloning it is cheap (reference counted), creating it is not
//
// 2. Why default headers?
//    - The token is attached to every request without each call repeating it
//    - Nothing outside new() ever sees the token again
//
// 3. What is DeserializeOwned?
//    - A serde trait bound meaning "T can be built from JSON we own"
//    - The response body is dropped after decoding, so T cannot borrow from it
// -----------------------------------------------------------------------------
