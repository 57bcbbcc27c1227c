// src/github/fake.rs
// In-memory ProfileApi for controller tests. Responses can be held back per
// handle to simulate slow requests and out-of-order completion.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Semaphore;

use super::{Handle, Profile, ProfileApi, Repository};
use crate::error::{FetchError, FetchResult};

#[derive(Default)]
struct FakeInner {
    profiles: Mutex<HashMap<String, FetchResult<Profile>>>,
    repos: Mutex<HashMap<String, FetchResult<Vec<Repository>>>>,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    profile_calls: AtomicUsize,
    repo_calls: AtomicUsize,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<FakeInner>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, handle: &str, profile: Profile) -> Self {
        self.inner
            .profiles
            .lock()
            .unwrap()
            .insert(handle.to_string(), Ok(profile));
        self
    }

    pub fn with_profile_error(self, handle: &str, error: FetchError) -> Self {
        self.inner
            .profiles
            .lock()
            .unwrap()
            .insert(handle.to_string(), Err(error));
        self
    }

    pub fn with_repos(self, handle: &str, repos: Vec<Repository>) -> Self {
        self.inner
            .repos
            .lock()
            .unwrap()
            .insert(handle.to_string(), Ok(repos));
        self
    }

    pub fn with_repos_error(self, handle: &str, error: FetchError) -> Self {
        self.inner
            .repos
            .lock()
            .unwrap()
            .insert(handle.to_string(), Err(error));
        self
    }

    /// Both requests for `handle` block until `release` is called.
    pub fn hold(&self, handle: &str) {
        self.hold_gate(&gate_key("profile", handle));
        self.hold_gate(&gate_key("repos", handle));
    }

    /// Only the repository request for `handle` blocks.
    pub fn hold_repos(&self, handle: &str) {
        self.hold_gate(&gate_key("repos", handle));
    }

    pub fn release(&self, handle: &str) {
        let gates = self.inner.gates.lock().unwrap();
        for endpoint in ["profile", "repos"] {
            if let Some(gate) = gates.get(&gate_key(endpoint, handle)) {
                gate.add_permits(1);
            }
        }
    }

    fn hold_gate(&self, key: &str) {
        self.inner
            .gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::new(Semaphore::new(0)));
    }

    pub fn profile_calls(&self) -> usize {
        self.inner.profile_calls.load(Ordering::SeqCst)
    }

    pub fn repo_calls(&self) -> usize {
        self.inner.repo_calls.load(Ordering::SeqCst)
    }

    async fn wait_for_gate(&self, endpoint: &str, handle: &Handle) {
        let key = gate_key(endpoint, handle.as_str());
        let gate = self.inner.gates.lock().unwrap().get(&key).cloned();
        if let Some(gate) = gate {
            // Dropping the permit hands it to the next waiter
            let _permit = gate.acquire().await;
        }
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn fetch_profile(&self, handle: &Handle) -> FetchResult<Profile> {
        self.inner.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate("profile", handle).await;
        self.inner
            .profiles
            .lock()
            .unwrap()
            .get(handle.as_str())
            .cloned()
            .unwrap_or(Err(FetchError::NotFoundOrUnauthorized { status: 404 }))
    }

    async fn fetch_repositories(&self, handle: &Handle) -> FetchResult<Vec<Repository>> {
        self.inner.repo_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate("repos", handle).await;
        self.inner
            .repos
            .lock()
            .unwrap()
            .get(handle.as_str())
            .cloned()
            .unwrap_or(Err(FetchError::NotFoundOrUnauthorized { status: 404 }))
    }
}

fn gate_key(endpoint: &str, handle: &str) -> String {
    format!("{}:{}", endpoint, handle)
}

pub fn profile(name: &str) -> Profile {
    Profile {
        login: Some(name.to_lowercase()),
        name: Some(name.to_string()),
        bio: Some(format!("{}'s bio", name)),
        avatar_url: Some(format!("https://avatars.example.com/{}", name)),
    }
}

pub fn repo(id: u64, name: &str, description: Option<&str>) -> Repository {
    Repository {
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        created_at: Utc.with_ymd_and_hms(2011, 1, 26, 12, 0, 0).unwrap(),
    }
}
