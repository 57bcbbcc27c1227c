// src/profile/view.rs
// =============================================================================
// The profile page controller.
//
// On navigate(handle):
// 1. Throw away whatever the previous handle left behind
// 2. Spawn two independent fetches (profile, repositories)
// 3. Apply each result as it arrives, in whichever order that happens
//
// Every spawned fetch is tagged with a LoadKey (handle + generation). A result
// is applied only if its key is still the current one, so a slow response for
// an old handle can never leak into the page for a new one. Stale tasks are not
// cancelled; their results are simply dropped when they show up.
//
// Per navigation:  Empty -> Loading -> Populated | PartiallyPopulated
//
// Rust concepts:
// - tokio::spawn: Each fetch runs as its own task
// - mpsc channels: Tasks send their results back instead of touching the state
// - Generic enums: Section<T> describes both halves of the page
// - Drop: Leaving the page aborts whatever is still running
// =============================================================================

use chrono::{Local, Locale, TimeZone};
use serde::Serialize;
use std::fmt::Display;
use tokio::sync::mpsc; // multi-producer, single-consumer channel
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn}; // instrument adds a span around a fn

use super::format::{display_date, short_description};
use crate::error::{FetchError, FetchResult};
use crate::github::{Handle, Profile, ProfileApi, Repository};

/// Where one half of the page is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Empty,
    Loading,
    Ready(T),
    Failed(FetchError),
}

// impl<T> works for every Section, whatever it holds
impl<T> Section<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            _ => None,
        }
    }

    fn is_resolved(&self) -> bool {
        matches!(self, Section::Ready(_) | Section::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Empty,
    Loading,
    /// Both sections arrived
    Populated,
    /// Both sections resolved, at least one of them failed
    PartiallyPopulated,
}

/// Everything the profile page shows for one handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub handle: Option<Handle>,
    pub profile: Section<Profile>,
    pub repositories: Section<Vec<Repository>>,
    pub error_message: Option<&'static str>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            handle: None,
            profile: Section::Empty,
            repositories: Section::Empty,
            error_message: None,
        }
    }
}

/// One repository, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRow {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub created: String,
}

impl ViewState {
    fn loading(handle: Handle) -> Self {
        ViewState {
            handle: Some(handle),
            profile: Section::Loading,
            repositories: Section::Loading,
            error_message: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.handle.is_none() {
            return Phase::Empty;
        }
        if !self.profile.is_resolved() || !self.repositories.is_resolved() {
            return Phase::Loading;
        }
        match (&self.profile, &self.repositories) {
            (Section::Ready(_), Section::Ready(_)) => Phase::Populated,
            _ => Phase::PartiallyPopulated,
        }
    }

    /// Display rows for whatever repositories have arrived so far, in server order.
    pub fn repository_rows<Tz>(&self, tz: &Tz, locale: Locale) -> Vec<RepositoryRow>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.repositories
            .ready()
            .map(|repos| {
                repos
                    .iter()
                    .map(|repo| RepositoryRow {
                        id: repo.id,
                        name: repo.name.clone(),
                        description: short_description(repo.description.as_deref()),
                        created: display_date(&repo.created_at, tz, locale),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Identifies one navigation. Generations make A -> B -> A distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadKey {
    handle: Handle,
    generation: u64,
}

#[derive(Debug)]
enum Payload {
    Profile(FetchResult<Profile>),
    Repositories(FetchResult<Vec<Repository>>),
}

#[derive(Debug)]
struct Completion {
    key: LoadKey,
    payload: Payload,
}

/// What happened to one completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    ProfileApplied,
    RepositoriesApplied,
    /// The fetch belonged to a navigation that is no longer current
    Discarded,
}

pub struct ProfileView<A: ProfileApi> {
    api: A,
    locale: Locale,
    state: ViewState,
    current: Option<LoadKey>,
    generation: u64,
    // Every spawned task gets a clone of tx; only the view reads rx
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    // Kept so Drop can abort them
    tasks: Vec<JoinHandle<()>>,
}

impl<A: ProfileApi> ProfileView<A> {
    pub fn new(api: A, locale: Locale) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        ProfileView {
            api,
            locale,
            state: ViewState::default(),
            current: None,
            generation: 0,
            tx,
            rx,
            tasks: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Starts loading the page for `handle`, discarding the previous page first.
    #[instrument(skip_all, fields(handle = %handle))]
    pub fn navigate(&mut self, handle: Handle) {
        self.generation += 1;
        let key = LoadKey {
            handle: handle.clone(),
            generation: self.generation,
        };

        self.state = ViewState::loading(handle);
        self.current = Some(key.clone());
        // Forget handles of tasks that already finished
        self.tasks.retain(|task| !task.is_finished());

        // `async move` takes ownership of api, tx and the key,
        // because the task may outlive this call
        let api = self.api.clone();
        let tx = self.tx.clone();
        let profile_key = key.clone();
        self.tasks.push(tokio::spawn(async move {
            let result = api.fetch_profile(&profile_key.handle).await;
            // Send fails only if the view was dropped, and then nobody cares
            let _ = tx.send(Completion {
                key: profile_key,
                payload: Payload::Profile(result),
            });
        }));

        let api = self.api.clone();
        let tx = self.tx.clone();
        self.tasks.push(tokio::spawn(async move {
            let result = api.fetch_repositories(&key.handle).await;
            let _ = tx.send(Completion {
                key,
                payload: Payload::Repositories(result),
            });
        }));

        debug!(generation = self.generation, "fetches started");
    }

    /// Waits for the next fetch to finish and applies it if still relevant.
    pub async fn pump(&mut self) -> Update {
        match self.rx.recv().await {
            Some(completion) => self.apply(completion),
            // We hold a sender ourselves, so the channel never closes
            None => Update::Discarded,
        }
    }

    /// Waits until both sections of the current page have resolved.
    ///
    /// Returns right away when nothing is loading. A request that never
    /// finishes keeps this waiting, since no timeout is imposed here.
    pub async fn settle(&mut self) -> &ViewState {
        while self.state.phase() == Phase::Loading {
            self.pump().await;
        }
        &self.state
    }

    /// Display rows in the viewer's local time zone and locale.
    pub fn repository_rows(&self) -> Vec<RepositoryRow> {
        self.state.repository_rows(&Local, self.locale)
    }

    fn apply(&mut self, completion: Completion) -> Update {
        // The race guard: results from an older navigation are dropped here
        if self.current.as_ref() != Some(&completion.key) {
            debug!(
                handle = %completion.key.handle,
                generation = completion.key.generation,
                "discarding stale fetch result"
            );
            return Update::Discarded;
        }

        let handle = &completion.key.handle;
        // Nested patterns match the payload kind and the Result in one step
        match completion.payload {
            Payload::Profile(Ok(profile)) => {
                self.state.profile = Section::Ready(profile);
                Update::ProfileApplied
            }
            Payload::Profile(Err(error)) => {
                warn!(%handle, %error, "profile fetch failed");
                self.state.error_message = Some(error.user_message());
                self.state.profile = Section::Failed(error);
                Update::ProfileApplied
            }
            Payload::Repositories(Ok(repos)) => {
                self.state.repositories = Section::Ready(repos);
                Update::RepositoriesApplied
            }
            Payload::Repositories(Err(error)) => {
                warn!(%handle, %error, "repository fetch failed");
                self.state.repositories = Section::Failed(error);
                Update::RepositoriesApplied
            }
        }
    }
}

impl<A: ProfileApi> Drop for ProfileView<A> {
    fn drop(&mut self) {
        // Leaving the page: nobody is left to read these results
        for task in &self.tasks {
            task.abort();
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a channel instead of letting tasks write the state?
//    - The state has one owner (the view), so no Mutex is needed
//    - The view decides, in one place, whether a result is still wanted
//
// 2. Why a generation number and not just the handle?
//    - Visiting octocat, then hubot, then octocat again reuses the handle
//    - The counter still tells the first visit's late answers apart
//
// 3. What does JoinHandle::abort do?
//    - It cancels the task at its next .await point
//    - Dropping a JoinHandle alone would leave the task running
// -----------------------------------------------------------------------------
