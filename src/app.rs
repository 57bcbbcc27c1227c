// src/app.rs
// =============================================================================
// Wires the pieces together the way the browser version wires its pages:
//
//   SearchForm --(found)--> Navigator --(route)--> ProfileView --> render
//
// The App owns one search form and one profile view. Navigating to a profile
// route reuses the same view, which throws away the previous user's data
// before loading the new one.
// =============================================================================

use anyhow::Result;
use chrono::Locale;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::github::ProfileApi;
use crate::profile::ProfileView;
use crate::render::{render_json, render_text};
use crate::routes::{Navigator, Route};
use crate::search::{SearchForm, SearchOutcome};

/// Exit code when the user could not be found (or the lookup failed).
pub const EXIT_NOT_FOUND: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

// Remembers where the last navigation asked to go
#[derive(Debug, Default)]
struct PendingRoute(Option<Route>);

impl Navigator for PendingRoute {
    fn navigate(&mut self, route: Route) {
        debug!(%route, "navigate");
        self.0 = Some(route);
    }
}

pub struct App<A: ProfileApi> {
    api: A,
    form: SearchForm,
    view: ProfileView<A>,
    router: PendingRoute,
}

impl<A: ProfileApi> App<A> {
    pub fn new(api: A, locale: Locale) -> Self {
        let view = ProfileView::new(api.clone(), locale);
        App {
            api,
            form: SearchForm::new(),
            view,
            router: PendingRoute::default(),
        }
    }

    /// Submits `input` through the search form and renders wherever it leads.
    ///
    /// Returns the rendered page and the exit code.
    pub async fn search(&mut self, input: &str, format: OutputFormat) -> Result<(String, i32)> {
        self.form.set_input(input);

        match self.form.submit(&self.api, &mut self.router).await {
            SearchOutcome::Found(handle) => {
                debug!(%handle, "search succeeded");
                match self.router.0.take() {
                    Some(route) => self.open(route, format).await,
                    None => Ok((String::new(), 0)),
                }
            }
            SearchOutcome::NotFound(_) | SearchOutcome::InvalidInput => {
                let message = self.form.error().unwrap_or_default();
                Ok((format!("❌ {}", message), EXIT_NOT_FOUND))
            }
        }
    }

    /// Renders the page behind `route`.
    pub async fn open(&mut self, route: Route, format: OutputFormat) -> Result<(String, i32)> {
        match route {
            Route::Search => Ok((
                "🔍 GitHub User Finder\n   Run `profile-finder search <handle>` or `profile-finder interactive`"
                    .to_string(),
                0,
            )),
            Route::Profile(handle) => {
                self.view.navigate(handle);
                let state = self.view.settle().await.clone();
                let rows = self.view.repository_rows();

                let output = match format {
                    OutputFormat::Json => render_json(&state, &rows)?,
                    OutputFormat::Text => render_text(&state, &rows)?,
                };
                let code = if state.error_message.is_some() {
                    EXIT_NOT_FOUND
                } else {
                    0
                };
                Ok((output, code))
            }
        }
    }

    /// Prompt loop: every line read from stdin is a fresh form submission.
    pub async fn interactive(&mut self) -> Result<i32> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        loop {
            stdout.write_all("🔍 GitHub username: ".as_bytes()).await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let (output, _) = self.search(&line, OutputFormat::Text).await?;
            stdout.write_all(format!("{}\n", output).as_bytes()).await?;
        }

        stdout.write_all(b"\n").await?;
        Ok(0)
    }
}
