// src/render.rs
// =============================================================================
// Turns a profile page into something printable.
//
// Two formats, like the rest of the CLI:
// - text: a header with the user's info, then one block per repository
// - json: the same data as a single JSON document (for scripts and jq)
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::fmt::{self, Write};

use crate::github::Profile;
use crate::profile::{Phase, RepositoryRow, Section, ViewState};

#[derive(Serialize)]
struct PageJson<'a> {
    handle: Option<&'a str>,
    phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    profile: Option<&'a Profile>,
    repositories: &'a [RepositoryRow],
}

pub fn render_json(state: &ViewState, rows: &[RepositoryRow]) -> Result<String> {
    let page = PageJson {
        handle: state.handle.as_ref().map(|h| h.as_str()),
        phase: state.phase(),
        error: state.error_message,
        profile: state.profile.ready(),
        repositories: rows,
    };
    Ok(serde_json::to_string_pretty(&page)?)
}

pub fn render_text(state: &ViewState, rows: &[RepositoryRow]) -> Result<String> {
    let mut out = String::new();
    write_page(&mut out, state, rows)?;
    Ok(out)
}

fn write_page(out: &mut String, state: &ViewState, rows: &[RepositoryRow]) -> fmt::Result {
    if let Some(message) = state.error_message {
        writeln!(out, "❌ {}", message)?;
    }

    match &state.profile {
        Section::Ready(profile) => {
            let title = profile
                .name
                .as_deref()
                .or(profile.login.as_deref())
                .or(state.handle.as_ref().map(|h| h.as_str()))
                .unwrap_or_default();
            writeln!(out, "👤 {}", title)?;
            if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
                writeln!(out, "   {}", bio)?;
            }
            if let Some(avatar) = profile.avatar_url.as_deref() {
                writeln!(out, "   🖼  {}", avatar)?;
            }
        }
        Section::Loading => writeln!(out, "⏳ Loading profile...")?,
        // Nothing to show; a failure already produced the error line above
        Section::Empty | Section::Failed(_) => {}
    }

    writeln!(out, "\n📚 Repositories")?;
    writeln!(out, "{}", "=".repeat(60))?;

    if state.repositories.is_loading() {
        writeln!(out, "⏳ Loading repositories...")?;
    }

    for row in rows {
        writeln!(out, "{:<45} {:>14}", row.name, row.created)?;
        writeln!(out, "   {}", row.description)?;
    }

    writeln!(out, "\n📋 Total: {}", rows.len())
}
