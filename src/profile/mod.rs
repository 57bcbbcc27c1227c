// src/profile/mod.rs
// =============================================================================
// The profile page: one handle's basic info plus their repository list.
//
// Submodules:
// - view: the controller that fetches both sections and tracks their state
// - format: pure helpers that turn raw repository data into display text
// =============================================================================

mod format;
mod view;

pub use view::{Phase, ProfileView, RepositoryRow, Section, ViewState};
