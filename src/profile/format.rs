// src/profile/format.rs
// =============================================================================
// Pure display helpers for repository entries.
//
// Both functions are deterministic: same input, same output, no hidden state.
// =============================================================================

use chrono::{DateTime, Locale, TimeZone, Utc};
use std::fmt::Display;

pub const NO_DESCRIPTION: &str = "No description available";
pub const DESCRIPTION_LIMIT: usize = 100;
pub const ELLIPSIS: &str = "...";

/// Shortens a repository description for the list view.
///
/// - missing or empty -> "No description available"
/// - up to 100 characters -> unchanged
/// - longer -> the first 100 characters followed by "..."
///
/// Characters are Unicode scalar values, so multi-byte text is never split
/// mid-character. No attempt is made to cut at a word boundary.
pub fn short_description(description: Option<&str>) -> String {
    let Some(text) = description.filter(|d| !d.is_empty()) else {
        return NO_DESCRIPTION.to_string();
    };

    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Calendar date (no time) of `created_at` as seen in `tz`, in the locale's
/// preferred date format.
pub fn display_date<Tz>(created_at: &DateTime<Utc>, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    created_at
        .with_timezone(tz)
        .format_localized("%x", locale)
        .to_string()
}
