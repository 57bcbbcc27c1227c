// src/config.rs
// =============================================================================
// Runtime configuration, resolved once at startup and handed to whoever needs it.
//
// Sources, in order of precedence:
// 1. Command-line flags
// 2. Environment variables (clap reads GITHUB_TOKEN etc. for us)
// 3. A .env file in the working directory (loaded in main via dotenvy)
//
// Nothing below main reads the environment on its own: the client gets its
// token through Config, never from a global lookup.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use chrono::Locale;
use std::env;
use std::time::Duration;
use url::Url;

use crate::cli::GlobalArgs;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the REST API; request paths are appended to it
    pub api_base: Url,
    /// Sent as `Authorization: Bearer <token>` when present
    pub token: Option<String>,
    /// Used for the repository creation dates
    pub locale: Locale,
    /// Per-request timeout. None means wait forever
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let api_base = parse_api_base(&args.api_base)?;

        let token = args
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let locale = match args.locale.as_deref() {
            Some(name) => parse_locale(name)
                .ok_or_else(|| anyhow!("Unknown locale '{}'", name))?,
            None => locale_from_env(),
        };

        Ok(Config {
            api_base,
            token,
            locale,
            timeout: args.timeout_secs.map(Duration::from_secs),
        })
    }
}

fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid API base URL '{}'", raw))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(anyhow!("API base URL must be http(s): {}", raw));
    }

    Ok(url)
}

// Accepts "fr_FR", "fr_FR.UTF-8", "de_DE@euro" and the C/POSIX aliases
fn parse_locale(name: &str) -> Option<Locale> {
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    match base.as_str() {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        other => Locale::try_from(other).ok(),
    }
}

/// Picks the date locale the same way libc does: LC_ALL, then LC_TIME, then LANG.
fn locale_from_env() -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| parse_locale(&value))
        .unwrap_or(Locale::POSIX)
}
