// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The CLI stands in for the two pages of a profile finder:
// - `search`      : the search form (checks the user exists, then shows them)
// - `user`        : the profile page, reached directly
// - `open`        : any page, addressed by its route path ("/", "/user/x")
// - `interactive` : the search form as a prompt, one handle per line
// =============================================================================

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_API_BASE;

#[derive(Parser, Debug)]
#[command(
    name = "profile-finder",
    version,
    about = "Look up a GitHub user by handle and list their repositories",
    long_about = "profile-finder checks that a GitHub user exists, then shows their name, bio, \
                  avatar and public repositories. Set GITHUB_TOKEN (or put it in a .env file) \
                  to make authenticated requests."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base URL of the GitHub REST API (change for GitHub Enterprise)
    #[arg(long, global = true, env = "PROFILE_FINDER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Personal access token, sent as a Bearer credential
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Locale for dates, e.g. en_US or de_DE (defaults to LC_ALL / LC_TIME / LANG)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a user exists, then show their profile page
    ///
    /// Example: profile-finder search octocat
    Search {
        /// GitHub handle to look up
        handle: String,

        /// Output the profile page as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the profile page for a handle without the existence check
    ///
    /// Example: profile-finder user octocat --json
    User {
        /// GitHub handle whose profile to show
        handle: String,

        #[arg(long)]
        json: bool,
    },

    /// Open a page by its route path
    ///
    /// Example: profile-finder open /user/octocat
    Open {
        /// "/" for the search form, "/user/{handle}" for a profile page
        path: String,

        #[arg(long)]
        json: bool,
    },

    /// Read handles from stdin, one per line, and show each profile found
    Interactive,
}
