// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Load a .env file (so GITHUB_TOKEN can live there) and set up logging
// 2. Parse command-line arguments using clap and build the Config
// 3. Dispatch to the search form, a profile page, or the interactive prompt
// 4. Exit with proper code (0 = success, 1 = user not found, 2 = error)
//
// The runtime is single-threaded: the two profile fetches run concurrently
// as tasks, but never in parallel, just like callbacks in a browser page.
//
// Rust concepts used:
// - async/await: The profile and its repositories are fetched at the same time
// - Result<T, E> and ?: Errors bubble up to main, which turns them into exit code 2
// - match: Pattern matching to pick the subcommand handler
// =============================================================================

// Module declarations - tells Rust about our other source files
mod app;      // src/app.rs - wires the search form, router and profile view
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - settings resolved once at startup
mod error;    // src/error.rs - the fetch error type
mod github;   // src/github/ - the GitHub API client and data models
mod profile;  // src/profile/ - the profile page controller
mod render;   // src/render.rs - text and JSON output
mod routes;   // src/routes.rs - "/" and "/user/{handle}"
mod search;   // src/search.rs - the search form

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{anyhow, Result};
use clap::Parser; // Parser trait enables the parse() method
use tracing_subscriber::EnvFilter;

use app::{App, OutputFormat};
use cli::{Cli, Commands};
use config::Config;
use github::{GithubClient, Handle};
use routes::Route;

// Log level used when RUST_LOG is not set.
// Warnings include failed profile or repository fetches.
const DEFAULT_LOG_FILTER: &str = "warn";

// flavor = "current_thread" keeps every task on this one thread
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();
    init_logging();

    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole anyhow context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr so stdout stays clean for --json output
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// RUST_LOG wins when it parses; anything else falls back to DEFAULT_LOG_FILTER
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

// This is the main application logic
// Returns:
//   Ok(0) = page shown
//   Ok(1) = user not found or unauthorized
//   Err = unexpected error (bad flags, unusable config, stdin/stdout failure)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();
    let config = Config::from_args(&cli.global)?;
    let client = GithubClient::new(&config)?;
    let mut app = App::new(client, config.locale);

    let (output, code) = match cli.command {
        Commands::Search { handle, json } => {
            app.search(&handle, OutputFormat::from_json_flag(json)).await?
        }
        Commands::User { handle, json } => {
            // ok_or_else turns the Option into a Result so ? can use it
            let handle = Handle::new(&handle).ok_or_else(|| anyhow!("Not a valid handle: {:?}", handle))?;
            app.open(Route::Profile(handle), OutputFormat::from_json_flag(json))
                .await?
        }
        Commands::Open { path, json } => {
            let route = Route::parse(&path).ok_or_else(|| anyhow!("Unknown route: {}", path))?;
            app.open(route, OutputFormat::from_json_flag(json)).await?
        }
        // The prompt loop prints as it goes, so it returns directly
        Commands::Interactive => return app.interactive().await,
    };

    println!("{}", output);
    Ok(code)
}


// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return an exit code from run() instead of calling exit() there?
//    - std::process::exit() skips destructors
//    - Returning first lets the App (and its spawned tasks) be dropped cleanly
//
// 2. What does ? do?
//    - If the value is Err, return it from the current function right away
//    - If it is Ok, unwrap it and keep going
//
// 3. Why current_thread?
//    - The two fetches only wait on the network, so one thread is enough
//    - Results are applied one at a time, which keeps the page state simple
// -----------------------------------------------------------------------------
