//! # StayHub CLI
//!
//! Terminal front end for browsing and booking hotels.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           stayhub (binary)                              │
//! │                                                                         │
//! │  clap args ──► AppConfig ──► App ──► commands::run                     │
//! │                  │            │                                         │
//! │                  │            ├── SessionService (sign-in, profile)    │
//! │                  │            ├── Preferences    (onboarding, history) │
//! │                  │            └── stayhub-core   (search, quote, gate) │
//! │                  ▼                                                      │
//! │           stayhub.toml + STAYHUB_* env                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so command output stays clean; set `RUST_LOG` to tune.

mod app;
mod cli;
mod commands;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::AppResult;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "Command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::load(cli.config)?;
    debug!(db_path = ?config.store.database_path, "Configuration loaded");

    let app = App::open(config).await?;
    let result = commands::run(&app, cli.command).await;
    app.close().await;
    result
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,stayhub=debug,sqlx=warn";

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise info, with debug for our own crates.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
