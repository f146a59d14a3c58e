//! Tictac - terminal entry point.
//!
//! Runs one session on stdin/stdout and exits when the players stop.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tictac::{Cli, GameConfig, TerminalShell};
use tictac_rules::Session;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    run_session(config, cli.summary_json)
}

/// Plays matches on the terminal until the players stop.
#[instrument(skip(config))]
fn run_session(config: GameConfig, summary_json: bool) -> Result<()> {
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut shell = TerminalShell::new(stdin, stdout, config);

    let tally = Session::new().run(&mut shell)?;
    info!(%tally, "Session finished");

    if summary_json {
        let mut out = shell.into_output();
        writeln!(out, "{}", serde_json::to_string_pretty(&tally)?)?;
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
