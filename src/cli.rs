//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Tictac - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Print the final score as JSON when the session ends
    #[arg(long)]
    pub summary_json: bool,
}
