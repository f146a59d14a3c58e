//! Tictac - two-player tic-tac-toe in the terminal.
//!
//! The rules, match and session controllers live in [`tictac_rules`]. This
//! crate is the shell around them.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags
//! - **Config**: player display names loaded from TOML
//! - **Terminal**: [`TerminalShell`], the line-based [`tictac_rules::MatchIo`]
//! - **Render**: board-to-text formatting
//!
//! # Example
//!
//! ```no_run
//! use tictac::{GameConfig, TerminalShell};
//! use tictac_rules::Session;
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin().lock();
//! let stdout = std::io::stdout().lock();
//! let mut shell = TerminalShell::new(stdin, stdout, GameConfig::default());
//! let tally = Session::new().run(&mut shell)?;
//! println!("{}", tally);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod terminal;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use render::render_board;
pub use terminal::{ShellError, TerminalShell};
