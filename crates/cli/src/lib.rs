// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rungrs - command-line front end for ranked personal lists.
//!
//! Each command resolves the `.rung/` directory and the owner, opens the
//! SQLite store from [`rung_core`], and applies one intent per item.
//!
//! # Main Components
//!
//! - [`Cli`] - clap definitions for every command
//! - [`Config`] - Project configuration (owner, database location, busy timeout)
//! - [`Error`] - Error type wrapping store failures and configuration problems
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = rungrs::Cli::parse_from(["rung", "--owner", "alice", "add", "Buy milk"]);
//! rungrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputArgs, OutputFormat};
pub use config::{find_rung_dir, get_db_path, init_rung_dir, Config};
pub use env::log_filter;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::reorder::Direction;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(directory) = &cli.directory {
        std::env::set_current_dir(directory)?;
    }
    let owner = cli.owner.as_deref();
    match cli.command {
        Command::Init { database } => commands::init::run(owner, database),
        Command::Add { title, output } => commands::add::run(owner, &title, output.output),
        Command::List { filter, output } => commands::list::run(owner, filter, output.output),
        Command::Done { ids } => commands::lifecycle::done(owner, &ids),
        Command::Reopen { ids } => commands::lifecycle::reopen(owner, &ids),
        Command::Move { id, index, output } => {
            commands::reorder::move_to(owner, id, index, output.output)
        }
        Command::Up { id } => commands::reorder::step(owner, id, Direction::Up),
        Command::Down { id } => commands::reorder::step(owner, id, Direction::Down),
        Command::Rm { ids } => commands::remove::run(owner, &ids),
        Command::Clear => commands::clear::run(owner),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "rung", &mut std::io::stdout());
            Ok(())
        }
    }
}
