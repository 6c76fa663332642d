// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use rung_core::{ItemId, ListFilter};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Parser)]
#[command(name = "rung")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Ordered personal lists, kept in a local SQLite database")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if rung was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Whose list to use (overrides the configured owner)
    #[arg(long, global = true, env = "RUNG_OWNER", value_name = "name")]
    pub owner: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add an item at the top of the list
    #[command(after_help = colors::examples("\
Examples:
  rung add \"Buy milk\"           Add an item
  rung add \"Call Bob\" -o json   Add and print the item as JSON"))]
    Add {
        /// Item title (at most 160 characters)
        title: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the list in order
    #[command(after_help = colors::examples("\
Examples:
  rung list                 All items, top first
  rung list -f open         Only open items
  rung list -f done -o json Completed items as JSON"))]
    List {
        /// Which items to show (all, open, completed)
        #[arg(long, short, default_value = "all")]
        filter: ListFilter,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Mark item(s) as completed
    #[command(arg_required_else_help = true)]
    Done {
        /// Item ID(s)
        #[arg(required = true)]
        ids: Vec<ItemId>,
    },

    /// Mark item(s) as open again
    #[command(arg_required_else_help = true)]
    Reopen {
        /// Item ID(s)
        #[arg(required = true)]
        ids: Vec<ItemId>,
    },

    /// Move an item to a position in the full list
    #[command(arg_required_else_help = true)]
    #[command(after_help = colors::examples("\
Examples:
  rung move 7 0             Move item 7 to the top
  rung move 7 99            Out-of-range positions land at the end"))]
    Move {
        /// Item ID
        id: ItemId,

        /// Zero-based target position; clamped to the list
        #[arg(allow_negative_numbers = true)]
        index: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Move an item one position up
    #[command(arg_required_else_help = true)]
    Up {
        /// Item ID
        id: ItemId,
    },

    /// Move an item one position down
    #[command(arg_required_else_help = true)]
    Down {
        /// Item ID
        id: ItemId,
    },

    /// Delete item(s)
    #[command(arg_required_else_help = true)]
    Rm {
        /// Item ID(s)
        #[arg(required = true)]
        ids: Vec<ItemId>,
    },

    /// Delete all completed items
    Clear,

    /// Create a list in this directory
    #[command(after_help = colors::examples("\
Examples:
  rung init --owner alice                Store the list in .rung/
  rung init --owner alice --db ~/l.db    Store the database elsewhere"))]
    Init {
        /// Database path (relative to this directory, or absolute)
        #[arg(long = "db", value_name = "path")]
        database: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  rung completion bash > ~/.local/share/bash-completion/completions/rung
  rung completion zsh > ~/.zfunc/_rung"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
