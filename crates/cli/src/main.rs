// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use rungrs::Cli;

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = rungrs::run(cli) {
        tracing::debug!(retryable = e.is_retryable(), "command failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUNG_LOG` or `RUST_LOG` select the level (default: warn).
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = rungrs::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
