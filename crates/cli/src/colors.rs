// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and list output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers and active filter
    pub const HEADER: u8 = 74;
    /// Commands, literals, open items
    pub const LITERAL: u8 = 250;
    /// Hints, positions, completed items
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. In other lines the command, which ends
/// at the first run of two or more spaces, is shown as a literal and the
/// description is left plain.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    text.lines()
        .map(colorize_example_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_example_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    if trimmed.ends_with(':') {
        return format!("{indent}{}", header(trimmed));
    }
    match trimmed.find("  ") {
        Some(end) => format!("{indent}{}{}", literal(&trimmed[..end]), &trimmed[end..]),
        None => line.to_string(),
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
