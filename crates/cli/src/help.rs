// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles matching the list colors.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_list}
  {add}         Add an item at the top of the list
  {list}        Show the list in order
  {done}        Mark item(s) as completed
  {reopen}      Mark item(s) as open again
  {move_}        Move an item to a position
  {up}          Move an item one position up
  {down}        Move an item one position down
  {rm}          Delete item(s)
  {clear}       Delete all completed items

{header_setup}
  {init}        Create a list in this directory
  {completion}  Generate shell completions
",
        header_list = colors::header("List:"),
        header_setup = colors::header("Setup:"),
        add = colors::literal("add"),
        list = colors::literal("list"),
        done = colors::literal("done"),
        reopen = colors::literal("reopen"),
        move_ = colors::literal("move"),
        up = colors::literal("up"),
        down = colors::literal("down"),
        rm = colors::literal("rm"),
        clear = colors::literal("clear"),
        init = colors::literal("init"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  rung init --owner alice   Create a list owned by alice
  rung add \"Buy milk\"       Add an item at the top
  rung list                 Show items with their positions
  rung move <id> 0          Move an item to the top
  rung done <id>            Mark an item as completed",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
