// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;

#[test]
fn clears_completed_only() {
    let mut ctx = TestContext::new();
    let items = ctx.seed(&["a", "b", "c"]);
    ctx.db.set_completed(&ctx.owner, items[0].id, true).unwrap();
    ctx.db.set_completed(&ctx.owner, items[2].id, true).unwrap();

    run_impl(&mut ctx.db, &ctx.owner, &mut ctx.out).unwrap();

    assert_eq!(ctx.titles(), vec!["b"]);
    assert_eq!(ctx.output(), "Completed todos cleared (2)\n");
}

#[test]
fn nothing_to_clear_succeeds_quietly_on_stdout() {
    let mut ctx = TestContext::new();
    ctx.seed(&["a"]);

    run_impl(&mut ctx.db, &ctx.owner, &mut ctx.out).unwrap();

    // the alert goes to stderr
    assert!(ctx.output().is_empty());
    assert_eq!(ctx.titles(), vec!["a"]);
}
