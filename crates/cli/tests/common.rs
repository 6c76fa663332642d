// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `rung` with a clean environment for owner and logging.
pub fn rung() -> Command {
    let mut cmd = cargo_bin_cmd!("rung");
    cmd.env_remove("RUNG_OWNER")
        .env_remove("RUNG_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Helper to create an initialized temp directory owned by alice.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    rung()
        .args(["init", "--owner", "alice"])
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to add an item and return its ID.
pub fn add_item(temp: &TempDir, title: &str) -> String {
    let output = rung()
        .args(["add", title, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {output:?}");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["outcome"]["data"]["id"].to_string()
}

/// Titles in list order, read through `list -o json`.
pub fn titles(temp: &TempDir) -> Vec<String> {
    let output = rung()
        .args(["list", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

/// Ranks in list order.
pub fn ranks(temp: &TempDir) -> Vec<u64> {
    let output = rung()
        .args(["list", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["rank"].as_u64().unwrap())
        .collect()
}
