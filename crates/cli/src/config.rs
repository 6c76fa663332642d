// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.rung/config.toml` and includes:
//! - `owner`: Whose list commands act on unless `--owner` is given
//! - `database`: Optional path to store the database in a different location
//! - `busy_timeout_ms`: How long a write waits for another writer's lock

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rung_core::Owner;

use crate::error::{Error, Result};

const RUNG_DIR_NAME: &str = ".rung";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "items.db";

fn default_busy_timeout_ms() -> u64 {
    5_000
}

/// Project configuration stored in `.rung/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default owner for every command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Optional path for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// SQLite busy timeout in milliseconds (default: 5000).
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            owner: None,
            database: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Config {
    /// Creates a config for `owner`, validating the name.
    pub fn new(owner: Option<&str>, database: Option<String>) -> Result<Self> {
        let owner = owner
            .map(|name| Owner::new(name).map(|o| o.as_str().to_string()))
            .transpose()?;
        Ok(Config {
            owner,
            database,
            ..Default::default()
        })
    }

    /// Loads configuration from the given `.rung/` directory.
    pub fn load(rung_dir: &Path) -> Result<Self> {
        let config_path = rung_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.rung/` directory.
    pub fn save(&self, rung_dir: &Path) -> Result<()> {
        let config_path = rung_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// The owner to act as: the command-line value wins over the configured one.
    pub fn resolve_owner(&self, flag: Option<&str>) -> Result<Owner> {
        let name = flag.or(self.owner.as_deref()).ok_or(Error::OwnerRequired)?;
        Ok(Owner::new(name)?)
    }
}

/// Find the .rung directory by walking up from `start`.
pub fn find_rung_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let rung_dir = current.join(RUNG_DIR_NAME);
        if rung_dir.is_dir() {
            return Ok(rung_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Find the .rung directory by walking up from the current directory.
pub fn find_rung_dir() -> Result<PathBuf> {
    find_rung_dir_from(&std::env::current_dir()?)
}

/// Get the database path from config.
pub fn get_db_path(rung_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let database_path = Path::new(database);
            if database_path.is_absolute() {
                database_path.to_path_buf()
            } else {
                // Relative to the project root
                rung_dir.parent().unwrap_or(rung_dir).join(database_path)
            }
        }
        None => rung_dir.join(DB_FILE_NAME),
    }
}

/// Create `.rung/` under `path` and write `config` into it.
pub fn init_rung_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let rung_dir = path.join(RUNG_DIR_NAME);
    if rung_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(rung_dir.display().to_string()));
    }
    fs::create_dir_all(&rung_dir)?;
    config.save(&rung_dir)?;
    Ok(rung_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
