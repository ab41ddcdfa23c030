//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the pathedit library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pathedit::{MockDirectoryCheck, PathEditor};

/// Every environment variable the configuration layer reads.
#[allow(dead_code)]
pub const PATHEDIT_ENV_VARS: [&str; 5] = [
    "PATHEDIT_SEPARATOR",
    "PATHEDIT_FORMAT",
    "PATHEDIT_SHELL",
    "PATHEDIT_SYSTEM_PATHS",
    "PATHEDIT_KEEP_INVALID",
];

/// Builds an editor over `entries` with `:` as the separator.
#[allow(dead_code)]
pub fn editor(entries: &[&str]) -> PathEditor {
    PathEditor::new(entries, ':')
}

/// A directory check where exactly `existing` are directories.
#[allow(dead_code)]
pub fn existing(existing: &[&str]) -> MockDirectoryCheck {
    MockDirectoryCheck::new(existing.iter().copied())
}

/// Creates `names` as real directories under `root` and returns their
/// paths as strings.
#[allow(dead_code)]
pub fn create_dirs(root: &Path, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let dir = root.join(name);
            fs::create_dir_all(&dir).unwrap();
            dir.to_string_lossy().into_owned()
        })
        .collect()
}

/// Writes `content` to `dir/filename` and returns the path.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using environment variables must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard drops.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard drops.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every `PATHEDIT_*` variable for the lifetime of the guards.
#[allow(dead_code)]
pub fn clear_pathedit_env_vars() -> Vec<EnvGuard> {
    PATHEDIT_ENV_VARS.iter().map(|k| EnvGuard::remove(k)).collect()
}
