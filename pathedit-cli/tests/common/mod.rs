//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for common patterns
//! - Real directories to put on the PATH

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak configuration into a test.
const PATHEDIT_ENV_VARS: [&str; 7] = [
    "PATHEDIT_SEPARATOR",
    "PATHEDIT_FORMAT",
    "PATHEDIT_SHELL",
    "PATHEDIT_SYSTEM_PATHS",
    "PATHEDIT_KEEP_INVALID",
    "PATHEDIT_CONFIG",
    "PATHEDIT_LOG_MODE",
];

/// Test environment with an isolated home directory.
///
/// The home directory holds the user config (`.pathedit/config.yaml`), so
/// pointing `HOME` at it keeps the developer's own config out of tests.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory used by the binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder with an isolated environment and no `--path`.
    ///
    /// `PATH` is still inherited, so commands that do not pass `--path`
    /// operate on the test runner's PATH.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathedit").expect("Failed to find pathedit binary");
        cmd.env("HOME", &self.home);
        for key in PATHEDIT_ENV_VARS {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Get a command builder editing `path` instead of the real PATH.
    pub fn command(&self, path: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--path").arg(path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment and return it as a
    /// PATH entry.
    pub fn create_dir(&self, name: &str) -> String {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path.to_str().expect("temp path is not UTF-8").to_string()
    }

    /// A PATH entry under the temp directory that does not exist.
    pub fn missing_dir(&self, name: &str) -> String {
        self.temp_path
            .join(name)
            .to_str()
            .expect("temp path is not UTF-8")
            .to_string()
    }

    /// Write the user config file.
    pub fn write_user_config(&self, content: &str) {
        let dir = self.home.join(".pathedit");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.yaml"), content).expect("Failed to write config");
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Join entries with `:`.
#[allow(dead_code)]
pub fn join(entries: &[&str]) -> String {
    entries.join(":")
}

/// Run a command, assert success, and return trimmed stdout.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run command");
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("Invalid UTF-8 in output")
        .trim_end()
        .to_string()
}
