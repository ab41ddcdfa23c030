//! Directory existence checks for PATH entries.
//!
//! The editor never touches the filesystem itself. Pruning invalid entries
//! goes through a [`DirectoryCheck`], so tests can substitute a fixed set of
//! "existing" directories for the real filesystem.

use std::collections::HashSet;
use std::path::Path;

/// Decides whether a PATH entry names an existing directory.
///
/// Any `Fn(&str) -> bool` closure is a `DirectoryCheck`:
///
/// ```
/// use pathedit::path::DirectoryCheck;
///
/// let only_bin = |entry: &str| entry == "/bin";
/// assert!(only_bin.is_directory("/bin"));
/// assert!(!only_bin.is_directory("/opt/bin"));
/// ```
pub trait DirectoryCheck {
    /// Returns `true` if `entry` is an existing directory.
    fn is_directory(&self, entry: &str) -> bool;
}

impl<F> DirectoryCheck for F
where
    F: Fn(&str) -> bool,
{
    fn is_directory(&self, entry: &str) -> bool {
        self(entry)
    }
}

/// Production implementation backed by `std::fs` metadata.
///
/// Symlinks to directories count as directories. Empty entries never do,
/// even though some shells treat an empty PATH element as the current
/// directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryCheck;

impl DirectoryCheck for FsDirectoryCheck {
    fn is_directory(&self, entry: &str) -> bool {
        !entry.is_empty() && Path::new(entry).is_dir()
    }
}

/// Mock implementation with a configurable set of existing directories.
///
/// ```
/// use pathedit::path::{DirectoryCheck, MockDirectoryCheck};
///
/// let check = MockDirectoryCheck::new(["/usr/bin", "/bin"]);
/// assert!(check.is_directory("/bin"));
/// assert!(!check.is_directory("/nonexistent"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockDirectoryCheck {
    directories: HashSet<String>,
}

impl MockDirectoryCheck {
    /// Create a mock where exactly `directories` exist.
    #[must_use]
    pub fn new<I, S>(directories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark one more directory as existing.
    pub fn mark_existing(&mut self, directory: impl Into<String>) {
        self.directories.insert(directory.into());
    }

    /// Mark a directory as missing.
    pub fn mark_missing(&mut self, directory: &str) {
        self.directories.remove(directory);
    }
}

impl DirectoryCheck for MockDirectoryCheck {
    fn is_directory(&self, entry: &str) -> bool {
        self.directories.contains(entry)
    }
}
