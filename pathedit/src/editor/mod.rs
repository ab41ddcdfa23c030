//! The path sequence editor.
//!
//! [`PathEditor`] owns an ordered list of path entries and a history of
//! snapshots. Every mutating operation computes a new list and commits it
//! as a snapshot named after the operation; [`PathEditor::revert_change`]
//! walks back through that history.
//!
//! # Invariants
//!
//! - The history always holds at least the `init` snapshot.
//! - The current list is the list of the most recent snapshot.
//! - A snapshot is committed only after its operation fully succeeds.
//!
//! # Examples
//!
//! ```
//! use pathedit::{AddMode, PathEditor};
//!
//! let mut editor = PathEditor::new("/a:/a:/b", ':');
//! assert_eq!(editor.find_duplicates(), ["/a"]);
//!
//! editor.remove_duplicates();
//! assert_eq!(editor.joined(), "/a:/b");
//!
//! editor.add_path("/opt/bin", AddMode::Prepend);
//! assert_eq!(editor.paths(), ["/opt/bin", "/a", "/b"]);
//!
//! editor.revert_change(2).unwrap();
//! assert_eq!(editor.paths(), ["/a", "/a", "/b"]);
//! ```

mod diff;
mod history;
#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::output::{self, OutputFormat, PathFormatter, ShellType};
use crate::path::normalize::normalize_entry;
use crate::path::DirectoryCheck;
use crate::{Error, Result};

pub use diff::PathDiff;
pub use history::Snapshot;

use history::History;

/// Canonical system binary directories, in their mandated order.
pub const SYSTEM_PATHS: [&str; 7] = [
    "/usr/local/sbin",
    "/usr/local/bin",
    "/usr/sbin",
    "/usr/bin",
    "/sbin",
    "/bin",
    "/snap/bin",
];

/// Entries with this prefix are grouped right before the system paths.
const USR_PREFIX: &str = "/usr";

/// The platform's PATH separator.
#[cfg(windows)]
pub const DEFAULT_SEPARATOR: char = ';';
/// The platform's PATH separator.
#[cfg(not(windows))]
pub const DEFAULT_SEPARATOR: char = ':';

/// Raw input for a [`PathEditor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// A separator-joined value such as the contents of `$PATH`.
    Joined(String),
    /// Explicit entries, in order.
    List(Vec<String>),
}

impl From<&str> for PathInput {
    fn from(value: &str) -> Self {
        Self::Joined(value.to_string())
    }
}

impl From<String> for PathInput {
    fn from(value: String) -> Self {
        Self::Joined(value)
    }
}

impl From<Vec<String>> for PathInput {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for PathInput {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathInput {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.iter().map(ToString::to_string).collect())
    }
}

impl TryFrom<serde_json::Value> for PathInput {
    type Error = Error;

    /// Accepts a JSON string or an array of strings.
    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::String(joined) => Ok(Self::Joined(joined)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(entry) => Ok(entry),
                    other => Err(Error::InvalidInputKind {
                        found: format!("list containing {}", json_kind(&other)),
                    }),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            other => Err(Error::InvalidInputKind {
                found: json_kind(&other).to_string(),
            }),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Where [`PathEditor::add_path`] places a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddMode {
    /// Insert at the front, giving the entry the highest precedence.
    #[default]
    Prepend,
    /// Insert at the end, giving the entry the lowest precedence.
    Append,
}

impl FromStr for AddMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "prepend" => Ok(Self::Prepend),
            "append" => Ok(Self::Append),
            _ => Err(Error::InvalidArgument {
                field: "mode".to_string(),
                message: format!("invalid mode '{s}': use 'prepend' or 'append'"),
            }),
        }
    }
}

impl fmt::Display for AddMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prepend => write!(f, "prepend"),
            Self::Append => write!(f, "append"),
        }
    }
}

/// An ordered path list with snapshot history.
///
/// Accessors hand out shared slices or owned copies; the list can only be
/// changed through the editing operations, each of which records a
/// [`Snapshot`].
#[derive(Debug, Clone)]
pub struct PathEditor {
    separator: char,
    system_paths: Vec<String>,
    history: History,
}

impl PathEditor {
    /// Create an editor from a joined string or an explicit list.
    ///
    /// Joined input is split on `separator` with empty segments preserved,
    /// so `"/a::/b"` yields three entries.
    #[must_use]
    pub fn new(input: impl Into<PathInput>, separator: char) -> Self {
        let paths = match input.into() {
            PathInput::Joined(joined) => split_joined(&joined, separator),
            PathInput::List(paths) => paths,
        };

        Self {
            separator,
            system_paths: SYSTEM_PATHS.iter().map(ToString::to_string).collect(),
            history: History::new(Snapshot::new("init", paths)),
        }
    }

    /// Create an editor from dynamically typed input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputKind`] unless `value` is a string or an
    /// array of strings.
    ///
    /// ```
    /// use pathedit::PathEditor;
    /// use serde_json::json;
    ///
    /// let editor = PathEditor::from_value(json!(["/a", "/b"]), ':').unwrap();
    /// assert_eq!(editor.joined(), "/a:/b");
    ///
    /// assert!(PathEditor::from_value(json!(42), ':').is_err());
    /// ```
    pub fn from_value(value: serde_json::Value, separator: char) -> Result<Self> {
        Ok(Self::new(PathInput::try_from(value)?, separator))
    }

    /// Replace the canonical system directories used by
    /// [`ensure_sys_path_order`](Self::ensure_sys_path_order).
    #[must_use]
    pub fn with_system_paths<I, S>(mut self, system_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.system_paths = system_paths.into_iter().map(Into::into).collect();
        self
    }

    /// The separator used to split input and join output.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The canonical system directories, in order.
    #[must_use]
    pub fn system_paths(&self) -> &[String] {
        &self.system_paths
    }

    /// The current entries.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        self.history.latest().paths()
    }

    /// An owned copy of the current entries.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.paths().to_vec()
    }

    /// The current entries joined with the separator, empty entries kept.
    #[must_use]
    pub fn joined(&self) -> String {
        self.paths().join(self.separator.encode_utf8(&mut [0; 4]))
    }

    /// Number of current entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths().len()
    }

    /// Whether the current list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths().is_empty()
    }

    /// The snapshot history, most recent first. Always ends with `init`.
    pub fn history(&self) -> impl Iterator<Item = &Snapshot> {
        self.history.iter_recent_first()
    }

    /// Number of recorded snapshots, including `init`.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Differences introduced by the most recent operation, or `None` if
    /// nothing has been committed since `init`.
    #[must_use]
    pub fn last_change(&self) -> Option<PathDiff> {
        let mut recent = self.history();
        let current = recent.next()?;
        let previous = recent.next()?;
        Some(PathDiff::between(previous.paths(), current.paths()))
    }

    /// Differences between the `init` list and the current list.
    #[must_use]
    pub fn diff_from_init(&self) -> PathDiff {
        let initial = self
            .history()
            .last()
            .map_or(&[][..], Snapshot::paths);
        PathDiff::between(initial, self.paths())
    }

    /// Entries that occur more than once, in first-encountered order, each
    /// listed once.
    #[must_use]
    pub fn find_duplicates(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for entry in self.paths() {
            if !seen.insert(entry.as_str()) && reported.insert(entry.as_str()) {
                duplicates.push(entry.clone());
            }
        }
        duplicates
    }

    /// Entries that `check` does not accept as directories, in
    /// first-encountered order, each listed once.
    #[must_use]
    pub fn find_invalid<C>(&self, check: &C) -> Vec<String>
    where
        C: DirectoryCheck + ?Sized,
    {
        let mut seen = HashSet::new();
        self.paths()
            .iter()
            .filter(|entry| seen.insert(entry.as_str()))
            .filter(|entry| !check.is_directory(entry))
            .cloned()
            .collect()
    }

    /// Keep the first occurrence of each entry and drop later repeats.
    pub fn remove_duplicates(&mut self) {
        let mut seen = HashSet::new();
        let unique = self
            .paths()
            .iter()
            .filter(|entry| seen.insert(entry.as_str()))
            .cloned()
            .collect();
        self.commit("remove_duplicates", unique);
    }

    /// Remove every occurrence of each entry that `check` rejects.
    pub fn remove_invalid<C>(&mut self, check: &C)
    where
        C: DirectoryCheck + ?Sized,
    {
        let invalid: HashSet<String> = self.find_invalid(check).into_iter().collect();
        let kept = self
            .paths()
            .iter()
            .filter(|entry| !invalid.contains(entry.as_str()))
            .cloned()
            .collect();
        self.commit("remove_invalid", kept);
    }

    /// Move system directories to the end in canonical order.
    ///
    /// The result is the non-system entries that do not start with `/usr`,
    /// then the remaining `/usr`-prefixed entries, then the canonical
    /// system directories that were present, once each. Applying it twice
    /// gives the same list as applying it once.
    ///
    /// ```
    /// use pathedit::PathEditor;
    ///
    /// let mut editor = PathEditor::new(["/x", "/usr/bin", "/bin", "/y"], ':');
    /// editor.ensure_sys_path_order();
    /// assert_eq!(editor.paths(), ["/x", "/y", "/usr/bin", "/bin"]);
    /// ```
    pub fn ensure_sys_path_order(&mut self) {
        let canonical: HashSet<&str> = self.system_paths.iter().map(String::as_str).collect();
        let mut present = HashSet::new();
        let mut others = Vec::new();
        let mut usr = Vec::new();

        for entry in self.paths() {
            if canonical.contains(entry.as_str()) {
                present.insert(entry.as_str());
            } else if entry.starts_with(USR_PREFIX) {
                usr.push(entry.clone());
            } else {
                others.push(entry.clone());
            }
        }

        let system = self
            .system_paths
            .iter()
            .filter(|entry| present.remove(entry.as_str()))
            .cloned();

        others.extend(usr);
        others.extend(system);
        self.commit("ensure_sys_path_order", others);
    }

    /// Add `path` at the front or the back of the list.
    ///
    /// Existing occurrences are left in place; follow up with
    /// [`remove_duplicates`](Self::remove_duplicates) or use
    /// [`insert_path`](Self::insert_path) to move an entry instead.
    pub fn add_path(&mut self, path: &str, mode: AddMode) {
        let mut paths = self.to_vec();
        match mode {
            AddMode::Prepend => paths.insert(0, path.to_string()),
            AddMode::Append => paths.push(path.to_string()),
        }
        self.commit(format!("add_path({path})"), paths);
    }

    /// Remove every exact occurrence of `path`. Removing an absent entry
    /// still records a snapshot.
    pub fn remove_path(&mut self, path: &str) {
        let kept = self
            .paths()
            .iter()
            .filter(|entry| entry.as_str() != path)
            .cloned()
            .collect();
        self.commit(format!("remove_path({path})"), kept);
    }

    /// Move `path` to `index`: remove every occurrence, then insert it at
    /// `index` of the remaining list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is past the end of the
    /// remaining list. Nothing is committed in that case.
    ///
    /// ```
    /// use pathedit::PathEditor;
    ///
    /// let mut editor = PathEditor::new("/a:/tool:/b:/tool", ':');
    /// editor.insert_path("/tool", 1).unwrap();
    /// assert_eq!(editor.joined(), "/a:/tool:/b");
    ///
    /// assert!(editor.insert_path("/c", 9).is_err());
    /// ```
    pub fn insert_path(&mut self, path: &str, index: usize) -> Result<()> {
        let mut paths: Vec<String> = self
            .paths()
            .iter()
            .filter(|entry| entry.as_str() != path)
            .cloned()
            .collect();

        if index > paths.len() {
            return Err(Error::OutOfRange {
                requested: index,
                available: paths.len(),
            });
        }

        paths.insert(index, path.to_string());
        self.commit(format!("insert_path({path})"), paths);
        Ok(())
    }

    /// Rewrite every entry to its normalized absolute form and drop empty
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for the first entry that cannot be
    /// normalized. Nothing is committed in that case.
    pub fn normalize_entries(&mut self) -> Result<()> {
        let normalized = self
            .paths()
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| normalize_entry(entry.trim()))
            .collect::<Result<Vec<_>>>()?;
        self.commit("normalize_entries", normalized);
        Ok(())
    }

    /// Run the standard cleanup: drop duplicates, drop entries that are not
    /// directories, then put the system directories in order.
    pub fn clean<C>(&mut self, check: &C)
    where
        C: DirectoryCheck + ?Sized,
    {
        self.remove_duplicates();
        self.remove_invalid(check);
        self.ensure_sys_path_order();
    }

    /// Undo the `steps` most recent operations.
    ///
    /// Reverting to the `init` snapshot is allowed; reverting past it is not.
    /// `revert_change(0)` does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if fewer than `steps` operations have
    /// been recorded. The state is unchanged in that case.
    pub fn revert_change(&mut self, steps: usize) -> Result<()> {
        let available = self.history.len() - 1;
        if steps > available {
            return Err(Error::OutOfRange {
                requested: steps,
                available,
            });
        }

        self.history.discard(steps);
        log::debug!(
            "reverted {steps} change(s), now at '{}'",
            self.history.latest().operation()
        );
        Ok(())
    }

    /// Render the current list in `format`, exporting for bash when the
    /// format is [`OutputFormat::Shell`].
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be encoded.
    ///
    /// ```
    /// use pathedit::{OutputFormat, PathEditor};
    ///
    /// let editor = PathEditor::new("/a:/b", ':');
    /// assert_eq!(editor.serialize(OutputFormat::List).unwrap(), "/a\n/b");
    /// assert_eq!(editor.serialize(OutputFormat::Shell).unwrap(), "export PATH=/a:/b");
    /// ```
    pub fn serialize(&self, format: OutputFormat) -> Result<String> {
        self.serialize_for(format, ShellType::Bash)
    }

    /// Render the current list in `format` using the given shell dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be encoded.
    pub fn serialize_for(&self, format: OutputFormat, shell: ShellType) -> Result<String> {
        self.serialize_with(format.create_formatter(self.separator, shell).as_ref())
    }

    /// Render the current list with a custom formatter.
    ///
    /// # Errors
    ///
    /// Propagates the formatter's error.
    pub fn serialize_with(&self, formatter: &dyn PathFormatter) -> Result<String> {
        formatter.format(self.paths())
    }

    /// Render the current list in `format` and write it to `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn write_to(&self, format: OutputFormat, shell: ShellType, destination: &Path) -> Result<()> {
        let rendered = self.serialize_for(format, shell)?;
        output::emit(rendered, Some(destination))?;
        Ok(())
    }

    fn commit(&mut self, operation: impl Into<String>, paths: Vec<String>) {
        let snapshot = Snapshot::new(operation, paths);
        log::debug!(
            "committed '{}' ({} entries)",
            snapshot.operation(),
            snapshot.paths().len()
        );
        self.history.push(snapshot);
    }
}

impl Default for PathEditor {
    fn default() -> Self {
        Self::new(PathInput::List(Vec::new()), DEFAULT_SEPARATOR)
    }
}

impl fmt::Display for PathEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

fn split_joined(joined: &str, separator: char) -> Vec<String> {
    joined.split(separator).map(ToString::to_string).collect()
}
