//! Snapshot history backing undo.

use serde::Serialize;

/// An immutable record of the path list after a named operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    operation: String,
    paths: Vec<String>,
}

impl Snapshot {
    pub(crate) fn new(operation: impl Into<String>, paths: Vec<String>) -> Self {
        Self {
            operation: operation.into(),
            paths,
        }
    }

    /// Name of the operation that produced this snapshot, e.g.
    /// `remove_duplicates` or `add_path(/opt/bin)`.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// The path list as it stood after the operation.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

/// Ordered snapshot history. Never empty.
///
/// Stored oldest-first so that committing is a push; the public view is
/// most-recent-first.
#[derive(Debug, Clone)]
pub(crate) struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub(crate) fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
        }
    }

    pub(crate) fn latest(&self) -> &Snapshot {
        // The constructor seeds one snapshot and `discard` never removes the last.
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Drop the `steps` most recent snapshots. Callers guarantee
    /// `steps < self.len()`.
    pub(crate) fn discard(&mut self, steps: usize) {
        debug_assert!(steps < self.snapshots.len());
        self.snapshots.truncate(self.snapshots.len() - steps);
    }

    pub(crate) fn iter_recent_first(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter().rev()
    }
}
