//! Entry-level comparison of two path lists.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// The difference between two path lists.
///
/// ```
/// use pathedit::PathDiff;
///
/// let before = ["/a", "/b", "/c"].map(String::from);
/// let after = ["/c", "/a", "/d"].map(String::from);
///
/// let diff = PathDiff::between(&before, &after);
/// assert_eq!(diff.added(), ["/d"]);
/// assert_eq!(diff.removed(), ["/b"]);
/// assert!(diff.reordered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PathDiff {
    added: Vec<String>,
    removed: Vec<String>,
    reordered: bool,
}

impl PathDiff {
    /// Compare `before` with `after`.
    ///
    /// `added` lists entries of `after` missing from `before` in `after`
    /// order; `removed` lists entries of `before` missing from `after` in
    /// `before` order. Each entry appears once. `reordered` is set when the
    /// entries common to both lists appear in a different relative order.
    #[must_use]
    pub fn between(before: &[String], after: &[String]) -> Self {
        let before_set: HashSet<&str> = before.iter().map(String::as_str).collect();
        let after_set: HashSet<&str> = after.iter().map(String::as_str).collect();

        let added = only_in(after, &before_set);
        let removed = only_in(before, &after_set);

        let common_before = first_occurrences(before, &after_set);
        let common_after = first_occurrences(after, &before_set);

        Self {
            added,
            removed,
            reordered: common_before != common_after,
        }
    }

    /// Entries present only in the newer list.
    #[must_use]
    pub fn added(&self) -> &[String] {
        &self.added
    }

    /// Entries present only in the older list.
    #[must_use]
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    /// Whether shared entries changed their relative order.
    #[must_use]
    pub fn reordered(&self) -> bool {
        self.reordered
    }

    /// True when neither membership nor order changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && !self.reordered
    }
}

fn only_in(list: &[String], other: &HashSet<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for entry in list {
        if !other.contains(entry.as_str()) && seen.insert(entry.as_str()) {
            result.push(entry.clone());
        }
    }
    result
}

fn first_occurrences<'a>(list: &'a [String], keep: &HashSet<&str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    list.iter()
        .map(String::as_str)
        .filter(|entry| keep.contains(entry) && seen.insert(*entry))
        .collect()
}

impl fmt::Display for PathDiff {
    /// One line per change: `-entry`, `+entry`, and `~order changed`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        for entry in &self.removed {
            lines.push(format!("-{entry}"));
        }
        for entry in &self.added {
            lines.push(format!("+{entry}"));
        }
        if self.reordered {
            lines.push("~order changed".to_string());
        }
        write!(f, "{}", lines.join("\n"))
    }
}
