//! Handling of individual PATH entries.
//!
//! - [`normalize`]: lexical normalization (`~` expansion, absolute paths,
//!   `.`/`..` resolution) without following symlinks.
//! - [`check`]: the [`DirectoryCheck`] capability used to prune entries that
//!   do not name an existing directory.
//!
//! # Examples
//!
//! ```
//! use pathedit::path::{normalize::normalize_entry, DirectoryCheck, MockDirectoryCheck};
//!
//! let entry = normalize_entry("/usr/local/sbin/../bin").unwrap();
//! assert_eq!(entry, "/usr/local/bin");
//!
//! let check = MockDirectoryCheck::new([entry.as_str()]);
//! assert!(check.is_directory("/usr/local/bin"));
//! ```

pub mod check;
pub mod normalize;

pub use check::{DirectoryCheck, FsDirectoryCheck, MockDirectoryCheck};
