#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathedit
//!
//! A library for inspecting and editing `PATH`-style directory lists.
//!
//! The central type is [`PathEditor`], which holds an ordered list of
//! directory entries and records every edit as a named snapshot so that
//! changes can be reverted.
//!
//! ## Core Types
//!
//! - [`PathEditor`], [`PathInput`] and [`AddMode`]: the editor and its inputs
//! - [`Snapshot`] and [`PathDiff`]: edit history and comparison
//! - [`DirectoryCheck`]: the predicate used to decide which entries are valid
//! - [`OutputFormat`] and [`ShellType`]: rendering of the edited list
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathedit::{MockDirectoryCheck, PathEditor};
//!
//! let check = MockDirectoryCheck::new(["/opt/tool/bin", "/usr/bin", "/bin"]);
//! let mut editor = PathEditor::new("/bin:/opt/tool/bin:/nope:/usr/bin:/bin", ':');
//!
//! editor.clean(&check);
//! assert_eq!(editor.joined(), "/opt/tool/bin:/usr/bin:/bin");
//!
//! editor.revert_change(3).unwrap();
//! assert_eq!(editor.len(), 5);
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use editor::{
    AddMode, PathDiff, PathEditor, PathInput, Snapshot, DEFAULT_SEPARATOR, SYSTEM_PATHS,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, PathFormatter, ShellType};
pub use path::{DirectoryCheck, FsDirectoryCheck, MockDirectoryCheck};
