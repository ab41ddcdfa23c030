//! CLI command implementations.
//!
//! - `clean`: remove duplicates and missing directories, order system paths
//! - `duplicates`: list repeated entries
//! - `check`: exit 1 when the PATH has duplicate or missing entries
//! - `add`: prepend or append a directory
//! - `remove`: remove every occurrence of a directory
//! - `insert`: move an existing directory to a position
//! - `show`: render the PATH unchanged
//! - `completions`: generate shell completion scripts

pub mod add;
pub mod check;
pub mod clean;
pub mod completions;
pub mod duplicates;
pub mod insert;
pub mod remove;
pub mod show;

pub use add::AddCommand;
pub use check::CheckCommand;
pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use duplicates::DuplicatesCommand;
pub use insert::InsertCommand;
pub use remove::RemoveCommand;
pub use show::ShowCommand;
