//! Command to check the PATH for problems.
//!
//! This command performs read-only checks and uses exit codes to indicate
//! the result, which makes it suitable for shell startup scripts:
//! - Exit 0: no duplicates and every entry is a directory
//! - Exit 1: at least one problem was found

use crate::error::CliError;
use crate::utils::{build_editor, load_configuration, GlobalOptions};
use clap::Args;
use pathedit::FsDirectoryCheck;

/// Report duplicate entries and entries that are not directories.
#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let editor = build_editor(global, &config);

        let duplicates = editor.find_duplicates();
        let invalid = editor.find_invalid(&FsDirectoryCheck);

        if duplicates.is_empty() && invalid.is_empty() {
            global
                .logger
                .info(&format!("PATH is clean ({} entries)", editor.len()));
            return Ok(());
        }

        for entry in &duplicates {
            println!("duplicate: {entry}");
        }
        for entry in &invalid {
            println!("invalid: {entry}");
        }

        Err(CliError::SemanticFailure(format!(
            "PATH has {} duplicate and {} invalid entries",
            duplicates.len(),
            invalid.len()
        )))
    }
}
