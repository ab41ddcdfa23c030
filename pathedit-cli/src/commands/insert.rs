//! Command to move a directory to a given position in the PATH.

use crate::error::CliError;
use crate::utils::{
    build_editor, emit_editor, load_configuration, print_or_write, report_history, GlobalOptions,
};
use clap::Args;
use pathedit::path::normalize::normalize_entry;
use pathedit::{DirectoryCheck, FsDirectoryCheck};

/// Insert an existing directory at `INDEX`, removing its other occurrences.
///
/// Entries that are not directories are dropped and the rest are made
/// absolute before the insertion.
#[derive(Args)]
pub struct InsertCommand {
    /// Directory to insert; must exist
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Zero-based position in the resulting PATH
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Print the changes instead of the new PATH
    #[arg(long)]
    pub diff: bool,
}

impl InsertCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !FsDirectoryCheck.is_directory(&self.dir) {
            return Err(CliError::InvalidArguments(format!(
                "'{}' is not an existing directory",
                self.dir
            )));
        }
        let dir = normalize_entry(&self.dir)?;

        let config = load_configuration(global)?;
        let mut editor = build_editor(global, &config);

        editor.remove_invalid(&FsDirectoryCheck);
        editor.normalize_entries()?;
        editor.insert_path(&dir, self.index)?;

        report_history(global, &editor);

        if self.diff {
            let diff = editor.diff_from_init();
            let rendered = if diff.is_empty() {
                String::new()
            } else {
                diff.to_string()
            };
            return print_or_write(global, rendered);
        }

        emit_editor(global, &config, &editor)
    }
}
