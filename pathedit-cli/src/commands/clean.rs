//! Command to clean up the PATH.

use crate::error::CliError;
use crate::utils::{build_editor, emit_editor, load_configuration, report_history, GlobalOptions};
use clap::Args;
use pathedit::FsDirectoryCheck;

/// Remove duplicate and missing entries and move system directories last.
#[derive(Args)]
pub struct CleanCommand {
    /// Keep entries that are not existing directories
    #[arg(long)]
    pub keep_invalid: bool,

    /// Leave system directories where they are
    #[arg(long)]
    pub no_sys_order: bool,

    /// Make entries absolute and resolve `~`, `.` and `..` first
    #[arg(long)]
    pub normalize: bool,
}

impl CleanCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut editor = build_editor(global, &config);

        if self.normalize {
            editor.normalize_entries()?;
        }

        editor.remove_duplicates();

        if !(self.keep_invalid || config.keep_invalid()) {
            for entry in editor.find_invalid(&FsDirectoryCheck) {
                global
                    .logger
                    .info(&format!("Dropping '{entry}': not a directory"));
            }
            editor.remove_invalid(&FsDirectoryCheck);
        }

        if !self.no_sys_order {
            editor.ensure_sys_path_order();
        }

        report_history(global, &editor);
        emit_editor(global, &config, &editor)
    }
}
