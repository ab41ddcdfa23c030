//! Command to remove a directory from the PATH.

use crate::error::CliError;
use crate::utils::{build_editor, emit_editor, load_configuration, report_history, GlobalOptions};
use clap::Args;

/// Remove every occurrence of a directory.
#[derive(Args)]
pub struct RemoveCommand {
    /// Directory to remove, matched exactly
    #[arg(value_name = "DIR")]
    pub dir: String,
}

impl RemoveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut editor = build_editor(global, &config);

        if !editor.paths().contains(&self.dir) {
            global.logger.warn(&format!("'{}' is not in PATH", self.dir));
        }
        editor.remove_path(&self.dir);

        report_history(global, &editor);
        emit_editor(global, &config, &editor)
    }
}
