//! Command to add a directory to the PATH.

use crate::error::CliError;
use crate::utils::{build_editor, emit_editor, load_configuration, report_history, GlobalOptions};
use clap::Args;
use pathedit::AddMode;

/// Add a directory to the front (default) or the back of the PATH.
#[derive(Args)]
pub struct AddCommand {
    /// Directory to add
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Add at the end instead of the front
    #[arg(long)]
    pub append: bool,
}

impl AddCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.dir.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "directory cannot be empty".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let mut editor = build_editor(global, &config);

        if editor.paths().contains(&self.dir) {
            global
                .logger
                .warn(&format!("'{}' is already in PATH", self.dir));
        }

        let mode = if self.append {
            AddMode::Append
        } else {
            AddMode::Prepend
        };
        editor.add_path(&self.dir, mode);

        report_history(global, &editor);
        emit_editor(global, &config, &editor)
    }
}
