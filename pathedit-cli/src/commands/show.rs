//! Command to render the PATH without changes.

use crate::error::CliError;
use crate::utils::{build_editor, emit_editor, load_configuration, GlobalOptions};
use clap::Args;

/// Render the PATH in the selected format.
#[derive(Args)]
pub struct ShowCommand {}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let editor = build_editor(global, &config);
        emit_editor(global, &config, &editor)
    }
}
