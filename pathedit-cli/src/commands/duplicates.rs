//! Command to list duplicate PATH entries.

use crate::error::CliError;
use crate::utils::{build_editor, load_configuration, print_entries, GlobalOptions};
use clap::Args;

/// Print every entry that occurs more than once, one per line.
#[derive(Args)]
pub struct DuplicatesCommand {}

impl DuplicatesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let editor = build_editor(global, &config);

        let duplicates = editor.find_duplicates();
        if duplicates.is_empty() {
            global.logger.info("No duplicate entries");
        }
        print_entries(global, &duplicates)
    }
}
