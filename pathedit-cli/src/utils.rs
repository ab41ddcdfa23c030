//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, editor construction and output.

use crate::error::CliError;
use pathedit::{output, Config, ConfigBuilder, Logger, PathEditor};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Logger configured from `--verbose`/`--quiet`.
    pub logger: Logger,

    /// PATH value to edit.
    pub path: String,

    /// Separator override.
    pub separator: Option<char>,

    /// Output format override.
    pub format: Option<output::OutputFormat>,

    /// Shell dialect override.
    pub shell: Option<output::ShellType>,

    /// Destination file for the rendered result.
    pub output: Option<PathBuf>,

    /// Extra configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user config file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        separator: global.separator,
        format: global.format,
        shell: global.shell,
        ..Config::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build an editor over the PATH value using the configured separator and
/// system directories.
pub fn build_editor(global: &GlobalOptions, config: &Config) -> PathEditor {
    PathEditor::new(global.path.as_str(), config.separator())
        .with_system_paths(config.system_paths())
}

/// Log each snapshot recorded after `init`, oldest first.
pub fn report_history(global: &GlobalOptions, editor: &PathEditor) {
    let mut operations: Vec<&str> = editor.history().map(|s| s.operation()).collect();
    operations.reverse();
    for operation in operations.iter().skip(1) {
        global.logger.debug(&format!("applied {operation}"));
    }
}

/// Render the editor's current list and print it, or write it to the
/// `--output` file.
pub fn emit_editor(
    global: &GlobalOptions,
    config: &Config,
    editor: &PathEditor,
) -> Result<(), CliError> {
    let rendered = editor.serialize_for(config.format(), config.shell())?;
    print_or_write(global, rendered)
}

/// Print `rendered` to stdout, or write it to the `--output` file.
pub fn print_or_write(global: &GlobalOptions, rendered: String) -> Result<(), CliError> {
    if let Some(text) = output::emit(rendered, global.output.as_deref())? {
        if !text.is_empty() {
            println!("{text}");
        }
    } else if let Some(ref path) = global.output {
        global.logger.info(&format!("Wrote {}", path.display()));
    }
    Ok(())
}

/// Print a list of entries one per line, or write it to `--output`.
pub fn print_entries(global: &GlobalOptions, entries: &[String]) -> Result<(), CliError> {
    print_or_write(global, entries.join("\n"))
}
