//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum, id = "target_shell", value_name = "SHELL")]
    pub target: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();

        let hint = match self.target {
            Shell::Bash => Some(
                "pathedit completions bash > ~/.local/share/bash-completion/completions/pathedit",
            ),
            Shell::Zsh => Some("pathedit completions zsh > ~/.zsh/completions/_pathedit"),
            Shell::Fish => {
                Some("pathedit completions fish > ~/.config/fish/completions/pathedit.fish")
            }
            Shell::PowerShell => {
                Some("pathedit completions powershell | Out-String | Invoke-Expression")
            }
            _ => None,
        };
        if let Some(hint) = hint {
            global.logger.info(&format!("Enable completions with: {hint}"));
        }

        generate(self.target, &mut cmd, bin_name, &mut io::stdout());

        Ok(())
    }
}
