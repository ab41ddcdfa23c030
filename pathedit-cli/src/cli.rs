//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CheckCommand, CleanCommand, CompletionsCommand, DuplicatesCommand,
    InsertCommand, RemoveCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use pathedit::{OutputFormat, ShellType};
use std::path::PathBuf;

/// Command-line tool for cleaning and editing the PATH variable.
#[derive(Parser)]
#[command(name = "pathedit")]
#[command(version, about = "Clean, reorder and edit PATH-style directory lists", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// PATH value to edit (defaults to the current PATH)
    #[arg(long, value_name = "PATH", global = true, env = "PATH", hide_env_values = true)]
    pub path: Option<String>,

    /// Separator between entries
    #[arg(long, value_name = "CHAR", global = true)]
    pub separator: Option<char>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shell dialect for shell output
    #[arg(long, value_enum, global = true)]
    pub shell: Option<ShellType>,

    /// Write the result to a file instead of stdout
    #[arg(long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Additional configuration file
    #[arg(long, value_name = "FILE", global = true, env = "PATHEDIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Remove duplicates and missing directories, then order system paths
    Clean(CleanCommand),

    /// List entries that occur more than once
    Duplicates(DuplicatesCommand),

    /// Fail if the PATH has duplicate or missing entries
    Check(CheckCommand),

    /// Add a directory at the front or the back
    Add(AddCommand),

    /// Remove every occurrence of a directory
    Remove(RemoveCommand),

    /// Move a directory to a given position
    Insert(InsertCommand),

    /// Render the PATH without changes
    Show(ShowCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
