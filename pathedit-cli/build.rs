//! Build script for pathedit-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathedit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clean, reorder and edit PATH-style directory lists")
        .long_about(
            "Command-line tool for removing duplicate and missing PATH entries, \
             ordering system directories and editing single entries",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .help("PATH value to edit (defaults to the current PATH)")
                .value_name("PATH")
                .global(true)
                .env("PATH")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Separator between entries")
                .value_name("CHAR")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["path", "list", "json", "yaml", "shell", "export"])
                .global(true),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .help("Shell dialect for shell output")
                .value_parser(["bash", "zsh", "fish", "powershell", "pwsh"])
                .global(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Write the result to a file instead of stdout")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file")
                .value_name("FILE")
                .global(true)
                .env("PATHEDIT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("clean")
                .about("Remove duplicates and missing directories, then order system paths")
                .long_about(
                    "Drop repeated entries and entries that are not directories, then move \
                     the canonical system directories to the end in their standard order",
                ),
            Command::new("duplicates")
                .about("List entries that occur more than once")
                .long_about("Print each repeated entry once, in first-seen order"),
            Command::new("check")
                .about("Fail if the PATH has duplicate or missing entries")
                .long_about("Exit with status 1 and list the problems when the PATH is not clean"),
            Command::new("add")
                .about("Add a directory at the front or the back")
                .long_about("Prepend a directory to the PATH, or append it with --append"),
            Command::new("remove")
                .about("Remove every occurrence of a directory")
                .long_about("Remove all entries exactly matching a directory"),
            Command::new("insert")
                .about("Move a directory to a given position")
                .long_about(
                    "Insert an existing directory at an index after removing its other \
                     occurrences and any entries that are not directories",
                ),
            Command::new("show")
                .about("Render the PATH without changes")
                .long_about("Print the PATH in the selected output format"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathedit.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
