//! Main entry point for the pathedit CLI.
//!
//! This is the command-line interface for inspecting and editing `PATH`:
//! - `clean`: Remove duplicates and missing directories, order system paths
//! - `check`: Report problems through the exit code
//! - `add`, `remove`, `insert`: Edit single entries
//! - `show`: Render the PATH in another format

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = pathedit::init_logger(cli.verbose, cli.quiet);
    logger.install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        logger,
        path: cli.path.unwrap_or_default(),
        separator: cli.separator,
        format: cli.format,
        shell: cli.shell,
        output: cli.output,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Clean(cmd) => cmd.execute(&global),
        cli::Command::Duplicates(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Add(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::Insert(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
