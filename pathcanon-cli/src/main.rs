//! Main entry point for the pathcanon CLI.
//!
//! This is the command-line interface for the pathcanon library:
//! - `canonicalize`: Canonical absolute form of each path
//! - `collapse`: Syntactic collapse only
//! - `limits`: Length limits in effect for a directory
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library log records through the CLI's verbosity
    pathcanon::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Canonicalize(cmd) => cmd.execute(&global),
        cli::Command::Collapse(cmd) => cmd.execute(&global),
        cli::Command::Limits(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
