//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CanonicalizeCommand, CollapseCommand, CompletionsCommand, LimitsCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for canonicalizing paths that may not exist yet.
#[derive(Parser)]
#[command(name = "pathcanon")]
#[command(version, about = "Canonicalize paths, including ones that do not exist yet", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from FILE instead of ~/.pathcanon/config.yaml
    #[arg(long, value_name = "FILE", global = true, env = "PATHCANON_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical absolute form of each path
    Canonicalize(CanonicalizeCommand),

    /// Collapse paths syntactically without touching the filesystem
    Collapse(CollapseCommand),

    /// Show the length limits in effect for a directory
    Limits(LimitsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
