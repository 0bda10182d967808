//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, path preparation and raw output.

use crate::error::CliError;
use pathcanon::path::normalize;
use pathcanon::{Config, ConfigBuilder};
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The `--config` file, or else `~/.pathcanon/config.yaml`
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The paths to operate on, defaulting to the current directory.
pub fn paths_or_cwd(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>, CliError> {
    if paths.is_empty() {
        Ok(vec![env::current_dir()?])
    } else {
        Ok(paths)
    }
}

/// Prepare a user-supplied path for canonicalization.
pub fn prepare_path(path: &Path, config: &Config) -> Result<PathBuf, CliError> {
    normalize::prepare(path, config.expand_tilde()).map_err(CliError::from)
}

/// Write raw path bytes followed by a newline to stdout.
pub fn print_bytes(bytes: &[u8]) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
