//! Command to collapse paths without touching the filesystem.

use crate::error::CliError;
use crate::utils::{print_bytes, GlobalOptions};
use clap::Args;
use pathcanon::path::collapse::collapse;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

/// Remove duplicate separators, `.` and cancellable `..` from each path.
///
/// Purely syntactic: symlinks are not followed and nothing needs to exist.
#[derive(Args)]
pub struct CollapseCommand {
    /// Paths to collapse
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

impl CollapseCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for path in &self.paths {
            print_bytes(&collapse(path.as_os_str().as_bytes()))?;
        }
        Ok(())
    }
}
