//! Command to show the length limits in effect for a directory.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathcanon::{Filesystem, OutputFormat, SystemFilesystem};
use serde::Serialize;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

/// Show the overall and per-component length limits for a directory.
#[derive(Args)]
pub struct LimitsCommand {
    /// Directory to query
    #[arg(value_name = "PATH", default_value = "/")]
    pub path: PathBuf,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Effective limits for one directory.
#[derive(Debug, Serialize)]
struct LimitsReport {
    path: String,
    path_max: usize,
    name_max: usize,
    name_max_source: &'static str,
}

impl LimitsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let limits = config.limits()?;

        let reported = SystemFilesystem
            .max_component_length(self.path.as_os_str().as_bytes())
            .filter(|&n| n > 0);
        let report = LimitsReport {
            path: self.path.display().to_string(),
            path_max: limits.path_max(),
            name_max: reported.unwrap_or(limits.name_max()),
            name_max_source: if reported.is_some() {
                "filesystem"
            } else {
                "configured"
            },
        };

        match self.format.unwrap_or_else(|| config.output_format()) {
            OutputFormat::Text => {
                println!("path: {}", report.path);
                println!("path_max: {}", report.path_max);
                println!("name_max: {} ({})", report.name_max, report.name_max_source);
            }
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&report).map_err(pathcanon::Error::from)?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
