//! Command to canonicalize paths.

use crate::error::CliError;
use crate::utils::{load_configuration, paths_or_cwd, prepare_path, print_bytes, GlobalOptions};
use clap::Args;
use log::debug;
use pathcanon::{CanonicalReport, Canonicalizer, OutputFormat};
use std::path::PathBuf;

/// Print the canonical absolute form of each path.
///
/// Paths need not exist: the longest existing prefix is resolved and the
/// rest is appended.
#[derive(Args)]
pub struct CanonicalizeCommand {
    /// Paths to canonicalize (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Fail unless every path exists in full
    #[arg(long)]
    pub require_existing: bool,
}

impl CanonicalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let canonicalizer = Canonicalizer::new().with_limits(config.limits()?);
        let format = self.format.unwrap_or_else(|| config.output_format());

        let mut results = Vec::new();
        let mut missing = Vec::new();
        for path in paths_or_cwd(self.paths)? {
            let prepared = prepare_path(&path, &config)?;
            debug!("Canonicalizing {}", prepared.display());

            let canonical = canonicalizer.canonicalize_path(&prepared)?;
            if !canonical.is_fully_resolved() {
                missing.push(path.display().to_string());
            }
            results.push((path, canonical));
        }

        match format {
            // Text output is the canonical bytes verbatim.
            OutputFormat::Text => {
                for (_, canonical) in &results {
                    print_bytes(canonical.as_bytes())?;
                }
            }
            OutputFormat::Json => {
                let reports: Vec<CanonicalReport> = results
                    .iter()
                    .map(|(path, canonical)| CanonicalReport::new(path, canonical))
                    .collect();
                let output = format.create_formatter().format(&reports)?;
                println!("{output}");
            }
        }

        if self.require_existing && !missing.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "Path does not exist: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}
