//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathcanon: the length
//! limits a canonicalization run enforces and how the CLI presents results.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::Limits;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be merged; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use pathcanon::config::{Config, OutputFormat};
///
/// let config = Config {
///     path_max: Some(1024),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.limits().unwrap().path_max(), 1024);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overall path length limit in bytes, including the terminator.
    pub path_max: Option<usize>,

    /// Component length limit used when the filesystem cannot report one.
    pub name_max: Option<usize>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,

    /// Expand a leading `~` before canonicalizing.
    pub expand_tilde: Option<bool>,
}

impl Config {
    /// The limits described by this configuration, with defaults filled in.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured limits are inconsistent.
    pub fn limits(&self) -> Result<Limits> {
        let defaults = Limits::default();
        Limits::new(
            self.path_max.unwrap_or(defaults.path_max()),
            self.name_max.unwrap_or(defaults.name_max()),
        )
    }

    /// The configured output format, or [`OutputFormat::Text`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether tilde expansion is enabled (default: true).
    #[must_use]
    pub fn expand_tilde(&self) -> bool {
        self.expand_tilde.unwrap_or(true)
    }
}

/// Output format for CLI results.
///
/// # Examples
///
/// ```
/// use pathcanon::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One canonical path per line.
    #[default]
    Text,
    /// A JSON array of reports.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected text or json)")),
        }
    }
}
