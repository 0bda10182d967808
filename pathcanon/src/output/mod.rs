//! Output formatting for canonicalization results.
//!
//! This module renders [`CanonicalReport`]s as plain text (one canonical
//! path per line) or as a JSON array.

mod formatters;

use std::path::Path;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::path::CanonicalPath;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter};

/// Trait for formatting canonicalization results.
pub trait OutputFormatter {
    /// Format the given reports into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, reports: &[CanonicalReport]) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

/// What happened to one input path.
///
/// Paths are rendered lossily as UTF-8. Callers that need the exact bytes
/// should write [`CanonicalPath::as_bytes`] directly.
///
/// # Examples
///
/// ```
/// use pathcanon::output::CanonicalReport;
/// use pathcanon::path::{CanonicalPath, Resolution};
/// use std::path::Path;
///
/// let canonical = CanonicalPath::new(
///     b"/real/new".to_vec(),
///     Resolution::Partial { prefix: b"/real".to_vec() },
/// );
/// let report = CanonicalReport::new(Path::new("/link/new"), &canonical);
/// assert_eq!(report.canonical, "/real/new");
/// assert_eq!(report.resolution, "partial");
/// assert_eq!(report.resolved_prefix.as_deref(), Some("/real"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalReport {
    /// The path as given.
    pub input: String,
    /// The canonical form.
    pub canonical: String,
    /// `full`, `partial` or `unresolved`.
    pub resolution: String,
    /// The resolved prefix for a partial resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_prefix: Option<String>,
}

impl CanonicalReport {
    /// Build a report for `input` and its canonical form.
    #[must_use]
    pub fn new(input: &Path, canonical: &CanonicalPath) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            canonical: String::from_utf8_lossy(canonical.as_bytes()).into_owned(),
            resolution: canonical.resolution().as_str().to_string(),
            resolved_prefix: canonical
                .resolution()
                .prefix()
                .map(|prefix| String::from_utf8_lossy(prefix).into_owned()),
        }
    }
}
