//! Output formatter implementations.

use crate::{Error, Result};

use super::{CanonicalReport, OutputFormatter};

/// Formatter printing one canonical path per line.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[CanonicalReport]) -> Result<String> {
        let lines: Vec<&str> = reports.iter().map(|r| r.canonical.as_str()).collect();
        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[CanonicalReport]) -> Result<String> {
        serde_json::to_string_pretty(reports).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn create_test_reports() -> Vec<CanonicalReport> {
        vec![
            CanonicalReport {
                input: "/tmp/./a".to_string(),
                canonical: "/private/tmp/a".to_string(),
                resolution: "full".to_string(),
                resolved_prefix: None,
            },
            CanonicalReport {
                input: "/link/missing".to_string(),
                canonical: "/real/missing".to_string(),
                resolution: "partial".to_string(),
                resolved_prefix: Some("/real".to_string()),
            },
        ]
    }

    #[test]
    fn test_text_formatter() {
        let output = TextFormatter.format(&create_test_reports()).unwrap();
        assert_eq!(output, "/private/tmp/a\n/real/missing");
    }

    #[test]
    fn test_text_formatter_empty() {
        assert_eq!(TextFormatter.format(&[]).unwrap(), "");
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&create_test_reports()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["canonical"], "/private/tmp/a");
        assert_eq!(array[0]["resolution"], "full");
        assert!(array[0].get("resolved_prefix").is_none());
        assert_eq!(array[1]["resolved_prefix"], "/real");
    }

    #[test]
    fn test_json_formatter_empty() {
        assert_eq!(JsonFormatter.format(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_create_formatter() {
        let reports = create_test_reports();
        let text = OutputFormat::Text.create_formatter().format(&reports).unwrap();
        let json = OutputFormat::Json.create_formatter().format(&reports).unwrap();
        assert!(!text.starts_with('['));
        assert!(json.starts_with('['));
    }
}
