//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHCANON_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Overall path length limit.
pub const PATH_MAX_ENV: &str = "PATHCANON_PATH_MAX";
/// Fallback component length limit.
pub const NAME_MAX_ENV: &str = "PATHCANON_NAME_MAX";
/// Output format (`text` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "PATHCANON_OUTPUT_FORMAT";
/// Whether to expand a leading `~`.
pub const EXPAND_TILDE_ENV: &str = "PATHCANON_EXPAND_TILDE";
/// Explicit configuration file path.
pub const CONFIG_ENV: &str = "PATHCANON_CONFIG";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathcanon::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric limit, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(PATH_MAX_ENV) {
            config.path_max = Some(Self::parse_size(PATH_MAX_ENV, &val)?);
        }

        if let Ok(val) = env::var(NAME_MAX_ENV) {
            config.name_max = Some(Self::parse_size(NAME_MAX_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            let format: OutputFormat = val.parse().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        if let Ok(val) = env::var(EXPAND_TILDE_ENV) {
            config.expand_tilde = Some(Self::parse_bool(EXPAND_TILDE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a non-negative byte count.
    fn parse_size(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 4] = [PATH_MAX_ENV, NAME_MAX_ENV, OUTPUT_FORMAT_ENV, EXPAND_TILDE_ENV];

    /// Runs `f` with exactly `vars` set among the override variables.
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let saved: Vec<_> = ALL_VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in ALL_VARS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = f();
        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        result
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for value in ["true", "TRUE", "1", "yes", "YES", "on", "ON"] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for value in ["false", "FALSE", "0", "no", "NO", "off", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        assert!(EnvironmentConfig::parse_bool("test", "maybe").is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(EnvironmentConfig::parse_size("test", "4096").unwrap(), 4096);
        assert_eq!(EnvironmentConfig::parse_size("test", " 64 ").unwrap(), 64);
        assert!(EnvironmentConfig::parse_size("test", "-1").is_err());
        assert!(EnvironmentConfig::parse_size("test", "big").is_err());
    }

    #[test]
    #[serial]
    fn test_no_overrides() {
        let config = with_env(&[], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            config
        });
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_all_overrides() {
        let config = with_env(
            &[
                (PATH_MAX_ENV, "2048"),
                (NAME_MAX_ENV, "100"),
                (OUTPUT_FORMAT_ENV, "json"),
                (EXPAND_TILDE_ENV, "no"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                config
            },
        );
        assert_eq!(config.path_max, Some(2048));
        assert_eq!(config.name_max, Some(100));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.expand_tilde, Some(false));
    }

    #[test]
    #[serial]
    fn test_override_replaces_file_value() {
        let config = with_env(&[(NAME_MAX_ENV, "12")], || {
            let mut config = Config {
                name_max: Some(200),
                path_max: Some(1000),
                ..Default::default()
            };
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            config
        });
        assert_eq!(config.name_max, Some(12));
        assert_eq!(config.path_max, Some(1000));
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        let result = with_env(&[(OUTPUT_FORMAT_ENV, "yaml")], || {
            EnvironmentConfig::apply_overrides(&mut Config::default())
        });
        assert!(matches!(
            result,
            Err(Error::Validation { field, .. }) if field == OUTPUT_FORMAT_ENV
        ));
    }
}
