//! Configuration validation.
//!
//! Checks that configured limits are usable before any path is processed.

use crate::config::schema::Config;
use crate::error::Result;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathcanon::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let broken = Config { name_max: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Unset limits are checked against their defaults, so `name_max: 5000`
    /// alone is rejected because it is not below the default `path_max`.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        config.limits().map(drop)
    }
}
