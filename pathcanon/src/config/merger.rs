//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathcanon::config::{Config, ConfigMerger};
///
/// let low = Config { path_max: Some(1024), ..Default::default() };
/// let high = Config { path_max: Some(2048), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.path_max, Some(2048));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced independently when the source sets it.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.path_max.is_some() {
            target.path_max = source.path_max;
        }

        if source.name_max.is_some() {
            target.name_max = source.name_max;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.expand_tilde.is_some() {
            target.expand_tilde = source.expand_tilde;
        }
    }
}
