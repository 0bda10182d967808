//! Configuration system for pathcanon.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`~/.pathcanon/config.yaml` or an explicit path)
//! - Environment variable overrides (`PATHCANON_*`)
//! - Programmatic configuration via builder pattern
//! - Validation of the configured limits
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHCANON_*`)
//! 3. The explicit configuration file, or else the user file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathcanon::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let limits = config.limits().unwrap();
//! println!("path_max={} name_max={}", limits.path_max(), limits.name_max());
//! ```
//!
//! A configuration file looks like this:
//!
//! ```yaml
//! path_max: 4096
//! name_max: 255
//! output_format: text
//! expand_tilde: true
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
