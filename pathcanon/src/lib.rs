#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathcanon
//!
//! A library for converting filesystem paths to canonical absolute form,
//! including paths whose tail does not exist yet.
//!
//! When the whole path exists it is resolved through the filesystem. When
//! only a prefix exists, that prefix is resolved and the missing remainder
//! is appended and collapsed syntactically. Every result is checked against
//! the overall path length limit and the per-component limit.
//!
//! ## Core Types
//!
//! - [`Canonicalizer`]: canonicalization against a [`Filesystem`]
//! - [`CanonicalPath`] and [`Resolution`]: results and how much resolved
//! - [`Limits`]: length limits enforced on every result
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//!
//! ## Examples
//!
//! ```
//! use pathcanon::path::collapse::collapse;
//!
//! assert_eq!(collapse(b"//usr/./lib/../bin/"), b"/usr/bin");
//! ```
//!
//! ```no_run
//! use std::path::Path;
//!
//! let canonical = pathcanon::canonicalize(Path::new("/tmp/new-dir/../file")).unwrap();
//! println!("{}", canonical.display());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{CanonicalReport, OutputFormatter};
pub use path::canonicalize::canonicalize;
pub use path::{
    CanonicalPath, Canonicalizer, Filesystem, Limits, Resolution, ResolveError, SystemFilesystem,
};
