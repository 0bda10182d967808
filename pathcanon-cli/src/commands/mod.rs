//! CLI command implementations.
//!
//! - `canonicalize`: Canonical absolute form of each path
//! - `collapse`: Syntactic collapse only, no filesystem access
//! - `limits`: Length limits in effect for a directory
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod canonicalize;
pub mod collapse;
pub mod completions;
pub mod limits;
pub mod validate;

pub use canonicalize::CanonicalizeCommand;
pub use collapse::CollapseCommand;
pub use completions::CompletionsCommand;
pub use limits::LimitsCommand;
pub use validate::ValidateCommand;
