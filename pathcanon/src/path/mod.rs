//! Path canonicalization for POSIX-like filesystems.
//!
//! # Key Concepts
//!
//! ## Collapsing
//!
//! [`collapse`](collapse::collapse) is purely syntactic: it removes duplicate
//! and trailing separators, drops `.` names and cancels each `..` against
//! the name before it. A `..` with nothing left to cancel is kept, so
//! `/../a` stays as it is.
//!
//! ## Canonicalization
//!
//! A [`Canonicalizer`] asks its [`Filesystem`] to resolve the whole path.
//! When that fails because something is missing, it resolves the longest
//! prefix that does exist and appends the rest:
//!
//! - `/existing/missing/also-missing` becomes
//!   `resolve("/existing") + "/missing/also-missing"`, collapsed
//! - a path with no resolvable prefix is returned collapsed, marked
//!   [`Resolution::Unresolved`]
//!
//! Every result is checked against the overall length limit and the
//! filesystem's per-component limit.
//!
//! # Examples
//!
//! ```
//! use pathcanon::path::collapse::collapse;
//!
//! assert_eq!(collapse(b"/a/./b/../c"), b"/a/c");
//! ```
//!
//! ```no_run
//! use pathcanon::path::{Canonicalizer, Resolution};
//!
//! let canonicalizer = Canonicalizer::new();
//! let canonical = canonicalizer.canonicalize(b"/tmp/not-yet-created/../x").unwrap();
//! if *canonical.resolution() == Resolution::Unresolved {
//!     println!("nothing in {} exists", canonical.as_path().display());
//! }
//! ```

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

pub mod canonicalize;
pub mod collapse;
pub mod filesystem;
pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use canonicalize::Canonicalizer;
pub use filesystem::{Filesystem, ResolveError, SystemFilesystem};
pub use types::{CanonicalPath, Limits, Resolution, NAME_MAX, PATH_MAX};

/// Build a `PathBuf` from raw path bytes.
pub(crate) fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(OsStr::from_bytes(bytes))
}
