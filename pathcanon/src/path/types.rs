//! Core types for canonicalization.
//!
//! This module defines the limits a canonicalization run enforces and the
//! canonical path it produces, including how much of the path the
//! filesystem was able to resolve.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

/// Default maximum path length in bytes, including the terminator.
pub const PATH_MAX: usize = 4096;

/// Default maximum length in bytes of a single path component.
pub const NAME_MAX: usize = 255;

/// Length limits enforced by a canonicalization run.
///
/// # Examples
///
/// ```
/// use pathcanon::path::{Limits, NAME_MAX, PATH_MAX};
///
/// let limits = Limits::default();
/// assert_eq!(limits.path_max(), PATH_MAX);
/// assert_eq!(limits.name_max(), NAME_MAX);
///
/// let custom = Limits::new(1024, 64).unwrap();
/// assert_eq!(custom.path_max(), 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Limits {
    path_max: usize,
    name_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            path_max: PATH_MAX,
            name_max: NAME_MAX,
        }
    }
}

impl Limits {
    /// Create limits.
    ///
    /// `path_max` counts the terminator, so a path may be at most
    /// `path_max - 1` bytes long. `name_max` is used whenever the filesystem
    /// cannot report its own component limit.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `path_max < 2`, `name_max == 0`, or
    /// `name_max >= path_max`.
    pub fn new(path_max: usize, name_max: usize) -> Result<Self> {
        if path_max < 2 {
            return Err(Error::Validation {
                field: "path_max".into(),
                message: format!("must be at least 2, got {path_max}"),
            });
        }
        if name_max == 0 {
            return Err(Error::Validation {
                field: "name_max".into(),
                message: "must be greater than 0".into(),
            });
        }
        if name_max >= path_max {
            return Err(Error::Validation {
                field: "name_max".into(),
                message: format!("must be less than path_max ({path_max}), got {name_max}"),
            });
        }
        Ok(Self { path_max, name_max })
    }

    /// Maximum path length in bytes, including the terminator.
    #[must_use]
    pub const fn path_max(&self) -> usize {
        self.path_max
    }

    /// Fallback maximum component length in bytes.
    #[must_use]
    pub const fn name_max(&self) -> usize {
        self.name_max
    }
}

/// How much of a path the filesystem resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The whole path resolved.
    Full,
    /// Only a prefix resolved; the rest was appended unresolved.
    Partial {
        /// The resolved form of the longest resolvable prefix.
        prefix: Vec<u8>,
    },
    /// No prefix resolved; the result is the collapsed input.
    Unresolved,
}

impl Resolution {
    /// Short machine-readable name (`full`, `partial`, `unresolved`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial { .. } => "partial",
            Self::Unresolved => "unresolved",
        }
    }

    /// The resolved prefix, if only part of the path resolved.
    #[must_use]
    pub fn prefix(&self) -> Option<&[u8]> {
        match self {
            Self::Partial { prefix } => Some(prefix),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of canonicalizing a path.
///
/// # Examples
///
/// ```
/// use pathcanon::path::{CanonicalPath, Resolution};
///
/// let canonical = CanonicalPath::new(b"/a/c".to_vec(), Resolution::Full);
/// assert_eq!(canonical.as_bytes(), b"/a/c");
/// assert!(canonical.is_fully_resolved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath {
    bytes: Vec<u8>,
    resolution: Resolution,
}

impl CanonicalPath {
    /// Create a canonical path.
    #[must_use]
    pub fn new(bytes: Vec<u8>, resolution: Resolution) -> Self {
        Self { bytes, resolution }
    }

    /// The canonical path as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The canonical path as a `Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(OsStr::from_bytes(&self.bytes))
    }

    /// How much of the path the filesystem resolved.
    #[must_use]
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Whether the whole path resolved on the filesystem.
    #[must_use]
    pub fn is_fully_resolved(&self) -> bool {
        self.resolution == Resolution::Full
    }

    /// Convert into the canonical bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Convert into a `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        super::path_from_bytes(&self.bytes)
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
