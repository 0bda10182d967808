//! Error types for the pathcanon library.
//!
//! This module provides the error hierarchy for canonicalization and its
//! supporting layers (configuration, path preparation), using `thiserror`
//! for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::path::filesystem::ResolveError;
use crate::path::path_from_bytes;

/// Result type alias for operations that may fail with a pathcanon error.
///
/// # Examples
///
/// ```
/// use pathcanon::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4096)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathcanon library.
#[derive(Debug, Error)]
pub enum Error {
    /// The path, or one of its components, exceeds a length limit.
    #[error("name too long {}: {reason}", path.display())]
    NameTooLong {
        /// The offending path.
        path: PathBuf,
        /// Which limit was exceeded.
        reason: String,
    },

    /// The path cannot be canonicalized at all (empty, embedded NUL, or
    /// rejected by the resolution primitive).
    #[error("invalid argument {}: {reason}", path.display())]
    InvalidArgument {
        /// The offending path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// The resolution primitive reported a symlink loop.
    #[error("symlink loop detected: {}", path.display())]
    SymlinkLoop {
        /// The path being resolved when the loop was reported.
        path: PathBuf,
    },

    /// The resolution primitive ran out of memory.
    #[error("out of memory while resolving {}", path.display())]
    OutOfMemory {
        /// The path being resolved.
        path: PathBuf,
    },

    /// Any other failure reported by the resolution primitive.
    #[error("cannot resolve {}: {source}", path.display())]
    Resolution {
        /// The path being resolved.
        path: PathBuf,
        /// The underlying resolution failure.
        #[source]
        source: ResolveError,
    },

    /// A path could not be prepared for canonicalization.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build the library error for a failure reported by the resolution
    /// primitive while resolving `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::Error;
    /// use pathcanon::path::ResolveError;
    ///
    /// let err = Error::from_resolve(b"/a/b", ResolveError::SymlinkLoop);
    /// assert!(matches!(err, Error::SymlinkLoop { .. }));
    /// ```
    #[must_use]
    pub fn from_resolve(path: &[u8], kind: ResolveError) -> Self {
        let path = path_from_bytes(path);
        match kind {
            ResolveError::NameTooLong => Self::NameTooLong {
                path,
                reason: kind.to_string(),
            },
            ResolveError::InvalidArgument => Self::InvalidArgument {
                path,
                reason: kind.to_string(),
            },
            ResolveError::SymlinkLoop => Self::SymlinkLoop { path },
            ResolveError::OutOfMemory => Self::OutOfMemory { path },
            source => Self::Resolution { path, source },
        }
    }

    /// Check if error is a length violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NameTooLong {
    ///     path: PathBuf::from("/x"),
    ///     reason: "too long".to_string(),
    /// };
    /// assert!(err.is_name_too_long());
    /// ```
    #[must_use]
    pub fn is_name_too_long(&self) -> bool {
        matches!(self, Self::NameTooLong { .. })
    }

    /// Check if error is a structural canonicalization failure, i.e. one
    /// that makes the whole path unusable.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::SymlinkLoop { .. } | Self::OutOfMemory { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_too_long_error() {
        let err = Error::NameTooLong {
            path: PathBuf::from("/very/long"),
            reason: "component exceeds 255 bytes".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("name too long"));
        assert!(display.contains("/very/long"));
        assert!(display.contains("255"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::InvalidArgument {
            path: PathBuf::from(""),
            reason: "path is empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid argument"));
        assert!(display.contains("path is empty"));
    }

    #[test]
    fn test_from_resolve_structural_kinds() {
        assert!(matches!(
            Error::from_resolve(b"/a", ResolveError::NameTooLong),
            Error::NameTooLong { .. }
        ));
        assert!(matches!(
            Error::from_resolve(b"/a", ResolveError::InvalidArgument),
            Error::InvalidArgument { .. }
        ));
        assert!(matches!(
            Error::from_resolve(b"/a", ResolveError::SymlinkLoop),
            Error::SymlinkLoop { .. }
        ));
        assert!(matches!(
            Error::from_resolve(b"/a", ResolveError::OutOfMemory),
            Error::OutOfMemory { .. }
        ));
    }

    #[test]
    fn test_from_resolve_passthrough() {
        let err = Error::from_resolve(b"/mnt/disk", ResolveError::Other(5));
        match err {
            Error::Resolution { path, source } => {
                assert_eq!(path, PathBuf::from("/mnt/disk"));
                assert_eq!(source, ResolveError::Other(5));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolution_error_has_source() {
        use std::error::Error as _;

        let err = Error::from_resolve(b"/x", ResolveError::NotFound);
        assert!(err.source().is_some());
        assert!(!err.is_structural());
    }

    #[test]
    fn test_is_structural() {
        assert!(Error::SymlinkLoop {
            path: PathBuf::from("/loop")
        }
        .is_structural());
        assert!(!Error::NameTooLong {
            path: PathBuf::from("/x"),
            reason: String::new(),
        }
        .is_structural());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "path_max".to_string(),
            message: "must be at least 2".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("path_max"));
        assert!(display.contains("must be at least 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().contains("serialization error"));
        assert!(!err.is_structural());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<usize> {
            Err(Error::Validation {
                field: "name_max".to_string(),
                message: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
