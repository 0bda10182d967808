//! Path canonicalization.
//!
//! This module turns an arbitrary path into its canonical absolute form:
//! - Full resolution through the filesystem when the whole path exists
//! - Partial resolution when only a prefix exists, with the missing suffix
//!   appended and collapsed syntactically
//! - Length checks on the whole path and on every component

use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::path::collapse::{collapse, SEPARATOR};
use crate::path::filesystem::{Filesystem, SystemFilesystem};
use crate::path::path_from_bytes;
use crate::path::types::{CanonicalPath, Limits, Resolution};

/// Canonicalizes paths against a [`Filesystem`].
///
/// The canonicalizer holds no per-call state, so one instance can serve any
/// number of calls, from any number of threads when its filesystem allows.
///
/// # Examples
///
/// ```no_run
/// use pathcanon::path::Canonicalizer;
///
/// let canonicalizer = Canonicalizer::new();
/// let canonical = canonicalizer.canonicalize(b"/tmp/./missing/../file").unwrap();
/// println!("{}", canonical.as_path().display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer<F = SystemFilesystem> {
    fs: F,
    limits: Limits,
}

impl Canonicalizer<SystemFilesystem> {
    /// Create a canonicalizer for the host filesystem with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Filesystem> Canonicalizer<F> {
    /// Create a canonicalizer backed by `fs` with default limits.
    #[must_use]
    pub fn with_filesystem(fs: F) -> Self {
        Self {
            fs,
            limits: Limits::default(),
        }
    }

    /// Replace the length limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The limits this canonicalizer enforces.
    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// The filesystem this canonicalizer resolves against.
    #[must_use]
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Convert `original` to canonical form.
    ///
    /// The whole path is resolved first. If that fails because some
    /// component is missing, the longest resolvable prefix is resolved and
    /// the rest is appended. If no prefix resolves, the collapsed input is
    /// returned as [`Resolution::Unresolved`]: non-existence of the target
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `NameTooLong` if the input, the result, or a component of the
    ///   result is too long
    /// - `InvalidArgument` for an empty input or one containing NUL
    /// - `InvalidArgument`, `SymlinkLoop`, `OutOfMemory` or `NameTooLong`
    ///   reported by the filesystem for the whole path
    /// - `Resolution` for any other failure while resolving a prefix
    pub fn canonicalize(&self, original: &[u8]) -> Result<CanonicalPath> {
        self.check_input(original)?;

        let (canonical, resolution, limit_dir) = match self.fs.resolve(original) {
            Ok(resolved) => {
                let canonical = collapse(&resolved);
                (canonical, Resolution::Full, resolved)
            }
            Err(kind) if kind.is_structural() => {
                debug!(
                    "Resolution of {} failed structurally: {kind}",
                    original.escape_ascii()
                );
                return Err(Error::from_resolve(original, kind));
            }
            Err(kind) => {
                debug!(
                    "Resolution of {} failed ({kind}); searching for a resolvable prefix",
                    original.escape_ascii()
                );
                self.resolve_longest_prefix(original)?
            }
        };

        self.check_result(canonical, resolution, &limit_dir)
    }

    /// Convert `original` to canonical form.
    ///
    /// This is [`canonicalize`](Self::canonicalize) for `Path` input.
    ///
    /// # Errors
    ///
    /// See [`canonicalize`](Self::canonicalize).
    pub fn canonicalize_path(&self, original: &Path) -> Result<CanonicalPath> {
        self.canonicalize(original.as_os_str().as_bytes())
    }

    fn check_input(&self, original: &[u8]) -> Result<()> {
        if original.is_empty() {
            return Err(Error::InvalidArgument {
                path: PathBuf::new(),
                reason: "path is empty".into(),
            });
        }
        if original.contains(&0) {
            return Err(Error::InvalidArgument {
                path: path_from_bytes(original),
                reason: "path contains a NUL byte".into(),
            });
        }
        if original.len() >= self.limits.path_max() {
            return Err(Error::NameTooLong {
                path: path_from_bytes(original),
                reason: format!(
                    "path is {} bytes, limit is {}",
                    original.len(),
                    self.limits.path_max() - 1
                ),
            });
        }
        Ok(())
    }

    /// Walk leftward over `original`, truncating at each separator after the
    /// first byte, until a prefix resolves.
    ///
    /// Returns the collapsed result, its resolution, and the directory whose
    /// component limit applies.
    fn resolve_longest_prefix(&self, original: &[u8]) -> Result<(Vec<u8>, Resolution, Vec<u8>)> {
        let mut end = original.len();

        while let Some(cut) = last_separator_before(original, end) {
            let prefix = &original[..cut];
            match self.fs.resolve(prefix) {
                Ok(resolved) => {
                    let suffix = &original[cut..];
                    trace!(
                        "Prefix {} resolved to {}",
                        prefix.escape_ascii(),
                        resolved.escape_ascii()
                    );
                    let combined = self.append_suffix(original, &resolved, suffix)?;
                    return Ok((
                        collapse(&combined),
                        Resolution::Partial {
                            prefix: resolved.clone(),
                        },
                        resolved,
                    ));
                }
                Err(kind) if kind.is_missing_component() => {
                    trace!("Prefix {} did not resolve: {kind}", prefix.escape_ascii());
                    end = cut;
                }
                Err(kind) => return Err(Error::from_resolve(prefix, kind)),
            }
        }

        debug!(
            "No prefix of {} resolved; using it unresolved",
            original.escape_ascii()
        );
        Ok((
            collapse(original),
            Resolution::Unresolved,
            vec![SEPARATOR],
        ))
    }

    fn append_suffix(&self, original: &[u8], resolved: &[u8], suffix: &[u8]) -> Result<Vec<u8>> {
        if resolved.len() + suffix.len() >= self.limits.path_max() {
            return Err(Error::NameTooLong {
                path: path_from_bytes(original),
                reason: format!(
                    "resolved prefix plus unresolved suffix is {} bytes, limit is {}",
                    resolved.len() + suffix.len(),
                    self.limits.path_max() - 1
                ),
            });
        }

        let suffix = match suffix.split_first() {
            Some((&SEPARATOR, rest)) if resolved.last() == Some(&SEPARATOR) => rest,
            _ => suffix,
        };

        let mut combined = Vec::with_capacity(resolved.len() + suffix.len());
        combined.extend_from_slice(resolved);
        combined.extend_from_slice(suffix);
        Ok(combined)
    }

    fn check_result(
        &self,
        canonical: Vec<u8>,
        resolution: Resolution,
        limit_dir: &[u8],
    ) -> Result<CanonicalPath> {
        if canonical.len() >= self.limits.path_max() {
            return Err(Error::NameTooLong {
                path: path_from_bytes(&canonical),
                reason: format!(
                    "canonical path is {} bytes, limit is {}",
                    canonical.len(),
                    self.limits.path_max() - 1
                ),
            });
        }

        let name_max = self
            .fs
            .max_component_length(limit_dir)
            .filter(|&n| n > 0)
            .unwrap_or_else(|| self.limits.name_max());
        trace!(
            "Component limit for {} is {name_max}",
            limit_dir.escape_ascii()
        );

        let too_long = canonical
            .split(|&b| b == SEPARATOR)
            .find(|component| component.len() > name_max);
        if let Some(component) = too_long {
            return Err(Error::NameTooLong {
                path: path_from_bytes(&canonical),
                reason: format!(
                    "component of {} bytes exceeds the limit of {name_max}",
                    component.len()
                ),
            });
        }

        Ok(CanonicalPath::new(canonical, resolution))
    }
}

/// Index of the last separator in `path[1..end]`.
///
/// The separator at index 0 is never a truncation point: the bare root is
/// not tried as a prefix.
fn last_separator_before(path: &[u8], end: usize) -> Option<usize> {
    if end <= 1 {
        return None;
    }
    path[1..end]
        .iter()
        .rposition(|&b| b == SEPARATOR)
        .map(|i| i + 1)
}

/// Canonicalize `path` against the host filesystem with default limits.
///
/// # Errors
///
/// See [`Canonicalizer::canonicalize`].
///
/// # Examples
///
/// ```no_run
/// use pathcanon::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp//nonexistent/./file")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    Canonicalizer::new()
        .canonicalize_path(path)
        .map(CanonicalPath::into_path_buf)
}
