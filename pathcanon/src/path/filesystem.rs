//! The filesystem seam used by canonicalization.
//!
//! Canonicalization never resolves symlinks itself. It asks a [`Filesystem`]
//! to resolve a path and to report the maximum component length of a
//! directory. [`SystemFilesystem`] answers both questions with the host
//! operating system; tests substitute in-memory or mocked implementations.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::Path;

use rustix::io::Errno;
use thiserror::Error;

/// Failure reported by [`Filesystem::resolve`].
///
/// The first four kinds mean "some component is missing or unusable" and
/// are recoverable by resolving a shorter prefix. The next four are
/// structural: the whole path is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ResolveError {
    /// A component does not exist (`ENOENT`).
    #[error("no such file or directory")]
    NotFound,

    /// A non-final component is not a directory (`ENOTDIR`).
    #[error("not a directory")]
    WrongType,

    /// Search permission was denied on a component (`EACCES`).
    #[error("permission denied")]
    NoAccess,

    /// The backing filesystem is gone, e.g. a FUSE mount whose daemon
    /// exited (`ENOTCONN`).
    #[error("transport endpoint is not connected")]
    NotConnected,

    /// The path was rejected outright (`EINVAL`).
    #[error("invalid argument")]
    InvalidArgument,

    /// Too many symlinks were encountered (`ELOOP`).
    #[error("too many levels of symbolic links")]
    SymlinkLoop,

    /// The kernel or allocator ran out of memory (`ENOMEM`).
    #[error("out of memory")]
    OutOfMemory,

    /// The path or a component is too long (`ENAMETOOLONG`).
    #[error("file name too long")]
    NameTooLong,

    /// Any other OS error, carried as its raw errno.
    #[error("os error {0}")]
    Other(i32),
}

impl ResolveError {
    /// Whether this failure only means that part of the path is missing,
    /// so a shorter prefix may still resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::path::ResolveError;
    ///
    /// assert!(ResolveError::NotFound.is_missing_component());
    /// assert!(!ResolveError::SymlinkLoop.is_missing_component());
    /// ```
    #[must_use]
    pub const fn is_missing_component(self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::WrongType | Self::NoAccess | Self::NotConnected
        )
    }

    /// Whether this failure makes the whole path unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::path::ResolveError;
    ///
    /// assert!(ResolveError::NameTooLong.is_structural());
    /// assert!(!ResolveError::Other(5).is_structural());
    /// ```
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            Self::InvalidArgument | Self::SymlinkLoop | Self::OutOfMemory | Self::NameTooLong
        )
    }

    /// Classify an I/O error returned by the operating system.
    ///
    /// Errors without an errno (synthesized by the standard library) are
    /// classified by their [`io::ErrorKind`].
    #[must_use]
    pub fn from_io_error(err: &io::Error) -> Self {
        match Errno::from_io_error(err) {
            Some(Errno::NOENT) => Self::NotFound,
            Some(Errno::NOTDIR) => Self::WrongType,
            Some(Errno::ACCESS) => Self::NoAccess,
            Some(Errno::NOTCONN) => Self::NotConnected,
            Some(Errno::INVAL) => Self::InvalidArgument,
            Some(Errno::LOOP) => Self::SymlinkLoop,
            Some(Errno::NOMEM) => Self::OutOfMemory,
            Some(Errno::NAMETOOLONG) => Self::NameTooLong,
            Some(errno) => Self::Other(errno.raw_os_error()),
            None => match err.kind() {
                io::ErrorKind::NotFound => Self::NotFound,
                io::ErrorKind::PermissionDenied => Self::NoAccess,
                io::ErrorKind::InvalidInput => Self::InvalidArgument,
                io::ErrorKind::OutOfMemory => Self::OutOfMemory,
                _ => Self::Other(0),
            },
        }
    }
}

/// The two filesystem queries canonicalization depends on.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Resolve `path` to its symlink-free absolute form.
    ///
    /// # Errors
    ///
    /// Returns the reason resolution failed.
    fn resolve(&self, path: &[u8]) -> Result<Vec<u8>, ResolveError>;

    /// Maximum byte length of a single component inside `directory`.
    ///
    /// `None` or `Some(0)` means the limit is unknown.
    fn max_component_length(&self, directory: &[u8]) -> Option<usize>;
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn resolve(&self, path: &[u8]) -> Result<Vec<u8>, ResolveError> {
        (**self).resolve(path)
    }

    fn max_component_length(&self, directory: &[u8]) -> Option<usize> {
        (**self).max_component_length(directory)
    }
}

/// [`Filesystem`] backed by the host operating system.
///
/// Resolution uses `realpath(3)` through [`std::fs::canonicalize`]; the
/// component limit comes from `statvfs(3)`'s `f_namemax`.
///
/// # Examples
///
/// ```no_run
/// use pathcanon::path::{Filesystem, SystemFilesystem};
///
/// let fs = SystemFilesystem;
/// let root = fs.resolve(b"/").unwrap();
/// assert_eq!(root, b"/");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFilesystem;

impl Filesystem for SystemFilesystem {
    fn resolve(&self, path: &[u8]) -> Result<Vec<u8>, ResolveError> {
        let path = Path::new(OsStr::from_bytes(path));
        fs::canonicalize(path)
            .map(|resolved| resolved.into_os_string().into_vec())
            .map_err(|e| ResolveError::from_io_error(&e))
    }

    fn max_component_length(&self, directory: &[u8]) -> Option<usize> {
        let directory = Path::new(OsStr::from_bytes(directory));
        let stat = rustix::fs::statvfs(directory).ok()?;
        usize::try_from(stat.f_namemax).ok().filter(|&n| n > 0)
    }
}
