//! Path preparation before canonicalization.
//!
//! Canonicalization expects absolute input. This module turns user input
//! into that form:
//! - Expanding a leading tilde (~) to the home directory
//! - Joining relative paths onto a working directory
//!
//! Neither step touches `.`, `..` or duplicate separators; that is left to
//! the canonicalizer, which knows which parts exist on disk.

use std::env;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::collapse::SEPARATOR;

/// Expand a leading tilde (~) to the home directory.
///
/// Handles `~` and `~/path`; `~user` is rejected.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pathcanon::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let bytes = path.as_os_str().as_bytes();
    if bytes.first() != Some(&b'~') {
        return Ok(path.to_path_buf());
    }

    let rest = &bytes[1..];
    if !rest.is_empty() && rest[0] != SEPARATOR {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        });
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    // Textual join keeps any duplicate separators for the canonicalizer.
    let mut expanded = home.into_os_string().into_vec();
    expanded.extend_from_slice(rest);
    Ok(PathBuf::from(OsString::from_vec(expanded)))
}

/// Join a relative `path` onto `cwd`; absolute paths are returned as is.
///
/// The join is purely textual: `.` and `..` are left in place.
///
/// # Examples
///
/// ```
/// use pathcanon::path::normalize::make_absolute;
/// use std::path::Path;
///
/// let joined = make_absolute(Path::new("src/../lib"), Path::new("/work"));
/// assert_eq!(joined, Path::new("/work/src/../lib"));
///
/// let unchanged = make_absolute(Path::new("/etc"), Path::new("/work"));
/// assert_eq!(unchanged, Path::new("/etc"));
/// ```
#[must_use]
pub fn make_absolute(path: &Path, cwd: &Path) -> PathBuf {
    let bytes = path.as_os_str().as_bytes();
    if bytes.first() == Some(&SEPARATOR) {
        return path.to_path_buf();
    }

    let mut joined = cwd.as_os_str().as_bytes().to_vec();
    if joined.last() != Some(&SEPARATOR) {
        joined.push(SEPARATOR);
    }
    joined.extend_from_slice(bytes);
    PathBuf::from(OsStr::from_bytes(&joined))
}

/// Prepare user input for canonicalization.
///
/// 1. Expands a leading tilde if `expand_home` is set
/// 2. Joins relative paths onto the current directory
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory
/// cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use pathcanon::path::normalize::prepare;
/// use std::path::Path;
///
/// let prepared = prepare(Path::new("./src"), true).unwrap();
/// assert!(prepared.is_absolute());
/// ```
pub fn prepare(path: &Path, expand_home: bool) -> Result<PathBuf> {
    let expanded = if expand_home {
        expand_tilde(path)?
    } else {
        path.to_path_buf()
    };

    if expanded.as_os_str().as_bytes().first() == Some(&SEPARATOR) {
        return Ok(expanded);
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("cannot get current directory: {e}"),
    })?;
    Ok(make_absolute(&expanded, &cwd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let home = home::home_dir().unwrap();
        let expanded = expand_tilde(Path::new("~/test")).unwrap();
        assert_eq!(expanded, home.join("test"));
    }

    #[test]
    fn test_expand_tilde_keeps_dots() {
        let home = home::home_dir().unwrap();
        let expanded = expand_tilde(Path::new("~/a/../b")).unwrap();
        let mut expected = home.into_os_string().into_vec();
        expected.extend_from_slice(b"/a/../b");
        assert_eq!(expanded.as_os_str().as_bytes(), &expected[..]);
    }

    #[test]
    fn test_expand_tilde_absolute_unchanged() {
        let path = Path::new("/absolute/path");
        assert_eq!(expand_tilde(path).unwrap(), path);
    }

    #[test]
    fn test_expand_tilde_user_syntax_not_supported() {
        let result = expand_tilde(Path::new("~user/path"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_make_absolute_relative() {
        assert_eq!(
            make_absolute(Path::new("a/./b"), Path::new("/cwd")),
            PathBuf::from("/cwd/a/./b")
        );
    }

    #[test]
    fn test_make_absolute_root_cwd() {
        assert_eq!(
            make_absolute(Path::new("x"), Path::new("/")),
            PathBuf::from("/x")
        );
    }

    #[test]
    fn test_make_absolute_keeps_duplicate_separators() {
        let joined = make_absolute(Path::new("a//b"), Path::new("/cwd"));
        assert_eq!(joined.as_os_str().as_bytes(), b"/cwd/a//b");
    }

    #[test]
    fn test_prepare_relative() {
        let cwd = env::current_dir().unwrap();
        let prepared = prepare(Path::new("relative/path"), true).unwrap();
        assert!(prepared.is_absolute());
        assert!(prepared.starts_with(&cwd));
        assert!(prepared.ends_with("relative/path"));
    }

    #[test]
    fn test_prepare_tilde_disabled() {
        let cwd = env::current_dir().unwrap();
        let prepared = prepare(Path::new("~/x"), false).unwrap();
        assert_eq!(prepared, cwd.join("~/x"));
    }

    #[test]
    fn test_prepare_absolute_unchanged() {
        let prepared = prepare(Path::new("//a/./b"), true).unwrap();
        assert_eq!(prepared.as_os_str().as_bytes(), b"//a/./b");
    }
}
