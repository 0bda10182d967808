//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for directory trees containing
//! real symlinks.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree for canonicalization tests.
///
/// `root()` is already canonical, so expected results can be built by
/// joining onto it.
pub struct Tree {
    _temp: TempDir,
    root: PathBuf,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(temp.path()).unwrap();
        Self { _temp: temp, root }
    }

    /// The canonical root of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Creates a directory (and its parents).
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path(relative)).unwrap();
        self
    }

    /// Creates a regular file.
    pub fn file(self, relative: &str) -> Self {
        fs::write(self.path(relative), b"").unwrap();
        self
    }

    /// Creates a symlink at `relative` pointing at `target` verbatim.
    pub fn link(self, relative: &str, target: &str) -> Self {
        symlink(target, self.path(relative)).unwrap();
        self
    }
}
