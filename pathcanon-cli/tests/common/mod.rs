//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Directory tree fixtures with real symlinks

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const PATHCANON_VARS: [&str; 6] = [
    "PATHCANON_CONFIG",
    "PATHCANON_PATH_MAX",
    "PATHCANON_NAME_MAX",
    "PATHCANON_OUTPUT_FORMAT",
    "PATHCANON_EXPAND_TILDE",
    "PATHCANON_LOG_MODE",
];

/// Test environment with an isolated home directory.
///
/// `HOME` points into the temporary directory, so no user configuration is
/// picked up unless a test writes one.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub temp_path: PathBuf,
    /// Home directory used by the CLI
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize");
        let home = temp_path.join("home");
        fs::create_dir(&home).expect("Failed to create home");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// A command for the pathcanon binary with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathcanon").expect("Failed to find pathcanon binary");
        cmd.env("HOME", &self.home).current_dir(&self.temp_path);
        for var in PATHCANON_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Absolute path of `relative` inside the environment.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.temp_path.join(relative)
    }

    /// Create a subdirectory and return its path.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a symlink at `name` pointing at `target` verbatim.
    pub fn create_link(&self, name: &str, target: &str) -> PathBuf {
        let path = self.join(name);
        symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Write a file and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Write the user configuration file (`~/.pathcanon/config.yaml`).
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let path = self.home.join(".pathcanon").join("config.yaml");
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }
}
