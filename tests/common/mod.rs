//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch working directory for running the calculator binary
///
/// Commands run with the user's settings and environment overrides cleared,
/// so only files placed in the workspace are picked up.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Empty workspace
    pub fn new() -> Self {
        Workspace {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Workspace with a `calculator.yml` at its root
    pub fn with_settings(content: &str) -> Self {
        let workspace = Self::new();
        workspace.write("calculator.yml", content);
        workspace
    }

    /// Root directory, canonicalized so it matches what the binary reports
    pub fn root(&self) -> PathBuf {
        fs::canonicalize(self.dir.path()).unwrap()
    }

    /// Write a file relative to the root and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Create a directory below the root and return its path
    pub fn subdir(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Calculator command running in the root
    pub fn calculator(&self) -> Command {
        self.calculator_in(&self.root())
    }

    /// Calculator command running in `dir`
    pub fn calculator_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("calculator").unwrap();
        cmd.current_dir(dir)
            .env_remove("CALCULATOR_PRECISION")
            .env_remove("CALCULATOR_CONFIG")
            .env("XDG_CONFIG_HOME", self.root().join(".config"))
            .env("NO_COLOR", "1");
        cmd
    }
}
