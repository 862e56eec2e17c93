//! Shared harness for prodex CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory plus helpers for invoking the compiled binary.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    pub fn dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a data file into the test directory and return its path.
    pub fn write_data(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, lines.join("\n") + "\n").expect("Failed to write data file");
        path
    }

    /// The three-record catalog most scenarios start from.
    pub fn sample_data(&self) -> PathBuf {
        self.write_data(
            "products.txt",
            &["1, Pen, 1.5, Office", "3, Mug, 5.0, Kitchen", "2, Lamp, 12.0, Home"],
        )
    }

    /// Write a `prodex.toml` into the test directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root.path().join("prodex.toml"), content)
            .expect("Failed to write prodex.toml");
    }

    /// Build a command invoking the compiled `prodex` binary from the test
    /// directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prodex").expect("Failed to locate prodex binary");
        cmd.current_dir(self.root.path());
        cmd
    }
}
