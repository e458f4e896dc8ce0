//! Shared testing utilities for cwab CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `cwab` binary within the
    /// working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cwab").expect("Failed to locate cwab binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a batch configuration file into the working directory and
    /// return its path.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write batch config");
        path
    }

    /// Read a generated submission file from the working directory.
    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read generated submission")
    }

    /// Assert that a file exists in the working directory.
    pub fn assert_output_exists(&self, name: &str) {
        assert!(self.work_dir.join(name).exists(), "{} should exist", name);
    }

    /// Count the lines of `output` matching `predicate`.
    pub fn count_lines(output: &str, predicate: impl Fn(&str) -> bool) -> usize {
        output.lines().filter(|line| predicate(line)).count()
    }
}
