//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// The layout used across the test suite:
    ///
    /// ```text
    /// .gitignore  (*.log, build/)
    /// .hidden_dir/
    /// .hidden_file
    /// build/app.js
    /// dir1/file2.go
    /// dir2/config.md
    /// dir2/subdir/
    /// file1.txt
    /// log.log
    /// ```
    pub fn sample() -> Self {
        let dir = Self::new();
        dir.add_dir("dir1");
        dir.add_dir("dir2/subdir");
        dir.add_dir(".hidden_dir");
        dir.add_file("file1.txt", "test content");
        dir.add_file("dir1/file2.go", "go code");
        dir.add_file(".hidden_file", "hidden");
        dir.add_file("dir2/config.md", "# Config");
        dir.add_file(".gitignore", "*.log\nbuild/\n");
        dir.add_file("log.log", "log");
        dir.add_file("build/app.js", "js");
        dir
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
