//! Test harness for treex integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use treex::test_utils::TestDir;

pub fn run_treex(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_treex");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run treex");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_sample_layout() {
        let dir = TestDir::sample();
        assert!(dir.path().join("dir1/file2.go").exists());
        assert!(dir.path().join("dir2/subdir").is_dir());
        assert!(dir.path().join(".gitignore").exists());
    }
}
