//! Common test utilities for fib integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project tree for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Canonical project root, as the bundler reports it
    #[allow(dead_code)]
    pub fn canonical(&self) -> PathBuf {
        std::fs::canonicalize(&self.path).expect("Failed to canonicalize project root")
    }

    /// Absolute path of a file inside the project
    #[allow(dead_code)]
    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.path.join(path)
    }
}

/// Path to the fib binary
#[allow(dead_code)]
pub fn fib_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fib"))
}
