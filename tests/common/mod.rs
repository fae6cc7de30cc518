//! Common test utilities for sparsevn integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding local checkout map files
#[allow(dead_code)]
pub struct MapDir {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the directory root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl MapDir {
    /// Create a new scratch directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a checkout map file into the directory
    pub fn write_map(&self, name: &str, content: &str) {
        std::fs::write(self.path.join(name), content).expect("Failed to write map file");
    }
}

/// Command for the sparsevn binary
#[allow(dead_code)]
pub fn sparsevn_cmd() -> Command {
    Command::cargo_bin("sparsevn").expect("Failed to find sparsevn binary")
}
