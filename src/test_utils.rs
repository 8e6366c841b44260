//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Extensions cycled through by [`TestTree::synthetic`]; four of nine match
/// the default C/C++ set.
const SYNTHETIC_EXTENSIONS: &[&str] = &[
    ".c", ".h", ".cpp", ".hpp", ".txt", ".rs", ".cc", "", ".md",
];

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add an empty file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, "").expect("Failed to write file");
        full_path
    }

    /// Add several empty files.
    pub fn add_files(&self, paths: &[&str]) {
        for path in paths {
            self.add_file(path);
        }
    }

    /// Add a directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a balanced tree `depth` levels deep with `fanout` subdirectories
    /// and `files_per_dir` files per directory.
    ///
    /// Returns the number of files matching the default C/C++ set, i.e. the
    /// expected count for every strategy.
    pub fn synthetic(fanout: usize, depth: usize, files_per_dir: usize) -> (Self, i64) {
        let tree = Self::new();
        let mut expected = 0;
        let mut frontier = vec![tree.path().to_path_buf()];

        for level in 0..=depth {
            let mut next = Vec::new();
            for dir in &frontier {
                for i in 0..files_per_dir {
                    let ext = SYNTHETIC_EXTENSIONS[i % SYNTHETIC_EXTENSIONS.len()];
                    if matches!(ext, ".c" | ".h" | ".cpp" | ".hpp") {
                        expected += 1;
                    }
                    fs::write(dir.join(format!("file_{}{}", i, ext)), "")
                        .expect("Failed to write file");
                }
                if level < depth {
                    for j in 0..fanout {
                        let sub = dir.join(format!("dir_{}", j));
                        fs::create_dir(&sub).expect("Failed to create dir");
                        next.push(sub);
                    }
                }
            }
            frontier = next;
        }

        (tree, expected)
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
