//! Testing utilities for sortr
//!
//! Fixture helpers for building tagged input trees on a temporary
//! directory. Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary input/output directory pair for consolidation tests
///
/// The backing directory is removed when the tree is dropped.
///
/// # Examples
/// ```ignore
/// let tree = TestTree::new();
/// tree.add_folder("[rock] Abbey Road");
/// // run against tree.in_dir() / tree.out_dir()
/// ```
pub struct TestTree {
    root: TempDir,
}

impl TestTree {
    /// Create a fresh tree with an empty input directory.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(root.path().join("in")).expect("Failed to create input dir");
        Self { root }
    }

    #[must_use]
    pub fn in_dir(&self) -> PathBuf {
        self.root.path().join("in")
    }

    #[must_use]
    pub fn out_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Create a source folder under the input directory.
    ///
    /// # Panics
    /// Panics if the folder cannot be created.
    pub fn add_folder(&self, name: &str) -> PathBuf {
        let path = self.in_dir().join(name);
        fs::create_dir(&path).expect("Failed to create source folder");
        path
    }

    /// Create a plain file under the input directory.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn add_file(&self, name: &str) -> PathBuf {
        let path = self.in_dir().join(name);
        fs::write(&path, b"test content").expect("Failed to create source file");
        path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
