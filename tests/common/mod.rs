#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates a temporary directory with TSV fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes raw bytes to a file in the temp directory and returns its path.
    pub fn create_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A structurally clean three-column TSV.
    pub fn clean_tsv(&self) -> PathBuf {
        self.create_file("clean.tsv", b"a\tb\tc\n1\t2\t3\n4\t5\t6\n")
    }

    /// A TSV broken in several ways: CRLF breaks, a short row, a leading
    /// space, and a non-empty unterminated last row.
    pub fn broken_tsv(&self) -> PathBuf {
        self.create_file("broken.tsv", b"a\tb\tc\r\n 1\t2\t3\r\n1\t2\r\nx")
    }
}
