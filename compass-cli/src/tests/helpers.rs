//! Test helpers for composing CLI inputs on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Answers to the built-in quiz that favour analytical work.
pub(super) const ANALYTICAL_ANSWERS: &str = r#"{
    "1": "1a", "2": "2c", "3": "3a", "4": "4c",
    "5": "5a", "6": "6a", "7": "7a", "8": "8a"
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent.as_std_path()).expect("create parent directory");
    }
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary directory holding the files one test needs.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
