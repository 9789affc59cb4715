//! Test helpers for writing CLI input files.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use kitespot_core::CatalogSnapshot;
use kitespot_core::test_support::{reference_july, reference_preferences, reference_spot};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory with a UTF-8 root path.
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

    /// Write the reference preferences and return their path.
    pub(super) fn write_reference_preferences(&self) -> Utf8PathBuf {
        let path = self.path("preferences.json");
        let payload =
            serde_json::to_string_pretty(&reference_preferences()).expect("serialize preferences");
        write_utf8(&path, payload.as_bytes());
        path
    }

    /// Write a snapshot holding the reference spot and return its path.
    pub(super) fn write_reference_snapshot(&self) -> Utf8PathBuf {
        let path = self.path("catalog.json");
        let snapshot = CatalogSnapshot {
            spots: vec![reference_spot()],
            wind_conditions: vec![reference_july()],
        };
        let payload = serde_json::to_string_pretty(&snapshot).expect("serialize snapshot");
        write_utf8(&path, payload.as_bytes());
        path
    }
}
