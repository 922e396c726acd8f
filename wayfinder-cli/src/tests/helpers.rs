//! Test helpers for staging point files and temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace").field("root", &self.root).finish()
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write fixture file");
}

/// Serialises `(lat, lng)` pairs into the point file format.
pub(super) fn points_json(points: &[(f64, f64)]) -> String {
    let entries: Vec<_> = points
        .iter()
        .map(|(lat, lng)| serde_json::json!({ "lat": lat, "lng": lng }))
        .collect();
    serde_json::to_string_pretty(&entries).expect("serialise points")
}

pub(super) const CLUSTERED_POINTS: [(f64, f64); 3] =
    [(40.0, -3.7), (40.001, -3.701), (40.002, -3.7)];

pub(super) const LONDON_PARIS: [(f64, f64); 2] = [(51.5, -0.12), (48.85, 2.35)];
