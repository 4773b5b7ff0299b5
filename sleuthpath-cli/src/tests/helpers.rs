//! Test helpers for writing scenario files and capturing command output.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A small three-room building where stopping in the hall on the way to
/// the cellar is free.
pub(super) const DETOUR_SCENARIO: &str = r#"{
  "origin": "Study",
  "edges": [
    { "from": "Hall", "to": "Study", "minutes": 2 },
    { "from": "Hall", "to": "Cellar", "minutes": 3 },
    { "from": "Study", "to": "Cellar", "minutes": 10 }
  ],
  "clues": [
    {
      "id": "K1",
      "location": "Hall",
      "description": "Muddy boot print",
      "evidence": [{ "suspect": "Green", "weight": 1 }]
    },
    {
      "id": "K2",
      "location": "Cellar",
      "description": "Rope offcut",
      "evidence": [
        { "suspect": "Plum", "weight": 3 },
        { "suspect": "Green", "weight": 1 }
      ]
    }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Temporary directory with a UTF-8 root path.
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

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name` and return the full path.
    pub(super) fn file(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace").field("root", &self.root).finish()
    }
}

/// Decode captured stdout as JSON.
pub(super) fn parse_output(stdout: &[u8]) -> serde_json::Value {
    let text = std::str::from_utf8(stdout).expect("stdout utf-8");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("output should be JSON")
}

/// Labels from a JSON array of location strings.
pub(super) fn labels(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("JSON array")
        .iter()
        .map(|item| item.as_str().expect("string label").to_owned())
        .collect()
}
