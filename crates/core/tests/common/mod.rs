use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Lay out `files` (relative paths) under a fresh temp directory.
pub fn fixture(files: &[&str]) -> TempDir {
    let dir = tempfile::Builder::new()
        .prefix("bundlescope")
        .tempdir()
        .unwrap();
    for rel in files {
        touch(dir.path(), rel);
    }
    dir
}

pub fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, format!("/* {} */", rel)).unwrap();
    path
}
