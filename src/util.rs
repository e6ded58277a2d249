#![cfg(test)]

use std::fs;
use std::path::PathBuf;

/// RAII guard that removes a temporary directory when dropped.
pub struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

pub(crate) fn test_dir(label: &str) -> (TempDirGuard, PathBuf) {
    let path = std::env::temp_dir().join(format!("red2net-{}-{}", label, std::process::id()));
    let _ = fs::remove_dir_all(&path);
    fs::create_dir_all(&path).unwrap();
    (TempDirGuard::new(path.clone()), path)
}
