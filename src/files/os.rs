use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::FileSystem;

/// Real filesystem, with relative paths resolved against `root`
#[derive(Debug, Clone)]
pub(crate) struct OsFileSystem {
    root: PathBuf,
}

impl OsFileSystem {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FileSystem for OsFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as occupied
        fs::symlink_metadata(self.resolve(path)).is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(self.resolve(path))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(self.resolve(from), self.resolve(to))
    }
}
