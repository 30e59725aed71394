//! Filesystem capability
//!
//! The organizer only touches the disk through [`FileSystem`], so tests can
//! run it against [`MemoryFileSystem`] instead of a real directory.

#[cfg(test)]
mod memory;
mod os;

use std::io;
use std::path::Path;

#[cfg(test)]
pub(crate) use memory::MemoryFileSystem;
pub(crate) use os::OsFileSystem;

/// Minimal set of operations the organizer needs
pub(crate) trait FileSystem {
    /// True if a regular file exists at `path`
    fn is_file(&self, path: &Path) -> bool;

    /// True if anything (file or directory) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents; existing directories are fine
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Move or rename a file
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}
