use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::FileSystem;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

/// In-memory filesystem for organizer tests.
///
/// `rename` is stricter than POSIX: it refuses to replace an existing entry
/// and requires the destination directory to exist.
#[derive(Debug, Default)]
pub(crate) struct MemoryFileSystem {
    state: RefCell<State>,
    read_only: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_files(files: &[(&str, &str)]) -> Self {
        let fs = Self::new();
        for (path, content) in files {
            fs.add_file(path, content);
        }
        fs
    }

    pub(crate) fn add_file(&self, path: &str, content: &str) {
        let path = PathBuf::from(path);
        let mut state = self.state.borrow_mut();
        let mut parent = path.parent();
        while let Some(dir) = parent {
            if !dir.as_os_str().is_empty() {
                state.dirs.insert(dir.to_path_buf());
            }
            parent = dir.parent();
        }
        state.files.insert(path, content.as_bytes().to_vec());
    }

    /// Make renames out of `path` fail with PermissionDenied
    pub(crate) fn deny(&self, path: &str) {
        self.read_only.borrow_mut().insert(PathBuf::from(path));
    }

    pub(crate) fn read(&self, path: &str) -> Option<String> {
        self.state
            .borrow()
            .files
            .get(Path::new(path))
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub(crate) fn has_dir(&self, path: &str) -> bool {
        self.state.borrow().dirs.contains(Path::new(path))
    }

    pub(crate) fn file_paths(&self) -> Vec<String> {
        self.state
            .borrow()
            .files
            .keys()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    fn parent_exists(state: &State, path: &Path) -> bool {
        match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => state.dirs.contains(p),
            _ => true,
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.state.borrow().files.contains_key(path)
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.borrow();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        let mut current = Some(path);
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            if state.files.contains_key(dir) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} is a file", dir.display()),
                ));
            }
            state.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.read_only.borrow().contains(from) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        let mut state = self.state.borrow_mut();
        if !state.files.contains_key(from) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }
        if state.files.contains_key(to) || state.dirs.contains(to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination exists",
            ));
        }
        if !Self::parent_exists(&state, to) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "destination directory missing",
            ));
        }
        if let Some(content) = state.files.remove(from) {
            state.files.insert(to.to_path_buf(), content);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_moves_content() {
        let fs = MemoryFileSystem::with_files(&[("A.md", "alpha")]);
        fs.create_dir_all(Path::new("docs/x")).unwrap();
        fs.rename(Path::new("A.md"), Path::new("docs/x/A.md")).unwrap();
        assert_eq!(fs.read("A.md"), None);
        assert_eq!(fs.read("docs/x/A.md").as_deref(), Some("alpha"));
        assert!(fs.has_dir("docs"));
    }

    #[test]
    fn rename_refuses_to_overwrite() {
        let fs = MemoryFileSystem::with_files(&[("A.md", "a"), ("B.md", "b")]);
        let err = fs.rename(Path::new("A.md"), Path::new("B.md")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs.read("B.md").as_deref(), Some("b"));
    }

    #[test]
    fn rename_requires_destination_dir() {
        let fs = MemoryFileSystem::with_files(&[("A.md", "a")]);
        let err = fs
            .rename(Path::new("A.md"), Path::new("missing/A.md"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn denied_rename_fails() {
        let fs = MemoryFileSystem::with_files(&[("A.md", "a")]);
        fs.deny("A.md");
        let err = fs.rename(Path::new("A.md"), Path::new("C.md")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn directories_are_not_files() {
        let fs = MemoryFileSystem::with_files(&[("docs/A.md", "a")]);
        assert!(fs.exists(Path::new("docs")));
        assert!(!fs.is_file(Path::new("docs")));
        assert!(fs.is_file(Path::new("docs/A.md")));
    }
}
