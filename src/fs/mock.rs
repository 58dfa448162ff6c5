use super::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// In-memory FileSystem for unit tests
///
/// Writing a file requires its parent directory to exist, either because a
/// file was added beneath it or because `create_dir_all` was called.
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Mutex<HashSet<PathBuf>>,
    read_only: Mutex<HashSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, registering its ancestors as directories
    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            self.register_dirs(parent);
        }
        self.files
            .lock()
            .unwrap()
            .insert(path, contents.to_string());
    }

    /// Make writes into `dir` fail with `PermissionDenied`
    pub fn set_read_only(&self, dir: impl AsRef<Path>) {
        self.read_only
            .lock()
            .unwrap()
            .insert(dir.as_ref().to_path_buf());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        path.as_os_str().is_empty() || self.dirs.lock().unwrap().contains(path)
    }

    fn register_dirs(&self, dir: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.register_dirs(path);
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !self.is_dir(parent) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", parent.display()),
            ));
        }
        if self.read_only.lock().unwrap().contains(parent) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", parent.display()),
            ));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
